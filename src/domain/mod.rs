//! Core models shared between the controller and its collaborators.

pub mod account;

pub use account::*;
