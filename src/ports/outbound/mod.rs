//! These traits define what the controller needs from the outside world.

pub mod account;
pub mod email_validator;

pub use account::*;
pub use email_validator::*;
