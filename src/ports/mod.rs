//! Boundaries between the sign up controller and its collaborators.

pub mod outbound;
