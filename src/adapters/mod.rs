//! Outbound adapters.

pub mod email_validator;
pub mod in_memory;

pub use email_validator::*;
pub use in_memory::*;
