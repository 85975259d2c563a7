//! Email validator port.

use crate::error::Result;

/// Port for checking the format of an email address.
pub trait EmailValidator: Send + Sync {
    /// Whether `email` is a well-formed address.
    ///
    /// `Ok(false)` is a negative answer; `Err` means the check itself failed.
    fn is_valid(&self, email: &str) -> Result<bool>;
}
