//! Email validator backed by the `validator` crate.

use validator::ValidateEmail;

use crate::config::Email;
use crate::error::Result;
use crate::ports::outbound::EmailValidator;

/// HTML5 email check bounded by a maximum length.
pub struct EmailValidatorAdapter {
    max_length: usize,
}

impl EmailValidatorAdapter {
    pub fn new(config: &Email) -> Self {
        Self {
            max_length: config.max_length,
        }
    }
}

impl Default for EmailValidatorAdapter {
    fn default() -> Self {
        Self::new(&Email::default())
    }
}

impl EmailValidator for EmailValidatorAdapter {
    fn is_valid(&self, email: &str) -> Result<bool> {
        Ok(email.len() <= self.max_length && email.validate_email())
    }
}
