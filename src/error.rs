//! Crate-level errors, shared by collaborators and configuration.

pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised outside of request validation.
///
/// None of these reach a client as-is: the controller converts every
/// collaborator failure into a generic server error.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("email is already used by another account")]
    EmailAlreadyUsed,

    #[error("invalid configuration, {0}")]
    InvalidConfiguration(String),

    #[error("internal server error")]
    Internal(Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
    pub fn internal<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Internal(Box::new(err))
    }
}

pub trait ToInternal<T> {
    fn catch(self) -> Result<T>;
}

impl<T, E> ToInternal<T> for std::result::Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn catch(self) -> Result<T> {
        self.map_err(|e| Error::Internal(Box::new(e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catch_wraps_source() {
        let res: std::result::Result<(), std::io::Error> = Err(
            std::io::Error::new(std::io::ErrorKind::Other, "disk on fire"),
        );

        let err = res.catch().unwrap_err();
        assert!(matches!(err, Error::Internal(_)));
        // Source detail never shows up in the display string.
        assert_eq!(err.to_string(), "internal server error");
    }
}
