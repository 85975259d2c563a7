//! Wire controllers to their default adapters.

use std::sync::Arc;

use crate::adapters::{EmailValidatorAdapter, InMemoryAccounts};
use crate::config::Configuration;
use crate::presentation::controllers::SignUpController;

/// Build a [`SignUpController`] using the `validator` email check and the
/// in-memory account store.
pub fn make_signup_controller(config: &Configuration) -> SignUpController {
    let email_validator = Arc::new(EmailValidatorAdapter::new(&config.email));
    let add_account = Arc::new(InMemoryAccounts::new(&config.accounts));

    tracing::debug!(
        email_max_length = config.email.max_length,
        id_length = config.accounts.id_length,
        "sign up controller created"
    );

    SignUpController::new(email_validator, add_account)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::controllers::{Controller, SignUpBody};
    use crate::presentation::{HttpError, HttpRequest};
    use axum::http::StatusCode;

    fn body(email: &str) -> SignUpBody {
        SignUpBody {
            name: Some("Teste".into()),
            email: Some(email.into()),
            password: Some("teste@123".into()),
            password_confirmation: Some("teste@123".into()),
        }
    }

    #[tokio::test]
    async fn test_signup_flow() {
        let sut = make_signup_controller(&Configuration::default());

        let response = sut.handle(HttpRequest::new(body("teste@gmail.com"))).await;
        assert_eq!(response.status_code, StatusCode::OK);
        let account = response.body.unwrap();
        assert_eq!(account.email, "teste@gmail.com");
        assert_eq!(account.id.len(), 32);

        let response = sut.handle(HttpRequest::new(body("teste.gmail.com"))).await;
        assert_eq!(response.status_code, StatusCode::BAD_REQUEST);
        assert_eq!(response.body, Err(HttpError::InvalidParam("email")));
    }

    #[tokio::test]
    async fn test_duplicate_email_is_server_error() {
        let sut = make_signup_controller(&Configuration::default());

        let response = sut.handle(HttpRequest::new(body("teste@gmail.com"))).await;
        assert_eq!(response.status_code, StatusCode::OK);

        let response = sut.handle(HttpRequest::new(body("teste@gmail.com"))).await;
        assert_eq!(response.status_code, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(response.body, Err(HttpError::Server));
    }
}
