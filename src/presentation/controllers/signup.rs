//! Sign up controller.

use std::sync::Arc;
use std::time::Instant;

use async_trait::async_trait;
use serde::Deserialize;

use crate::domain::{AccountModel, AddAccountModel};
use crate::ports::outbound::{AddAccount, EmailValidator};
use crate::presentation::controllers::Controller;
use crate::presentation::errors::HttpError;
use crate::presentation::http::{
    HttpRequest, HttpResponse, bad_request, ok, server_error,
};
use crate::telemetry;

/// Sign up request body. Every field is required.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUpBody {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub password_confirmation: Option<String>,
}

fn required(
    value: Option<String>,
    param: &'static str,
) -> Result<String, HttpError> {
    value
        .filter(|value| !value.is_empty())
        .ok_or(HttpError::MissingParam(param))
}

impl SignUpBody {
    /// Check presence of every param, in order, then password confirmation.
    ///
    /// The confirmation is dropped: it never leaves the controller.
    fn into_add_account(self) -> Result<AddAccountModel, HttpError> {
        let name = required(self.name, "name")?;
        let email = required(self.email, "email")?;
        let password = required(self.password, "password")?;
        let password_confirmation =
            required(self.password_confirmation, "passwordConfirmation")?;

        if password != password_confirmation {
            return Err(HttpError::InvalidParam("passwordConfirmation"));
        }

        Ok(AddAccountModel {
            name,
            email,
            password,
        })
    }
}

/// Validate a [`SignUpBody`] and create the matching account.
#[derive(Clone)]
pub struct SignUpController {
    email_validator: Arc<dyn EmailValidator>,
    add_account: Arc<dyn AddAccount>,
}

impl SignUpController {
    pub fn new(
        email_validator: Arc<dyn EmailValidator>,
        add_account: Arc<dyn AddAccount>,
    ) -> Self {
        Self {
            email_validator,
            add_account,
        }
    }

    async fn sign_up(&self, body: SignUpBody) -> HttpResponse<AccountModel> {
        let account = match body.into_add_account() {
            Ok(account) => account,
            Err(err) => {
                tracing::debug!(%err, "sign up rejected");
                return bad_request(err);
            },
        };

        match self.email_validator.is_valid(&account.email) {
            Ok(true) => (),
            Ok(false) => {
                tracing::debug!("sign up rejected, email is malformed");
                return bad_request(HttpError::InvalidParam("email"));
            },
            Err(err) => {
                tracing::error!(error = ?err, "email validation failed");
                return server_error();
            },
        }

        match self.add_account.add(account).await {
            Ok(account) => {
                tracing::info!(account_id = %account.id, "account created");
                ok(account)
            },
            Err(err) => {
                tracing::error!(error = ?err, "account creation failed");
                server_error()
            },
        }
    }
}

#[async_trait]
impl Controller for SignUpController {
    type Body = SignUpBody;
    type Output = AccountModel;

    async fn handle(
        &self,
        request: HttpRequest<SignUpBody>,
    ) -> HttpResponse<AccountModel> {
        let start = Instant::now();
        let response = self.sign_up(request.body).await;
        telemetry::record_signup(response.status_code, start.elapsed());

        response
    }
}
