//! Errors returned to clients and their rendering.

use axum::http::{StatusCode, header};
use axum::response::Response;
use serde::Serialize;

/// Errors a controller may put in a response body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum HttpError {
    /// A required param is absent or empty.
    #[error("Missing param: {0}")]
    MissingParam(&'static str),
    /// A param is present but its value was refused.
    #[error("Invalid param: {0}")]
    InvalidParam(&'static str),
    /// Something failed on our side. Details stay in the logs.
    #[error("Internal server error")]
    Server,
}

impl HttpError {
    /// Name of the param this error is about, if any.
    pub fn param(&self) -> Option<&'static str> {
        match *self {
            HttpError::MissingParam(param) | HttpError::InvalidParam(param) => {
                Some(param)
            },
            HttpError::Server => None,
        }
    }
}

/// Structure for detailed error responses.
#[derive(Debug, Serialize)]
pub struct ResponseError {
    r#type: Option<String>,
    title: String,
    status: u16,
    detail: String,
    instance: Option<String>,
    errors: Option<Vec<FieldError>>,
}

impl ResponseError {
    /// Update error status code.
    pub fn status(mut self, code: StatusCode) -> Self {
        self.status = code.as_u16();
        self
    }

    /// Update `title` field.
    pub fn title(mut self, title: &str) -> Self {
        self.title = title.into();
        self
    }

    /// Add detailed error.
    pub fn details(mut self, description: &str) -> Self {
        self.detail = description.into();
        self
    }

    /// Attach the offending param.
    pub fn field(mut self, field: &str, message: &str) -> Self {
        self.errors.get_or_insert_with(Vec::new).push(FieldError {
            field: field.into(),
            message: message.into(),
        });
        self
    }

    /// Transform [`ResponseError`] into axum [`Response`].
    pub fn into_response(
        self,
    ) -> std::result::Result<Response, axum::http::Error> {
        if let Ok(body) = serde_json::to_string(&self) {
            Response::builder()
                .status(self.status)
                .header(header::CONTENT_TYPE, "application/problem+json")
                .body(body.into())
        } else {
            Ok(internal_server_error())
        }
    }
}

impl Default for ResponseError {
    fn default() -> Self {
        Self {
            r#type: None,
            title: "Internal server error.".to_owned(),
            status: StatusCode::INTERNAL_SERVER_ERROR.as_u16(),
            detail: String::default(),
            instance: None,
            errors: None,
        }
    }
}

impl From<&HttpError> for ResponseError {
    fn from(err: &HttpError) -> Self {
        match err.param() {
            Some(param) => ResponseError::default()
                .title("There were validation errors with your request.")
                .details(&err.to_string())
                .status(StatusCode::BAD_REQUEST)
                .field(param, &err.to_string()),
            None => ResponseError::default(),
        }
    }
}

#[derive(Debug, Serialize)]
struct FieldError {
    field: String,
    message: String,
}

pub(crate) fn internal_server_error() -> Response {
    Response::builder()
        .status(StatusCode::INTERNAL_SERVER_ERROR)
        .header(header::CONTENT_TYPE, "application/problem+json")
        .body(
            serde_json::json!({
                "type": null,
                "title": "Internal server error.",
                "status": StatusCode::INTERNAL_SERVER_ERROR.as_u16(),
                "detail": null,
                "instance": null,
                "errors": null,
            })
            .to_string()
            .into(),
        )
        .unwrap_or_else(|_| Response::new("Internal server error".into()))
}
