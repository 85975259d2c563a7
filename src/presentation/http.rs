//! Transport-agnostic request and response shapes.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use crate::presentation::errors::{HttpError, ResponseError, internal_server_error};

/// Incoming request as seen by a controller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct HttpRequest<B> {
    pub body: B,
}

impl<B> HttpRequest<B> {
    pub fn new(body: B) -> Self {
        Self { body }
    }
}

/// Outcome of a controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse<T> {
    pub status_code: StatusCode,
    pub body: Result<T, HttpError>,
}

/// `400 Bad Request` carrying `error`.
pub fn bad_request<T>(error: HttpError) -> HttpResponse<T> {
    HttpResponse {
        status_code: StatusCode::BAD_REQUEST,
        body: Err(error),
    }
}

/// `500 Internal Server Error` with a generic body.
pub fn server_error<T>() -> HttpResponse<T> {
    HttpResponse {
        status_code: StatusCode::INTERNAL_SERVER_ERROR,
        body: Err(HttpError::Server),
    }
}

/// `200 OK` carrying `data`.
pub fn ok<T>(data: T) -> HttpResponse<T> {
    HttpResponse {
        status_code: StatusCode::OK,
        body: Ok(data),
    }
}

impl<T: Serialize> IntoResponse for HttpResponse<T> {
    fn into_response(self) -> Response {
        match self.body {
            Ok(data) => (self.status_code, Json(data)).into_response(),
            Err(err) => ResponseError::from(&err)
                .status(self.status_code)
                .into_response()
                .unwrap_or_else(|_| internal_server_error()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::AccountModel;
    use axum::http::header;
    use http_body_util::BodyExt;

    async fn to_json(response: Response) -> serde_json::Value {
        let body = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&body).unwrap()
    }

    #[test]
    fn test_helpers() {
        let res: HttpResponse<()> = bad_request(HttpError::MissingParam("name"));
        assert_eq!(res.status_code, StatusCode::BAD_REQUEST);
        assert_eq!(res.body, Err(HttpError::MissingParam("name")));

        let res: HttpResponse<()> = server_error();
        assert_eq!(res.status_code, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(res.body, Err(HttpError::Server));

        let res = ok(42);
        assert_eq!(res.status_code, StatusCode::OK);
        assert_eq!(res.body, Ok(42));
    }

    #[tokio::test]
    async fn test_render_bad_request() {
        let error = HttpError::MissingParam("email");
        let response = bad_request::<AccountModel>(error).into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "application/problem+json"
        );

        let body = to_json(response).await;
        assert_eq!(body["status"], 400);
        assert_eq!(body["detail"], "Missing param: email");
        assert_eq!(body["errors"][0]["field"], "email");
    }

    #[tokio::test]
    async fn test_render_server_error() {
        let response = server_error::<AccountModel>().into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = to_json(response).await;
        assert_eq!(body["title"], "Internal server error.");
    }

    #[tokio::test]
    async fn test_render_account() {
        let response = ok(AccountModel {
            id: "valid_id".into(),
            name: "Teste".into(),
            email: "teste@gmail.com".into(),
            password: "teste@123".into(),
        })
        .into_response();

        assert_eq!(response.status(), StatusCode::OK);
        let body = to_json(response).await;
        assert_eq!(body["id"], "valid_id");
        assert_eq!(body["email"], "teste@gmail.com");
        assert!(body.get("password").is_none());
    }
}
