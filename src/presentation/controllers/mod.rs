//! Request controllers.

pub mod signup;

pub use signup::*;

use async_trait::async_trait;

use crate::presentation::http::{HttpRequest, HttpResponse};

/// A controller turns one request into one response.
///
/// Implementations never fail: every error is mapped onto the response.
#[async_trait]
pub trait Controller: Send + Sync {
    type Body: Send;
    type Output;

    async fn handle(
        &self,
        request: HttpRequest<Self::Body>,
    ) -> HttpResponse<Self::Output>;
}
