//! Presentation layer: controllers and the HTTP-shaped values they exchange.

pub mod controllers;
pub mod errors;
pub mod http;

pub use errors::HttpError;
pub use http::{HttpRequest, HttpResponse};
