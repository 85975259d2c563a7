//! Sign up controller: validates an account creation request, checks the
//! email through an [`EmailValidator`], creates the account through an
//! [`AddAccount`] and maps every outcome onto an [`HttpResponse`].
//!
//! Routing and serving are left to the embedding service. An
//! [`HttpResponse`] implements axum's `IntoResponse`, so a handler can
//! return it as-is.

#![forbid(unsafe_code)]
#![deny(unused_mut)]
pub mod adapters;
pub mod config;
pub mod domain;
pub mod error;
pub mod factories;
pub mod ports;
pub mod presentation;
pub mod telemetry;

pub use domain::{AccountModel, AddAccountModel};
pub use factories::make_signup_controller;
pub use ports::outbound::{AddAccount, EmailValidator};
pub use presentation::controllers::{Controller, SignUpBody, SignUpController};
pub use presentation::{HttpError, HttpRequest, HttpResponse};
