//! Error types and axum `IntoResponse` implementation.
//!
//! Every handler failure maps onto one of a small set of outcomes: a
//! redirect to the right login page, a 4xx page with an explicit message,
//! or an opaque 500 whose details only reach the log.

use askama::Template as _;
use axum::{
  extract::rejection::{FormRejection, PathRejection},
  http::StatusCode,
  response::{Html, IntoResponse, Redirect, Response},
};
use jobline_core::account::Role;
use thiserror::Error;

use crate::pages::ErrorPage;

/// Message shown for any failed login, whichever field was wrong.
pub const INVALID_CREDENTIALS: &str = "Invalid email or password";

#[derive(Debug, Error)]
pub enum Error {
  /// Wrong email or password. Carries no detail.
  #[error("invalid credentials")]
  InvalidCredentials,
  /// No session, or a session for the other role.
  #[error("login required as {0}")]
  LoginRequired(Role),
  #[error("not found: {0}")]
  NotFound(String),
  #[error("conflict: {0}")]
  Conflict(String),
  #[error("bad request: {0}")]
  BadRequest(String),
  #[error("password hashing failed: {0}")]
  PasswordHash(String),
  #[error("upload storage error: {0}")]
  Upload(#[from] std::io::Error),
  #[error("template error: {0}")]
  Render(#[from] askama::Error),
  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
  /// Box a backend error; used as `.map_err(Error::store)`.
  pub fn store<E>(e: E) -> Self
  where
    E: std::error::Error + Send + Sync + 'static,
  {
    Error::Store(Box::new(e))
  }
}

impl From<jobline_core::Error> for Error {
  fn from(e: jobline_core::Error) -> Self { Error::BadRequest(e.to_string()) }
}

impl From<FormRejection> for Error {
  fn from(e: FormRejection) -> Self { Error::BadRequest(e.body_text()) }
}

impl From<PathRejection> for Error {
  fn from(e: PathRejection) -> Self { Error::BadRequest(e.body_text()) }
}

impl From<axum::extract::multipart::MultipartError> for Error {
  fn from(e: axum::extract::multipart::MultipartError) -> Self {
    Error::BadRequest(e.body_text())
  }
}

impl IntoResponse for Error {
  fn into_response(self) -> Response {
    let (status, message) = match self {
      Error::LoginRequired(role) => {
        return Redirect::to(role.login_path()).into_response();
      }
      Error::InvalidCredentials => {
        (StatusCode::UNAUTHORIZED, INVALID_CREDENTIALS.to_owned())
      }
      Error::NotFound(m) => (StatusCode::NOT_FOUND, m),
      Error::Conflict(m) => (StatusCode::CONFLICT, m),
      Error::BadRequest(m) => (StatusCode::BAD_REQUEST, m),
      e @ (Error::PasswordHash(_)
      | Error::Upload(_)
      | Error::Render(_)
      | Error::Store(_)) => {
        tracing::error!(error = %e, "request failed");
        (
          StatusCode::INTERNAL_SERVER_ERROR,
          "An internal server error occurred".to_owned(),
        )
      }
    };

    let page = ErrorPage { status: status.as_u16(), message: &message };
    match page.render() {
      Ok(html) => (status, Html(html)).into_response(),
      Err(_) => (status, message).into_response(),
    }
  }
}
