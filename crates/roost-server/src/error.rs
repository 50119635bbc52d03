//! API error type and [`axum::response::IntoResponse`] implementation.
//!
//! Three client-visible failure classes: Unauthorized, NotFound, Internal.
//! Internal failures are logged with full detail and surfaced as a fixed
//! generic message so nothing about the backend leaks to clients.

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// An error returned by an API handler.
#[derive(Debug, Error)]
pub enum Error {
  #[error("unauthorized")]
  Unauthorized,

  #[error("not found: {0}")]
  NotFound(String),

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl IntoResponse for Error {
  fn into_response(self) -> Response {
    let (status, message) = match self {
      Error::Unauthorized => (StatusCode::UNAUTHORIZED, "Unauthorized".to_string()),
      Error::NotFound(m) => (StatusCode::NOT_FOUND, m),
      Error::Store(e) => {
        tracing::error!(error = %e, "request failed");
        (
          StatusCode::INTERNAL_SERVER_ERROR,
          "Internal server error".to_string(),
        )
      }
    };
    (status, Json(json!({ "error": message }))).into_response()
  }
}
