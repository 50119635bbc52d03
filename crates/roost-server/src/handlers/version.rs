//! Version probe for the companion browser extension.
//!
//! The token is purely time-derived — the last 8 digits of the current epoch
//! millisecond count — and carries no build or deployment semantics. The
//! extension only compares successive values to decide whether to re-fetch
//! its remote bundle, so the endpoint disables caching and allows any
//! origin.

use axum::{
  body::Body,
  http::{HeaderValue, Method, StatusCode, header},
  response::{IntoResponse, Response},
};
use chrono::Utc;
use serde_json::json;

const VERSION_PREFIX: &str = "remote-core-";

/// Format the probe token for a given epoch-millisecond timestamp.
pub fn version_token(epoch_ms: i64) -> String {
  format!("{VERSION_PREFIX}{:08}", epoch_ms.rem_euclid(100_000_000))
}

/// `GET|HEAD /api/extension-remote/version` — HEAD carries headers only.
pub async fn probe(method: Method) -> Response {
  let now   = Utc::now();
  let token = version_token(now.timestamp_millis());
  let body  = json!({
    "version":   token.clone(),
    "timestamp": now.to_rfc3339(),
    "available": true,
  })
  .to_string();

  let builder = Response::builder()
    .status(StatusCode::OK)
    .header(header::CONTENT_TYPE, "application/json")
    .header("x-code-version", token.as_str())
    .header(
      header::CACHE_CONTROL,
      "no-store, no-cache, must-revalidate",
    )
    .header(header::PRAGMA, "no-cache")
    .header(header::ACCESS_CONTROL_ALLOW_ORIGIN, "*");

  if method == Method::HEAD {
    builder.body(Body::empty()).unwrap()
  } else {
    builder
      .header(header::CONTENT_LENGTH, body.len())
      .body(Body::from(body))
      .unwrap()
  }
}

/// `OPTIONS /api/extension-remote/version` — CORS preflight.
pub async fn preflight() -> Response {
  (
    StatusCode::NO_CONTENT,
    [
      (header::ALLOW, HeaderValue::from_static("GET, HEAD, OPTIONS")),
      (
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
      ),
      (
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static("GET, HEAD, OPTIONS"),
      ),
      (
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static("Content-Type"),
      ),
    ],
  )
    .into_response()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn token_is_prefix_plus_eight_digits() {
    let token = version_token(1_700_000_123_456);
    let digits = token.strip_prefix(VERSION_PREFIX).unwrap();
    assert_eq!(digits.len(), 8);
    assert!(digits.chars().all(|c| c.is_ascii_digit()));
  }

  #[test]
  fn token_keeps_the_last_eight_digits() {
    assert_eq!(version_token(1_700_000_123_456), "remote-core-00123456");
  }

  #[test]
  fn small_timestamps_are_zero_padded() {
    assert_eq!(version_token(5), "remote-core-00000005");
  }

  #[test]
  fn tokens_differ_across_seconds() {
    let a = version_token(1_700_000_000_000);
    let b = version_token(1_700_000_001_000);
    assert_ne!(a, b);
  }
}
