//! Session gate — extractor and standalone verifier.
//!
//! The gate maps the opaque token on a request to the claims minted at
//! login. It never inspects token contents; resolution is delegated to the
//! [`SessionResolver`] carried in application state, so handlers taking
//! [`CurrentSession`] are unreachable for unauthenticated requests.

use axum::extract::FromRequestParts;
use axum::http::{HeaderMap, header, request::Parts};

use roost_core::{
  session::{Session, SessionResolver},
  store::DashboardStore,
};

use crate::{AppState, error::Error};

/// A validated session: present in a handler's arguments means the request
/// carried a resolvable token with an identity claim.
pub struct CurrentSession(pub Session);

/// Resolve the session directly from headers.
///
/// Accepts `Authorization: Bearer <token>` or a `session=<token>` cookie.
/// A session missing its identity claim is treated as absent.
pub fn session_from_headers(
  headers: &HeaderMap,
  sessions: &dyn SessionResolver,
) -> Result<Session, Error> {
  let token = bearer_token(headers)
    .or_else(|| session_cookie(headers))
    .ok_or(Error::Unauthorized)?;

  let session = sessions.resolve(&token).ok_or(Error::Unauthorized)?;

  if session.twitter_id.is_empty() {
    return Err(Error::Unauthorized);
  }

  Ok(session)
}

fn bearer_token(headers: &HeaderMap) -> Option<String> {
  headers
    .get(header::AUTHORIZATION)
    .and_then(|v| v.to_str().ok())
    .and_then(|v| v.strip_prefix("Bearer "))
    .map(str::to_owned)
}

fn session_cookie(headers: &HeaderMap) -> Option<String> {
  let cookies = headers.get(header::COOKIE)?.to_str().ok()?;
  cookies
    .split(';')
    .map(str::trim)
    .find_map(|pair| pair.strip_prefix("session="))
    .map(str::to_owned)
}

impl<S> FromRequestParts<AppState<S>> for CurrentSession
where
  S: DashboardStore + Clone + Send + Sync + 'static,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  type Rejection = Error;

  async fn from_request_parts(
    parts: &mut Parts,
    state: &AppState<S>,
  ) -> Result<Self, Self::Rejection> {
    let session = session_from_headers(&parts.headers, state.sessions.as_ref())?;
    Ok(CurrentSession(session))
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use axum::http::HeaderValue;
  use roost_core::session::MemorySessions;

  fn sessions_with(token: &str) -> MemorySessions {
    let sessions = MemorySessions::new();
    sessions.insert(
      token,
      Session {
        twitter_id: "12345".to_string(),
        username:   "alice".to_string(),
        credits:    3,
      },
    );
    sessions
  }

  #[test]
  fn bearer_token_resolves() {
    let sessions = sessions_with("tok");
    let mut headers = HeaderMap::new();
    headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Bearer tok"));

    let session = session_from_headers(&headers, &sessions).unwrap();
    assert_eq!(session.twitter_id, "12345");
  }

  #[test]
  fn session_cookie_resolves() {
    let sessions = sessions_with("tok");
    let mut headers = HeaderMap::new();
    headers.insert(
      header::COOKIE,
      HeaderValue::from_static("theme=dark; session=tok; lang=en"),
    );

    let session = session_from_headers(&headers, &sessions).unwrap();
    assert_eq!(session.username, "alice");
  }

  #[test]
  fn missing_token_is_unauthorized() {
    let sessions = sessions_with("tok");
    let headers = HeaderMap::new();
    assert!(matches!(
      session_from_headers(&headers, &sessions),
      Err(Error::Unauthorized)
    ));
  }

  #[test]
  fn unknown_token_is_unauthorized() {
    let sessions = sessions_with("tok");
    let mut headers = HeaderMap::new();
    headers.insert(
      header::AUTHORIZATION,
      HeaderValue::from_static("Bearer other"),
    );
    assert!(matches!(
      session_from_headers(&headers, &sessions),
      Err(Error::Unauthorized)
    ));
  }

  #[test]
  fn session_without_identity_claim_is_unauthorized() {
    let sessions = MemorySessions::new();
    sessions.insert(
      "tok",
      Session {
        twitter_id: String::new(),
        username:   "ghost".to_string(),
        credits:    0,
      },
    );
    let mut headers = HeaderMap::new();
    headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Bearer tok"));
    assert!(matches!(
      session_from_headers(&headers, &sessions),
      Err(Error::Unauthorized)
    ));
  }
}
