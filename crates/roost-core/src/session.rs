//! Session claims and the resolver boundary.
//!
//! Token validation happens upstream in the auth provider integration; this
//! core only maps an opaque token to the claims minted at login. Sessions are
//! never persisted here — their lifetime is bound to the provider's token.

use std::{
  collections::HashMap,
  sync::{Arc, RwLock},
};

use serde::{Deserialize, Serialize};

/// Claims carried by a resolved session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
  /// External identity from the auth provider.
  pub twitter_id: String,
  pub username:   String,
  /// Credit count snapshotted at login; authoritative balance lives on the
  /// user record.
  pub credits:    i64,
}

/// Maps an opaque session token to its claims.
///
/// Implementations are lookups against state the upstream OAuth integration
/// maintains; they must not attempt to parse or verify token contents.
pub trait SessionResolver: Send + Sync {
  /// Resolve `token` to its session, or `None` if unknown or expired.
  fn resolve(&self, token: &str) -> Option<Session>;
}

// ─── In-memory resolver ──────────────────────────────────────────────────────

/// Shared in-process session table.
///
/// The auth integration inserts a session when a login completes and revokes
/// it on logout or expiry. Cloning is cheap — the table is reference-counted.
#[derive(Clone, Default)]
pub struct MemorySessions {
  inner: Arc<RwLock<HashMap<String, Session>>>,
}

impl MemorySessions {
  pub fn new() -> Self { Self::default() }

  pub fn insert(&self, token: impl Into<String>, session: Session) {
    self
      .inner
      .write()
      .expect("session table lock poisoned")
      .insert(token.into(), session);
  }

  pub fn revoke(&self, token: &str) {
    self
      .inner
      .write()
      .expect("session table lock poisoned")
      .remove(token);
  }
}

impl SessionResolver for MemorySessions {
  fn resolve(&self, token: &str) -> Option<Session> {
    self
      .inner
      .read()
      .expect("session table lock poisoned")
      .get(token)
      .cloned()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn session(twitter_id: &str) -> Session {
    Session {
      twitter_id: twitter_id.to_string(),
      username:   "alice".to_string(),
      credits:    10,
    }
  }

  #[test]
  fn insert_then_resolve() {
    let sessions = MemorySessions::new();
    sessions.insert("tok", session("12345"));

    let resolved = sessions.resolve("tok").unwrap();
    assert_eq!(resolved.twitter_id, "12345");
    assert_eq!(resolved.credits, 10);
  }

  #[test]
  fn unknown_token_resolves_to_none() {
    let sessions = MemorySessions::new();
    assert!(sessions.resolve("missing").is_none());
  }

  #[test]
  fn revoked_token_no_longer_resolves() {
    let sessions = MemorySessions::new();
    sessions.insert("tok", session("12345"));
    sessions.revoke("tok");
    assert!(sessions.resolve("tok").is_none());
  }

  #[test]
  fn clones_share_the_table() {
    let sessions = MemorySessions::new();
    let view = sessions.clone();
    sessions.insert("tok", session("12345"));
    assert!(view.resolve("tok").is_some());
  }
}
