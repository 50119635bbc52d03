//! User — the persistent account record behind a dashboard login.
//!
//! A user is keyed internally by UUID; the external identity supplied by the
//! auth provider (`twitter_id`) is unique but never used as a storage key by
//! higher layers. Created on first successful login, never deleted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A dashboard account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
  pub user_id:    Uuid,
  /// External identity from the auth provider. Unique per user.
  pub twitter_id: String,
  pub username:   String,
  /// Credit balance; adjusted by account flows, may go negative only
  /// through an explicit adjustment.
  pub credits:    i64,
  pub created_at: DateTime<Utc>,
}
