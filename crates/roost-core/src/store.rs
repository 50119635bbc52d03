//! The `DashboardStore` trait.
//!
//! The trait is implemented by storage backends (e.g. `roost-store-sqlite`).
//! Higher layers (`roost-server`) depend on this abstraction, not on any
//! concrete backend.

use std::future::Future;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::{engagement::Engagement, user::User};

/// Abstraction over a Roost storage backend.
///
/// All reads issued by request handlers are single filtered queries; nothing
/// here requires transactional coupling between calls.
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes (e.g. tokio with `axum`).
pub trait DashboardStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  // ── Users ─────────────────────────────────────────────────────────────

  /// Find the user for an external identity, creating the record on first
  /// login. The stored username is refreshed on every call so renames on
  /// the provider side propagate.
  fn ensure_user<'a>(
    &'a self,
    twitter_id: &'a str,
    username: &'a str,
  ) -> impl Future<Output = Result<User, Self::Error>> + Send + 'a;

  /// Look up a user by external identity. Returns `None` if not found.
  fn find_user_by_twitter_id<'a>(
    &'a self,
    twitter_id: &'a str,
  ) -> impl Future<Output = Result<Option<User>, Self::Error>> + Send + 'a;

  /// Apply a credit delta (positive or negative) and return the updated
  /// record. Errors if the user does not exist.
  fn adjust_credits(
    &self,
    user_id: Uuid,
    delta: i64,
  ) -> impl Future<Output = Result<User, Self::Error>> + Send + '_;

  // ── Engagements ───────────────────────────────────────────────────────

  /// Persist an engagement with a store-assigned timestamp.
  fn record_engagement(
    &self,
    user_id: Uuid,
    payload: serde_json::Value,
  ) -> impl Future<Output = Result<Engagement, Self::Error>> + Send + '_;

  /// Persist an engagement with a caller-supplied event time.
  ///
  /// Used by ingestion paths where the event time originates in the
  /// external pipeline rather than at insert.
  fn record_engagement_at(
    &self,
    user_id: Uuid,
    payload: serde_json::Value,
    created_at: DateTime<Utc>,
  ) -> impl Future<Output = Result<Engagement, Self::Error>> + Send + '_;

  /// Engagements owned by `user_id`, newest first, at most `limit` rows.
  fn engagements_for_user(
    &self,
    user_id: Uuid,
    limit: usize,
  ) -> impl Future<Output = Result<Vec<Engagement>, Self::Error>> + Send + '_;
}
