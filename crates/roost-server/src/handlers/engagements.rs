//! Handlers for session-gated `/api/user/*` endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/api/user/engagements` | Optional `?limit=<int>`, default 1000 |
//! | `GET`  | `/api/user/me` | Current user record |
//!
//! Ownership is enforced by resolving the session's external identity to the
//! internal user id and filtering on that — never on anything the client
//! sends.

use axum::{
  Json,
  extract::{Query, State},
};
use roost_core::store::DashboardStore;
use serde::Deserialize;
use serde_json::{Value, json};

use crate::{AppState, auth::CurrentSession, error::Error};

/// Result-set cap applied when the client sends no (or a non-numeric) limit.
pub const DEFAULT_LIMIT: usize = 1000;

// ─── Engagement list ─────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ListParams {
  /// Kept as a raw string: a garbage value falls back to the default
  /// instead of rejecting the request.
  pub limit: Option<String>,
}

/// `GET /api/user/engagements[?limit=<n>]`
pub async fn list<S>(
  State(state): State<AppState<S>>,
  CurrentSession(session): CurrentSession,
  Query(params): Query<ListParams>,
) -> Result<Json<Value>, Error>
where
  S: DashboardStore + Clone + Send + Sync + 'static,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let limit = params
    .limit
    .as_deref()
    .and_then(|s| s.parse::<usize>().ok())
    .unwrap_or(DEFAULT_LIMIT);

  let user = state
    .store
    .find_user_by_twitter_id(&session.twitter_id)
    .await
    .map_err(|e| Error::Store(Box::new(e)))?
    .ok_or_else(|| Error::NotFound("User not found".to_string()))?;

  let engagements = state
    .store
    .engagements_for_user(user.user_id, limit)
    .await
    .map_err(|e| Error::Store(Box::new(e)))?;

  Ok(Json(json!({ "success": true, "data": engagements })))
}

// ─── Current user ────────────────────────────────────────────────────────────

/// `GET /api/user/me`
pub async fn me<S>(
  State(state): State<AppState<S>>,
  CurrentSession(session): CurrentSession,
) -> Result<Json<Value>, Error>
where
  S: DashboardStore + Clone + Send + Sync + 'static,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let user = state
    .store
    .find_user_by_twitter_id(&session.twitter_id)
    .await
    .map_err(|e| Error::Store(Box::new(e)))?
    .ok_or_else(|| Error::NotFound("User not found".to_string()))?;

  Ok(Json(json!({ "success": true, "data": user })))
}
