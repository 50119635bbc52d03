//! Engagement — an activity record owned by a user.
//!
//! Engagements are produced by an external pipeline and are read-only from
//! the dashboard's perspective; the payload is free-form JSON whose shape is
//! owned by that pipeline, not by this core.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single engagement record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Engagement {
  pub engagement_id: Uuid,
  /// Internal identifier of the owning user — never the external identity.
  pub user_id:       Uuid,
  pub created_at:    DateTime<Utc>,
  /// Free-form payload; passed through to clients verbatim.
  pub payload:       serde_json::Value,
}
