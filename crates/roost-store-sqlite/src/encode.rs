//! Encoding and decoding helpers between Rust domain types and the plain-text
//! representations stored in SQLite columns.
//!
//! All timestamps are stored as RFC 3339 strings, engagement payloads as
//! compact JSON, and UUIDs as hyphenated lowercase strings.

use chrono::{DateTime, Utc};
use roost_core::{engagement::Engagement, user::User};
use uuid::Uuid;

use crate::{Error, Result};

// ─── Uuid ─────────────────────────────────────────────────────────────────────

pub fn encode_uuid(id: Uuid) -> String { id.hyphenated().to_string() }

pub fn decode_uuid(s: &str) -> Result<Uuid> { Ok(Uuid::parse_str(s)?) }

// ─── DateTime<Utc>
// ────────────────────────────────────────────────────────────

pub fn encode_dt(dt: DateTime<Utc>) -> String { dt.to_rfc3339() }

pub fn decode_dt(s: &str) -> Result<DateTime<Utc>> {
  DateTime::parse_from_rfc3339(s)
    .map(|dt| dt.with_timezone(&Utc))
    .map_err(|e| Error::DateParse(e.to_string()))
}

// ─── Row types ───────────────────────────────────────────────────────────────

/// Raw strings read directly from a `users` row.
pub struct RawUser {
  pub user_id:    String,
  pub twitter_id: String,
  pub username:   String,
  pub credits:    i64,
  pub created_at: String,
}

impl RawUser {
  pub fn into_user(self) -> Result<User> {
    Ok(User {
      user_id:    decode_uuid(&self.user_id)?,
      twitter_id: self.twitter_id,
      username:   self.username,
      credits:    self.credits,
      created_at: decode_dt(&self.created_at)?,
    })
  }
}

/// Raw strings read directly from an `engagements` row.
pub struct RawEngagement {
  pub engagement_id: String,
  pub user_id:       String,
  pub created_at:    String,
  pub payload_json:  String,
}

impl RawEngagement {
  pub fn into_engagement(self) -> Result<Engagement> {
    Ok(Engagement {
      engagement_id: decode_uuid(&self.engagement_id)?,
      user_id:       decode_uuid(&self.user_id)?,
      created_at:    decode_dt(&self.created_at)?,
      payload:       serde_json::from_str(&self.payload_json)?,
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn dt_round_trips() {
    let now = Utc::now();
    let decoded = decode_dt(&encode_dt(now)).unwrap();
    assert_eq!(decoded, now);
  }

  #[test]
  fn bad_dt_is_a_parse_error() {
    assert!(matches!(decode_dt("yesterday"), Err(Error::DateParse(_))));
  }
}
