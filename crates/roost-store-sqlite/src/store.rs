//! [`SqliteStore`] — the SQLite implementation of [`DashboardStore`].

use std::path::Path;

use chrono::{DateTime, Utc};
use rusqlite::OptionalExtension as _;
use uuid::Uuid;

use roost_core::{
  engagement::Engagement,
  store::DashboardStore,
  user::User,
};

use crate::{
  encode::{encode_dt, encode_uuid, RawEngagement, RawUser},
  schema::SCHEMA,
  Error, Result,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A Roost store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  /// Insert an engagement row with a fully-determined record.
  async fn insert_engagement(&self, engagement: &Engagement) -> Result<()> {
    let id_str      = encode_uuid(engagement.engagement_id);
    let user_id_str = encode_uuid(engagement.user_id);
    let at_str      = encode_dt(engagement.created_at);
    let payload_str = engagement.payload.to_string();

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO engagements (engagement_id, user_id, created_at, payload_json)
           VALUES (?1, ?2, ?3, ?4)",
          rusqlite::params![id_str, user_id_str, at_str, payload_str],
        )?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}

// ─── DashboardStore impl ─────────────────────────────────────────────────────

impl DashboardStore for SqliteStore {
  type Error = Error;

  // ── Users ──────────────────────────────────────────────────────────────────

  async fn ensure_user(&self, twitter_id: &str, username: &str) -> Result<User> {
    let candidate_id = encode_uuid(Uuid::new_v4());
    let at_str       = encode_dt(Utc::now());
    let twitter_id   = twitter_id.to_owned();
    let username     = username.to_owned();

    let raw: RawUser = self
      .conn
      .call(move |conn| {
        // First login inserts; later logins only refresh the username.
        conn.execute(
          "INSERT INTO users (user_id, twitter_id, username, credits, created_at)
           VALUES (?1, ?2, ?3, 0, ?4)
           ON CONFLICT(twitter_id) DO UPDATE SET username = excluded.username",
          rusqlite::params![candidate_id, twitter_id, username, at_str],
        )?;

        Ok(conn.query_row(
          "SELECT user_id, twitter_id, username, credits, created_at
           FROM users WHERE twitter_id = ?1",
          rusqlite::params![twitter_id],
          |row| {
            Ok(RawUser {
              user_id:    row.get(0)?,
              twitter_id: row.get(1)?,
              username:   row.get(2)?,
              credits:    row.get(3)?,
              created_at: row.get(4)?,
            })
          },
        )?)
      })
      .await?;

    raw.into_user()
  }

  async fn find_user_by_twitter_id(&self, twitter_id: &str) -> Result<Option<User>> {
    let twitter_id = twitter_id.to_owned();

    let raw: Option<RawUser> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              "SELECT user_id, twitter_id, username, credits, created_at
               FROM users WHERE twitter_id = ?1",
              rusqlite::params![twitter_id],
              |row| {
                Ok(RawUser {
                  user_id:    row.get(0)?,
                  twitter_id: row.get(1)?,
                  username:   row.get(2)?,
                  credits:    row.get(3)?,
                  created_at: row.get(4)?,
                })
              },
            )
            .optional()?,
        )
      })
      .await?;

    raw.map(RawUser::into_user).transpose()
  }

  async fn adjust_credits(&self, user_id: Uuid, delta: i64) -> Result<User> {
    let id_str = encode_uuid(user_id);

    let raw: Option<RawUser> = self
      .conn
      .call(move |conn| {
        let changed = conn.execute(
          "UPDATE users SET credits = credits + ?1 WHERE user_id = ?2",
          rusqlite::params![delta, id_str],
        )?;
        if changed == 0 {
          return Ok(None);
        }

        Ok(
          conn
            .query_row(
              "SELECT user_id, twitter_id, username, credits, created_at
               FROM users WHERE user_id = ?1",
              rusqlite::params![id_str],
              |row| {
                Ok(RawUser {
                  user_id:    row.get(0)?,
                  twitter_id: row.get(1)?,
                  username:   row.get(2)?,
                  credits:    row.get(3)?,
                  created_at: row.get(4)?,
                })
              },
            )
            .optional()?,
        )
      })
      .await?;

    raw
      .ok_or(Error::UserNotFound(user_id))?
      .into_user()
  }

  // ── Engagements ─────────────────────────────────────────────────────────────

  async fn record_engagement(
    &self,
    user_id: Uuid,
    payload: serde_json::Value,
  ) -> Result<Engagement> {
    self
      .record_engagement_at(user_id, payload, Utc::now())
      .await
  }

  async fn record_engagement_at(
    &self,
    user_id: Uuid,
    payload: serde_json::Value,
    created_at: DateTime<Utc>,
  ) -> Result<Engagement> {
    let engagement = Engagement {
      engagement_id: Uuid::new_v4(),
      user_id,
      created_at,
      payload,
    };

    self.insert_engagement(&engagement).await?;
    Ok(engagement)
  }

  async fn engagements_for_user(
    &self,
    user_id: Uuid,
    limit: usize,
  ) -> Result<Vec<Engagement>> {
    let id_str    = encode_uuid(user_id);
    let limit_i64 = i64::try_from(limit).unwrap_or(i64::MAX);

    let raws: Vec<RawEngagement> = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(
          "SELECT engagement_id, user_id, created_at, payload_json
           FROM engagements
           WHERE user_id = ?1
           ORDER BY created_at DESC
           LIMIT ?2",
        )?;
        let rows = stmt
          .query_map(rusqlite::params![id_str, limit_i64], |row| {
            Ok(RawEngagement {
              engagement_id: row.get(0)?,
              user_id:       row.get(1)?,
              created_at:    row.get(2)?,
              payload_json:  row.get(3)?,
            })
          })?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws
      .into_iter()
      .map(RawEngagement::into_engagement)
      .collect()
  }
}
