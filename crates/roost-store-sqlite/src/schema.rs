//! SQL schema for the Roost SQLite store.
//!
//! Executed once at connection startup via `PRAGMA user_version`. Future
//! migrations will be gated on that version number.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;
PRAGMA foreign_keys = ON;

CREATE TABLE IF NOT EXISTS users (
    user_id     TEXT PRIMARY KEY,
    twitter_id  TEXT NOT NULL UNIQUE,   -- external identity from the auth provider
    username    TEXT NOT NULL,
    credits     INTEGER NOT NULL DEFAULT 0,
    created_at  TEXT NOT NULL           -- ISO 8601 UTC
);

-- Engagements are written by the ingestion path and never updated.
CREATE TABLE IF NOT EXISTS engagements (
    engagement_id TEXT PRIMARY KEY,
    user_id       TEXT NOT NULL REFERENCES users(user_id),
    created_at    TEXT NOT NULL,        -- ISO 8601 UTC
    payload_json  TEXT NOT NULL DEFAULT '{}'
);

-- Covers the only hot query: newest-first engagements for one owner.
CREATE INDEX IF NOT EXISTS engagements_owner_idx
    ON engagements(user_id, created_at DESC);

PRAGMA user_version = 1;
";
