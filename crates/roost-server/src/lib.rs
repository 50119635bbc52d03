//! HTTP layer for the Roost dashboard.
//!
//! Exposes an axum [`Router`] with the session-gated user endpoints, the
//! extension version probe, and the OAuth landing redirect, backed by any
//! [`DashboardStore`].

pub mod auth;
pub mod error;
pub mod handlers;

pub use error::Error;

use std::{path::PathBuf, sync::Arc};

use axum::{
  Router,
  routing::get,
};
use roost_core::{session::SessionResolver, store::DashboardStore};
use serde::Deserialize;
use tower_http::trace::TraceLayer;

use handlers::{callback, engagements, version};

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml`.
#[derive(Deserialize, Clone)]
pub struct ServerConfig {
  pub host:        String,
  pub port:        u16,
  pub store_path:  PathBuf,
  /// Optional fixed session for local development, inserted at startup.
  #[serde(default)]
  pub dev_session: Option<DevSession>,
}

/// A statically-configured development session.
#[derive(Deserialize, Clone)]
pub struct DevSession {
  pub token:      String,
  pub twitter_id: String,
  pub username:   String,
}

// ─── Application state ────────────────────────────────────────────────────────

/// Shared state threaded through all axum handlers.
#[derive(Clone)]
pub struct AppState<S: DashboardStore> {
  pub store:    Arc<S>,
  pub sessions: Arc<dyn SessionResolver>,
  pub config:   Arc<ServerConfig>,
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build an axum [`Router`] for the Roost API.
pub fn router<S>(state: AppState<S>) -> Router
where
  S: DashboardStore + Clone + Send + Sync + 'static,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  Router::new()
    .route("/api/user/engagements", get(engagements::list::<S>))
    .route("/api/user/me", get(engagements::me::<S>))
    .route(
      "/api/extension-remote/version",
      get(version::probe).options(version::preflight),
    )
    .route("/api/auth/twitter/callback", get(callback::twitter))
    .layer(TraceLayer::new_for_http())
    .with_state(state)
}

// ─── Integration tests ────────────────────────────────────────────────────────
