//! roost-server binary.
//!
//! Reads `config.toml` (or the path specified with `--config`), opens an
//! in-process SQLite store, and serves the dashboard API over HTTP.
//!
//! Sessions are minted by the upstream OAuth integration into the shared
//! in-process table; for local development a fixed session can be configured
//! under `[dev_session]` in config.toml.

use std::{
  path::{Path, PathBuf},
  sync::Arc,
};

use anyhow::Context as _;
use clap::Parser;
use roost_core::{
  session::{MemorySessions, Session},
  store::DashboardStore as _,
};
use roost_server::{AppState, ServerConfig};
use roost_store_sqlite::SqliteStore;
use tokio::net::TcpListener;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Roost dashboard server")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "config.toml")]
  config: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  // Initialise tracing.
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  // Load configuration.
  let settings = config::Config::builder()
    .add_source(config::File::from(cli.config).required(false))
    .add_source(config::Environment::with_prefix("ROOST"))
    .build()
    .context("failed to read config file")?;

  let server_cfg: ServerConfig = settings
    .try_deserialize()
    .context("failed to deserialise ServerConfig")?;

  // Expand `~` in store path.
  let store_path = expand_tilde(&server_cfg.store_path);

  // Open SQLite store.
  let store = SqliteStore::open(&store_path)
    .await
    .with_context(|| format!("failed to open store at {store_path:?}"))?;

  // Session table, populated by the auth integration at login time.
  let sessions = MemorySessions::new();

  if let Some(dev) = &server_cfg.dev_session {
    let user = store
      .ensure_user(&dev.twitter_id, &dev.username)
      .await
      .context("failed to seed dev user")?;
    sessions.insert(
      dev.token.clone(),
      Session {
        twitter_id: user.twitter_id.clone(),
        username:   user.username.clone(),
        credits:    user.credits,
      },
    );
    tracing::warn!("dev session enabled for @{}", user.username);
  }

  // Build application state.
  let state = AppState {
    store:    Arc::new(store),
    sessions: Arc::new(sessions),
    config:   Arc::new(server_cfg.clone()),
  };

  let app = roost_server::router(state);
  let address = format!("{}:{}", server_cfg.host, server_cfg.port);

  tracing::info!("Listening on http://{address}");
  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;

  axum::serve(listener, app).await.context("server error")?;

  Ok(())
}

/// Expand a leading `~` to the user's home directory.
fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}
