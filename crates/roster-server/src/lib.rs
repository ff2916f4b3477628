//! Process plumbing for the roster HTTP service.
//!
//! Loads [`ServerConfig`], wraps the API router in request tracing, and
//! serves it until the process is asked to stop.

use std::{path::PathBuf, sync::Arc};

use anyhow::Context as _;
use axum::Router;
use clap::Parser;
use roster_core::store::UserStore;
use serde::Deserialize;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

// ─── CLI ──────────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(author, version, about = "roster user registry demo server")]
pub struct Cli {
  /// Path to the TOML configuration file. A missing file is not an error.
  #[arg(short, long, default_value = "config.toml")]
  pub config: PathBuf,

  /// Interface to bind, overriding the config file.
  #[arg(long)]
  pub host: Option<String>,

  /// Port to bind, overriding the config file. Hosting platforms set `PORT`.
  #[arg(long, env = "PORT")]
  pub port: Option<u16>,
}

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration.
///
/// Layered lowest to highest: built-in defaults, `config.toml`, `ROSTER_*`
/// environment variables, then command-line flags.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct ServerConfig {
  pub host: String,
  pub port: u16,
}

impl ServerConfig {
  pub const DEFAULT_HOST: &'static str = "0.0.0.0";
  pub const DEFAULT_PORT: u16 = 8000;

  pub fn load(cli: &Cli) -> anyhow::Result<Self> {
    let settings = config::Config::builder()
      .set_default("host", Self::DEFAULT_HOST)?
      .set_default("port", i64::from(Self::DEFAULT_PORT))?
      .add_source(config::File::from(cli.config.clone()).required(false))
      .add_source(config::Environment::with_prefix("ROSTER"))
      .set_override_option("host", cli.host.clone())?
      .set_override_option("port", cli.port.map(i64::from))?
      .build()
      .context("failed to read configuration")?;

    settings
      .try_deserialize()
      .context("failed to deserialise ServerConfig")
  }

  pub fn address(&self) -> String { format!("{}:{}", self.host, self.port) }
}

// ─── Serving ──────────────────────────────────────────────────────────────────

/// The API router for `store`, with a tracing span around every request.
pub fn app<S>(store: Arc<S>) -> Router
where
  S: UserStore + 'static,
{
  roster_api::api_router(store).layer(TraceLayer::new_for_http())
}

/// Bind `config.address()` and serve `app` until Ctrl-C or SIGTERM.
pub async fn serve(config: &ServerConfig, app: Router) -> anyhow::Result<()> {
  let address = config.address();
  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;

  tracing::info!("Listening on http://{address}");
  axum::serve(listener, app)
    .with_graceful_shutdown(shutdown_signal())
    .await
    .context("server error")?;
  tracing::info!("server stopped");

  Ok(())
}

/// Resolves on the first Ctrl-C, or SIGTERM on Unix.
async fn shutdown_signal() {
  let ctrl_c = async {
    if let Err(e) = tokio::signal::ctrl_c().await {
      tracing::error!("failed to listen for Ctrl-C: {e}");
      std::future::pending::<()>().await;
    }
  };

  #[cfg(unix)]
  let terminate = async {
    use tokio::signal::unix::{SignalKind, signal};
    match signal(SignalKind::terminate()) {
      Ok(mut sigterm) => {
        sigterm.recv().await;
      }
      Err(e) => {
        tracing::error!("failed to listen for SIGTERM: {e}");
        std::future::pending::<()>().await;
      }
    }
  };

  #[cfg(not(unix))]
  let terminate = std::future::pending::<()>();

  tokio::select! {
    () = ctrl_c    => {}
    () = terminate => {}
  }
  tracing::info!("shutdown signal received, draining connections");
}
