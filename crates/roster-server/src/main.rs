//! roster server binary.
//!
//! Reads `config.toml` (or the path given with `--config`), builds an empty
//! in-memory user registry, and serves the JSON API over HTTP.
//!
//! ```
//! cargo run -p roster-server -- --port 8080
//! ```

use std::sync::Arc;

use clap::Parser;
use roster_server::{Cli, ServerConfig};
use roster_store_memory::MemoryStore;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

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
  let config = ServerConfig::load(&cli)?;

  // One registry for the life of the process; every request shares it.
  let store = Arc::new(MemoryStore::new());
  let app = roster_server::app(store);

  roster_server::serve(&config, app).await
}
