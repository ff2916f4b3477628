//! Service-level endpoints: greeting, health check and registry stats.
//!
//! | Method | Path      | Notes |
//! |--------|-----------|-------|
//! | `GET`  | `/`       | Greeting plus crate version |
//! | `GET`  | `/health` | Always `200` once the process can answer HTTP |
//! | `GET`  | `/stats`  | `{"total","active","inactive"}` |

use std::sync::Arc;

use axum::{Json, extract::State};
use roster_core::{store::UserStore, user::Stats};
use serde::Serialize;

use crate::error::ApiError;

#[derive(Debug, Serialize)]
pub struct Greeting {
  pub message: &'static str,
  pub version: &'static str,
}

/// `GET /`
pub async fn root() -> Json<Greeting> {
  Json(Greeting {
    message: "roster is up and serving requests",
    version: env!("CARGO_PKG_VERSION"),
  })
}

#[derive(Debug, Serialize)]
pub struct Health {
  pub status:  &'static str,
  pub message: &'static str,
}

/// `GET /health` — no dependencies, so it answers as long as the server does.
pub async fn health() -> Json<Health> {
  Json(Health {
    status:  "healthy",
    message: "server is running",
  })
}

/// `GET /stats`
pub async fn stats<S>(
  State(store): State<Arc<S>>,
) -> Result<Json<Stats>, ApiError>
where
  S: UserStore,
{
  Ok(Json(store.stats().await?))
}
