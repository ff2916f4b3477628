//! Handlers for `/users` endpoints.
//!
//! | Method   | Path          | Notes |
//! |----------|---------------|-------|
//! | `GET`    | `/users`      | All users |
//! | `GET`    | `/users/:id`  | 404 if not found |
//! | `POST`   | `/users`      | Body: [`NewUser`]; returns the stored record |
//! | `PUT`    | `/users/:id`  | Body: [`UserPatch`]; partial update, 404 if not found |
//! | `DELETE` | `/users/:id`  | 404 if not found |

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, State},
};
use roster_core::{
  store::UserStore,
  user::{NewUser, UserId, UserPatch, UserRecord},
};
use serde::Serialize;

use crate::error::ApiError;

// ─── List ─────────────────────────────────────────────────────────────────────

/// `GET /users`
pub async fn list<S>(
  State(store): State<Arc<S>>,
) -> Result<Json<Vec<UserRecord>>, ApiError>
where
  S: UserStore,
{
  Ok(Json(store.list_users().await?))
}

// ─── Get one ──────────────────────────────────────────────────────────────────

/// `GET /users/:id`
pub async fn get_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<UserId>,
) -> Result<Json<UserRecord>, ApiError>
where
  S: UserStore,
{
  Ok(Json(store.get_user(id).await?))
}

// ─── Create ───────────────────────────────────────────────────────────────────

/// `POST /users` — body: `{"name":"...","email":"...","age":30,"bio":"..."}`
pub async fn create<S>(
  State(store): State<Arc<S>>,
  Json(body): Json<NewUser>,
) -> Result<Json<UserRecord>, ApiError>
where
  S: UserStore,
{
  Ok(Json(store.create_user(body).await?))
}

// ─── Update ───────────────────────────────────────────────────────────────────

/// `PUT /users/:id` — every body field is optional; `null` leaves it as is.
pub async fn update_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<UserId>,
  Json(patch): Json<UserPatch>,
) -> Result<Json<UserRecord>, ApiError>
where
  S: UserStore,
{
  Ok(Json(store.update_user(id, patch).await?))
}

// ─── Delete ───────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct Deleted {
  pub message: String,
  pub id:      UserId,
}

/// `DELETE /users/:id`
pub async fn delete_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<UserId>,
) -> Result<Json<Deleted>, ApiError>
where
  S: UserStore,
{
  let removed = store.delete_user(id).await?;
  Ok(Json(Deleted {
    message: format!("user {} deleted", removed.id),
    id:      removed.id,
  }))
}
