//! JSON REST API for roster.
//!
//! Exposes an axum [`Router`] backed by any [`roster_core::store::UserStore`].
//! TLS, tracing middleware and process startup are the caller's
//! responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! let app = roster_api::api_router(Arc::new(MemoryStore::new()));
//! ```

pub mod error;
pub mod service;
pub mod users;

use std::sync::Arc;

use axum::{Router, routing::get};
use roster_core::store::UserStore;

pub use error::ApiError;

/// Build a fully-materialised API router for `store`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S>(store: Arc<S>) -> Router<()>
where
  S: UserStore + 'static,
{
  Router::new()
    .route("/", get(service::root))
    .route("/health", get(service::health))
    .route("/stats", get(service::stats::<S>))
    .route("/users", get(users::list::<S>).post(users::create::<S>))
    .route(
      "/users/{id}",
      get(users::get_one::<S>)
        .put(users::update_one::<S>)
        .delete(users::delete_one::<S>),
    )
    .with_state(store)
}

#[cfg(test)]
mod tests {
  use super::*;

  use axum::{
    body::Body,
    http::{Request, StatusCode, header},
    response::Response,
  };
  use roster_store_memory::MemoryStore;
  use serde_json::{Value, json};
  use tower::ServiceExt as _;

  fn app() -> Router {
    api_router(Arc::new(MemoryStore::new()))
  }

  async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> Response {
    let builder = Request::builder().method(method).uri(uri);
    let req = match body {
      Some(json) => builder
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(json.to_string()))
        .unwrap(),
      None => builder.body(Body::empty()).unwrap(),
    };
    app.clone().oneshot(req).await.unwrap()
  }

  async fn json_body(resp: Response) -> Value {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
      .await
      .unwrap();
    serde_json::from_slice(&bytes).unwrap()
  }

  // ── Service endpoints ───────────────────────────────────────────────────────

  #[tokio::test]
  async fn root_greets() {
    let resp = send(&app(), "GET", "/", None).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await;
    assert!(body["message"].is_string());
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
  }

  #[tokio::test]
  async fn health_reports_healthy() {
    let resp = send(&app(), "GET", "/health", None).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(json_body(resp).await["status"], "healthy");
  }

  #[tokio::test]
  async fn stats_on_empty_store() {
    let resp = send(&app(), "GET", "/stats", None).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
      json_body(resp).await,
      json!({ "total": 0, "active": 0, "inactive": 0 })
    );
  }

  // ── Users ───────────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn create_returns_full_record() {
    let app = app();
    let resp = send(
      &app,
      "POST",
      "/users",
      Some(json!({ "name": "Alice", "email": "a@x.com", "age": 30 })),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = json_body(resp).await;
    assert_eq!(body["id"], 1);
    assert_eq!(body["name"], "Alice");
    assert_eq!(body["email"], "a@x.com");
    assert_eq!(body["age"], 30);
    assert_eq!(body["bio"], Value::Null);
    assert_eq!(body["status"], "active");
    assert_eq!(body["created_at"], body["updated_at"]);
  }

  #[tokio::test]
  async fn create_without_email_is_rejected() {
    let resp = send(&app(), "POST", "/users", Some(json!({ "name": "Alice" }))).await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
  }

  #[tokio::test]
  async fn get_missing_returns_404_with_error_body() {
    let resp = send(&app(), "GET", "/users/7", None).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(json_body(resp).await["error"], "user not found: 7");
  }

  #[tokio::test]
  async fn non_numeric_id_is_bad_request() {
    let resp = send(&app(), "GET", "/users/abc", None).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
  }

  #[tokio::test]
  async fn put_updates_only_given_fields() {
    let app = app();
    let created = json_body(
      send(
        &app,
        "POST",
        "/users",
        Some(json!({ "name": "Alice", "email": "a@x.com", "bio": "hi" })),
      )
      .await,
    )
    .await;

    let resp = send(
      &app,
      "PUT",
      "/users/1",
      Some(json!({ "age": 30, "name": null })),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);

    let updated = json_body(resp).await;
    assert_eq!(updated["age"], 30);
    assert_eq!(updated["name"], "Alice");
    assert_eq!(updated["bio"], "hi");
    assert_eq!(updated["status"], "active");
    assert_eq!(updated["created_at"], created["created_at"]);
  }

  #[tokio::test]
  async fn put_missing_returns_404() {
    let resp = send(&app(), "PUT", "/users/3", Some(json!({ "age": 1 }))).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
  }

  #[tokio::test]
  async fn delete_then_get_returns_404() {
    let app = app();
    send(
      &app,
      "POST",
      "/users",
      Some(json!({ "name": "Alice", "email": "a@x.com" })),
    )
    .await;

    let resp = send(&app, "DELETE", "/users/1", None).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(json_body(resp).await["id"], 1);

    let resp = send(&app, "GET", "/users/1", None).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let resp = send(&app, "DELETE", "/users/1", None).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
  }

  #[tokio::test]
  async fn walkthrough() {
    let app = app();

    let alice = json_body(
      send(
        &app,
        "POST",
        "/users",
        Some(json!({ "name": "Alice", "email": "a@x.com" })),
      )
      .await,
    )
    .await;
    assert_eq!(alice["id"], 1);
    assert_eq!(alice["status"], "active");

    let bob = json_body(
      send(
        &app,
        "POST",
        "/users",
        Some(json!({ "name": "Bob", "email": "b@x.com" })),
      )
      .await,
    )
    .await;
    assert_eq!(bob["id"], 2);

    let list = json_body(send(&app, "GET", "/users", None).await).await;
    assert_eq!(list.as_array().map(Vec::len), Some(2));

    let alice = json_body(
      send(&app, "PUT", "/users/1", Some(json!({ "age": 30 }))).await,
    )
    .await;
    assert_eq!(alice["age"], 30);
    assert_eq!(alice["name"], "Alice");

    send(&app, "DELETE", "/users/2", None).await;
    let resp = send(&app, "GET", "/users/2", None).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let stats = json_body(send(&app, "GET", "/stats", None).await).await;
    assert_eq!(stats, json!({ "total": 1, "active": 1, "inactive": 0 }));

    let carol = json_body(
      send(
        &app,
        "POST",
        "/users",
        Some(json!({ "name": "Carol", "email": "c@x.com" })),
      )
      .await,
    )
    .await;
    assert_eq!(carol["id"], 3);
  }
}
