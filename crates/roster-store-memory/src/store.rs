//! [`MemoryStore`] — the in-memory implementation of [`UserStore`].

use std::sync::Arc;

use roster_core::{
  Result, UserRegistry,
  store::UserStore,
  user::{NewUser, Stats, UserId, UserPatch, UserRecord},
};
use tokio::sync::RwLock;

/// A user store backed by one in-process [`UserRegistry`].
///
/// Cloning is cheap; clones share the same registry.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
  registry: Arc<RwLock<UserRegistry>>,
}

impl MemoryStore {
  /// An empty store whose first user will get id 1.
  pub fn new() -> Self { Self::default() }
}

impl UserStore for MemoryStore {
  async fn create_user(&self, input: NewUser) -> Result<UserRecord> {
    let record = self.registry.write().await.create(input);
    tracing::info!(user_id = record.id, "created user");
    Ok(record)
  }

  async fn get_user(&self, id: UserId) -> Result<UserRecord> {
    let registry = self.registry.read().await;
    registry.get(id).cloned().inspect_err(|e| {
      tracing::debug!(user_id = id, "get: {e}");
    })
  }

  async fn list_users(&self) -> Result<Vec<UserRecord>> {
    let users = self.registry.read().await.list();
    tracing::debug!(count = users.len(), "listed users");
    Ok(users)
  }

  async fn update_user(
    &self,
    id: UserId,
    patch: UserPatch,
  ) -> Result<UserRecord> {
    let mut registry = self.registry.write().await;
    match registry.update(id, patch) {
      Ok(record) => {
        tracing::info!(user_id = id, "updated user");
        Ok(record)
      }
      Err(e) => {
        tracing::debug!(user_id = id, "update: {e}");
        Err(e)
      }
    }
  }

  async fn delete_user(&self, id: UserId) -> Result<UserRecord> {
    let mut registry = self.registry.write().await;
    match registry.delete(id) {
      Ok(record) => {
        tracing::info!(user_id = id, "deleted user");
        Ok(record)
      }
      Err(e) => {
        tracing::debug!(user_id = id, "delete: {e}");
        Err(e)
      }
    }
  }

  async fn stats(&self) -> Result<Stats> {
    Ok(self.registry.read().await.stats())
  }
}
