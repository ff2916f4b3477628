//! The `UserStore` trait.
//!
//! Implemented by backends that own a [`UserRegistry`](crate::UserRegistry)
//! (e.g. `roster-store-memory`). The HTTP layer depends on this abstraction,
//! not on any concrete backend, and never on ambient global state.

use std::future::Future;

use crate::{
  Result,
  user::{NewUser, Stats, UserId, UserPatch, UserRecord},
};

/// Shared, async access to a user registry.
///
/// Implementations must make `create_user`, `update_user` and `delete_user`
/// mutually exclusive with each other and with reads, so ids stay unique and
/// the counter stays monotonic. Reads may run concurrently.
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes (e.g. tokio with `axum`).
pub trait UserStore: Send + Sync {
  /// Allocate an id and store a new `Active` user.
  fn create_user(
    &self,
    input: NewUser,
  ) -> impl Future<Output = Result<UserRecord>> + Send + '_;

  /// Fetch a user. Fails with [`Error::NotFound`](crate::Error::NotFound).
  fn get_user(
    &self,
    id: UserId,
  ) -> impl Future<Output = Result<UserRecord>> + Send + '_;

  /// Every current user. An empty store yields an empty vector.
  fn list_users(&self) -> impl Future<Output = Result<Vec<UserRecord>>> + Send + '_;

  /// Apply a partial update and refresh `updated_at`.
  fn update_user(
    &self,
    id: UserId,
    patch: UserPatch,
  ) -> impl Future<Output = Result<UserRecord>> + Send + '_;

  /// Remove a user, returning the removed record.
  fn delete_user(
    &self,
    id: UserId,
  ) -> impl Future<Output = Result<UserRecord>> + Send + '_;

  fn stats(&self) -> impl Future<Output = Result<Stats>> + Send + '_;
}
