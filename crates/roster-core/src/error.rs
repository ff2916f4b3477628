//! Error types for `roster-core`.

use thiserror::Error;

use crate::user::UserId;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
  #[error("user not found: {0}")]
  NotFound(UserId),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
