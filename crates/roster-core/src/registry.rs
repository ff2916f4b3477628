//! [`UserRegistry`] — the in-memory record map and its id allocator.
//!
//! The registry performs no locking of its own. Callers that share it
//! between tasks wrap it in a lock (see `roster-store-memory`).

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use crate::{
  Error, Result,
  user::{NewUser, Stats, UserId, UserPatch, UserRecord, UserStatus},
};

/// Owns every user record plus the next id to hand out.
///
/// Invariants:
/// - `next_id` is strictly greater than every id ever assigned.
/// - every key in `records` equals the `id` of its value.
#[derive(Debug)]
pub struct UserRegistry {
  records: BTreeMap<UserId, UserRecord>,
  next_id: UserId,
}

impl Default for UserRegistry {
  fn default() -> Self { Self::new() }
}

impl UserRegistry {
  pub fn new() -> Self {
    Self {
      records: BTreeMap::new(),
      next_id: 1,
    }
  }

  /// The id the next successful [`create`](Self::create) will assign.
  pub fn next_id(&self) -> UserId { self.next_id }

  pub fn len(&self) -> usize { self.records.len() }

  pub fn is_empty(&self) -> bool { self.records.is_empty() }

  /// Allocate an id and insert a fresh `Active` record.
  pub fn create(&mut self, input: NewUser) -> UserRecord {
    let id = self.next_id;
    self.next_id += 1;

    let now = Utc::now();
    let record = UserRecord {
      id,
      name: input.name,
      email: input.email,
      age: input.age,
      bio: input.bio,
      status: UserStatus::Active,
      created_at: now,
      updated_at: now,
    };
    self.records.insert(id, record.clone());
    record
  }

  pub fn get(&self, id: UserId) -> Result<&UserRecord> {
    self.records.get(&id).ok_or(Error::NotFound(id))
  }

  /// All current records, in ascending id order.
  pub fn list(&self) -> Vec<UserRecord> {
    self.records.values().cloned().collect()
  }

  /// Merge `patch` into the record and refresh `updated_at`, even when the
  /// patch is empty.
  pub fn update(&mut self, id: UserId, patch: UserPatch) -> Result<UserRecord> {
    let record = self.records.get_mut(&id).ok_or(Error::NotFound(id))?;
    patch.apply_to(record);
    record.updated_at = advance(record.updated_at, Utc::now());
    Ok(record.clone())
  }

  /// Remove the record and return it. The id is never handed out again.
  pub fn delete(&mut self, id: UserId) -> Result<UserRecord> {
    self.records.remove(&id).ok_or(Error::NotFound(id))
  }

  pub fn stats(&self) -> Stats {
    let total = self.records.len();
    let active = self
      .records
      .values()
      .filter(|r| r.status == UserStatus::Active)
      .count();
    Stats {
      total,
      active,
      inactive: total - active,
    }
  }
}

/// Wall clocks can step backwards; `updated_at` must not.
fn advance(previous: DateTime<Utc>, now: DateTime<Utc>) -> DateTime<Utc> {
  previous.max(now)
}
