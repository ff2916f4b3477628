//! User records and the input shapes that create and modify them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Registry-assigned identifier. Allocation starts at 1 and never repeats.
pub type UserId = u64;

/// Lifecycle status of a user.
///
/// Every record is created `Active` and no operation changes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
  #[default]
  Active,
}

/// One user, as held by the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
  pub id:         UserId,
  pub name:       String,
  pub email:      String,
  pub age:        Option<i64>,
  pub bio:        Option<String>,
  pub status:     UserStatus,
  pub created_at: DateTime<Utc>,
  pub updated_at: DateTime<Utc>,
}

/// Input to [`UserRegistry::create`](crate::UserRegistry::create).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
  pub name:  String,
  pub email: String,
  #[serde(default)]
  pub age:   Option<i64>,
  #[serde(default)]
  pub bio:   Option<String>,
}

impl NewUser {
  /// A new user with only the required fields set.
  pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
    Self {
      name:  name.into(),
      email: email.into(),
      age:   None,
      bio:   None,
    }
  }
}

/// A partial record describing which fields an update changes.
///
/// `None` means "leave unchanged", whether the field was omitted or
/// explicitly null on the wire. There is no way to clear `age` or `bio`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UserPatch {
  #[serde(default)]
  pub name:  Option<String>,
  #[serde(default)]
  pub email: Option<String>,
  #[serde(default)]
  pub age:   Option<i64>,
  #[serde(default)]
  pub bio:   Option<String>,
}

impl UserPatch {
  /// Overwrite the fields of `record` that are present in this patch.
  ///
  /// Only touches `name`, `email`, `age` and `bio`; the caller owns the
  /// `updated_at` refresh.
  pub fn apply_to(self, record: &mut UserRecord) {
    if let Some(name) = self.name {
      record.name = name;
    }
    if let Some(email) = self.email {
      record.email = email;
    }
    if let Some(age) = self.age {
      record.age = Some(age);
    }
    if let Some(bio) = self.bio {
      record.bio = Some(bio);
    }
  }

  /// `true` if the patch carries no field at all.
  pub fn is_empty(&self) -> bool {
    self.name.is_none()
      && self.email.is_none()
      && self.age.is_none()
      && self.bio.is_none()
  }
}

/// Aggregate counts over the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Stats {
  pub total:    usize,
  pub active:   usize,
  pub inactive: usize,
}
