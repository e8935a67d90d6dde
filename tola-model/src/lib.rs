//! Local workflow records that get mirrored to the Track service.
//!
//! These are plain data carriers: the sync client in `tola-track` decides
//! how they are serialized onto the wire.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An organization using the platform.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Organization {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
}

impl Organization {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: None,
        }
    }
}

/// A platform user, correlated with Track via `tola_user_uuid`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TolaUser {
    pub id: i64,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub tola_user_uuid: Uuid,
}

impl TolaUser {
    /// Display name, `"{first} {last}"`.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// A country record referenced by workflow data.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    pub id: i64,
    pub country: String,
    pub code: String,
}
