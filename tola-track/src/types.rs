//! Wire types for the Track API.

use serde::{Deserialize, Serialize};
use tola_model::TolaUser;
use uuid::Uuid;

/// Registration payload for `POST /accounts/register/`.
///
/// Exactly these five fields go on the wire, form-encoded.
#[derive(Clone, Debug, Serialize)]
pub struct RegisterUserPayload {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub tola_user_uuid: Uuid,
}

impl RegisterUserPayload {
    pub fn from_user(user: &TolaUser) -> Self {
        Self {
            username: user.username.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            email: user.email.clone(),
            tola_user_uuid: user.tola_user_uuid,
        }
    }
}

/// Body Track returns for a successful registration.
#[derive(Clone, Debug, Deserialize)]
pub struct RegisteredUser {
    pub url: Option<String>,
    pub tola_user_uuid: Uuid,
    pub name: Option<String>,
}
