use serde::{Deserialize, Serialize};

use crate::domain::types::UserId;

/// Credential holder for the back office.
///
/// No business logic beyond unique-username lookup and creation; there is no
/// HTTP surface for users.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub password: String,
}

/// Insertable form of [`User`].
#[derive(Clone, Debug, Deserialize)]
pub struct NewUser {
    pub username: String,
    pub password: String,
}
