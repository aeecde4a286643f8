//! # User model
//!
//! [`User`] is the account record as the directory endpoint returns it: the
//! server-assigned identity id, the account/profile fields, and the role
//! names the server reports. The id is a string because identity ids are
//! GUIDs on the backend; the client never parses them.
//!
//! [`CreateUser`] and [`UpdateUser`] are the request bodies for
//! `POST /users` and `PUT /users/{id}`. Updates return no body — the store
//! refetches the record to pick up the result.

use serde::{Deserialize, Serialize};

/// A staff or member account in the gym's directory.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub user_name: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    /// Role names as the server reports them.
    #[serde(default)]
    pub roles: Vec<String>,
}

impl User {
    /// "First Last", falling back to the account name when the profile is
    /// empty.
    pub fn full_name(&self) -> String {
        let name = format!("{} {}", self.first_name, self.last_name);
        let name = name.trim();
        if name.is_empty() {
            self.user_name.clone()
        } else {
            name.to_string()
        }
    }
}

impl store::Record for User {
    type Id = String;

    fn id(&self) -> String {
        self.id.clone()
    }
}

/// Payload for `POST /users`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUser {
    pub user_name: String,
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
}

/// Payload for `PUT /users/{id}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUser {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub roles: Vec<String>,
}
