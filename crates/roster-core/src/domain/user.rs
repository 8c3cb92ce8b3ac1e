//! User domain entity.
//!
//! Every field is optional: presentation code tolerates missing data and the
//! entity is decoupled from the wire shape in [`crate::dto::UserDto`].

use serde::{Deserialize, Serialize};

/// A user as the application sees it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    pub id: Option<u64>,
    pub name: Option<String>,
    pub username: Option<String>,
    pub email: Option<String>,
    pub address: Option<Address>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub company: Option<Company>,
}

/// Postal address of a user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Address {
    pub street: Option<String>,
    pub suite: Option<String>,
    pub city: Option<String>,
    pub zipcode: Option<String>,
    pub geo: Option<Geo>,
}

/// Geographic coordinates, kept as the strings the API returns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Geo {
    pub lat: Option<String>,
    pub lng: Option<String>,
}

/// Employer of a user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Company {
    pub name: Option<String>,
    pub catch_phrase: Option<String>,
    pub bs: Option<String>,
}

impl User {
    /// Best label for list rows: the display name, then the username.
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .or(self.username.as_deref())
            .unwrap_or("Unknown user")
    }
}
