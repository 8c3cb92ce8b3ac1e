//! Wire shape of a user as returned by `GET /users` and `GET /users/{id}`.
//!
//! Every field is required; a payload missing one fails decoding. This is
//! also the shape persisted in the list cache.

use serde::{Deserialize, Serialize};

/// User record exactly as the remote API encodes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDto {
    pub id: u64,
    pub name: String,
    pub username: String,
    pub email: String,
    pub address: AddressDto,
    pub phone: String,
    pub website: String,
    pub company: CompanyDto,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressDto {
    pub street: String,
    pub suite: String,
    pub city: String,
    pub zipcode: String,
    pub geo: GeoDto,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeoDto {
    pub lat: String,
    pub lng: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyDto {
    pub name: String,
    pub catch_phrase: String,
    pub bs: String,
}
