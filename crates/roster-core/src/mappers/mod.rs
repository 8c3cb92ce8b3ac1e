//! Conversions from wire DTOs to domain entities.

mod user;

pub use user::map_users;
