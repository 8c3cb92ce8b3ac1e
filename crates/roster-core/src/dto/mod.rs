//! Wire-format structures mirroring the remote API's JSON.
//!
//! DTOs never leave the repository layer; callers receive domain types
//! produced by [`crate::mappers`].

mod user;

pub use user::{AddressDto, CompanyDto, GeoDto, UserDto};
