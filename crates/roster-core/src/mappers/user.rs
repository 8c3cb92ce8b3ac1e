//! DTO to domain conversion for users.
//!
//! The mapping is total: every DTO field is required and every domain field
//! is optional, so nothing can fail and nothing is dropped.

use crate::domain::{Address, Company, Geo, User};
use crate::dto::{AddressDto, CompanyDto, GeoDto, UserDto};

impl From<UserDto> for User {
    fn from(dto: UserDto) -> Self {
        Self {
            id: Some(dto.id),
            name: Some(dto.name),
            username: Some(dto.username),
            email: Some(dto.email),
            address: Some(dto.address.into()),
            phone: Some(dto.phone),
            website: Some(dto.website),
            company: Some(dto.company.into()),
        }
    }
}

impl From<AddressDto> for Address {
    fn from(dto: AddressDto) -> Self {
        Self {
            street: Some(dto.street),
            suite: Some(dto.suite),
            city: Some(dto.city),
            zipcode: Some(dto.zipcode),
            geo: Some(dto.geo.into()),
        }
    }
}

impl From<GeoDto> for Geo {
    fn from(dto: GeoDto) -> Self {
        Self {
            lat: Some(dto.lat),
            lng: Some(dto.lng),
        }
    }
}

impl From<CompanyDto> for Company {
    fn from(dto: CompanyDto) -> Self {
        Self {
            name: Some(dto.name),
            catch_phrase: Some(dto.catch_phrase),
            bs: Some(dto.bs),
        }
    }
}

/// Map a DTO collection to domain users, 1:1 and order-preserving.
pub fn map_users(dtos: Vec<UserDto>) -> Vec<User> {
    dtos.into_iter().map(User::from).collect()
}
