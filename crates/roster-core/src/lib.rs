//! Core of the roster users client.
//!
//! Domain entities, wire DTOs and their mapping, endpoint descriptors, the
//! network and local-store ports, repositories and fetch controllers. No
//! HTTP client or concrete file store lives here; those are adapters in
//! `roster-http` and `roster-store`.
//!
//! Data flows controller → repository → (local store | network engine) →
//! DTO → mapper → domain entity → published [`FetchState`].

pub mod controllers;
pub mod domain;
pub mod dto;
pub mod endpoints;
pub mod error;
pub mod mappers;
pub mod paths;
pub mod ports;
pub mod repositories;
pub mod state;

#[cfg(any(test, feature = "test-utils"))]
pub mod testing;

// Re-export commonly used types for convenience
pub use controllers::{FetchController, FetchTicket, UserDetailsController, UsersListController};
pub use domain::{Address, Company, Geo, User};
pub use dto::UserDto;
pub use endpoints::{
    Body, ContentType, EndpointDescriptor, HeaderSet, HttpMethod, MultipartPart, UsersEndpoint,
};
pub use error::{AppError, AppErrorKind, AppResult};
pub use paths::{CACHE_DIR_ENV, PathError, cache_dir, ensure_cache_dir};
pub use ports::{
    LocalDataSource, NetworkEngine, NetworkError, NetworkResult, StoreError, StoreResult,
};
pub use repositories::{
    CachedUsersListRepository, RemoteUserDetailsRepository, USERS_LIST_CACHE_KEY,
    UserDetailsRepository, UsersListRepository,
};
pub use state::{FetchPayload, FetchState};
