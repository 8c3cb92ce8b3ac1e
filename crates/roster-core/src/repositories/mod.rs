//! Repositories: orchestrate the local store and network engine and map
//! wire DTOs to domain entities.

mod user_details;
mod users_list;

pub use user_details::{RemoteUserDetailsRepository, UserDetailsRepository};
pub use users_list::{CachedUsersListRepository, USERS_LIST_CACHE_KEY, UsersListRepository};
