//! Single-user repository. Always goes to the network.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::domain::User;
use crate::dto::UserDto;
use crate::endpoints::UsersEndpoint;
use crate::error::AppResult;
use crate::ports::NetworkEngine;

/// Source of a single user's details.
#[async_trait]
pub trait UserDetailsRepository: Send + Sync {
    async fn fetch_user_details(&self, user_id: u64) -> AppResult<User>;
}

/// [`UserDetailsRepository`] backed directly by a network engine.
pub struct RemoteUserDetailsRepository<N> {
    network: Arc<N>,
}

impl<N> RemoteUserDetailsRepository<N> {
    pub const fn new(network: Arc<N>) -> Self {
        Self { network }
    }
}

#[async_trait]
impl<N: NetworkEngine> UserDetailsRepository for RemoteUserDetailsRepository<N> {
    async fn fetch_user_details(&self, user_id: u64) -> AppResult<User> {
        let dto: UserDto = self
            .network
            .execute(&UsersEndpoint::Details(user_id).descriptor())
            .await?;
        debug!(user_id, "Fetched user details");
        Ok(dto.into())
    }
}
