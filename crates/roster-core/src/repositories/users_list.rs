//! Users list repository: local store first, network as the fallback.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, trace, warn};

use crate::domain::User;
use crate::dto::UserDto;
use crate::endpoints::UsersEndpoint;
use crate::error::AppResult;
use crate::mappers::map_users;
use crate::ports::{LocalDataSource, NetworkEngine};

/// Store key for the cached users list (wire shape).
pub const USERS_LIST_CACHE_KEY: &str = "users_list";

/// Source of the users list.
#[async_trait]
pub trait UsersListRepository: Send + Sync {
    /// Fetch the users list.
    ///
    /// With `force_refresh` false the local store is tried first. Only
    /// network-path failures are returned; cache failures are swallowed.
    async fn fetch_users_list(&self, force_refresh: bool) -> AppResult<Vec<User>>;
}

/// [`UsersListRepository`] over a network engine and a local store.
///
/// Holds no state of its own beyond the injected adapters.
pub struct CachedUsersListRepository<N, L> {
    network: Arc<N>,
    local: Arc<L>,
}

impl<N, L> CachedUsersListRepository<N, L> {
    pub const fn new(network: Arc<N>, local: Arc<L>) -> Self {
        Self { network, local }
    }
}

#[async_trait]
impl<N, L> UsersListRepository for CachedUsersListRepository<N, L>
where
    N: NetworkEngine,
    L: LocalDataSource,
{
    async fn fetch_users_list(&self, force_refresh: bool) -> AppResult<Vec<User>> {
        if !force_refresh {
            match self.local.load::<Vec<UserDto>>(USERS_LIST_CACHE_KEY).await {
                Ok(cached) => {
                    debug!(count = cached.len(), "Serving users list from local store");
                    return Ok(map_users(cached));
                }
                Err(e) => trace!(error = %e, "Local users list unavailable"),
            }
        }

        let remote: Vec<UserDto> = self
            .network
            .execute(&UsersEndpoint::List.descriptor())
            .await?;
        debug!(count = remote.len(), "Fetched users list from network");

        if let Err(e) = self.local.save(USERS_LIST_CACHE_KEY, &remote).await {
            warn!(error = %e, "Failed to cache users list");
        }

        Ok(map_users(remote))
    }
}
