//! Controller for the users list surface.

use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::JoinHandle;

use super::fetch::FetchController;
use crate::domain::User;
use crate::repositories::UsersListRepository;
use crate::state::FetchState;

/// Publishes [`FetchState`] for the users list.
pub struct UsersListController<R: ?Sized> {
    fetch: FetchController<Vec<User>>,
    repository: Arc<R>,
}

impl<R: UsersListRepository + ?Sized + 'static> UsersListController<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self {
            fetch: FetchController::new(),
            repository,
        }
    }

    pub fn state(&self) -> FetchState<Vec<User>> {
        self.fetch.state()
    }

    pub fn subscribe(&self) -> watch::Receiver<FetchState<Vec<User>>> {
        self.fetch.subscribe()
    }

    /// Loaded users, or an empty list in any other state.
    pub fn users(&self) -> Vec<User> {
        self.state().value().cloned().unwrap_or_default()
    }

    /// Cancel any in-flight fetch and start a new one in the background.
    pub fn fetch_users(&self, force_refresh: bool) -> JoinHandle<()> {
        let repository = Arc::clone(&self.repository);
        self.fetch
            .spawn(async move { repository.fetch_users_list(force_refresh).await })
    }

    /// Like [`fetch_users`](Self::fetch_users) but awaits completion.
    ///
    /// Returns whether this fetch published its outcome; `false` means a
    /// newer fetch superseded it.
    pub async fn load_users(&self, force_refresh: bool) -> bool {
        let ticket = self.fetch.begin();
        ticket
            .complete_with(self.repository.fetch_users_list(force_refresh))
            .await
    }

    pub fn cancel(&self) {
        self.fetch.cancel();
    }
}
