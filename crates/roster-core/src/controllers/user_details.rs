//! Controller for a single user's details surface.

use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::JoinHandle;

use super::fetch::FetchController;
use crate::domain::User;
use crate::repositories::UserDetailsRepository;
use crate::state::FetchState;

/// Publishes [`FetchState`] for one user, fixed at construction.
pub struct UserDetailsController<R: ?Sized> {
    user_id: u64,
    fetch: FetchController<User>,
    repository: Arc<R>,
}

impl<R: UserDetailsRepository + ?Sized + 'static> UserDetailsController<R> {
    pub fn new(user_id: u64, repository: Arc<R>) -> Self {
        Self {
            user_id,
            fetch: FetchController::new(),
            repository,
        }
    }

    pub const fn user_id(&self) -> u64 {
        self.user_id
    }

    pub fn state(&self) -> FetchState<User> {
        self.fetch.state()
    }

    pub fn subscribe(&self) -> watch::Receiver<FetchState<User>> {
        self.fetch.subscribe()
    }

    pub fn user(&self) -> Option<User> {
        self.state().value().cloned()
    }

    /// Cancel any in-flight fetch and start a new one in the background.
    pub fn fetch_user_details(&self) -> JoinHandle<()> {
        let repository = Arc::clone(&self.repository);
        let user_id = self.user_id;
        self.fetch
            .spawn(async move { repository.fetch_user_details(user_id).await })
    }

    /// Like [`fetch_user_details`](Self::fetch_user_details) but awaits
    /// completion. Returns whether the outcome was published.
    pub async fn load_user_details(&self) -> bool {
        let ticket = self.fetch.begin();
        ticket
            .complete_with(self.repository.fetch_user_details(self.user_id))
            .await
    }

    pub fn cancel(&self) {
        self.fetch.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::RemoteUserDetailsRepository;
    use crate::testing::{CannedResponse, FakeEngine, user_json};

    #[tokio::test]
    async fn test_loads_single_user() {
        let engine = FakeEngine::new()
            .with_response("/users/5", CannedResponse::Json(user_json(5, "Chelsey")));
        let repo = Arc::new(RemoteUserDetailsRepository::new(Arc::new(engine)));
        let controller = UserDetailsController::new(5, repo);

        controller.fetch_user_details().await.unwrap();

        let user = controller.user().unwrap();
        assert_eq!(user.id, Some(controller.user_id()));
        assert_eq!(user.name.as_deref(), Some("Chelsey"));
    }

    #[tokio::test]
    async fn test_http_error_becomes_server_message() {
        let engine = FakeEngine::new().with_response("/users/5", CannedResponse::Status(503));
        let repo = Arc::new(RemoteUserDetailsRepository::new(Arc::new(engine)));
        let controller = UserDetailsController::new(5, repo);

        assert!(controller.load_user_details().await);
        assert_eq!(
            controller.state(),
            FetchState::Failure("Server encountered an issue. Please try again.".to_string())
        );
        assert!(controller.user().is_none());
    }

    #[tokio::test]
    async fn test_decoding_failure_message() {
        let engine = FakeEngine::new()
            .with_response("/users/5", CannedResponse::Json(serde_json::json!({"id": 5})));
        let repo = Arc::new(RemoteUserDetailsRepository::new(Arc::new(engine)));
        let controller = UserDetailsController::new(5, repo);

        assert!(controller.load_user_details().await);
        assert_eq!(
            controller.state(),
            FetchState::Failure("Received unexpected data format.".to_string())
        );
    }

    #[tokio::test]
    async fn test_refetch_goes_back_through_loading() {
        let engine = Arc::new(
            FakeEngine::new()
                .with_response("/users/1", CannedResponse::Json(user_json(1, "Leanne"))),
        );
        let repo = Arc::new(RemoteUserDetailsRepository::new(Arc::clone(&engine)));
        let controller = UserDetailsController::new(1, repo);

        assert!(controller.load_user_details().await);
        let mut rx = controller.subscribe();

        let handle = controller.fetch_user_details();
        assert!(rx.borrow_and_update().is_loading());
        handle.await.unwrap();

        assert!(controller.user().is_some());
        assert_eq!(engine.calls(), 2);
    }
}
