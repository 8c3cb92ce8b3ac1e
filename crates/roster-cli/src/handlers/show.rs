//! Show command handler.

use std::sync::Arc;

use anyhow::{Result, bail};
use roster_core::{FetchState, UserDetailsController, UserDetailsRepository};

use crate::bootstrap::CliContext;
use crate::handlers::wait_for_outcome;
use crate::presentation::format_user_details;

/// Fetch one user and render the detail view.
pub async fn render(repository: Arc<dyn UserDetailsRepository>, id: u64) -> Result<String> {
    let controller = UserDetailsController::new(id, repository);
    let mut states = controller.subscribe();

    let task = controller.fetch_user_details();
    let outcome = wait_for_outcome(&mut states, "user details").await;
    task.await?;

    match outcome {
        FetchState::Loaded(user) => Ok(format_user_details(&user)),
        FetchState::Failure(message) => bail!(message),
        FetchState::Empty | FetchState::Idle | FetchState::Loading => {
            bail!("user {} fetch did not finish", controller.user_id())
        }
    }
}

/// Execute the show command.
pub async fn execute(ctx: &CliContext, id: u64) -> Result<()> {
    let rendered = render(Arc::clone(&ctx.user_details), id).await?;
    print!("{rendered}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_core::RemoteUserDetailsRepository;
    use roster_core::testing::{CannedResponse, FakeEngine, user_json};

    fn repository(engine: FakeEngine) -> Arc<dyn UserDetailsRepository> {
        Arc::new(RemoteUserDetailsRepository::new(Arc::new(engine)))
    }

    #[tokio::test]
    async fn test_renders_details() {
        let engine = FakeEngine::new()
            .with_response("/users/2", CannedResponse::Json(user_json(2, "Ervin")));

        let details = render(repository(engine), 2).await.unwrap();
        assert!(details.starts_with("Ervin\n"));
    }

    #[tokio::test]
    async fn test_missing_user_is_server_failure() {
        let details = render(repository(FakeEngine::new()), 42).await.unwrap_err();
        assert_eq!(
            details.to_string(),
            "Server encountered an issue. Please try again."
        );
    }

    #[tokio::test]
    async fn test_transport_fault_message() {
        let engine = FakeEngine::new()
            .with_response("/users/1", CannedResponse::Fault("connection reset".to_string()));

        let err = render(repository(engine), 1).await.unwrap_err();
        assert_eq!(err.to_string(), "Network connection seems unstable.");
    }
}
