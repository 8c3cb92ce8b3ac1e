//! List command handler.

use std::sync::Arc;

use anyhow::{Result, bail};
use roster_core::{FetchState, UsersListController, UsersListRepository};

use crate::bootstrap::CliContext;
use crate::handlers::wait_for_outcome;
use crate::presentation::format_users_table;

/// Fetch the users list and render it as a table.
pub async fn render(repository: Arc<dyn UsersListRepository>, refresh: bool) -> Result<String> {
    let controller = UsersListController::new(repository);
    let mut states = controller.subscribe();

    let task = controller.fetch_users(refresh);
    let outcome = wait_for_outcome(&mut states, "users").await;
    task.await?;

    match outcome {
        FetchState::Loaded(users) => Ok(format_users_table(&users)),
        FetchState::Empty => Ok("No users found.\n".to_string()),
        FetchState::Failure(message) => bail!(message),
        FetchState::Idle | FetchState::Loading => bail!("users list fetch did not finish"),
    }
}

/// Execute the list command.
pub async fn execute(ctx: &CliContext, refresh: bool) -> Result<()> {
    let rendered = render(Arc::clone(&ctx.users_list), refresh).await?;
    print!("{rendered}");
    Ok(())
}
