//! Command handlers.
//!
//! Each handler drives a controller from the composed
//! [`CliContext`](crate::CliContext) and renders its final state.

pub mod list;
pub mod paths;
pub mod show;

use roster_core::{FetchPayload, FetchState};
use tokio::sync::watch;

/// Follow `states` until a terminal snapshot is published.
///
/// Reports the loading transition on stderr so stdout stays clean for the
/// rendered result.
pub async fn wait_for_outcome<T: FetchPayload>(
    states: &mut watch::Receiver<FetchState<T>>,
    what: &str,
) -> FetchState<T> {
    loop {
        let snapshot = states.borrow_and_update().clone();
        if snapshot.is_terminal() {
            return snapshot;
        }
        if snapshot.is_loading() {
            eprintln!("Loading {what}...");
        }
        if states.changed().await.is_err() {
            return states.borrow().clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_core::FetchController;

    #[tokio::test]
    async fn test_waits_past_loading() {
        let controller = FetchController::<Vec<u32>>::new();
        let mut states = controller.subscribe();

        let task = controller.spawn(async { Ok(vec![1, 2]) });
        let outcome = wait_for_outcome(&mut states, "numbers").await;
        task.await.unwrap();

        assert_eq!(outcome, FetchState::Loaded(vec![1, 2]));
    }

    #[tokio::test]
    async fn test_returns_last_state_when_controller_is_gone() {
        let controller = FetchController::<Vec<u32>>::new();
        let mut states = controller.subscribe();
        drop(controller);

        assert_eq!(wait_for_outcome(&mut states, "numbers").await, FetchState::Idle);
    }
}
