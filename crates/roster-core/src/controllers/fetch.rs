//! Single-flight fetch state machine.
//!
//! # Concurrency Model
//!
//! - At most one fetch is live per controller. Starting a fetch cancels the
//!   previous one's token and replaces the active lease.
//! - A completion commits only if its token is not cancelled AND its lease
//!   is still the active one, checked under the same lock that `begin`
//!   takes. A superseded fetch can never overwrite newer state.
//! - Tickets hold a weak reference to controller state; dropping the last
//!   controller handle cancels whatever is in flight.
//! - State is published through a `watch` channel: one immutable snapshot
//!   per transition.

use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::error::AppResult;
use crate::state::{FetchPayload, FetchState};

/// Identifies one started fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct LeaseId(u64);

#[derive(Debug)]
struct ActiveFetch {
    lease: LeaseId,
    cancel: CancellationToken,
}

#[derive(Debug)]
struct Shared<T> {
    state: watch::Sender<FetchState<T>>,
    active: Mutex<Option<ActiveFetch>>,
    next_lease: AtomicU64,
}

impl<T> Shared<T> {
    fn active(&self) -> MutexGuard<'_, Option<ActiveFetch>> {
        self.active.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<T> Drop for Shared<T> {
    fn drop(&mut self) {
        let active = self
            .active
            .get_mut()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        if let Some(active) = active {
            active.cancel.cancel();
        }
    }
}

/// Owner of one logical fetch's lifecycle and observable state.
///
/// Cloning yields another handle to the same controller.
#[derive(Debug)]
pub struct FetchController<T> {
    shared: Arc<Shared<T>>,
}

impl<T> Clone for FetchController<T> {
    fn clone(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
        }
    }
}

impl<T: FetchPayload> Default for FetchController<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: FetchPayload> FetchController<T> {
    pub fn new() -> Self {
        let (state, _) = watch::channel(FetchState::Idle);
        Self {
            shared: Arc::new(Shared {
                state,
                active: Mutex::new(None),
                next_lease: AtomicU64::new(1),
            }),
        }
    }

    /// Current state snapshot.
    pub fn state(&self) -> FetchState<T> {
        self.shared.state.borrow().clone()
    }

    /// Receiver that observes every subsequent transition.
    pub fn subscribe(&self) -> watch::Receiver<FetchState<T>> {
        self.shared.state.subscribe()
    }

    /// Cancel the in-flight fetch (if any) and start a new one.
    ///
    /// The state is `Loading` when this returns.
    pub fn begin(&self) -> FetchTicket<T> {
        let lease = LeaseId(self.shared.next_lease.fetch_add(1, Ordering::Relaxed));
        let cancel = CancellationToken::new();

        let mut active = self.shared.active();
        if let Some(previous) = active.replace(ActiveFetch {
            lease,
            cancel: cancel.clone(),
        }) {
            previous.cancel.cancel();
            debug!(
                superseded = previous.lease.0,
                lease = lease.0,
                "Superseded in-flight fetch"
            );
        }
        self.shared.state.send_replace(FetchState::Loading);
        drop(active);

        FetchTicket {
            lease,
            cancel,
            shared: Arc::downgrade(&self.shared),
        }
    }

    /// Cancel the in-flight fetch without starting another.
    ///
    /// The state is left as is; there is no cancelled state.
    pub fn cancel(&self) {
        let active = self.shared.active().take();
        if let Some(active) = active {
            active.cancel.cancel();
            debug!(lease = active.lease.0, "Cancelled in-flight fetch");
        }
    }

    /// Start a fetch and drive `fut` to completion on the tokio runtime.
    ///
    /// `fut` is dropped without publishing once the fetch is superseded.
    pub fn spawn<Fut>(&self, fut: Fut) -> JoinHandle<()>
    where
        Fut: Future<Output = AppResult<T>> + Send + 'static,
    {
        let ticket = self.begin();
        tokio::spawn(async move {
            ticket.complete_with(fut).await;
        })
    }
}

/// Right to publish the outcome of one started fetch.
#[derive(Debug)]
pub struct FetchTicket<T> {
    lease: LeaseId,
    cancel: CancellationToken,
    shared: Weak<Shared<T>>,
}

impl<T: FetchPayload> FetchTicket<T> {
    /// Token cancelled when this fetch is superseded or abandoned.
    pub const fn token(&self) -> &CancellationToken {
        &self.cancel
    }

    /// Whether this ticket may still publish.
    pub fn is_current(&self) -> bool {
        if self.cancel.is_cancelled() {
            return false;
        }
        self.shared.upgrade().is_some_and(|shared| {
            shared
                .active()
                .as_ref()
                .is_some_and(|active| active.lease == self.lease)
        })
    }

    /// Await `op`, abandoning it as soon as the ticket is cancelled, then
    /// commit its outcome. Returns whether the outcome was published.
    pub async fn complete_with<F>(self, op: F) -> bool
    where
        F: Future<Output = AppResult<T>>,
    {
        let outcome = tokio::select! {
            biased;
            () = self.cancel.cancelled() => return false,
            outcome = op => outcome,
        };
        self.commit(outcome)
    }

    /// Publish `outcome` if this ticket is still current.
    ///
    /// An empty payload becomes `Empty`; an error becomes `Failure` carrying
    /// the kind's user-facing message.
    pub fn commit(self, outcome: AppResult<T>) -> bool {
        if self.cancel.is_cancelled() {
            return false;
        }
        let Some(shared) = self.shared.upgrade() else {
            return false;
        };

        let mut active = shared.active();
        if !active
            .as_ref()
            .is_some_and(|current| current.lease == self.lease)
        {
            return false;
        }
        *active = None;

        let next = match outcome {
            Ok(value) if value.is_empty_payload() => FetchState::Empty,
            Ok(value) => FetchState::Loaded(value),
            Err(e) => {
                debug!(lease = self.lease.0, error = %e, "Fetch failed");
                FetchState::Failure(e.user_message().to_string())
            }
        };
        shared.state.send_replace(next);
        true
    }
}
