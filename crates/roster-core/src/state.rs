//! Observable state of a fetch.

use crate::domain::User;

/// Lifecycle of one logical fetch, as published by a controller.
///
/// Snapshots are replaced, never mutated in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FetchState<T> {
    #[default]
    Idle,
    Loading,
    Loaded(T),
    Empty,
    /// Fixed user-facing message for the failure kind.
    Failure(String),
}

impl<T> FetchState<T> {
    pub const fn value(&self) -> Option<&T> {
        match self {
            Self::Loaded(value) => Some(value),
            _ => None,
        }
    }

    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// True for `Loaded`, `Empty` and `Failure`.
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Loaded(_) | Self::Empty | Self::Failure(_))
    }
}

/// Payloads a controller can publish; decides between `Loaded` and `Empty`.
pub trait FetchPayload: Clone + Send + Sync + 'static {
    fn is_empty_payload(&self) -> bool {
        false
    }
}

impl<T: Clone + Send + Sync + 'static> FetchPayload for Vec<T> {
    fn is_empty_payload(&self) -> bool {
        self.is_empty()
    }
}

impl FetchPayload for User {}
