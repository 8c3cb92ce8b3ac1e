//! Fetch controllers: own a fetch's lifecycle and publish its state.
//!
//! Each controller is affine to one consumer surface. Starting a fetch
//! cancels the previous one; only the newest fetch may write state.

mod fetch;
mod user_details;
mod users_list;

pub use fetch::{FetchController, FetchTicket};
pub use user_details::UserDetailsController;
pub use users_list::UsersListController;
