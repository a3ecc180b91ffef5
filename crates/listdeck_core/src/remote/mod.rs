//! Random-user fetch widget.
//!
//! # Responsibility
//! - Fetch one user profile from the public random-user API.
//! - Project it into display fields, or a fixed failure message.
//!
//! # Invariants
//! - One trigger issues at most one request; there is no retry.
//! - Triggers while a request is in flight are ignored.

mod random_user;
mod widget;

pub use random_user::{
    decode_random_user, FetchError, FetchResult, RandomUser, RandomUserClient, UserSource,
    DEFAULT_ENDPOINT, DEFAULT_TIMEOUT,
};
pub use widget::{
    FetchOutcome, RandomUserWidget, UserCard, FAILURE_MESSAGE, LOADING_MESSAGE, SUCCESS_MESSAGE,
};
