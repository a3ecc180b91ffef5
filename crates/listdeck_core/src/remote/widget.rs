//! Fetch trigger with an in-flight guard.

use super::random_user::{RandomUser, UserSource};
use log::{info, warn};
use std::sync::atomic::{AtomicBool, Ordering};

pub const LOADING_MESSAGE: &str = "Loading...";
pub const SUCCESS_MESSAGE: &str = "User loaded successfully.";
pub const FAILURE_MESSAGE: &str = "Failed to load user. Please try again.";

/// The four display fields of a loaded profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserCard {
    pub full_name: String,
    pub email: String,
    pub location: String,
    pub avatar_url: String,
}

impl From<RandomUser> for UserCard {
    fn from(user: RandomUser) -> Self {
        Self {
            full_name: format!("{} {} {}", user.title, user.first, user.last),
            email: user.email,
            location: format!("{}, {}", user.city, user.country),
            avatar_url: user.avatar_url,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    Loaded(UserCard),
    /// Any network, status or decode failure.
    Failed,
    /// A request was already in flight; nothing was sent.
    Ignored,
}

impl FetchOutcome {
    /// Status line to show for this outcome.
    pub fn status_message(&self) -> Option<&'static str> {
        match self {
            Self::Loaded(_) => Some(SUCCESS_MESSAGE),
            Self::Failed => Some(FAILURE_MESSAGE),
            Self::Ignored => None,
        }
    }
}

/// Single-request fetch widget.
///
/// While a request runs the widget reports itself disabled and ignores new
/// triggers. It is re-enabled on every exit path.
pub struct RandomUserWidget<U> {
    source: U,
    in_flight: AtomicBool,
}

struct InFlightGuard<'a>(&'a AtomicBool);

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl<U: UserSource> RandomUserWidget<U> {
    pub fn new(source: U) -> Self {
        Self {
            source,
            in_flight: AtomicBool::new(false),
        }
    }

    /// Whether the trigger control is currently enabled.
    pub fn is_enabled(&self) -> bool {
        !self.in_flight.load(Ordering::Acquire)
    }

    pub fn trigger(&self) -> FetchOutcome {
        if self
            .in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            info!("event=user_fetch module=remote status=ignored reason=in_flight");
            return FetchOutcome::Ignored;
        }
        let _guard = InFlightGuard(&self.in_flight);

        match self.source.fetch_user() {
            Ok(user) => {
                info!("event=user_fetch module=remote status=ok");
                FetchOutcome::Loaded(UserCard::from(user))
            }
            Err(err) => {
                warn!("event=user_fetch module=remote status=error error={err}");
                FetchOutcome::Failed
            }
        }
    }

    pub fn source(&self) -> &U {
        &self.source
    }
}
