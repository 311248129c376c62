//! User-triggered board operations: load, register, unregister.
//!
//! DESIGN
//! ======
//! Each operation awaits the [`ActivitiesApi`] and reports its result
//! through a [`BoardSink`], which the page backs with its context signals.
//! Nothing is held across an `await` except the api and sink references,
//! so overlapping operations resolve independently (last write wins).
//!
//! ERROR HANDLING
//! ==============
//! Server rejections surface the server's `detail`. Transport and decode
//! failures surface a fixed per-operation message and are logged to the
//! console. No failure is retried.

#[cfg(test)]
#[path = "board_actions_test.rs"]
mod board_actions_test;

use contract::ApiError;

use crate::net::api::ActivitiesApi;
use crate::state::board::BoardState;
use crate::state::message::Notice;

pub const EMPTY_EMAIL_MESSAGE: &str = "Please enter a valid email address";
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load activities. Please try again later.";
pub const SIGNUP_FAILED_MESSAGE: &str = "Failed to sign up. Please try again.";
pub const UNREGISTER_FAILED_MESSAGE: &str = "Failed to unregister. Please try again.";

/// Where operation results land.
pub trait BoardSink {
    /// Apply a mutation to the listing state.
    fn update_board(&self, f: impl FnOnce(&mut BoardState));

    /// Show a banner message (and start its expiry).
    fn notify(&self, notice: Notice);
}

/// Trim the input; an empty result is rejected before any request is made.
///
/// # Errors
///
/// Returns [`EMPTY_EMAIL_MESSAGE`] for empty or whitespace-only input.
pub fn validate_email(raw: &str) -> Result<String, &'static str> {
    let email = raw.trim();
    if email.is_empty() {
        return Err(EMPTY_EMAIL_MESSAGE);
    }
    Ok(email.to_owned())
}

/// Fetch the whole collection and replace the listing with it.
pub async fn refresh<A: ActivitiesApi, S: BoardSink>(api: &A, sink: &S) {
    match api.fetch_activities().await {
        Ok(activities) => sink.update_board(|board| board.replace_activities(activities)),
        Err(e) => {
            leptos::logging::error!("Error fetching activities: {e}");
            sink.update_board(BoardState::mark_load_failed);
        }
    }
}

/// Register `raw_email` for `activity`. On success the form closes and the
/// listing is reloaded; on failure the form stays open for correction.
///
/// Returns whether the server accepted the registration.
pub async fn register<A: ActivitiesApi, S: BoardSink>(api: &A, sink: &S, activity: &str, raw_email: &str) -> bool {
    let email = match validate_email(raw_email) {
        Ok(email) => email,
        Err(message) => {
            sink.notify(Notice::error(message));
            return false;
        }
    };

    match api.signup(activity, &email).await {
        Ok(message) => {
            sink.notify(Notice::success(message));
            sink.update_board(|board| board.complete_registration(activity));
            refresh(api, sink).await;
            true
        }
        Err(e) => {
            sink.notify(failure_notice(&e, SIGNUP_FAILED_MESSAGE, "Error signing up"));
            false
        }
    }
}

/// Remove `email` from `activity`, reloading the listing on success.
///
/// Returns whether the server accepted the removal.
pub async fn unregister<A: ActivitiesApi, S: BoardSink>(api: &A, sink: &S, activity: &str, email: &str) -> bool {
    match api.unregister(activity, email).await {
        Ok(message) => {
            sink.notify(Notice::success(message));
            refresh(api, sink).await;
            true
        }
        Err(e) => {
            sink.notify(failure_notice(&e, UNREGISTER_FAILED_MESSAGE, "Error unregistering"));
            false
        }
    }
}

fn failure_notice(err: &ApiError, fallback: &str, context: &str) -> Notice {
    if let Some(text) = err.rejection_text() {
        return Notice::error(text);
    }
    leptos::logging::error!("{context}: {err}");
    Notice::error(fallback)
}
