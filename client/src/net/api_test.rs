#![cfg(not(feature = "hydrate"))]

use super::*;
use futures::executor::block_on;

#[test]
fn fetch_activities_is_unavailable_outside_browser() {
    assert_eq!(block_on(HttpApi.fetch_activities()), Err(ApiError::Unavailable));
}

#[test]
fn signup_is_unavailable_outside_browser() {
    assert_eq!(block_on(HttpApi.signup("Chess Club", "a@mergington.edu")), Err(ApiError::Unavailable));
}

#[test]
fn unregister_is_unavailable_outside_browser() {
    assert_eq!(
        block_on(HttpApi.unregister("Chess Club", "a@mergington.edu")),
        Err(ApiError::Unavailable)
    );
}
