//! REST API helpers for communicating with the activity server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): every call returns [`ApiError::Unavailable`] since
//! these endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>`; nothing here panics or logs.
//! Turning an error into banner text is the caller's job.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use contract::{ActivityMap, ApiError};

/// The three operations of the activity contract.
///
/// Implemented by [`HttpApi`] for the browser and by in-memory fakes in
/// tests. Futures are not `Send`; everything runs on the browser's single
/// thread.
#[allow(async_fn_in_trait)]
pub trait ActivitiesApi {
    /// `GET /activities`.
    async fn fetch_activities(&self) -> Result<ActivityMap, ApiError>;

    /// `POST /activities/{activity}/signup?email=..`; yields the server's
    /// confirmation text.
    async fn signup(&self, activity: &str, email: &str) -> Result<String, ApiError>;

    /// `DELETE /activities/{activity}/unregister?email=..`; yields the
    /// server's confirmation text.
    async fn unregister(&self, activity: &str, email: &str) -> Result<String, ApiError>;
}

/// Same-origin HTTP transport.
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpApi;

impl ActivitiesApi for HttpApi {
    async fn fetch_activities(&self) -> Result<ActivityMap, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let (status, body) = send(gloo_net::http::Request::get(contract::ACTIVITIES_PATH)).await?;
            contract::parse_activities(status, &body)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(ApiError::Unavailable)
        }
    }

    async fn signup(&self, activity: &str, email: &str) -> Result<String, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let url = contract::signup_path(activity, email);
            let (status, body) = send(gloo_net::http::Request::post(&url)).await?;
            contract::classify_response(status, &body)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (activity, email);
            Err(ApiError::Unavailable)
        }
    }

    async fn unregister(&self, activity: &str, email: &str) -> Result<String, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let url = contract::unregister_path(activity, email);
            let (status, body) = send(gloo_net::http::Request::delete(&url)).await?;
            contract::classify_response(status, &body)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (activity, email);
            Err(ApiError::Unavailable)
        }
    }
}

/// Send a request and read the whole body as text.
#[cfg(feature = "hydrate")]
async fn send(request: gloo_net::http::RequestBuilder) -> Result<(u16, String), ApiError> {
    let resp = request.send().await.map_err(transport_error)?;
    let status = resp.status();
    let body = resp.text().await.map_err(transport_error)?;
    Ok((status, body))
}

#[cfg(feature = "hydrate")]
fn transport_error(e: gloo_net::Error) -> ApiError {
    ApiError::Transport(e.to_string())
}
