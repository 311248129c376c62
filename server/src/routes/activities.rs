//! Activity API pass-through.
//!
//! The host owns no activity logic. Each handler re-issues the browser's
//! request against `ACTIVITIES_API_URL` and relays status, content type and
//! body unchanged, so the client sees the upstream contract verbatim.
//!
//! ERROR HANDLING
//! ==============
//! Only an unreachable upstream is answered locally: `502` with a JSON
//! `detail`, which the client shows like any other rejection.

use axum::Json;
use axum::extract::{Path, RawQuery, State};
use axum::http::{Method, StatusCode, header};
use axum::response::{IntoResponse, Response};
use contract::{ACTIVITIES_PATH, ErrorBody};

use crate::state::AppState;

pub const UPSTREAM_UNAVAILABLE: &str = "activity service unavailable";

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("upstream request failed: {0}")]
    Upstream(#[from] reqwest::Error),
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        tracing::warn!(error = %self, "activity upstream unavailable");
        (StatusCode::BAD_GATEWAY, Json(ErrorBody::new(UPSTREAM_UNAVAILABLE))).into_response()
    }
}

/// `GET /activities`
pub async fn list(State(state): State<AppState>) -> Result<Response, ProxyError> {
    forward(&state, Method::GET, ACTIVITIES_PATH.to_owned(), None).await
}

/// `POST /activities/{name}/signup?email=..`
pub async fn signup(
    State(state): State<AppState>,
    Path(name): Path<String>,
    RawQuery(query): RawQuery,
) -> Result<Response, ProxyError> {
    forward(&state, Method::POST, action_path(&name, "signup"), query).await
}

/// `DELETE /activities/{name}/unregister?email=..`
pub async fn unregister(
    State(state): State<AppState>,
    Path(name): Path<String>,
    RawQuery(query): RawQuery,
) -> Result<Response, ProxyError> {
    forward(&state, Method::DELETE, action_path(&name, "unregister"), query).await
}

/// Upstream path for a per-activity action. `name` arrives decoded from the
/// route and is re-encoded here.
fn action_path(name: &str, action: &str) -> String {
    format!("{ACTIVITIES_PATH}/{}/{action}", urlencoding::encode(name))
}

fn upstream_url(base: &str, path: &str, query: Option<&str>) -> String {
    match query {
        Some(q) if !q.is_empty() => format!("{base}{path}?{q}"),
        _ => format!("{base}{path}"),
    }
}

async fn forward(state: &AppState, method: Method, path: String, query: Option<String>) -> Result<Response, ProxyError> {
    let url = upstream_url(&state.upstream, &path, query.as_deref());
    tracing::debug!(%method, %url, "forwarding activity request");

    let upstream = state.http.request(method, &url).send().await?;
    let status = upstream.status();
    let content_type = upstream.headers().get(header::CONTENT_TYPE).cloned();
    let body = upstream.bytes().await?;

    if status.is_server_error() {
        tracing::warn!(%status, %path, "activity upstream returned server error");
    }

    let mut response = (status, body).into_response();
    if let Some(content_type) = content_type {
        response.headers_mut().insert(header::CONTENT_TYPE, content_type);
    }
    Ok(response)
}

#[cfg(test)]
#[path = "activities_test.rs"]
mod tests;
