use axum::Router;
use axum::routing::{delete, get, post};
use serde_json::json;

use super::*;
use crate::config::HostConfig;
use crate::routes::api_routes;

// =============================================================
// URL helpers
// =============================================================

#[test]
fn action_path_reencodes_activity_name() {
    assert_eq!(action_path("Chess Club", "signup"), "/activities/Chess%20Club/signup");
    assert_eq!(action_path("Art/Craft", "unregister"), "/activities/Art%2FCraft/unregister");
}

#[test]
fn upstream_url_appends_raw_query() {
    assert_eq!(
        upstream_url("http://api", "/activities/X/signup", Some("email=a%40b")),
        "http://api/activities/X/signup?email=a%40b"
    );
}

#[test]
fn upstream_url_skips_missing_or_empty_query() {
    assert_eq!(upstream_url("http://api", "/activities", None), "http://api/activities");
    assert_eq!(upstream_url("http://api", "/activities", Some("")), "http://api/activities");
}

#[test]
fn proxy_error_maps_to_bad_gateway() {
    let err = offline_reqwest_error();
    let response = ProxyError::Upstream(err).into_response();
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
}

/// A reqwest error produced without any network I/O.
fn offline_reqwest_error() -> reqwest::Error {
    reqwest::Client::new().get("not a url").build().unwrap_err()
}

// =============================================================
// Live pass-through
// =============================================================

async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("serve");
    });
    format!("http://{addr}")
}

fn upstream_stub() -> Router {
    Router::new()
        .route(
            "/activities",
            get(|| async {
                Json(json!({
                    "Chess Club": {
                        "description": "Learn strategies",
                        "schedule": "Fridays",
                        "max_participants": 10,
                        "participants": ["a@mergington.edu"]
                    }
                }))
            }),
        )
        .route(
            "/activities/{name}/signup",
            post(|Path(name): Path<String>, RawQuery(query): RawQuery| async move {
                Json(json!({ "message": format!("{name}|{}", query.unwrap_or_default()) }))
            }),
        )
        .route(
            "/activities/{name}/unregister",
            delete(|| async { (StatusCode::NOT_FOUND, Json(json!({ "detail": "Participant not found" }))) }),
        )
}

async fn host_for(upstream: &str) -> String {
    let config = HostConfig { port: 0, activities_api_url: upstream.to_owned(), upstream_timeout_secs: 5 };
    let state = AppState::new(&config).expect("state");
    serve(api_routes(state)).await
}

#[tokio::test]
async fn list_relays_upstream_body() {
    let upstream = serve(upstream_stub()).await;
    let host = host_for(&upstream).await;

    let resp = reqwest::get(format!("{host}/activities")).await.expect("request");
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers().get(header::CONTENT_TYPE).and_then(|v| v.to_str().ok()),
        Some("application/json")
    );
    let activities = contract::parse_activities(200, &resp.text().await.expect("body")).expect("activities");
    assert_eq!(activities.get("Chess Club").expect("chess").availability_label(), "9 spots left");
}

#[tokio::test]
async fn signup_forwards_decoded_name_and_raw_query() {
    let upstream = serve(upstream_stub()).await;
    let host = host_for(&upstream).await;

    let url = format!("{host}{}", contract::signup_path("Chess Club", "a+b@mergington.edu"));
    let resp = reqwest::Client::new().post(url).send().await.expect("request");
    let status = resp.status().as_u16();
    let body = resp.text().await.expect("body");

    assert_eq!(
        contract::classify_response(status, &body),
        Ok("Chess Club|email=a%2Bb%40mergington.edu".to_owned())
    );
}

#[tokio::test]
async fn unregister_relays_upstream_rejection() {
    let upstream = serve(upstream_stub()).await;
    let host = host_for(&upstream).await;

    let url = format!("{host}{}", contract::unregister_path("Chess Club", "ghost@mergington.edu"));
    let resp = reqwest::Client::new().delete(url).send().await.expect("request");
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let err = contract::classify_response(404, &resp.text().await.expect("body")).unwrap_err();
    assert_eq!(err.rejection_text(), Some("Participant not found"));
}

#[tokio::test]
async fn unreachable_upstream_yields_bad_gateway_detail() {
    let closed = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
    let dead = format!("http://{}", closed.local_addr().expect("addr"));
    drop(closed);
    let host = host_for(&dead).await;

    let resp = reqwest::get(format!("{host}/activities")).await.expect("request");
    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
    let err = contract::parse_activities(502, &resp.text().await.expect("body")).unwrap_err();
    assert_eq!(err.rejection_text(), Some(UPSTREAM_UNAVAILABLE));
}

#[tokio::test]
async fn healthz_is_ok() {
    let host = host_for("http://127.0.0.1:9").await;
    let resp = reqwest::get(format!("{host}/healthz")).await.expect("request");
    assert_eq!(resp.status(), StatusCode::OK);
}
