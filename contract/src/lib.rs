//! Shared HTTP contract for the activity signup API.
//!
//! This crate owns the wire representation used by `client`, `server` and
//! `cli`: activity payloads, message/error bodies, endpoint paths, and the
//! rule that turns a status code plus body into either a confirmation
//! message or an [`ApiError`].
//!
//! The HTTP status is the only success discriminator. Bodies are JSON in
//! both directions; a body that does not parse is reported as
//! [`ApiError::Decode`] regardless of status.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// Collection endpoint; also the prefix for the per-activity endpoints.
pub const ACTIVITIES_PATH: &str = "/activities";

/// Shown when the server rejects a request without a usable `detail`.
pub const GENERIC_ERROR_MESSAGE: &str = "An error occurred";

/// Shown when the server accepts a request but omits `message`.
pub const GENERIC_SUCCESS_MESSAGE: &str = "Request completed";

/// Error returned by [`classify_response`] and [`parse_activities`], and by
/// every transport built on top of them.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("request failed: {0}")]
    Transport(String),
    /// The response body was not the JSON shape the endpoint promises.
    #[error("unexpected response body: {0}")]
    Decode(String),
    /// The server answered with a non-2xx status.
    #[error("server rejected request ({status}): {}", .detail.as_deref().unwrap_or(GENERIC_ERROR_MESSAGE))]
    Rejected { status: u16, detail: Option<String> },
    /// No HTTP transport exists in this build (server-side rendering).
    #[error("not available outside the browser")]
    Unavailable,
}

impl ApiError {
    /// User-facing text for a server rejection: the server's `detail`, or
    /// [`GENERIC_ERROR_MESSAGE`]. `None` for failures below the HTTP layer.
    #[must_use]
    pub fn rejection_text(&self) -> Option<&str> {
        match self {
            Self::Rejected { detail, .. } => Some(detail.as_deref().unwrap_or(GENERIC_ERROR_MESSAGE)),
            _ => None,
        }
    }
}

// =============================================================================
// ACTIVITY
// =============================================================================

/// One activity as served by `GET /activities`. The name is the map key and
/// lives in [`ActivityMap`], not here.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    /// Registered emails, in server display order.
    #[serde(default)]
    pub participants: Vec<String>,
}

impl Activity {
    /// Capacity minus registered count. Negative when the server reports an
    /// over-subscribed roster; the client does not enforce capacity.
    #[must_use]
    pub fn spots_left(&self) -> i64 {
        let taken = i64::try_from(self.participants.len()).unwrap_or(i64::MAX);
        i64::from(self.max_participants).saturating_sub(taken)
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.spots_left() <= 0
    }

    /// Availability line for display. Never advertises free spots when
    /// there are none.
    #[must_use]
    pub fn availability_label(&self) -> String {
        match self.spots_left() {
            n if n > 0 => format!("{n} spots left"),
            _ => "No spots left".to_owned(),
        }
    }
}

/// Activities keyed by name, kept in the order the server emitted them.
///
/// A plain `HashMap` would shuffle the cards on every reload, so this wraps
/// an ordered vector and implements the map (de)serialization by hand.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ActivityMap(Vec<(String, Activity)>);

impl ActivityMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Insert or replace. A replaced entry keeps its original position.
    pub fn insert(&mut self, name: String, activity: Activity) {
        match self.0.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, slot)) => *slot = activity,
            None => self.0.push((name, activity)),
        }
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Activity> {
        self.0.iter().find(|(n, _)| n == name).map(|(_, a)| a)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Activity)> {
        self.0.iter().map(|(n, a)| (n.as_str(), a))
    }

    #[must_use]
    pub fn into_entries(self) -> Vec<(String, Activity)> {
        self.0
    }
}

impl FromIterator<(String, Activity)> for ActivityMap {
    fn from_iter<I: IntoIterator<Item = (String, Activity)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (name, activity) in iter {
            map.insert(name, activity);
        }
        map
    }
}

impl Serialize for ActivityMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, activity) in &self.0 {
            map.serialize_entry(name, activity)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for ActivityMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct OrderedVisitor;

        impl<'de> Visitor<'de> for OrderedVisitor {
            type Value = ActivityMap;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of activity name to activity")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut map = ActivityMap(Vec::with_capacity(access.size_hint().unwrap_or(0)));
                while let Some((name, activity)) = access.next_entry::<String, Activity>()? {
                    map.insert(name, activity);
                }
                Ok(map)
            }
        }

        deserializer.deserialize_map(OrderedVisitor)
    }
}

// =============================================================================
// RESPONSE BODIES
// =============================================================================

/// Success body of the signup and unregister endpoints.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageBody {
    #[serde(default)]
    pub message: Option<String>,
}

/// Failure body. `detail` is usually a string but validation failures send
/// a list of objects, so it is kept as raw JSON.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<Value>,
}

impl ErrorBody {
    #[must_use]
    pub fn new(detail: impl Into<String>) -> Self {
        Self { detail: Some(Value::String(detail.into())) }
    }

    /// The detail when it is a non-empty string.
    #[must_use]
    pub fn detail_text(&self) -> Option<String> {
        match &self.detail {
            Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
            _ => None,
        }
    }
}

// =============================================================================
// ENDPOINTS
// =============================================================================

/// `POST` target for registering `email` in `activity`.
#[must_use]
pub fn signup_path(activity: &str, email: &str) -> String {
    activity_action_path(activity, "signup", email)
}

/// `DELETE` target for removing `email` from `activity`.
#[must_use]
pub fn unregister_path(activity: &str, email: &str) -> String {
    activity_action_path(activity, "unregister", email)
}

fn activity_action_path(activity: &str, action: &str, email: &str) -> String {
    format!(
        "{ACTIVITIES_PATH}/{}/{action}?email={}",
        urlencoding::encode(activity),
        urlencoding::encode(email)
    )
}

#[must_use]
pub fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Interpret a signup/unregister response.
///
/// # Errors
///
/// [`ApiError::Rejected`] for a non-2xx status with a JSON body,
/// [`ApiError::Decode`] when the body is not JSON of the expected shape.
pub fn classify_response(status: u16, body: &str) -> Result<String, ApiError> {
    if is_success(status) {
        let parsed: MessageBody = serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(parsed.message.unwrap_or_else(|| GENERIC_SUCCESS_MESSAGE.to_owned()))
    } else {
        Err(rejection(status, body)?)
    }
}

/// Interpret a `GET /activities` response.
///
/// # Errors
///
/// Same classification as [`classify_response`].
pub fn parse_activities(status: u16, body: &str) -> Result<ActivityMap, ApiError> {
    if is_success(status) {
        serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
    } else {
        Err(rejection(status, body)?)
    }
}

fn rejection(status: u16, body: &str) -> Result<ApiError, ApiError> {
    let parsed: ErrorBody = serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))?;
    Ok(ApiError::Rejected { status, detail: parsed.detail_text() })
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;
