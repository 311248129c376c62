//! Host configuration parsed from environment variables.

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_ACTIVITIES_API_URL: &str = "http://127.0.0.1:8000";
pub const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid {var}: {value}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub port: u16,
    /// Base URL of the activity API, without trailing slash.
    pub activities_api_url: String,
    pub upstream_timeout_secs: u64,
}

impl HostConfig {
    /// Build typed host config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `ACTIVITIES_API_URL`: default `http://127.0.0.1:8000`
    /// - `UPSTREAM_TIMEOUT_SECS`: default 10
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| ConfigError::Invalid { var: "PORT", value: raw })?,
            None => DEFAULT_PORT,
        };

        let activities_api_url = lookup("ACTIVITIES_API_URL")
            .unwrap_or_else(|| DEFAULT_ACTIVITIES_API_URL.to_string())
            .trim()
            .trim_end_matches('/')
            .to_string();
        if !activities_api_url.starts_with("http://") && !activities_api_url.starts_with("https://") {
            return Err(ConfigError::Invalid { var: "ACTIVITIES_API_URL", value: activities_api_url });
        }

        let upstream_timeout_secs = lookup("UPSTREAM_TIMEOUT_SECS")
            .and_then(|v| v.trim().parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .unwrap_or(DEFAULT_UPSTREAM_TIMEOUT_SECS);

        Ok(Self { port, activities_api_url, upstream_timeout_secs })
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
