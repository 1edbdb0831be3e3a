use std::env;
use std::time::Duration;

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8001";
const DEFAULT_DEMO_TIMEOUT_SECS: u64 = 10;

/// Runtime configuration, read from the environment (populated by `.env` or
/// the bundled config at startup).
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Base URL of the browser-automation backend.
    pub backend_url: String,
    /// Upper bound on a demonstration request; the caller falls back to the
    /// canned-answer path when it elapses.
    pub demo_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            demo_timeout: Duration::from_secs(DEFAULT_DEMO_TIMEOUT_SECS),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let backend_url = env::var("BACKEND_URL")
            .ok()
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_BACKEND_URL.to_string());

        let demo_timeout = env::var("DEMO_TIMEOUT_SECS")
            .ok()
            .and_then(|raw| raw.parse::<u64>().ok())
            .map(Duration::from_secs)
            .unwrap_or(Duration::from_secs(DEFAULT_DEMO_TIMEOUT_SECS));

        Self {
            backend_url,
            demo_timeout,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.backend_url, "http://localhost:8001");
        assert_eq!(config.demo_timeout, Duration::from_secs(10));
    }
}
