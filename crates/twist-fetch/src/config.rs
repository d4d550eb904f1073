//! Fetcher configuration.

use crate::FetchError;
use std::time::Duration;

/// Default word service.
pub const DEFAULT_BASE_URL: &str = "https://pie-healthy-swift.glitch.me";

/// Endpoint returning one token.
pub const DEFAULT_PATH: &str = "/word";

/// The word service answers 403 to non-browser agents.
pub const BROWSER_USER_AGENT: &str = concat!(
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) ",
    "AppleWebKit/537.36 (KHTML, like Gecko) Chrome/132.0.0.0 Safari/537.36"
);

/// Default timeout for HTTP requests.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Where and how to fetch an external token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchConfig {
    /// Scheme and host of the word service.
    pub base_url: String,
    /// Request path, joined to `base_url`.
    pub path: String,
    /// `User-Agent` header sent with the request.
    pub user_agent: String,
    /// Whole-request timeout.
    pub timeout: Duration,
    /// Honour `HTTP_PROXY`/`HTTPS_PROXY` from the environment.
    pub env_proxy: bool,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            path: DEFAULT_PATH.to_string(),
            user_agent: BROWSER_USER_AGENT.to_string(),
            timeout: DEFAULT_TIMEOUT,
            env_proxy: true,
        }
    }
}

impl FetchConfig {
    /// Create a new configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults overridden by `TWIST_API_URL`, `TWIST_API_PATH`,
    /// `TWIST_USER_AGENT` and `TWIST_TIMEOUT_SECS`.
    pub fn from_env() -> Result<Self, FetchError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, FetchError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(url) = lookup("TWIST_API_URL") {
            config = config.base_url(url);
        }
        if let Some(path) = lookup("TWIST_API_PATH") {
            config = config.path(path);
        }
        if let Some(agent) = lookup("TWIST_USER_AGENT") {
            config = config.user_agent(agent);
        }
        if let Some(secs) = lookup("TWIST_TIMEOUT_SECS") {
            let secs: u64 = secs.trim().parse().map_err(|_| {
                FetchError::Config(format!(
                    "TWIST_TIMEOUT_SECS must be a whole number of seconds, got {secs:?}"
                ))
            })?;
            config = config.timeout(Duration::from_secs(secs));
        }
        Ok(config)
    }

    /// Set the service base URL.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the request path.
    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    /// Set the user agent.
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = agent.into();
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Enable or disable proxies taken from the environment.
    pub fn env_proxy(mut self, enabled: bool) -> Self {
        self.env_proxy = enabled;
        self
    }

    /// The full request URL.
    pub fn url(&self) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = self.path.trim_start_matches('/');
        format!("{base}/{path}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_config() {
        let config = FetchConfig::default();
        assert_eq!(config.url(), "https://pie-healthy-swift.glitch.me/word");
        assert!(config.user_agent.starts_with("Mozilla/5.0"));
        assert_eq!(config.timeout, DEFAULT_TIMEOUT);
    }

    #[test]
    fn test_url_joining() {
        let config = FetchConfig::new().base_url("http://localhost:8080/").path("token");
        assert_eq!(config.url(), "http://localhost:8080/token");
    }

    #[test]
    fn test_env_overrides() {
        let vars: HashMap<&str, &str> = [
            ("TWIST_API_URL", "http://127.0.0.1:9000"),
            ("TWIST_TIMEOUT_SECS", " 5 "),
        ]
        .into_iter()
        .collect();

        let config = FetchConfig::from_lookup(|k| vars.get(k).map(|v| v.to_string())).unwrap();
        assert_eq!(config.url(), "http://127.0.0.1:9000/word");
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.user_agent, BROWSER_USER_AGENT);
    }

    #[test]
    fn test_user_agent_override() {
        let config = FetchConfig::from_lookup(|k| {
            (k == "TWIST_USER_AGENT").then(|| "twist-test/1.0".to_string())
        })
        .unwrap();
        assert_eq!(config, FetchConfig::new().user_agent("twist-test/1.0"));
    }

    #[test]
    fn test_bad_timeout() {
        let result =
            FetchConfig::from_lookup(|k| (k == "TWIST_TIMEOUT_SECS").then(|| "soon".to_string()));
        assert!(matches!(result, Err(FetchError::Config(_))));
    }
}
