use std::time::Duration;

use reqwest::Url;

use crate::error::{LeagueError, Result};

pub const API_URL_ENV: &str = "TT_LEAGUE_API_URL";
pub const TIMEOUT_ENV: &str = "TT_LEAGUE_TIMEOUT_SECS";
pub const CACHE_TTL_ENV: &str = "TT_LEAGUE_CACHE_TTL_SECS";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
const DEFAULT_CACHE_CAPACITY: u64 = 256;
const DEFAULT_USER_AGENT: &str = concat!("tt-league/", env!("CARGO_PKG_VERSION"));

/// Connection and cache settings for a [`LeagueClient`](crate::LeagueClient).
#[derive(Debug, Clone)]
pub struct LeagueConfig {
    pub base_url: Url,
    pub timeout: Duration,
    /// `None` keeps cached responses until they are invalidated.
    pub cache_ttl: Option<Duration>,
    pub cache_capacity: u64,
    pub user_agent: String,
}

impl LeagueConfig {
    /// Validate `base_url` and fill in defaults for everything else.
    pub fn new(base_url: &str) -> Result<Self> {
        let invalid = |reason: &str| LeagueError::InvalidUrl {
            url: base_url.to_string(),
            reason: reason.to_string(),
        };
        let url = Url::parse(base_url.trim()).map_err(|e| invalid(&e.to_string()))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(invalid("scheme must be http or https"));
        }
        if url.cannot_be_a_base() {
            return Err(invalid("url cannot carry a path"));
        }

        Ok(Self {
            base_url: url,
            timeout: DEFAULT_TIMEOUT,
            cache_ttl: None,
            cache_capacity: DEFAULT_CACHE_CAPACITY,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        })
    }

    /// Build a config from `TT_LEAGUE_API_URL` and the optional
    /// `TT_LEAGUE_TIMEOUT_SECS` / `TT_LEAGUE_CACHE_TTL_SECS` overrides.
    pub fn from_env() -> Result<Self> {
        let base_url = std::env::var(API_URL_ENV)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .ok_or(LeagueError::MissingConfig { key: API_URL_ENV })?;
        let mut config = Self::new(&base_url)?;
        if let Some(secs) = read_secs(TIMEOUT_ENV)? {
            config.timeout = secs;
        }
        config.cache_ttl = read_secs(CACHE_TTL_ENV)?;
        Ok(config)
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_cache_ttl(mut self, ttl: Duration) -> Self {
        self.cache_ttl = Some(ttl);
        self
    }

    pub fn with_cache_capacity(mut self, capacity: u64) -> Self {
        self.cache_capacity = capacity;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

fn read_secs(key: &'static str) -> Result<Option<Duration>> {
    match std::env::var(key) {
        Ok(value) if !value.trim().is_empty() => parse_secs(key, &value).map(Some),
        _ => Ok(None),
    }
}

/// A positive whole number of seconds; 0 would expire every request at once.
fn parse_secs(key: &'static str, value: &str) -> Result<Duration> {
    match value.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
        _ => Err(LeagueError::InvalidConfig {
            key,
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_uses_defaults() {
        let config = LeagueConfig::new("https://league.example.com/api").unwrap();

        assert_eq!(config.base_url.as_str(), "https://league.example.com/api");
        assert_eq!(config.timeout, DEFAULT_TIMEOUT);
        assert_eq!(config.cache_ttl, None);
        assert_eq!(config.cache_capacity, DEFAULT_CACHE_CAPACITY);
        assert!(config.user_agent.starts_with("tt-league/"));
    }

    #[test]
    fn test_new_rejects_bad_urls() {
        assert!(matches!(
            LeagueConfig::new("not a url"),
            Err(LeagueError::InvalidUrl { .. })
        ));
        assert!(matches!(
            LeagueConfig::new("ftp://league.example.com"),
            Err(LeagueError::InvalidUrl { .. })
        ));
        assert!(matches!(
            LeagueConfig::new("mailto:someone@example.com"),
            Err(LeagueError::InvalidUrl { .. })
        ));
    }

    #[test]
    fn test_parse_secs() {
        assert_eq!(parse_secs(TIMEOUT_ENV, " 30 ").unwrap(), Duration::from_secs(30));
        assert!(matches!(
            parse_secs(TIMEOUT_ENV, "0"),
            Err(LeagueError::InvalidConfig { key: TIMEOUT_ENV, .. })
        ));
        assert!(matches!(
            parse_secs(CACHE_TTL_ENV, "soon"),
            Err(LeagueError::InvalidConfig { key: CACHE_TTL_ENV, .. })
        ));
    }

    #[test]
    fn test_missing_setting_message() {
        let err = LeagueError::MissingConfig { key: API_URL_ENV };

        assert_eq!(err.to_string(), "missing required setting TT_LEAGUE_API_URL");
    }

    #[test]
    fn test_builder_overrides() {
        let config = LeagueConfig::new("http://localhost:5000")
            .unwrap()
            .with_timeout(Duration::from_secs(2))
            .with_cache_ttl(Duration::from_secs(60))
            .with_cache_capacity(8)
            .with_user_agent("scoreboard");

        assert_eq!(config.timeout, Duration::from_secs(2));
        assert_eq!(config.cache_ttl, Some(Duration::from_secs(60)));
        assert_eq!(config.cache_capacity, 8);
        assert_eq!(config.user_agent, "scoreboard");
    }
}
