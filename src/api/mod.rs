pub(crate) mod fixtures;
pub(crate) mod leaderboard;
pub(crate) mod leagues;
pub(crate) mod results;

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache;
use reqwest::{Method, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::config::LeagueConfig;
use crate::error::{LeagueError, Result};

/// Shared HTTP plumbing: URL building, cached GETs and JSON writes.
///
/// GET bodies are cached by full URL. Concurrent requests for the same URL
/// share one in-flight fetch; failed fetches are not cached.
#[derive(Clone)]
pub(crate) struct Transport {
    http: reqwest::Client,
    base_url: Url,
    timeout: Duration,
    cache: Cache<String, Arc<String>>,
}

impl Transport {
    pub(crate) fn new(http: reqwest::Client, config: &LeagueConfig) -> Self {
        let mut builder = Cache::builder().max_capacity(config.cache_capacity);
        if let Some(ttl) = config.cache_ttl {
            builder = builder.time_to_live(ttl);
        }
        Self {
            http,
            base_url: config.base_url.clone(),
            timeout: config.timeout,
            cache: builder.build(),
        }
    }

    /// `base_url` + `/segments...` + `?query`, with the query omitted when empty.
    pub(crate) fn endpoint(&self, segments: &[&str], query: &[(&str, String)]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| LeagueError::InvalidUrl {
                url: self.base_url.to_string(),
                reason: "url cannot carry a path".to_string(),
            })?
            .pop_if_empty()
            .extend(segments);
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }
        Ok(url)
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        let key = url.to_string();
        let body = self
            .cache
            .try_get_with(key.clone(), self.fetch_text(url))
            .await
            .map_err(|e| Arc::try_unwrap(e).unwrap_or_else(LeagueError::Shared))?;
        match serde_json::from_str(&body) {
            Ok(value) => Ok(value),
            Err(source) => {
                self.cache.invalidate(&key).await;
                Err(LeagueError::Decode { url: key, source })
            }
        }
    }

    /// Send `body` as JSON. Every successful write drops all cached responses.
    pub(crate) async fn send_json<B: Serialize + ?Sized>(
        &self,
        method: Method,
        url: Url,
        body: &B,
    ) -> Result<()> {
        let url_str = url.to_string();
        debug!(%method, url = %url_str, "sending request");
        let response = self
            .http
            .request(method, url)
            .timeout(self.timeout)
            .json(body)
            .send()
            .await
            .map_err(|source| LeagueError::Http {
                url: url_str.clone(),
                source,
            })?;
        check_status(&url_str, response.status())?;
        self.invalidate_all();
        Ok(())
    }

    pub(crate) fn invalidate_all(&self) {
        self.cache.invalidate_all();
        debug!("invalidated cached responses");
    }

    async fn fetch_text(&self, url: Url) -> Result<Arc<String>> {
        let url_str = url.to_string();
        debug!(url = %url_str, "fetching");
        let response = self
            .http
            .get(url)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|source| LeagueError::Http {
                url: url_str.clone(),
                source,
            })?;
        check_status(&url_str, response.status())?;
        response
            .text()
            .await
            .map(Arc::new)
            .map_err(|source| LeagueError::ResponseBody {
                url: url_str,
                source,
            })
    }
}

fn check_status(url: &str, status: reqwest::StatusCode) -> Result<()> {
    if status.is_success() {
        Ok(())
    } else {
        Err(LeagueError::UnexpectedStatus {
            url: url.to_string(),
            status,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transport(base_url: &str) -> Transport {
        let config = LeagueConfig::new(base_url).unwrap();
        Transport::new(reqwest::Client::new(), &config)
    }

    #[test]
    fn test_endpoint_joins_segments() {
        let transport = transport("https://league.example.com/api/");
        let url = transport.endpoint(&["result", "12", "acknowledge"], &[]).unwrap();

        assert_eq!(
            url.as_str(),
            "https://league.example.com/api/result/12/acknowledge"
        );
    }

    #[test]
    fn test_endpoint_without_trailing_slash() {
        let transport = transport("https://league.example.com/api");
        let url = transport.endpoint(&["fixture"], &[]).unwrap();

        assert_eq!(url.as_str(), "https://league.example.com/api/fixture");
    }

    #[test]
    fn test_endpoint_appends_query() {
        let transport = transport("http://localhost:5000");
        let url = transport
            .endpoint(
                &["result"],
                &[("divisionId", "3".to_string()), ("round", "2".to_string())],
            )
            .unwrap();

        assert_eq!(url.as_str(), "http://localhost:5000/result?divisionId=3&round=2");
    }
}
