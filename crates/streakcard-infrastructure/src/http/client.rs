use anyhow::{Context, Result};
use reqwest::{Client, RequestBuilder};
use tracing::{debug, warn};

use streakcard_domain::DomainError;

use crate::config::TimeoutConfig;

pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/138.0.0.0 Safari/537.36";

const LOG_BODY_LIMIT: usize = 200;

/// Shared HTTP client for all upstream providers. Every call is a single attempt.
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    pub fn new(timeouts: &TimeoutConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeouts.http_request)
            .connect_timeout(timeouts.http_connect)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client })
    }

    pub fn get(&self, url: &str) -> RequestBuilder {
        self.client.get(url)
    }

    pub fn post(&self, url: &str) -> RequestBuilder {
        self.client.post(url)
    }

    /// Send a prepared request and return the body of a 2xx response.
    ///
    /// Transport failures, timeouts and non-2xx statuses all map to
    /// `DomainError::UpstreamUnavailable`.
    pub async fn send_for_text(
        &self,
        request: RequestBuilder,
        operation: &str,
    ) -> Result<String, DomainError> {
        let response = request.send().await.map_err(|e| {
            warn!(operation, error = %e, "Upstream request failed");
            DomainError::UpstreamUnavailable(format!("{}: {}", operation, e))
        })?;

        let status = response.status();
        debug!(operation, status = status.as_u16(), "Upstream responded");

        let body = response.text().await.map_err(|e| {
            DomainError::UpstreamUnavailable(format!("{}: failed to read body: {}", operation, e))
        })?;

        if !status.is_success() {
            warn!(
                operation,
                status = status.as_u16(),
                body = %truncate_for_log(&body),
                "Upstream returned non-success status"
            );
            return Err(DomainError::UpstreamUnavailable(format!(
                "{}: HTTP {}",
                operation, status
            )));
        }

        Ok(body)
    }
}

fn truncate_for_log(body: &str) -> String {
    body.chars().take(LOG_BODY_LIMIT).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_client_creation() {
        let client = HttpClient::new(&TimeoutConfig::default());
        assert!(client.is_ok());
    }

    #[test]
    fn test_truncate_for_log_respects_char_boundaries() {
        let body = "🔥".repeat(300);
        let truncated = truncate_for_log(&body);
        assert_eq!(truncated.chars().count(), LOG_BODY_LIMIT);
    }

    #[tokio::test]
    async fn test_connection_refused_is_upstream_unavailable() {
        // Bind then drop to get a port with nothing listening
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = HttpClient::new(&TimeoutConfig::with_request_secs(2)).unwrap();
        let request = client.get(&format!("http://{}/", addr));
        let err = client.send_for_text(request, "probe").await.unwrap_err();

        assert!(matches!(err, DomainError::UpstreamUnavailable(_)));
        assert!(err.message().starts_with("probe:"));
    }
}
