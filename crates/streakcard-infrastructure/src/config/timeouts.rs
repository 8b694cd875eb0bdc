use std::time::Duration;

/// Timeouts applied to upstream calls
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeoutConfig {
    /// Whole-request timeout for one upstream call
    pub http_request: Duration,

    /// TCP/TLS connect timeout
    pub http_connect: Duration,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            http_request: Duration::from_secs(10),
            http_connect: Duration::from_secs(5),
        }
    }
}

impl TimeoutConfig {
    /// Request timeout override; the connect timeout never exceeds it
    pub fn with_request_secs(secs: u64) -> Self {
        let http_request = Duration::from_secs(secs);
        Self {
            http_request,
            http_connect: Self::default().http_connect.min(http_request),
        }
    }
}
