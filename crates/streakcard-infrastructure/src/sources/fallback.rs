use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, warn};

use streakcard_domain::{ActivitySource, DomainError, RawActivityRecord};

/// Tries each candidate in order and returns the first record obtained.
///
/// When every candidate fails the result is an empty calendar, which
/// evaluates to a streak of 0.
pub struct FallbackSource {
    name: &'static str,
    candidates: Vec<Arc<dyn ActivitySource>>,
}

impl FallbackSource {
    pub fn new(name: &'static str, candidates: Vec<Arc<dyn ActivitySource>>) -> Self {
        Self { name, candidates }
    }

    pub fn candidates(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.candidates.iter().map(|candidate| candidate.name())
    }
}

#[async_trait]
impl ActivitySource for FallbackSource {
    fn name(&self) -> &'static str {
        self.name
    }

    async fn fetch(&self, username: &str) -> Result<RawActivityRecord, DomainError> {
        for candidate in &self.candidates {
            match candidate.fetch(username).await {
                Ok(record) => {
                    debug!(source = self.name, candidate = candidate.name(), "Candidate succeeded");
                    return Ok(record);
                }
                Err(e) => {
                    warn!(
                        source = self.name,
                        candidate = candidate.name(),
                        error = %e,
                        "Candidate failed, trying next"
                    );
                }
            }
        }

        warn!(source = self.name, username, "All candidates failed, using empty calendar");
        Ok(RawActivityRecord::empty())
    }
}
