use async_trait::async_trait;

use crate::calendar::RawActivityRecord;
use crate::shared::DomainError;

/// Activity source trait (Strategy pattern)
/// Each upstream provider that can report a user's activity implements this trait
#[async_trait]
pub trait ActivitySource: Send + Sync {
    /// Short provider name used in diagnostics
    fn name(&self) -> &'static str;

    /// Retrieve the raw activity record for a user. One attempt, no retry.
    async fn fetch(&self, username: &str) -> Result<RawActivityRecord, DomainError>;
}
