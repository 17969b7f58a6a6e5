//! Release source traits

use logbook_core::ReleaseRecord;

use crate::Result;

/// Trait for services that provide release records
///
/// Implementations return releases newest first, already filtered and
/// capped, so callers can parse them in order.
#[async_trait::async_trait]
pub trait ReleaseSource: Send + Sync {
    /// Get the source name
    fn name(&self) -> &str;

    /// List releases
    async fn releases(&self) -> Result<Vec<ReleaseRecord>>;

    /// Fetch a single release by tag
    async fn release(&self, tag: &str) -> Result<ReleaseRecord>;
}
