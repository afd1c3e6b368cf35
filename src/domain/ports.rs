use crate::domain::model::{FetchOutcome, Handle};
use async_trait::async_trait;

/// Outbound port for content acquisition. Retrieval trouble is data, not
/// an error: every way a fetch can go wrong maps onto a `FetchOutcome`
/// variant so the caller can choose a fallback.
#[async_trait]
pub trait ContentSource: Send + Sync {
    async fn fetch(&self, handle: &Handle) -> FetchOutcome;
}

/// Pulls candidate text fragments out of a retrieved document. Pluggable
/// so the retrieval mechanism can change without touching pipeline logic.
pub trait ContentExtractor: Send + Sync {
    fn extract(&self, document: &str) -> Vec<String>;
}

pub trait ConfigProvider: Send + Sync {
    fn listen_addr(&self) -> &str;
    fn profile_base_url(&self) -> &str;
    fn fetch_timeout_secs(&self) -> u64;
    fn static_dir(&self) -> &str;
}
