use crate::domain::model::{Comparable, MarketSnapshot};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

/// Where analytics input comes from. Implementations live under `adapters`.
#[async_trait]
pub trait MarketDataSource: Send + Sync {
    async fn fetch_comparables(
        &self,
        subject_id: &str,
        radius: i64,
        property_type: Option<&str>,
    ) -> Result<Vec<Comparable>>;

    /// Prices sampled over `time_range`, oldest first.
    async fn fetch_historical_prices(&self, location: &str, time_range: &str) -> Result<Vec<f64>>;

    async fn fetch_market_snapshot(
        &self,
        location: &str,
        property_type: Option<&str>,
        time_range: &str,
    ) -> Result<MarketSnapshot>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    Fixture,
    Http,
}

pub trait ConfigProvider: Send + Sync {
    fn host(&self) -> &str;
    fn port(&self) -> u16;
    fn source_kind(&self) -> SourceKind;
    fn upstream_endpoint(&self) -> Option<&str>;
    fn request_timeout(&self) -> Duration;
}
