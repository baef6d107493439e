use crate::domain::model::{Comparable, MarketSnapshot};
use crate::domain::ports::MarketDataSource;
use crate::utils::error::Result;
use async_trait::async_trait;

/// In-memory data source serving a fixed dataset.
///
/// This is the default source until a real provider is configured, and the
/// fixture tests build on.
#[derive(Debug, Clone)]
pub struct FixtureDataSource {
    comparables: Vec<Comparable>,
    historical_prices: Vec<f64>,
    snapshot: MarketSnapshot,
}

impl FixtureDataSource {
    pub fn new() -> Self {
        Self {
            comparables: vec![
                Comparable::new("123 Main St", 1_100_000, 1300, 846),
                Comparable::new("456 Elm St", 1_150_000, 1400, 821),
                Comparable::new("789 Oak St", 1_200_000, 1380, 870),
            ],
            historical_prices: vec![800_000.0, 815_000.0, 832_000.0, 841_000.0, 850_000.0],
            snapshot: MarketSnapshot {
                median_price: 850_000,
                price_per_sqft: 650,
                sales_volume: 89,
            },
        }
    }

    pub fn with_comparables(mut self, comparables: Vec<Comparable>) -> Self {
        self.comparables = comparables;
        self
    }

    pub fn with_historical_prices(mut self, prices: Vec<f64>) -> Self {
        self.historical_prices = prices;
        self
    }

    pub fn with_snapshot(mut self, snapshot: MarketSnapshot) -> Self {
        self.snapshot = snapshot;
        self
    }
}

impl Default for FixtureDataSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MarketDataSource for FixtureDataSource {
    async fn fetch_comparables(
        &self,
        subject_id: &str,
        radius: i64,
        property_type: Option<&str>,
    ) -> Result<Vec<Comparable>> {
        tracing::debug!(
            subject_id,
            radius,
            property_type = property_type.unwrap_or("any"),
            "Serving fixture comparables"
        );
        Ok(self.comparables.clone())
    }

    async fn fetch_historical_prices(&self, location: &str, time_range: &str) -> Result<Vec<f64>> {
        tracing::debug!(location, time_range, "Serving fixture price history");
        Ok(self.historical_prices.clone())
    }

    async fn fetch_market_snapshot(
        &self,
        location: &str,
        _property_type: Option<&str>,
        _time_range: &str,
    ) -> Result<MarketSnapshot> {
        tracing::debug!(location, "Serving fixture market snapshot");
        Ok(self.snapshot)
    }
}
