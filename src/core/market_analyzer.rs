use crate::core::trend::classify;
use crate::domain::model::{MarketTrends, MarketTrendsRequest, TrendLabel};
use crate::domain::ports::MarketDataSource;
use crate::utils::error::Result;
use std::sync::Arc;

/// Produces market trend reports for a location.
#[derive(Clone)]
pub struct MarketAnalyzer {
    source: Arc<dyn MarketDataSource>,
}

impl MarketAnalyzer {
    pub fn new(source: Arc<dyn MarketDataSource>) -> Self {
        Self { source }
    }

    pub async fn get_market_trends(&self, req: &MarketTrendsRequest) -> Result<MarketTrends> {
        let property_type = req.property_type.as_deref();

        let snapshot = self
            .source
            .fetch_market_snapshot(&req.location, property_type, &req.time_range)
            .await?;
        let history = self
            .source
            .fetch_historical_prices(&req.location, &req.time_range)
            .await?;

        let trend = self.analyze_trend(&history);
        tracing::info!(
            location = %req.location,
            time_range = %req.time_range,
            points = history.len(),
            %trend,
            "Market trends computed"
        );

        Ok(MarketTrends {
            location: req.location.clone(),
            median_price: snapshot.median_price,
            price_per_sqft: snapshot.price_per_sqft,
            sales_volume: snapshot.sales_volume,
            trend,
        })
    }

    pub fn analyze_trend(&self, historical_data: &[f64]) -> TrendLabel {
        classify(historical_data)
    }
}
