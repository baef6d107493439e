use crate::core::comparables::{aggregate, normalize_comparables, price_per_area};
use crate::domain::model::{CmaRequest, CmaResponse};
use crate::domain::ports::MarketDataSource;
use crate::utils::error::Result;
use std::sync::Arc;

/// Comparative market analysis over comparables from the injected source.
#[derive(Clone)]
pub struct CmaAnalyzer {
    source: Arc<dyn MarketDataSource>,
}

impl CmaAnalyzer {
    pub fn new(source: Arc<dyn MarketDataSource>) -> Self {
        Self { source }
    }

    pub async fn get_comparable_properties(&self, req: &CmaRequest) -> Result<CmaResponse> {
        let mut comparables = self
            .source
            .fetch_comparables(&req.property_id, req.radius, req.property_type.as_deref())
            .await?;

        tracing::debug!("Fetched {} comparables for {}", comparables.len(), req.property_id);
        normalize_comparables(&mut comparables);

        let response = aggregate(&req.property_id, comparables);
        tracing::info!(
            property_id = %response.property_id,
            comparables = response.comparables.len(),
            estimated_value = response.estimated_value,
            "CMA computed"
        );

        Ok(response)
    }

    pub fn calculate_price_per_sqft(&self, price: i64, sqft: i64) -> i64 {
        price_per_area(price, sqft)
    }
}
