// Adapters layer: concrete implementations of the domain ports.

pub mod fixture;
pub mod http;

pub use fixture::FixtureDataSource;
pub use http::HttpDataSource;

use crate::domain::ports::{ConfigProvider, MarketDataSource, SourceKind};
use crate::utils::error::Result;
use crate::utils::validation::validate_required_field;
use std::sync::Arc;

/// Builds the data source selected by configuration.
pub fn build_data_source<C: ConfigProvider + ?Sized>(
    config: &C,
) -> Result<Arc<dyn MarketDataSource>> {
    match config.source_kind() {
        SourceKind::Fixture => {
            tracing::info!("Using fixture market data");
            Ok(Arc::new(FixtureDataSource::new()))
        }
        SourceKind::Http => {
            let endpoint = config.upstream_endpoint().map(str::to_string);
            let endpoint = validate_required_field("upstream_endpoint", &endpoint)?;
            tracing::info!("Using upstream market data at {}", endpoint);
            Ok(Arc::new(HttpDataSource::new(endpoint, config.request_timeout())?))
        }
    }
}
