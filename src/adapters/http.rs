use crate::domain::model::{Comparable, MarketSnapshot};
use crate::domain::ports::MarketDataSource;
use crate::utils::error::{CmaError, Result};
use crate::utils::validation::validate_url;
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Market data provider reached over HTTP with JSON bodies.
#[derive(Debug, Clone)]
pub struct HttpDataSource {
    client: Client,
    base_url: String,
}

impl HttpDataSource {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        validate_url("upstream_endpoint", base_url)?;

        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn fetch_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        let url = format!("{}/{}", self.base_url, path);

        tracing::debug!("Making API request to: {}", url);
        let response = self.client.get(&url).query(query).send().await?;

        let status = response.status();
        tracing::debug!("API response status: {}", status);

        if !status.is_success() {
            return Err(CmaError::UpstreamStatus {
                status: status.as_u16(),
                url,
            });
        }

        Ok(response.json::<T>().await?)
    }
}

#[async_trait]
impl MarketDataSource for HttpDataSource {
    async fn fetch_comparables(
        &self,
        subject_id: &str,
        radius: i64,
        property_type: Option<&str>,
    ) -> Result<Vec<Comparable>> {
        let mut query = vec![
            ("property_id", subject_id.to_string()),
            ("radius", radius.to_string()),
        ];
        if let Some(kind) = property_type {
            query.push(("property_type", kind.to_string()));
        }

        self.fetch_json("comparables", &query).await
    }

    async fn fetch_historical_prices(&self, location: &str, time_range: &str) -> Result<Vec<f64>> {
        let query = [
            ("location", location.to_string()),
            ("time_range", time_range.to_string()),
        ];

        self.fetch_json("historical-prices", &query).await
    }

    async fn fetch_market_snapshot(
        &self,
        location: &str,
        property_type: Option<&str>,
        time_range: &str,
    ) -> Result<MarketSnapshot> {
        let mut query = vec![
            ("location", location.to_string()),
            ("time_range", time_range.to_string()),
        ];
        if let Some(kind) = property_type {
            query.push(("property_type", kind.to_string()));
        }

        self.fetch_json("market-data", &query).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    #[test]
    fn test_rejects_invalid_base_url() {
        assert!(HttpDataSource::new("not a url", DEFAULT_TIMEOUT).is_err());
        assert!(HttpDataSource::new("ftp://example.com", DEFAULT_TIMEOUT).is_err());
    }

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let source = HttpDataSource::new("http://example.com/api/", DEFAULT_TIMEOUT).unwrap();
        assert_eq!(source.base_url(), "http://example.com/api");
    }

    #[tokio::test]
    async fn test_fetch_comparables_sends_query() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET)
                .path("/comparables")
                .query_param("property_id", "12345")
                .query_param("radius", "3")
                .query_param("property_type", "condo");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!([
                    {"address": "101 Tower Ave, #405", "sale_price": 750000, "sqft": 900, "price_per_sqft": 833},
                    {"address": "101 Tower Ave, #512", "sale_price": 780000, "sqft": 925}
                ]));
        });

        let source = HttpDataSource::new(&server.base_url(), DEFAULT_TIMEOUT).unwrap();
        let comps = source
            .fetch_comparables("12345", 3, Some("condo"))
            .await
            .unwrap();

        api_mock.assert();
        assert_eq!(comps.len(), 2);
        assert_eq!(comps[0].price_per_area, 833);
        assert_eq!(comps[1].price_per_area, 0);
        assert_eq!(comps[1].area_size, 925);
    }

    #[tokio::test]
    async fn test_fetch_historical_prices() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET)
                .path("/historical-prices")
                .query_param("location", "San Francisco, CA")
                .query_param("time_range", "1 year");
            then.status(200)
                .json_body(serde_json::json!([1200000.0, 1180000.0, 1100000.0]));
        });

        let source = HttpDataSource::new(&server.base_url(), DEFAULT_TIMEOUT).unwrap();
        let prices = source
            .fetch_historical_prices("San Francisco, CA", "1 year")
            .await
            .unwrap();

        api_mock.assert();
        assert_eq!(prices, vec![1_200_000.0, 1_180_000.0, 1_100_000.0]);
    }

    #[tokio::test]
    async fn test_fetch_market_snapshot() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET)
                .path("/market-data")
                .query_param("location", "New York, NY");
            then.status(200).json_body(serde_json::json!({
                "median_price": 950000,
                "price_per_sqft": 800,
                "sales_volume": 200
            }));
        });

        let source = HttpDataSource::new(&server.base_url(), DEFAULT_TIMEOUT).unwrap();
        let snapshot = source
            .fetch_market_snapshot("New York, NY", None, "6 months")
            .await
            .unwrap();

        api_mock.assert();
        assert_eq!(snapshot.median_price, 950_000);
        assert_eq!(snapshot.price_per_sqft, 800);
        assert_eq!(snapshot.sales_volume, 200);
    }

    #[tokio::test]
    async fn test_non_success_status_is_upstream_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/comparables");
            then.status(503);
        });

        let source = HttpDataSource::new(&server.base_url(), DEFAULT_TIMEOUT).unwrap();
        let err = source.fetch_comparables("12345", 5, None).await.unwrap_err();

        match err {
            CmaError::UpstreamStatus { status, url } => {
                assert_eq!(status, 503);
                assert!(url.ends_with("/comparables"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_malformed_body_is_api_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/historical-prices");
            then.status(200).body("not json");
        });

        let source = HttpDataSource::new(&server.base_url(), DEFAULT_TIMEOUT).unwrap();
        let err = source
            .fetch_historical_prices("Austin, TX", "6 months")
            .await
            .unwrap_err();

        assert!(matches!(err, CmaError::ApiError(_)));
    }
}
