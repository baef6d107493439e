use serde::{Deserialize, Serialize};
use std::fmt;

pub const DEFAULT_RADIUS: i64 = 5;
pub const DEFAULT_TIME_RANGE: &str = "6 months";

/// Direction of a metric over a time window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendLabel {
    Upward,
    Downward,
    Stable,
}

impl TrendLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            TrendLabel::Upward => "upward",
            TrendLabel::Downward => "downward",
            TrendLabel::Stable => "stable",
        }
    }
}

impl fmt::Display for TrendLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A previously sold property used as a valuation reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comparable {
    pub address: String,
    pub sale_price: i64,
    #[serde(rename = "sqft")]
    pub area_size: i64,
    /// Zero when the source did not report it; filled during normalization.
    #[serde(rename = "price_per_sqft", default)]
    pub price_per_area: i64,
}

impl Comparable {
    pub fn new(
        address: impl Into<String>,
        sale_price: i64,
        area_size: i64,
        price_per_area: i64,
    ) -> Self {
        Self {
            address: address.into(),
            sale_price,
            area_size,
            price_per_area,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CmaRequest {
    pub property_id: String,
    pub radius: i64,
    pub property_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CmaResponse {
    pub property_id: String,
    pub comparables: Vec<Comparable>,
    pub estimated_value: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketTrendsRequest {
    pub location: String,
    pub property_type: Option<String>,
    pub time_range: String,
}

/// Aggregate figures for a location, as reported by a data source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketSnapshot {
    pub median_price: i64,
    pub price_per_sqft: i64,
    pub sales_volume: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketTrends {
    pub location: String,
    pub median_price: i64,
    pub price_per_sqft: i64,
    pub sales_volume: i64,
    pub trend: TrendLabel,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
