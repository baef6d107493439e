use crate::api::AppState;
use crate::domain::model::{
    CmaRequest, CmaResponse, ErrorResponse, MarketTrends, MarketTrendsRequest, DEFAULT_RADIUS,
    DEFAULT_TIME_RANGE,
};
use crate::utils::error::{CmaError, Result};
use crate::utils::validation::{parse_integer_param, require_param};
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

/// Query string as raw pairs, in request order.
pub type QueryPairs = Vec<(String, String)>;

/// A repeated key keeps its first value.
fn first_value(pairs: &[(String, String)], key: &str) -> Option<String> {
    pairs.iter().find(|(k, _)| k == key).map(|(_, v)| v.clone())
}

/// Error body returned to HTTP clients.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: message.into(),
        }
    }

    /// A failed analysis is always reported as a server error, with `context` prefixed.
    fn analysis_failed(context: &str, err: CmaError) -> Self {
        tracing::error!(category = ?err.category(), "{}: {}", context, err);
        Self::internal(format!("{}: {}", context, err))
    }
}

impl From<CmaError> for ApiError {
    fn from(err: CmaError) -> Self {
        Self {
            status: err.status_code(),
            message: err.to_string(),
        }
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(ErrorResponse { error: self.message })).into_response()
    }
}

#[derive(Debug, Default)]
pub struct MarketTrendsQuery {
    pub location: Option<String>,
    pub property_type: Option<String>,
    pub time_range: Option<String>,
}

impl MarketTrendsQuery {
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        Self {
            location: first_value(pairs, "location"),
            property_type: first_value(pairs, "property_type"),
            time_range: first_value(pairs, "time_range"),
        }
    }

    pub fn into_request(self) -> Result<MarketTrendsRequest> {
        let location = require_param("location", self.location)?;
        let time_range = self
            .time_range
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| DEFAULT_TIME_RANGE.to_string());

        Ok(MarketTrendsRequest {
            location,
            property_type: self.property_type.filter(|p| !p.is_empty()),
            time_range,
        })
    }
}

#[derive(Debug, Default)]
pub struct CmaQuery {
    pub property_id: Option<String>,
    pub radius: Option<String>,
    pub property_type: Option<String>,
}

impl CmaQuery {
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        Self {
            property_id: first_value(pairs, "property_id"),
            radius: first_value(pairs, "radius"),
            property_type: first_value(pairs, "property_type"),
        }
    }

    pub fn into_request(self) -> Result<CmaRequest> {
        let property_id = require_param("property_id", self.property_id)?;
        let radius = match self.radius.as_deref() {
            Some(raw) if !raw.is_empty() => parse_integer_param("radius", raw)?,
            _ => DEFAULT_RADIUS,
        };

        Ok(CmaRequest {
            property_id,
            radius,
            property_type: self.property_type.filter(|p| !p.is_empty()),
        })
    }
}

/// GET /market-trends
pub async fn get_market_trends(
    State(state): State<AppState>,
    query: std::result::Result<Query<QueryPairs>, QueryRejection>,
) -> std::result::Result<Json<MarketTrends>, ApiError> {
    let Query(pairs) = query?;
    let req = MarketTrendsQuery::from_pairs(&pairs).into_request()?;

    let trends = state
        .market
        .get_market_trends(&req)
        .await
        .map_err(|e| ApiError::analysis_failed("failed to fetch market trends", e))?;

    Ok(Json(trends))
}

/// GET /cma
pub async fn get_cma(
    State(state): State<AppState>,
    query: std::result::Result<Query<QueryPairs>, QueryRejection>,
) -> std::result::Result<Json<CmaResponse>, ApiError> {
    let Query(pairs) = query?;
    let req = CmaQuery::from_pairs(&pairs).into_request()?;

    let cma = state
        .cma
        .get_comparable_properties(&req)
        .await
        .map_err(|e| ApiError::analysis_failed("failed to fetch CMA", e))?;

    Ok(Json(cma))
}

/// GET /health
pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
