use axum::http::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CmaError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("upstream returned status {status} for {url}")]
    UpstreamStatus { status: u16, url: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("{field} is required")]
    MissingParameter { field: String },

    #[error("{field} {reason}")]
    InvalidParameter {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

/// Broad grouping used for status mapping and log context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Client,
    Upstream,
    Config,
    Internal,
}

impl CmaError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            CmaError::MissingParameter { .. } | CmaError::InvalidParameter { .. } => {
                ErrorCategory::Client
            }
            CmaError::ApiError(_) | CmaError::UpstreamStatus { .. } => ErrorCategory::Upstream,
            CmaError::ConfigValidationError { .. }
            | CmaError::InvalidConfigValueError { .. }
            | CmaError::MissingConfigError { .. } => ErrorCategory::Config,
            CmaError::IoError(_) => ErrorCategory::Internal,
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self.category() {
            ErrorCategory::Client => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn missing(field: &str) -> Self {
        CmaError::MissingParameter {
            field: field.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CmaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_errors_map_to_bad_request() {
        let err = CmaError::missing("location");
        assert_eq!(err.to_string(), "location is required");
        assert_eq!(err.category(), ErrorCategory::Client);
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);

        let err = CmaError::InvalidParameter {
            field: "radius".to_string(),
            value: "far".to_string(),
            reason: "must be a valid integer".to_string(),
        };
        assert_eq!(err.to_string(), "radius must be a valid integer");
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_upstream_errors_map_to_server_error() {
        let err = CmaError::UpstreamStatus {
            status: 503,
            url: "http://upstream/comparables".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Upstream);
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
