pub mod toml_config;

use crate::domain::ports::SourceKind;
use crate::utils::error::Result;
use crate::utils::validation::{validate_required_field, validate_url};

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// The http source needs a usable endpoint; the fixture source needs nothing.
pub(crate) fn validate_source(kind: SourceKind, endpoint: Option<&str>, field: &str) -> Result<()> {
    if kind == SourceKind::Http {
        let endpoint = endpoint.map(str::to_string);
        let endpoint = validate_required_field(field, &endpoint)?;
        validate_url(field, endpoint)?;
    }
    Ok(())
}

#[cfg(feature = "cli")]
pub use cli::CliConfig;

#[cfg(feature = "cli")]
mod cli {
    use super::{validate_source, DEFAULT_HOST};
    use crate::domain::ports::{ConfigProvider, SourceKind};
    use crate::utils::error::Result;
    use crate::utils::validation::{validate_non_empty_string, validate_positive_number, Validate};
    use clap::Parser;
    use serde::{Deserialize, Serialize};
    use std::time::Duration;

    #[derive(Debug, Clone, Serialize, Deserialize, Parser)]
    #[command(name = "cma-api")]
    #[command(about = "Real estate market trends and comparative market analysis API")]
    pub struct CliConfig {
        #[arg(long, env = "HOST", default_value = DEFAULT_HOST)]
        pub host: String,

        #[arg(long, env = "PORT", default_value = "8080")]
        pub port: u16,

        #[arg(long, value_enum, default_value = "fixture")]
        pub data_source: SourceKind,

        #[arg(long, env = "UPSTREAM_ENDPOINT", help = "Base URL of the market data provider")]
        pub upstream_endpoint: Option<String>,

        #[arg(long, default_value = "10", help = "Upstream request timeout in seconds")]
        pub request_timeout: u64,

        #[arg(short, long, help = "TOML configuration file; replaces the flags above")]
        pub config: Option<String>,

        #[arg(short, long, help = "Enable verbose output")]
        pub verbose: bool,

        #[arg(long, help = "Emit logs as JSON lines")]
        pub json_logs: bool,
    }

    impl ConfigProvider for CliConfig {
        fn host(&self) -> &str {
            &self.host
        }

        fn port(&self) -> u16 {
            self.port
        }

        fn source_kind(&self) -> SourceKind {
            self.data_source
        }

        fn upstream_endpoint(&self) -> Option<&str> {
            self.upstream_endpoint.as_deref()
        }

        fn request_timeout(&self) -> Duration {
            Duration::from_secs(self.request_timeout)
        }
    }

    impl Validate for CliConfig {
        fn validate(&self) -> Result<()> {
            validate_non_empty_string("host", &self.host)?;
            validate_positive_number("port", u64::from(self.port), 1)?;
            validate_positive_number("request_timeout", self.request_timeout, 1)?;
            validate_source(self.data_source, self.upstream_endpoint(), "upstream_endpoint")
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_defaults() {
            let config = CliConfig::parse_from(["cma-api"]);
            assert_eq!(config.source_kind(), SourceKind::Fixture);
            assert_eq!(config.request_timeout(), Duration::from_secs(10));
            assert!(config.validate().is_ok());
        }

        #[test]
        fn test_http_source_requires_endpoint() {
            let config = CliConfig::parse_from([
                "cma-api",
                "--data-source",
                "http",
                "--host",
                "127.0.0.1",
            ]);
            assert!(config.validate().is_err());

            let config = CliConfig::parse_from([
                "cma-api",
                "--data-source",
                "http",
                "--upstream-endpoint",
                "https://data.example.com",
            ]);
            assert!(config.validate().is_ok());
        }

        #[test]
        fn test_zero_timeout_rejected() {
            let config = CliConfig::parse_from(["cma-api", "--request-timeout", "0"]);
            assert!(config.validate().is_err());
        }
    }
}
