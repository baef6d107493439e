pub mod adapters;
pub mod api;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{build_data_source, FixtureDataSource, HttpDataSource};
pub use api::{router, serve, AppState};
pub use config::toml_config::TomlConfig;
pub use core::{cma_analyzer::CmaAnalyzer, market_analyzer::MarketAnalyzer};
pub use utils::error::{CmaError, Result};
