pub mod cma_analyzer;
pub mod comparables;
pub mod market_analyzer;
pub mod trend;
