// HTTP surface: query parsing, JSON responses and the router.

pub mod handlers;
pub mod routes;

use crate::core::cma_analyzer::CmaAnalyzer;
use crate::core::market_analyzer::MarketAnalyzer;
use crate::domain::ports::MarketDataSource;
use crate::utils::error::Result;
use std::future::Future;
use std::sync::Arc;
use tokio::net::TcpListener;

pub use routes::router;

/// Analyzers shared by every handler.
#[derive(Clone)]
pub struct AppState {
    pub market: MarketAnalyzer,
    pub cma: CmaAnalyzer,
}

impl AppState {
    pub fn new(source: Arc<dyn MarketDataSource>) -> Self {
        Self {
            market: MarketAnalyzer::new(source.clone()),
            cma: CmaAnalyzer::new(source),
        }
    }
}

/// Serves the API on `listener` until `shutdown` resolves.
pub async fn serve<F>(listener: TcpListener, state: AppState, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let app = router(state);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;

    Ok(())
}
