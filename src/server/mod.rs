// Web tool server
// Serves the single page and the JSON API behind it

mod examples;
mod handlers;
mod page;
pub mod types;

pub use examples::{PendingExamples, EXAMPLE_PROBLEMS};
pub use handlers::{create_router, SessionId, SESSION_HEADER};

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::classifier::RelevanceClassifier;
use crate::solver::ProblemSolver;

/// Shared state handed to every handler
pub struct AppState {
    pub solver: ProblemSolver,
    pub classifier: RelevanceClassifier,
    pub pending: PendingExamples,
}

impl AppState {
    pub fn new(solver: ProblemSolver, classifier: RelevanceClassifier) -> Self {
        Self {
            solver,
            classifier,
            pending: PendingExamples::new(),
        }
    }
}

/// Start the HTTP server and run until the listener fails
pub async fn serve(state: AppState, addr: SocketAddr) -> Result<()> {
    // Problems are short text; 64KB is plenty
    let app = create_router(Arc::new(state))
        .layer(axum::extract::DefaultBodyLimit::max(64 * 1024))
        .layer(TraceLayer::new_for_http());

    tracing::info!("Starting math agent on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
