//! Analysis route handler.

use analyser_core::analysis;
use analyser_core::analysis::model::{AnalysisRequest, AnalysisResponse};
use axum::Json;

/// POST /analyze
///
/// The `Json` extractor rejects missing or non-string `text` with a client
/// error before this handler runs; every request that reaches it succeeds.
pub async fn analyze(Json(request): Json<AnalysisRequest>) -> Json<AnalysisResponse> {
    tracing::debug!(length = request.text.chars().count(), "analyzing payload");
    Json(analysis::analyze(request))
}
