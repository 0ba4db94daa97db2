//! Analysis domain models.

use serde::{Deserialize, Serialize};

/// Payload submitted for analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisRequest {
    pub text: String,
}

/// Result of analysing a payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResponse {
    pub output: String,
    pub length: u64,
}
