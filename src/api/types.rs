// src/api/types.rs
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::Strength;

/// Boundary limits on analyzable passwords.
pub const MIN_PASSWORD_LENGTH: usize = 1;
pub const MAX_PASSWORD_LENGTH: usize = 128;

#[derive(Serialize, Deserialize, ToSchema)]
pub struct AnalyzeRequest {
    /// Password to analyze (1-128 characters)
    pub password: String,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct AnalysisResponse {
    /// Overall score, clamped to 0-100
    pub score: i64,
    /// Estimated entropy in bits
    pub entropy: f64,
    /// Strength label: Strong, Moderate or Weak
    pub strength: Strength,
    /// Detected issues
    pub issues: Vec<String>,
    /// Times found in known breaches (0 when not found or unknown)
    pub breach_count: u64,
}

impl From<crate::models::AnalysisResult> for AnalysisResponse {
    fn from(result: crate::models::AnalysisResult) -> Self {
        Self {
            score: result.score,
            entropy: result.entropy,
            strength: result.strength,
            issues: result.issues,
            breach_count: result.breach_count,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Service liveness indicator
    pub status: String,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct SystemStatusResponse {
    /// Number of entries in the common-password dictionary
    pub dictionary_size: usize,
    /// Client identities currently tracked by the rate limiter
    pub rate_limited_clients: usize,
    /// Maximum requests per window per client
    pub rate_limit_max_requests: usize,
    /// Sliding window length in seconds
    pub rate_limit_window_seconds: u64,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Always false
    pub success: bool,
    /// Human-readable error description
    pub error: String,
}
