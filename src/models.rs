// src/models.rs
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Qualitative strength verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum Strength {
    Strong,
    Moderate,
    Weak,
}

/// Complete verdict for one analyzed password. Immutable once constructed.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AnalysisResult {
    /// Overall score, clamped to 0-100
    pub score: i64,
    /// Estimated entropy in bits
    pub entropy: f64,
    /// Qualitative strength label
    pub strength: Strength,
    /// Detected issues, deduplicated
    pub issues: Vec<String>,
    /// Times the password appeared in known breaches (0 when not found or
    /// the provider was unavailable)
    pub breach_count: u64,
}
