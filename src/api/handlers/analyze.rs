// src/api/handlers/analyze.rs
use actix_web::{web, HttpResponse};
use log::debug;

use crate::api::error::ApiError;
use crate::api::types::{
    AnalysisResponse, AnalyzeRequest, ErrorResponse, MAX_PASSWORD_LENGTH, MIN_PASSWORD_LENGTH,
};
use crate::core::analyzer::PasswordAnalyzer;

/// Analyze a password
///
/// Scores the supplied password by combining entropy, structural patterns,
/// dictionary membership and known-breach exposure. The password itself is
/// never logged or persisted.
#[utoipa::path(
    post,
    path = "/analyze-password",
    tag = "Analysis",
    request_body = AnalyzeRequest,
    responses(
        (status = 200, description = "Password analysis result", body = AnalysisResponse),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 429, description = "Rate limit exceeded", body = ErrorResponse),
        (status = 500, description = "Server error", body = ErrorResponse)
    )
)]
pub async fn analyze_password(
    analyzer: web::Data<PasswordAnalyzer>,
    payload: web::Json<AnalyzeRequest>,
) -> Result<HttpResponse, ApiError> {
    let password = &payload.password;

    // Length validation happens here at the boundary; the engine never
    // sees an out-of-range password.
    let length = password.chars().count();
    if length < MIN_PASSWORD_LENGTH {
        return Err(ApiError::Validation(
            "Password must not be empty".to_string(),
        ));
    }
    if length > MAX_PASSWORD_LENGTH {
        return Err(ApiError::Validation(format!(
            "Password must be at most {} characters",
            MAX_PASSWORD_LENGTH
        )));
    }

    debug!("Analyzing password of length {}", length);
    let result = analyzer.analyze(password).await;

    Ok(HttpResponse::Ok().json(AnalysisResponse::from(result)))
}
