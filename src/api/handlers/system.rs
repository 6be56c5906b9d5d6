// src/api/handlers/system.rs
use actix_web::{web, HttpResponse, Responder};

use crate::api::types::{HealthResponse, SystemStatusResponse};
use crate::core::analyzer::PasswordAnalyzer;
use crate::core::rate_limit::RateLimiter;

/// Health probe
#[utoipa::path(
    get,
    path = "/",
    tag = "System",
    responses(
        (status = 200, description = "Service is up", body = HealthResponse)
    )
)]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "ok".to_string(),
    })
}

/// Get service status
#[utoipa::path(
    get,
    path = "/system/status",
    tag = "System",
    responses(
        (status = 200, description = "Current service status", body = SystemStatusResponse)
    )
)]
pub async fn get_status(
    analyzer: web::Data<PasswordAnalyzer>,
    limiter: web::Data<RateLimiter>,
) -> impl Responder {
    HttpResponse::Ok().json(SystemStatusResponse {
        dictionary_size: analyzer.dictionary_size(),
        rate_limited_clients: limiter.tracked_clients(),
        rate_limit_max_requests: limiter.max_requests(),
        rate_limit_window_seconds: limiter.window_seconds(),
    })
}
