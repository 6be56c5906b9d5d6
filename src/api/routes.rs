// src/api/routes.rs
use actix_web::web;

use super::handlers;
use super::middleware::rate_limit::RateLimit;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    // Health probe
    cfg.route("/", web::get().to(handlers::system::health));

    // Password analysis (rate limited per client IP)
    cfg.service(
        web::scope("/analyze-password")
            .wrap(RateLimit)
            .route("", web::post().to(handlers::analyze::analyze_password)),
    );

    // Service status
    cfg.service(
        web::scope("/system").route("/status", web::get().to(handlers::system::get_status)),
    );
}
