// src/api/mod.rs
use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use std::sync::Arc;
use utoipa::OpenApi;
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

use crate::core::analyzer::PasswordAnalyzer;
use crate::core::config::Config;
use crate::core::rate_limit::RateLimiter;

// This will hold our API documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::api::handlers::analyze::analyze_password,
        crate::api::handlers::system::health,
        crate::api::handlers::system::get_status
    ),
    components(
        schemas(
            crate::api::types::AnalyzeRequest,
            crate::api::types::AnalysisResponse,
            crate::api::types::HealthResponse,
            crate::api::types::SystemStatusResponse,
            crate::api::types::ErrorResponse,
            crate::models::Strength,
            crate::models::AnalysisResult
        )
    ),
    tags(
        (name = "Analysis", description = "Password strength analysis endpoints"),
        (name = "System", description = "Health and service status endpoints")
    ),
    info(
        title = "PassCheck API",
        version = "0.1.0",
        description = "Password Security Analyzer API",
        license(name = "MIT")
    )
)]
struct ApiDoc;

pub async fn start_server(
    config: Config,
    analyzer: PasswordAnalyzer,
    limiter: Arc<RateLimiter>,
) -> std::io::Result<()> {
    log::info!(
        "Starting PassCheck API server on {}:{}",
        config.web_address,
        config.web_port
    );

    let analyzer_data = web::Data::new(analyzer);
    let limiter_data = web::Data::from(limiter);
    let cors_origin = config.cors_origin.clone();

    HttpServer::new(move || {
        // Configure CORS
        let cors = match &cors_origin {
            Some(origin) => Cors::default()
                .allowed_origin(origin)
                .supports_credentials(),
            None => Cors::default().allow_any_origin(),
        }
        .allowed_methods(vec!["GET", "POST"])
        .allowed_headers(vec!["Content-Type", "Accept", "X-Requested-With"])
        .max_age(3600);

        App::new()
            .wrap(cors)
            .app_data(analyzer_data.clone())
            .app_data(limiter_data.clone())
            // Add Swagger UI
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi()),
            )
            // Add Redoc
            .service(Redoc::with_url("/redoc", ApiDoc::openapi()))
            // Configure regular API routes
            .configure(routes::configure_routes)
    })
    .bind((config.web_address.as_str(), config.web_port))?
    .run()
    .await
}

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod types;
