//! Route configuration
//!
//! Everything lives under `/api`, wrapped in CORS. Unknown paths and wrong
//! verbs fall through to envelope-shaped 404 / 405 responses.

use crate::config::CorsConfig;
use crate::handlers;
use actix_cors::Cors;
use actix_web::{web, HttpResponse};

/// Configure all routes for the application
pub fn configure_routes(cfg: &mut web::ServiceConfig, cors: &CorsConfig) {
    cfg.service(
        web::scope("/api")
            .wrap(build_cors(cors))
            // post bodies have no size cap
            .app_data(web::PayloadConfig::new(usize::MAX))
            .service(
                web::resource("/posts")
                    .route(web::get().to(handlers::get_posts))
                    .route(web::post().to(handlers::create_post))
                    .default_service(web::to(handlers::method_not_allowed)),
            )
            .service(
                web::resource("/health")
                    .route(web::get().to(handlers::health_check))
                    .default_service(web::to(handlers::method_not_allowed)),
            )
            .service(
                web::resource("/openapi.json")
                    .route(web::get().to(openapi_handler))
                    .default_service(web::to(handlers::method_not_allowed)),
            ),
    )
    .default_service(web::to(handlers::not_found));
}

/// CORS policy for the `/api` scope
pub fn build_cors(config: &CorsConfig) -> Cors {
    let mut cors = Cors::default();
    for origin in config.origins() {
        if origin == "*" {
            cors = cors.allow_any_origin();
        } else {
            cors = cors.allowed_origin(origin);
        }
    }
    cors.allow_any_method().allow_any_header().max_age(3600)
}

/// OpenAPI JSON endpoint
async fn openapi_handler() -> HttpResponse {
    use utoipa::OpenApi;
    HttpResponse::Ok().json(crate::openapi::ApiDoc::openapi())
}
