/// Health check handler
use crate::db::PostStore;
use crate::error::Result;
use crate::response::success;
use actix_web::{web, HttpResponse};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthStatus {
    pub status: String,
    pub service: String,
    pub version: String,
    pub posts: usize,
}

/// Liveness check, also reports how many posts are held in memory
#[utoipa::path(
    get,
    path = "/api/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthStatus),
        (status = 500, description = "Internal server error", body = crate::response::ErrorBody),
    )
)]
pub async fn health_check(store: web::Data<PostStore>) -> Result<HttpResponse> {
    let posts = store.len()?;

    Ok(success(
        HealthStatus {
            status: "ok".to_string(),
            service: "posts-service".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            posts,
        },
        "Service is healthy",
    ))
}
