/// Fallback handlers for requests no route accepts
use crate::error::{AppError, Result};
use actix_web::{HttpRequest, HttpResponse};

/// Unknown path
pub async fn not_found(req: HttpRequest) -> Result<HttpResponse> {
    tracing::debug!(method = %req.method(), path = %req.path(), "no route matched");
    Err(AppError::NotFound)
}

/// Known path, wrong verb
pub async fn method_not_allowed(req: HttpRequest) -> Result<HttpResponse> {
    tracing::debug!(method = %req.method(), path = %req.path(), "method not allowed");
    Err(AppError::MethodNotAllowed)
}
