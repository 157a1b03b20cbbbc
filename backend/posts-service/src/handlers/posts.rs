/// Post handlers - HTTP endpoints for post operations
use crate::db::PostStore;
use crate::error::{AppError, Result};
use crate::models::Post;
use crate::response::{error, success, success_with_status};
use crate::validators::validate_post_data;
use actix_web::{http::StatusCode, web, HttpMessage, HttpRequest, HttpResponse};
use serde_json::{Map, Value};
use std::fmt::Display;

/// List every post
#[utoipa::path(
    get,
    path = "/api/posts",
    tag = "posts",
    responses(
        (status = 200, description = "Posts retrieved successfully", body = crate::openapi::PostListEnvelope),
        (status = 500, description = "Failed to retrieve posts", body = crate::response::ErrorBody),
    )
)]
pub async fn get_posts(store: web::Data<PostStore>) -> Result<HttpResponse> {
    let posts = store.list_all().map_err(|e| {
        tracing::error!(error = %e, "failed to list posts");
        AppError::Operation("Failed to retrieve posts".to_string())
    })?;

    tracing::debug!(count = posts.len(), "posts listed");
    Ok(success(posts, "Posts retrieved successfully"))
}

/// Create a new post
///
/// The body is read raw so that validation can report per-field type
/// problems instead of failing deserialization outright.
#[utoipa::path(
    post,
    path = "/api/posts",
    tag = "posts",
    request_body(content = crate::openapi::CreatePostRequest, content_type = "application/json"),
    responses(
        (status = 201, description = "Post created successfully", body = crate::openapi::PostEnvelope),
        (status = 400, description = "Wrong content type or invalid payload", body = crate::response::ErrorBody),
        (status = 500, description = "Failed to create post", body = crate::response::ErrorBody),
    )
)]
pub async fn create_post(
    store: web::Data<PostStore>,
    req: HttpRequest,
    body: web::Bytes,
) -> Result<HttpResponse> {
    if !is_json_request(&req) {
        return Ok(error("Content-Type must be application/json"));
    }

    let data = decode_object(&body).map_err(creation_failed)?;

    let validation = validate_post_data(&data);
    if !validation.is_valid() {
        tracing::info!(
            missing = ?validation.missing_fields,
            errors = ?validation.field_errors,
            "post payload rejected"
        );
        return Err(validation.into());
    }

    let post = insert_post(&store, &data).map_err(creation_failed)?;

    tracing::info!(post_id = post.id, username = %post.username, "post created");
    Ok(success_with_status(
        post,
        "Post created successfully",
        StatusCode::CREATED,
    ))
}

/// Whether the request declares a JSON body: `application/json` or any
/// `application/*+json` type, parameters ignored.
pub fn is_json_request(req: &HttpRequest) -> bool {
    match req.mime_type() {
        Ok(Some(content_type)) => {
            content_type.type_() == mime::APPLICATION
                && (content_type.subtype() == mime::JSON
                    || content_type.suffix().is_some_and(|suffix| suffix == mime::JSON))
        }
        _ => false,
    }
}

/// Only a JSON object can carry post fields. Any other top-level value,
/// arrays included, is treated as an undecodable body rather than as a
/// payload with every field missing.
fn decode_object(body: &[u8]) -> Result<Map<String, Value>> {
    match serde_json::from_slice::<Value>(body)? {
        Value::Object(map) => Ok(map),
        other => Err(AppError::BadRequest(format!(
            "request body must be a JSON object, got {}",
            json_kind(&other)
        ))),
    }
}

fn insert_post(store: &PostStore, data: &Map<String, Value>) -> Result<Post> {
    let name = required_str(data, "name")?;
    let username = required_str(data, "username")?;
    let body = required_str(data, "body")?;

    store
        .create(name, username, body)
        .map_err(|e| AppError::Operation(e.to_string()))
}

fn required_str<'a>(data: &'a Map<String, Value>, key: &str) -> Result<&'a str> {
    match data.get(key) {
        Some(Value::String(s)) => Ok(s.as_str()),
        Some(Value::Null) | None => Err(AppError::MissingField(key.to_string())),
        Some(_) => Err(AppError::BadRequest(format!("{key} must be a string"))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn creation_failed(err: impl Display) -> AppError {
    AppError::Operation(format!("Failed to create post: {err}"))
}
