/// Response envelopes shared by every endpoint
///
/// Success: `{ "message": ..., "data": ... }`, 200 unless overridden.
/// Error:   `{ "message": ..., "errors": {...} }`, 400 unless overridden;
/// `errors` is left out entirely when there are no field errors.
use crate::validators::FieldErrors;
use actix_web::{http::StatusCode, HttpResponse};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuccessBody<T> {
    pub message: String,
    pub data: T,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<FieldErrors>,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>, errors: Option<FieldErrors>) -> Self {
        Self {
            message: message.into(),
            errors: errors.filter(|e| !e.is_empty()),
        }
    }
}

/// 200 success envelope
pub fn success<T: Serialize>(data: T, message: &str) -> HttpResponse {
    success_with_status(data, message, StatusCode::OK)
}

pub fn success_with_status<T: Serialize>(
    data: T,
    message: &str,
    status: StatusCode,
) -> HttpResponse {
    HttpResponse::build(status).json(SuccessBody {
        message: message.to_string(),
        data,
    })
}

/// 400 error envelope without field errors
pub fn error(message: &str) -> HttpResponse {
    error_with_status(message, StatusCode::BAD_REQUEST, None)
}

pub fn error_with_status(
    message: &str,
    status: StatusCode,
    errors: Option<FieldErrors>,
) -> HttpResponse {
    HttpResponse::build(status).json(ErrorBody::new(message, errors))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;
    use serde_json::{json, Value};

    async fn body_json(resp: HttpResponse) -> Value {
        let bytes = to_bytes(resp.into_body()).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[actix_web::test]
    async fn test_success_defaults_to_200() {
        let resp = success(vec![1, 2, 3], "Posts retrieved successfully");
        assert_eq!(resp.status(), StatusCode::OK);

        let body = body_json(resp).await;
        assert_eq!(
            body,
            json!({"message": "Posts retrieved successfully", "data": [1, 2, 3]})
        );
    }

    #[actix_web::test]
    async fn test_success_with_status_override() {
        let resp = success_with_status(json!({"id": 4}), "Post created successfully", StatusCode::CREATED);
        assert_eq!(resp.status(), StatusCode::CREATED);
        assert_eq!(body_json(resp).await["data"]["id"], 4);
    }

    #[actix_web::test]
    async fn test_success_with_null_data_keeps_key() {
        let body = body_json(success(Option::<i32>::None, "ok")).await;
        assert!(body.as_object().unwrap().contains_key("data"));
        assert!(body["data"].is_null());
    }

    #[actix_web::test]
    async fn test_error_defaults_to_400_without_errors_key() {
        let resp = error("Content-Type must be application/json");
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body = body_json(resp).await;
        assert_eq!(body, json!({"message": "Content-Type must be application/json"}));
    }

    #[actix_web::test]
    async fn test_empty_field_errors_are_omitted() {
        let resp = error_with_status("Validation failed", StatusCode::BAD_REQUEST, Some(FieldErrors::new()));
        let body = body_json(resp).await;
        assert!(body.get("errors").is_none());
    }

    #[actix_web::test]
    async fn test_field_errors_are_included() {
        let mut errors = FieldErrors::new();
        errors.insert("name".into(), "Name cannot be empty".into());

        let resp = error_with_status("Validation failed", StatusCode::BAD_REQUEST, Some(errors));
        let body = body_json(resp).await;
        assert_eq!(body["errors"]["name"], "Name cannot be empty");
    }
}
