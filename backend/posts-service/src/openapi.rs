/// OpenAPI documentation for Posts Service
use crate::models::Post;
use crate::response::ErrorBody;
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Posts Service API",
        version = "1.0.0",
        description = "Social feed backend. Lists posts and accepts new posts. Storage is in-memory and resets on restart.",
        license(
            name = "MIT"
        )
    ),
    servers(
        (url = "http://localhost:3001", description = "Development server"),
    ),
    paths(
        crate::handlers::posts::get_posts,
        crate::handlers::posts::create_post,
        crate::handlers::health::health_check,
    ),
    components(schemas(
        Post,
        ErrorBody,
        CreatePostRequest,
        PostEnvelope,
        PostListEnvelope,
        crate::handlers::health::HealthStatus,
    )),
    tags(
        (name = "health", description = "Service health checks"),
        (name = "posts", description = "Post listing and creation"),
    ),
)]
pub struct ApiDoc;

/// Creation payload as documented; validation runs on the raw object
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreatePostRequest {
    pub name: String,
    pub username: String,
    pub body: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PostEnvelope {
    pub message: String,
    pub data: Post,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PostListEnvelope {
    pub message: String,
    pub data: Vec<Post>,
}
