/// Posts Service Library
///
/// Minimal social-feed backend: lists posts and accepts new ones over HTTP.
/// Posts are held in memory by a single `PostStore` owned by the server and
/// handed to handlers through `web::Data`.
///
/// # Modules
///
/// - `handlers`: HTTP request handlers (posts, health, fallbacks)
/// - `routes`: Route table and CORS policy
/// - `models`: The `Post` entity
/// - `db`: In-memory post store
/// - `validators`: Creation payload validation
/// - `response`: Success / error response envelopes
/// - `error`: Error types and their HTTP mapping
/// - `config`: Configuration management
/// - `openapi`: OpenAPI document
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;
pub mod openapi;
pub mod response;
pub mod routes;
pub mod validators;

pub use config::Config;
pub use db::PostStore;
pub use error::{AppError, Result};
pub use routes::configure_routes;
