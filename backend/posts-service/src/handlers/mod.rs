/// HTTP handlers for posts-service
///
/// - Posts: list all posts, create a post
/// - Health: liveness check
/// - Fallback: envelope-shaped 404 / 405 responses
pub mod fallback;
pub mod health;
pub mod posts;

// Re-export handler functions at module level
pub use fallback::{method_not_allowed, not_found};
pub use health::health_check;
pub use posts::{create_post, get_posts};
