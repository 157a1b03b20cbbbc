/// Storage layer for posts-service
///
/// Posts live in process memory only and reset on restart.
pub mod post_store;

pub use post_store::{PostStore, StoreError, StoreResult};
