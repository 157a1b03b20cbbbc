/// In-memory post store
///
/// Owns the ordered list of posts for the lifetime of the process. A single
/// mutex guards both the snapshot read and the max-id-then-append sequence
/// so concurrent creates never hand out the same id.
use crate::models::{Post, PostId};
use chrono::{DateTime, TimeZone, Utc};
use std::sync::{Mutex, MutexGuard};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("post store lock poisoned")]
    LockPoisoned,
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;

#[derive(Debug, Default)]
pub struct PostStore {
    posts: Mutex<Vec<Post>>,
}

impl PostStore {
    /// Empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with the three launch posts (ids 1, 2, 3).
    pub fn seeded() -> Self {
        Self::with_posts(seed_posts())
    }

    pub fn with_posts(posts: Vec<Post>) -> Self {
        Self {
            posts: Mutex::new(posts),
        }
    }

    fn lock(&self) -> StoreResult<MutexGuard<'_, Vec<Post>>> {
        self.posts.lock().map_err(|_| StoreError::LockPoisoned)
    }

    /// Snapshot of every post in insertion order.
    pub fn list_all(&self) -> StoreResult<Vec<Post>> {
        Ok(self.lock()?.clone())
    }

    /// Append a new post stamped with the current time.
    pub fn create(&self, name: &str, username: &str, body: &str) -> StoreResult<Post> {
        self.create_at(name, username, body, Utc::now())
    }

    /// Append a new post with an explicit creation time.
    ///
    /// The id is `1 + max(existing ids)`, or 1 for an empty store.
    pub fn create_at(
        &self,
        name: &str,
        username: &str,
        body: &str,
        created_at: DateTime<Utc>,
    ) -> StoreResult<Post> {
        let mut posts = self.lock()?;
        let next_id = next_id(&posts);
        let post = Post::new(next_id, name, username, body, created_at);
        posts.push(post.clone());

        tracing::debug!(post_id = post.id, total = posts.len(), "post appended");
        Ok(post)
    }

    pub fn len(&self) -> StoreResult<usize> {
        Ok(self.lock()?.len())
    }

    pub fn is_empty(&self) -> StoreResult<bool> {
        Ok(self.lock()?.is_empty())
    }
}

fn next_id(posts: &[Post]) -> PostId {
    posts.iter().map(|p| p.id).max().unwrap_or(0) + 1
}

fn seeded_at(year: i32, month: u32, day: u32, hour: u32, min: u32) -> Option<DateTime<Utc>> {
    Utc.with_ymd_and_hms(year, month, day, hour, min, 0).single()
}

fn seed_posts() -> Vec<Post> {
    vec![
        Post {
            id: 1,
            name: "Elon Musk".to_string(),
            username: "elonmusk".to_string(),
            body: "Perhaps our purpose is to make the mind of a sentient sun".to_string(),
            likes: 961,
            comments: 386,
            shares: 123,
            created_at: seeded_at(2024, 1, 15, 10, 30),
        },
        Post {
            id: 2,
            name: "John Bobby".to_string(),
            username: "john_bobby".to_string(),
            body: "Today I learned about RESTful API design principles. Clean code and proper error handling make all the difference.".to_string(),
            likes: 67,
            comments: 12,
            shares: 0,
            created_at: seeded_at(2024, 1, 17, 9, 15),
        },
        Post {
            id: 3,
            name: "Sam Altman".to_string(),
            username: "sama".to_string(),
            body: "Just finished reading an amazing book on software architecture! Highly recommend it.".to_string(),
            likes: 944,
            comments: 123,
            shares: 70,
            created_at: seeded_at(2024, 1, 16, 14, 20),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_seeded_store_order() {
        let store = PostStore::seeded();
        let posts = store.list_all().unwrap();

        let ids: Vec<PostId> = posts.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(posts[0].username, "elonmusk");
        assert_eq!(posts[1].username, "john_bobby");
        assert_eq!(posts[2].username, "sama");
    }

    #[test]
    fn test_first_post_in_empty_store_gets_id_one() {
        let store = PostStore::new();
        assert!(store.is_empty().unwrap());

        let post = store.create("Alice", "alice", "hello").unwrap();
        assert_eq!(post.id, 1);
        assert_eq!(store.len().unwrap(), 1);
    }

    #[test]
    fn test_id_is_max_plus_one_not_len_plus_one() {
        let at = Utc::now();
        let store = PostStore::with_posts(vec![
            Post::new(10, "a", "a", "a", at),
            Post::new(4, "b", "b", "b", at),
        ]);

        let post = store.create("c", "c", "c").unwrap();
        assert_eq!(post.id, 11);
    }

    #[test]
    fn test_create_trims_and_appends_in_order() {
        let store = PostStore::seeded();
        let post = store.create(" Alice ", " alice ", " hello ").unwrap();

        assert_eq!(post.id, 4);
        assert_eq!(post.name, "Alice");
        assert_eq!(post.username, "alice");
        assert_eq!(post.body, "hello");
        assert_eq!((post.likes, post.comments, post.shares), (0, 0, 0));
        assert!(post.created_at.is_some());

        let posts = store.list_all().unwrap();
        assert_eq!(posts.last(), Some(&post));
    }

    #[test]
    fn test_duplicates_are_allowed() {
        let store = PostStore::new();
        let a = store.create("same", "same", "same").unwrap();
        let b = store.create("same", "same", "same").unwrap();

        assert_ne!(a.id, b.id);
        assert_eq!(store.len().unwrap(), 2);
    }

    #[test]
    fn test_snapshot_is_detached_from_store() {
        let store = PostStore::seeded();
        let mut snapshot = store.list_all().unwrap();
        snapshot.clear();

        assert_eq!(store.len().unwrap(), 3);
    }

    #[test]
    fn test_list_all_is_idempotent() {
        let store = PostStore::seeded();
        store.create("x", "y", "z").unwrap();

        assert_eq!(store.list_all().unwrap(), store.list_all().unwrap());
    }

    #[test]
    fn test_concurrent_creates_assign_unique_ids() {
        let store = Arc::new(PostStore::seeded());
        let handles: Vec<_> = (0..8)
            .map(|worker| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    (0..25)
                        .map(|i| {
                            store
                                .create(&format!("w{worker}"), "user", &format!("post {i}"))
                                .unwrap()
                                .id
                        })
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        let mut ids: Vec<PostId> = handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .collect();
        ids.sort_unstable();

        let expected: Vec<PostId> = (4..4 + 200).collect();
        assert_eq!(ids, expected);
    }
}
