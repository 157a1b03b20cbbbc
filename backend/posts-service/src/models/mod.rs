/// Data models for posts-service
///
/// This module defines:
/// - Post: a single feed entry as stored and as serialized to API clients
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Post identifier assigned by the store
pub type PostId = i64;

/// A feed entry.
///
/// `name`, `username` and `body` are stored trimmed. Counters are plain
/// non-negative integers and start at zero for newly created posts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Post {
    pub id: PostId,
    pub name: String,
    pub username: String,
    pub body: String,
    #[serde(default)]
    pub likes: u64,
    #[serde(default)]
    pub comments: u64,
    #[serde(default)]
    pub shares: u64,
    /// Serialized as naive ISO-8601 (`2024-01-15T10:30:00`, microseconds
    /// appended when non-zero), or `null` when unset
    #[serde(default, with = "naive_iso")]
    #[schema(value_type = Option<String>, format = DateTime)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Post {
    /// Build a fresh post with zeroed counters.
    pub fn new(
        id: PostId,
        name: &str,
        username: &str,
        body: &str,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name: name.trim().to_string(),
            username: username.trim().to_string(),
            body: body.trim().to_string(),
            likes: 0,
            comments: 0,
            shares: 0,
            created_at: Some(created_at),
        }
    }

    /// Set engagement counters (used for seeded content).
    pub fn with_counters(mut self, likes: u64, comments: u64, shares: u64) -> Self {
        self.likes = likes;
        self.comments = comments;
        self.shares = shares;
        self
    }
}

/// Timestamps without an offset suffix, microsecond precision
mod naive_iso {
    use chrono::{DateTime, NaiveDateTime, Utc};
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    const SECONDS: &str = "%Y-%m-%dT%H:%M:%S";

    fn to_naive_string(at: &DateTime<Utc>) -> String {
        let naive = at.naive_utc();
        let base = naive.format(SECONDS).to_string();
        match at.timestamp_subsec_micros() {
            0 => base,
            micros => format!("{base}.{micros:06}"),
        }
    }

    pub fn serialize<S>(value: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(at) => serializer.serialize_str(&to_naive_string(at)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = match Option::<String>::deserialize(deserializer)? {
            Some(raw) => raw,
            None => return Ok(None),
        };

        if let Ok(at) = DateTime::parse_from_rfc3339(&raw) {
            return Ok(Some(at.with_timezone(&Utc)));
        }
        raw.parse::<NaiveDateTime>()
            .map(|naive| Some(naive.and_utc()))
            .map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Timelike};

    #[test]
    fn test_new_post_trims_text_and_zeroes_counters() {
        let at = Utc.with_ymd_and_hms(2024, 2, 1, 8, 0, 0).unwrap();
        let post = Post::new(7, "  Alice ", "\talice\n", " hello ", at);

        assert_eq!(post.id, 7);
        assert_eq!(post.name, "Alice");
        assert_eq!(post.username, "alice");
        assert_eq!(post.body, "hello");
        assert_eq!((post.likes, post.comments, post.shares), (0, 0, 0));
        assert_eq!(post.created_at, Some(at));
    }

    #[test]
    fn test_post_serialization_shape() {
        let at = Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap();
        let post = Post::new(1, "Elon Musk", "elonmusk", "hi", at).with_counters(961, 386, 123);

        let json = serde_json::to_value(&post).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["likes"], 961);
        assert_eq!(json["comments"], 386);
        assert_eq!(json["shares"], 123);
        assert_eq!(json["created_at"], "2024-01-15T10:30:00");
        assert_eq!(json.as_object().unwrap().len(), 8);
    }

    #[test]
    fn test_created_at_keeps_microseconds() {
        let at = Utc
            .with_ymd_and_hms(2024, 3, 9, 18, 5, 7)
            .unwrap()
            .with_nanosecond(250_000_000)
            .unwrap();
        let post = Post::new(2, "a", "b", "c", at);

        let json = serde_json::to_value(&post).unwrap();
        assert_eq!(json["created_at"], "2024-03-09T18:05:07.250000");

        let back: Post = serde_json::from_value(json).unwrap();
        assert_eq!(back.created_at, Some(at));
    }

    #[test]
    fn test_created_at_accepts_offset_timestamps() {
        let post: Post = serde_json::from_str(
            r#"{"id":1,"name":"n","username":"u","body":"b","created_at":"2024-01-15T10:30:00Z"}"#,
        )
        .unwrap();

        let expected = Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap();
        assert_eq!(post.created_at, Some(expected));
    }

    #[test]
    fn test_unset_created_at_serializes_as_null() {
        let mut post = Post::new(1, "a", "b", "c", Utc::now());
        post.created_at = None;

        let json = serde_json::to_value(&post).unwrap();
        assert!(json["created_at"].is_null());
    }

    #[test]
    fn test_missing_counters_default_to_zero() {
        let post: Post = serde_json::from_str(
            r#"{"id":4,"name":"n","username":"u","body":"b"}"#,
        )
        .unwrap();

        assert_eq!((post.likes, post.comments, post.shares), (0, 0, 0));
        assert!(post.created_at.is_none());
    }
}
