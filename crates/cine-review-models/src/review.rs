use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Review {
    #[serde(deserialize_with = "crate::id_string")]
    pub id: String,
    /// Canonical movie this review maps to. Presence of the id alone drives
    /// the "TMDB mapped" indicator; no referential check happens client-side.
    #[serde(default, deserialize_with = "crate::opt_id_string", alias = "movieId")]
    pub movie_id: Option<String>,
    pub title: String,
    #[serde(default)]
    pub title_hindi: Option<String>,
    pub author: String,
    #[serde(default)]
    pub excerpt: String,
    #[serde(default)]
    pub content: String,
    /// Editorial rating on a 0-5 scale.
    pub rating: f32,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, alias = "readTime")]
    pub read_time: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
}

impl Review {
    pub fn tmdb_mapped(&self) -> bool {
        self.movie_id.is_some()
    }
}
