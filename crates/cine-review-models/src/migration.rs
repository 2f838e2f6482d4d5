use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Progress snapshot from GET /api/migration/status.
///
/// `status` is the backend's free-form state string ("not_started",
/// "started", "running", "completed", ...); only "completed" has meaning to
/// the client, so it stays a string rather than an enum.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MigrationStatus {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub total_posts: u64,
    #[serde(default)]
    pub processed_posts: u64,
    #[serde(default)]
    pub mapped_movies: u64,
    #[serde(default)]
    pub failed_mappings: u64,
}

impl MigrationStatus {
    pub fn is_completed(&self) -> bool {
        self.status == "completed"
    }
}

/// Approval lifecycle of a migrated post: pending is the only non-terminal
/// state.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ApprovalStatus {
    Pending,
    Approved,
    Rejected,
}

impl Default for ApprovalStatus {
    fn default() -> Self {
        ApprovalStatus::Pending
    }
}

/// A WordPress post staged for editorial approval.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MigrationPost {
    #[serde(deserialize_with = "crate::id_string")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub title_hindi: Option<String>,
    #[serde(default)]
    pub excerpt: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub read_time: Option<String>,
    #[serde(default)]
    pub rating: Option<f32>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, deserialize_with = "crate::opt_id_string")]
    pub movie_id: Option<String>,
    #[serde(default)]
    pub status: ApprovalStatus,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl MigrationPost {
    pub fn tmdb_mapped(&self) -> bool {
        self.movie_id.is_some()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct PreviewPostsResponse {
    #[serde(default)]
    pub posts: Vec<MigrationPost>,
    #[serde(default)]
    pub total: u64,
}

/// A post the migration could not map to a canonical movie record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FailedMapping {
    #[serde(deserialize_with = "crate::id_string")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub reason: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct FailedMappingsResponse {
    #[serde(default)]
    pub failed_mappings: Vec<FailedMapping>,
    #[serde(default)]
    pub total: u64,
}

/// Operator decision posted to /api/migration/approve-review.
///
/// Edited fields ride along with the decision so the operator can fix up
/// title/excerpt/rating/tags in the same call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApproveReviewRequest {
    pub review_id: String,
    pub approved: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub movie_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_completed_only_for_completed_string() {
        let running: MigrationStatus =
            serde_json::from_str(r#"{"status": "running", "total_posts": 10}"#).unwrap();
        assert!(!running.is_completed());

        let done: MigrationStatus =
            serde_json::from_str(r#"{"status": "completed"}"#).unwrap();
        assert!(done.is_completed());
    }

    #[test]
    fn post_status_defaults_to_pending() {
        let post: MigrationPost =
            serde_json::from_str(r#"{"id": 7, "title": "Old review"}"#).unwrap();
        assert_eq!(post.status, ApprovalStatus::Pending);
        assert!(!post.tmdb_mapped());
    }

    #[test]
    fn approve_request_skips_unedited_fields() {
        let request = ApproveReviewRequest {
            review_id: "7".into(),
            approved: true,
            movie_id: None,
            title: Some("Fixed title".into()),
            excerpt: None,
            rating: None,
            tags: None,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["title"], "Fixed title");
        assert!(json.get("excerpt").is_none());
        assert!(json.get("rating").is_none());
    }
}
