//! WordPress migration workflow.
//!
//! Starting a run kicks the backend off and then polls the status endpoint
//! on a fixed interval until it reports completed. The original dashboard
//! polled forever; here the loop is bounded by a policy and exceeding it is
//! a distinct error. Post approval is a terminal pending -> approved |
//! rejected transition.

use cine_review_client::{ApiError, ReviewApi};
use cine_review_models::{
    ApprovalStatus, ApproveReviewRequest, FailedMappingsResponse, MigrationPost, MigrationStatus,
    PreviewPostsResponse,
};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Error)]
pub enum MigrationError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("migration did not complete after {attempts} status polls")]
    PollTimeout { attempts: u32 },

    #[error("post is already {status:?}; approval is terminal")]
    AlreadyDecided { status: ApprovalStatus },
}

/// Bounded polling policy for a migration run.
#[derive(Debug, Clone, Copy)]
pub struct PollPolicy {
    pub interval: Duration,
    pub max_attempts: u32,
}

impl Default for PollPolicy {
    // 2s cadence, capped at roughly five minutes.
    fn default() -> Self {
        Self { interval: Duration::from_secs(2), max_attempts: 150 }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MigrationOutcome {
    pub status: MigrationStatus,
    pub posts: PreviewPostsResponse,
    pub failed: FailedMappingsResponse,
    /// Status polls issued before completion was observed.
    pub polls: u32,
}

/// Start a migration run and poll until the backend reports completed, then
/// refetch the dependent lists exactly once each.
pub async fn run_migration(
    api: &impl ReviewApi,
    policy: PollPolicy,
    preview_limit: u32,
) -> Result<MigrationOutcome, MigrationError> {
    api.start_migration().await?;
    info!("migration started, polling every {:?}", policy.interval);

    let mut polls = 0;
    let status = loop {
        if polls >= policy.max_attempts {
            return Err(MigrationError::PollTimeout { attempts: polls });
        }
        let status = api.migration_status().await?;
        polls += 1;
        debug!("migration status poll {}: {}", polls, status.status);
        if status.is_completed() {
            break status;
        }
        tokio::time::sleep(policy.interval).await;
    };

    let posts = api.preview_posts(preview_limit).await?;
    let failed = api.failed_mappings().await?;
    info!(
        "migration completed: {} posts staged, {} failed mappings",
        posts.total, failed.total
    );

    Ok(MigrationOutcome { status, posts, failed, polls })
}

/// Current dashboard view: status plus the two post lists.
#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard {
    pub status: MigrationStatus,
    pub posts: PreviewPostsResponse,
    pub failed: FailedMappingsResponse,
}

pub async fn load_dashboard(
    api: &impl ReviewApi,
    preview_limit: u32,
) -> Result<Dashboard, MigrationError> {
    let status = api.migration_status().await?;
    let posts = api.preview_posts(preview_limit).await?;
    let failed = api.failed_mappings().await?;
    Ok(Dashboard { status, posts, failed })
}

/// Operator edits riding along with an approval decision.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PostEdits {
    pub title: Option<String>,
    pub excerpt: Option<String>,
    pub rating: Option<f32>,
    pub tags: Option<Vec<String>>,
}

/// The pending -> approved | rejected transition; both outcomes are
/// terminal.
pub fn transition(current: ApprovalStatus, approved: bool) -> Result<ApprovalStatus, MigrationError> {
    match current {
        ApprovalStatus::Pending => Ok(if approved {
            ApprovalStatus::Approved
        } else {
            ApprovalStatus::Rejected
        }),
        status => Err(MigrationError::AlreadyDecided { status }),
    }
}

/// Post an approval decision for a staged post. Rejecting an already-decided
/// post fails locally without touching the API.
pub async fn decide_post(
    api: &impl ReviewApi,
    post: &MigrationPost,
    approved: bool,
    edits: PostEdits,
) -> Result<ApprovalStatus, MigrationError> {
    let next = transition(post.status, approved)?;

    let request = ApproveReviewRequest {
        review_id: post.id.clone(),
        approved,
        movie_id: post.movie_id.clone(),
        title: edits.title,
        excerpt: edits.excerpt,
        rating: edits.rating,
        tags: edits.tags,
    };
    api.approve_review(&request).await?;
    info!("post {} {}", post.id, if approved { "approved" } else { "rejected" });

    Ok(next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_api::FakeApi;

    fn fast_policy(max_attempts: u32) -> PollPolicy {
        PollPolicy { interval: Duration::ZERO, max_attempts }
    }

    fn pending_post() -> MigrationPost {
        serde_json::from_value(serde_json::json!({
            "id": 7,
            "title": "Old WordPress review",
            "movie_id": 3,
        }))
        .unwrap()
    }

    #[tokio::test]
    async fn polls_until_completed_then_refetches_lists_once() {
        let api = FakeApi::new().with_statuses(vec!["running", "running", "running", "completed"]);

        let outcome = run_migration(&api, fast_policy(10), 50).await.unwrap();

        assert_eq!(outcome.polls, 4);
        assert_eq!(api.start_calls(), 1);
        assert_eq!(api.status_calls(), 4);
        // Dependent lists fetched exactly once, only after completion.
        assert_eq!(api.preview_calls(), 1);
        assert_eq!(api.failed_mapping_calls(), 1);
        assert!(outcome.status.is_completed());
    }

    #[tokio::test]
    async fn immediate_completion_needs_a_single_poll() {
        let api = FakeApi::new().with_statuses(vec!["completed"]);

        let outcome = run_migration(&api, fast_policy(10), 50).await.unwrap();
        assert_eq!(outcome.polls, 1);
    }

    #[tokio::test]
    async fn never_completing_run_hits_the_poll_bound() {
        // FakeApi repeats "running" once its queue drains.
        let api = FakeApi::new().with_statuses(vec!["running"]);

        let err = run_migration(&api, fast_policy(5), 50).await.unwrap_err();

        assert!(matches!(err, MigrationError::PollTimeout { attempts: 5 }));
        assert_eq!(api.status_calls(), 5);
        // No refetch of dependent lists on timeout.
        assert_eq!(api.preview_calls(), 0);
        assert_eq!(api.failed_mapping_calls(), 0);
    }

    #[test]
    fn approval_transitions_are_terminal() {
        assert_eq!(transition(ApprovalStatus::Pending, true).unwrap(), ApprovalStatus::Approved);
        assert_eq!(transition(ApprovalStatus::Pending, false).unwrap(), ApprovalStatus::Rejected);

        assert!(matches!(
            transition(ApprovalStatus::Approved, false),
            Err(MigrationError::AlreadyDecided { status: ApprovalStatus::Approved })
        ));
        assert!(matches!(
            transition(ApprovalStatus::Rejected, true),
            Err(MigrationError::AlreadyDecided { status: ApprovalStatus::Rejected })
        ));
    }

    #[tokio::test]
    async fn decide_post_sends_edits_with_the_decision() {
        let api = FakeApi::new();
        let post = pending_post();
        let edits = PostEdits {
            title: Some("Cleaned-up title".into()),
            rating: Some(4.0),
            ..Default::default()
        };

        let next = decide_post(&api, &post, true, edits).await.unwrap();

        assert_eq!(next, ApprovalStatus::Approved);
        let approvals = api.approvals.lock().unwrap();
        assert_eq!(approvals.len(), 1);
        assert_eq!(approvals[0].review_id, "7");
        assert!(approvals[0].approved);
        assert_eq!(approvals[0].movie_id.as_deref(), Some("3"));
        assert_eq!(approvals[0].title.as_deref(), Some("Cleaned-up title"));
        assert_eq!(approvals[0].rating, Some(4.0));
    }

    #[tokio::test]
    async fn decide_post_refuses_terminal_posts_locally() {
        let api = FakeApi::new();
        let mut post = pending_post();
        post.status = ApprovalStatus::Rejected;

        let err = decide_post(&api, &post, true, PostEdits::default()).await.unwrap_err();

        assert!(matches!(err, MigrationError::AlreadyDecided { .. }));
        assert!(api.approvals.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn dashboard_loads_all_three_views() {
        let api = FakeApi::new().with_statuses(vec!["completed"]);
        let dashboard = load_dashboard(&api, 20).await.unwrap();

        assert!(dashboard.status.is_completed());
        assert_eq!(dashboard.failed.total, 1);
    }
}
