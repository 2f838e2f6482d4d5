mod client;

pub use client::ApiClient;

use crate::error::ApiError;
use async_trait::async_trait;
use cine_review_models::{
    ApproveReviewRequest, FailedMappingsResponse, MigrationStatus, Movie, PreviewPostsResponse,
    QuickSubscribeRequest, Review, SubscribeResponse, SubscriptionRequest, UnsubscribeResponse,
};

/// The site REST API as consumed by the client-side logic.
///
/// Core behavior (fallback loading, subscription flows, the migration
/// workflow) is written against this trait so it can be exercised with an
/// in-memory fake; `ApiClient` is the production implementation.
#[async_trait]
pub trait ReviewApi: Send + Sync {
    async fn health(&self) -> Result<serde_json::Value, ApiError>;

    async fn featured_movies(&self) -> Result<Vec<Movie>, ApiError>;
    async fn search_movies(&self, query: &str, language: &str) -> Result<Vec<Movie>, ApiError>;
    async fn movie(&self, id: &str) -> Result<Movie, ApiError>;

    async fn latest_reviews(&self, limit: u32) -> Result<Vec<Review>, ApiError>;
    async fn review(&self, id: &str) -> Result<Review, ApiError>;

    async fn subscribe(&self, request: &SubscriptionRequest)
        -> Result<SubscribeResponse, ApiError>;
    async fn quick_subscribe(
        &self,
        request: &QuickSubscribeRequest,
    ) -> Result<SubscribeResponse, ApiError>;
    async fn unsubscribe(&self, email: &str) -> Result<UnsubscribeResponse, ApiError>;

    async fn migration_status(&self) -> Result<MigrationStatus, ApiError>;
    async fn start_migration(&self) -> Result<(), ApiError>;
    async fn preview_posts(&self, limit: u32) -> Result<PreviewPostsResponse, ApiError>;
    async fn failed_mappings(&self) -> Result<FailedMappingsResponse, ApiError>;
    async fn approve_review(&self, request: &ApproveReviewRequest) -> Result<(), ApiError>;
}
