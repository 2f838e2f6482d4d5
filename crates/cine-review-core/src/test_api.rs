//! In-memory `ReviewApi` fake used across the core test suites.

use async_trait::async_trait;
use cine_review_client::{ApiError, ReviewApi};
use cine_review_models::{
    ApproveReviewRequest, FailedMapping, FailedMappingsResponse, MigrationStatus, Movie,
    PreviewPostsResponse, QuickSubscribeRequest, Review, SubscribeResponse, SubscriptionRequest,
    UnsubscribeResponse,
};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

fn server_error() -> ApiError {
    ApiError::Api { status: 500, detail: None }
}

fn sample_movie() -> Movie {
    serde_json::from_str(
        r#"{"id": 1, "title": "जवान", "title_eng": "Jawan", "year": 2023, "rating": 4.5,
            "poster": "p", "trailer_url": "https://yt", "industry": "Bollywood"}"#,
    )
    .unwrap()
}

fn sample_review() -> Review {
    serde_json::from_str(
        r#"{"id": 1, "movie_id": 1, "title": "जवान: A Socially Conscious Spectacle",
            "author": "Priya Sharma", "rating": 4.5, "tags": ["Bollywood", "Action"]}"#,
    )
    .unwrap()
}

pub struct FakeApi {
    movies: Vec<Movie>,
    reviews: Vec<Review>,
    fail_movies: bool,
    fail_reviews: bool,
    fail_subscribe: bool,
    subscribe_response: SubscribeResponse,
    /// Statuses served in order by `migration_status`; the last one repeats
    /// once the queue drains.
    statuses: Mutex<VecDeque<MigrationStatus>>,
    last_status: Mutex<MigrationStatus>,
    pub approvals: Mutex<Vec<ApproveReviewRequest>>,
    featured_calls: AtomicUsize,
    review_calls: AtomicUsize,
    status_calls: AtomicUsize,
    preview_calls: AtomicUsize,
    failed_mapping_calls: AtomicUsize,
    start_calls: AtomicUsize,
    subscribe_calls: AtomicUsize,
}

impl FakeApi {
    pub fn new() -> Self {
        Self {
            movies: vec![sample_movie()],
            reviews: vec![sample_review()],
            fail_movies: false,
            fail_reviews: false,
            fail_subscribe: false,
            subscribe_response: SubscribeResponse::default(),
            statuses: Mutex::new(VecDeque::new()),
            last_status: Mutex::new(MigrationStatus {
                status: "running".into(),
                message: None,
                total_posts: 0,
                processed_posts: 0,
                mapped_movies: 0,
                failed_mappings: 0,
            }),
            approvals: Mutex::new(Vec::new()),
            featured_calls: AtomicUsize::new(0),
            review_calls: AtomicUsize::new(0),
            status_calls: AtomicUsize::new(0),
            preview_calls: AtomicUsize::new(0),
            failed_mapping_calls: AtomicUsize::new(0),
            start_calls: AtomicUsize::new(0),
            subscribe_calls: AtomicUsize::new(0),
        }
    }

    pub fn failing_movies(mut self) -> Self {
        self.fail_movies = true;
        self
    }

    pub fn failing_reviews(mut self) -> Self {
        self.fail_reviews = true;
        self
    }

    pub fn failing_subscribe(mut self) -> Self {
        self.fail_subscribe = true;
        self
    }

    pub fn with_reviews(mut self, reviews: Vec<Review>) -> Self {
        self.reviews = reviews;
        self
    }

    pub fn with_subscribe_response(mut self, response: SubscribeResponse) -> Self {
        self.subscribe_response = response;
        self
    }

    pub fn with_statuses(self, statuses: Vec<&str>) -> Self {
        {
            let mut queue = self.statuses.lock().unwrap();
            for status in statuses {
                queue.push_back(MigrationStatus {
                    status: status.to_string(),
                    message: None,
                    total_posts: 12,
                    processed_posts: 12,
                    mapped_movies: 9,
                    failed_mappings: 3,
                });
            }
        }
        self
    }

    pub fn featured_calls(&self) -> usize {
        self.featured_calls.load(Ordering::SeqCst)
    }

    pub fn review_calls(&self) -> usize {
        self.review_calls.load(Ordering::SeqCst)
    }

    pub fn status_calls(&self) -> usize {
        self.status_calls.load(Ordering::SeqCst)
    }

    pub fn preview_calls(&self) -> usize {
        self.preview_calls.load(Ordering::SeqCst)
    }

    pub fn failed_mapping_calls(&self) -> usize {
        self.failed_mapping_calls.load(Ordering::SeqCst)
    }

    pub fn start_calls(&self) -> usize {
        self.start_calls.load(Ordering::SeqCst)
    }

    pub fn subscribe_calls(&self) -> usize {
        self.subscribe_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ReviewApi for FakeApi {
    async fn health(&self) -> Result<serde_json::Value, ApiError> {
        Ok(serde_json::json!({"status": "ok"}))
    }

    async fn featured_movies(&self) -> Result<Vec<Movie>, ApiError> {
        self.featured_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_movies {
            return Err(server_error());
        }
        Ok(self.movies.clone())
    }

    async fn search_movies(&self, query: &str, _language: &str) -> Result<Vec<Movie>, ApiError> {
        if self.fail_movies {
            return Err(server_error());
        }
        Ok(self
            .movies
            .iter()
            .filter(|movie| {
                movie
                    .title_eng
                    .as_deref()
                    .unwrap_or(&movie.title)
                    .to_lowercase()
                    .contains(&query.to_lowercase())
            })
            .cloned()
            .collect())
    }

    async fn movie(&self, id: &str) -> Result<Movie, ApiError> {
        self.movies
            .iter()
            .find(|movie| movie.id == id)
            .cloned()
            .ok_or(ApiError::Api { status: 404, detail: Some("Movie not found".into()) })
    }

    async fn latest_reviews(&self, _limit: u32) -> Result<Vec<Review>, ApiError> {
        self.review_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_reviews {
            return Err(server_error());
        }
        Ok(self.reviews.clone())
    }

    async fn review(&self, id: &str) -> Result<Review, ApiError> {
        self.reviews
            .iter()
            .find(|review| review.id == id)
            .cloned()
            .ok_or(ApiError::Api { status: 404, detail: Some("Review not found".into()) })
    }

    async fn subscribe(
        &self,
        _request: &SubscriptionRequest,
    ) -> Result<SubscribeResponse, ApiError> {
        self.subscribe_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_subscribe {
            return Err(ApiError::Api { status: 500, detail: Some("Failed to create subscription".into()) });
        }
        Ok(self.subscribe_response.clone())
    }

    async fn quick_subscribe(
        &self,
        _request: &QuickSubscribeRequest,
    ) -> Result<SubscribeResponse, ApiError> {
        self.subscribe_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_subscribe {
            return Err(server_error());
        }
        Ok(self.subscribe_response.clone())
    }

    async fn unsubscribe(&self, _email: &str) -> Result<UnsubscribeResponse, ApiError> {
        if self.fail_subscribe {
            return Err(server_error());
        }
        Ok(UnsubscribeResponse {
            status: Some("success".into()),
            message: Some("Successfully unsubscribed".into()),
        })
    }

    async fn migration_status(&self) -> Result<MigrationStatus, ApiError> {
        self.status_calls.fetch_add(1, Ordering::SeqCst);
        let mut queue = self.statuses.lock().unwrap();
        if let Some(status) = queue.pop_front() {
            *self.last_status.lock().unwrap() = status.clone();
            return Ok(status);
        }
        Ok(self.last_status.lock().unwrap().clone())
    }

    async fn start_migration(&self) -> Result<(), ApiError> {
        self.start_calls.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn preview_posts(&self, _limit: u32) -> Result<PreviewPostsResponse, ApiError> {
        self.preview_calls.fetch_add(1, Ordering::SeqCst);
        Ok(PreviewPostsResponse { posts: vec![], total: 0 })
    }

    async fn failed_mappings(&self) -> Result<FailedMappingsResponse, ApiError> {
        self.failed_mapping_calls.fetch_add(1, Ordering::SeqCst);
        Ok(FailedMappingsResponse {
            failed_mappings: vec![FailedMapping {
                id: "99".into(),
                title: "Unmapped classic".into(),
                author: None,
                reason: Some("no TMDB match".into()),
            }],
            total: 1,
        })
    }

    async fn approve_review(&self, request: &ApproveReviewRequest) -> Result<(), ApiError> {
        self.approvals.lock().unwrap().push(request.clone());
        Ok(())
    }
}
