use crate::error::ApiError;
use crate::rest::ReviewApi;
use async_trait::async_trait;
use cine_review_models::{
    ApproveReviewRequest, FailedMappingsResponse, MigrationStatus, Movie, PreviewPostsResponse,
    QuickSubscribeRequest, Review, SubscribeResponse, SubscriptionRequest, UnsubscribeResponse,
};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, warn};

/// Fixed client-side timeout on all REST calls. On expiry the failure path
/// is identical to any other network failure.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Thin wrapper over the site REST API: base URL joined at `/api`, JSON
/// bodies, request/response logging. No retry and no backoff live here.
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    api_base: String,
}

/// Error body shape the backend uses for non-2xx responses.
#[derive(Deserialize)]
struct ErrorBody {
    detail: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            http,
            api_base: format!("{}/api", base_url.trim_end_matches('/')),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_base, path)
    }

    async fn decode<T: DeserializeOwned>(
        method: &str,
        url: &str,
        response: reqwest::Response,
    ) -> Result<T, ApiError> {
        let status = response.status();
        if !status.is_success() {
            let detail = response
                .json::<ErrorBody>()
                .await
                .ok()
                .and_then(|body| body.detail);
            warn!("API error: {} {} -> {} {:?}", method, url, status, detail);
            return Err(ApiError::Api { status: status.as_u16(), detail });
        }
        debug!("API response: {} {} -> {}", method, url, status);
        Ok(response.json().await?)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let url = self.url(path);
        debug!("API request: GET {}", url);
        let response = self.http.get(&url).query(query).send().await?;
        Self::decode("GET", &url, response).await
    }

    async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
        body: Option<&B>,
    ) -> Result<T, ApiError> {
        let url = self.url(path);
        debug!("API request: POST {}", url);
        let mut request = self.http.post(&url).query(query);
        if let Some(body) = body {
            request = request.json(body);
        }
        let response = request.send().await?;
        Self::decode("POST", &url, response).await
    }
}

#[async_trait]
impl ReviewApi for ApiClient {
    async fn health(&self) -> Result<serde_json::Value, ApiError> {
        self.get_json("/health", &[]).await
    }

    async fn featured_movies(&self) -> Result<Vec<Movie>, ApiError> {
        self.get_json("/movies/featured", &[]).await
    }

    async fn search_movies(&self, query: &str, language: &str) -> Result<Vec<Movie>, ApiError> {
        self.get_json(
            "/movies/search",
            &[("q", query.to_string()), ("language", language.to_string())],
        )
        .await
    }

    async fn movie(&self, id: &str) -> Result<Movie, ApiError> {
        self.get_json(&format!("/movies/{id}"), &[]).await
    }

    async fn latest_reviews(&self, limit: u32) -> Result<Vec<Review>, ApiError> {
        self.get_json("/reviews/latest", &[("limit", limit.to_string())])
            .await
    }

    async fn review(&self, id: &str) -> Result<Review, ApiError> {
        self.get_json(&format!("/reviews/{id}"), &[]).await
    }

    async fn subscribe(
        &self,
        request: &SubscriptionRequest,
    ) -> Result<SubscribeResponse, ApiError> {
        self.post_json("/subscriptions/subscribe", &[], Some(request))
            .await
    }

    async fn quick_subscribe(
        &self,
        request: &QuickSubscribeRequest,
    ) -> Result<SubscribeResponse, ApiError> {
        self.post_json("/subscriptions/quick-subscribe", &[], Some(request))
            .await
    }

    async fn unsubscribe(&self, email: &str) -> Result<UnsubscribeResponse, ApiError> {
        self.post_json::<(), _>(
            "/subscriptions/unsubscribe",
            &[("email", email.to_string())],
            None,
        )
        .await
    }

    async fn migration_status(&self) -> Result<MigrationStatus, ApiError> {
        self.get_json("/migration/status", &[]).await
    }

    async fn start_migration(&self) -> Result<(), ApiError> {
        let _: serde_json::Value = self.post_json::<(), _>("/migration/start", &[], None).await?;
        Ok(())
    }

    async fn preview_posts(&self, limit: u32) -> Result<PreviewPostsResponse, ApiError> {
        self.get_json("/migration/preview-posts", &[("limit", limit.to_string())])
            .await
    }

    async fn failed_mappings(&self) -> Result<FailedMappingsResponse, ApiError> {
        self.get_json("/migration/failed-mappings", &[]).await
    }

    async fn approve_review(&self, request: &ApproveReviewRequest) -> Result<(), ApiError> {
        let _: serde_json::Value = self
            .post_json("/migration/approve-review", &[], Some(request))
            .await?;
        Ok(())
    }
}
