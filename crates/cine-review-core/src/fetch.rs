//! Data loading with fallback substitution.
//!
//! One request per load, no retry, no cancellation. On failure the fixed
//! error string is kept alongside the bundled snapshot so primary pages
//! always render something.

use crate::fallback;
use cine_review_client::ReviewApi;
use cine_review_models::{Movie, Review};
use tracing::warn;

pub const FEATURED_MOVIES_ERROR: &str = "Failed to load featured movies";
pub const LATEST_REVIEWS_ERROR: &str = "Failed to load reviews";

/// Result of a page-level fetch.
///
/// An empty successful response is a success (`error` is None): whether an
/// empty list renders as the same message as a failed one is a presentation
/// choice, and the two states stay distinguishable here.
#[derive(Debug, Clone, PartialEq)]
pub struct Loaded<T> {
    pub items: Vec<T>,
    pub error: Option<String>,
    pub from_fallback: bool,
}

impl<T> Loaded<T> {
    fn fresh(items: Vec<T>) -> Self {
        Self { items, error: None, from_fallback: false }
    }

    fn fallback(items: Vec<T>, error: &str) -> Self {
        Self { items, error: Some(error.to_string()), from_fallback: true }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

pub async fn load_featured_movies(api: &impl ReviewApi) -> Loaded<Movie> {
    match api.featured_movies().await {
        Ok(movies) => Loaded::fresh(movies),
        Err(err) => {
            warn!("featured movies fetch failed, using fallback: {}", err);
            Loaded::fallback(fallback::featured_movies().to_vec(), FEATURED_MOVIES_ERROR)
        }
    }
}

pub async fn load_latest_reviews(api: &impl ReviewApi, limit: u32) -> Loaded<Review> {
    match api.latest_reviews(limit).await {
        Ok(reviews) => Loaded::fresh(reviews),
        Err(err) => {
            warn!("latest reviews fetch failed, using fallback: {}", err);
            Loaded::fallback(fallback::latest_reviews().to_vec(), LATEST_REVIEWS_ERROR)
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HomeScreen {
    pub movies: Loaded<Movie>,
    pub reviews: Loaded<Review>,
}

/// Home-screen load: featured movies and latest reviews fetched
/// concurrently, with no ordering dependency between them.
pub async fn load_home(api: &impl ReviewApi, review_limit: u32) -> HomeScreen {
    let (movies, reviews) = futures::join!(
        load_featured_movies(api),
        load_latest_reviews(api, review_limit),
    );
    HomeScreen { movies, reviews }
}
