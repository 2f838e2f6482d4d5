//! Bundled static snapshot of movies and reviews.
//!
//! When the live API is unreachable, pages render from this dataset instead
//! of going blank. The snapshot is embedded at compile time and parsed once.

use cine_review_models::{Movie, Review};
use std::sync::OnceLock;

static FEATURED_MOVIES: OnceLock<Vec<Movie>> = OnceLock::new();
static LATEST_REVIEWS: OnceLock<Vec<Review>> = OnceLock::new();

pub fn featured_movies() -> &'static [Movie] {
    FEATURED_MOVIES.get_or_init(|| {
        serde_json::from_str(include_str!("../data/featured_movies.json"))
            .expect("bundled featured_movies.json is valid")
    })
}

pub fn latest_reviews() -> &'static [Review] {
    LATEST_REVIEWS.get_or_init(|| {
        serde_json::from_str(include_str!("../data/latest_reviews.json"))
            .expect("bundled latest_reviews.json is valid")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_is_never_empty() {
        assert!(!featured_movies().is_empty());
        assert!(!latest_reviews().is_empty());
    }

    #[test]
    fn snapshot_leads_with_jawan() {
        let hero = &featured_movies()[0];
        assert_eq!(hero.title, "जवान");
        assert_eq!(hero.title_eng.as_deref(), Some("Jawan"));
        assert_eq!(hero.rating, 4.5);
        assert!(hero.trailer_url.is_some());
    }

    #[test]
    fn snapshot_reviews_are_tmdb_mapped() {
        assert!(latest_reviews().iter().all(|review| review.tmdb_mapped()));
    }
}
