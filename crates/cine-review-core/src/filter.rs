//! Client-side review search and category filter.
//!
//! Pure predicates over fetched review lists; the full list stays in memory
//! and a filtered view is derived from it.

use cine_review_models::Review;

/// Fixed category chips on the reviews page. "All" matches unconditionally.
pub const CATEGORIES: &[&str] = &[
    "All",
    "Bollywood",
    "South Cinema",
    "International",
    "Drama",
    "Action",
    "Comedy",
    "Thriller",
];

/// Case-insensitive substring match against title or author. The empty
/// query matches every review.
pub fn matches_query(review: &Review, query: &str) -> bool {
    let needle = query.to_lowercase();
    review.title.to_lowercase().contains(&needle)
        || review.author.to_lowercase().contains(&needle)
}

/// At least one tag must contain the category (substring, not exact match).
pub fn matches_category(review: &Review, category: &str) -> bool {
    if category == "All" {
        return true;
    }
    let needle = category.to_lowercase();
    review.tags.iter().any(|tag| tag.to_lowercase().contains(&needle))
}

/// Both predicates combined with AND.
pub fn filter_reviews<'a>(reviews: &'a [Review], query: &str, category: &str) -> Vec<&'a Review> {
    reviews
        .iter()
        .filter(|review| matches_query(review, query) && matches_category(review, category))
        .collect()
}
