pub mod fallback;
pub mod fetch;
pub mod filter;
pub mod migration;
pub mod search;
pub mod subscribe;
pub mod widget;

#[cfg(test)]
mod test_api;

pub use fetch::{load_featured_movies, load_home, load_latest_reviews, HomeScreen, Loaded};
pub use filter::{filter_reviews, matches_category, matches_query, CATEGORIES};
pub use migration::{
    decide_post, load_dashboard, run_migration, Dashboard, MigrationError, MigrationOutcome,
    PollPolicy, PostEdits,
};
pub use search::Debounce;
pub use subscribe::{Banner, BannerKind, FormEvent, QuickSubscribeForm, SubscriptionForm};
pub use widget::{TranslatableText, WidgetEffect};
