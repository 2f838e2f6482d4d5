use crate::commands::{self, home};
use crate::output::{Output, OutputFormat};
use cine_review_client::ReviewApi;
use cine_review_config::SiteConfig;
use cine_review_core::{fetch, filter_reviews, CATEGORIES};
use cine_review_models::format;
use color_eyre::Result;
use owo_colors::OwoColorize;

pub async fn run_list(
    config: &SiteConfig,
    search: &str,
    category: &str,
    limit: u32,
    output: &Output,
) -> Result<()> {
    if category != "All" && !CATEGORIES.contains(&category) {
        output.warn(format!(
            "\"{category}\" is not one of the site categories ({}); filtering anyway.",
            CATEGORIES.join(", ")
        ));
    }

    let api = commands::api_client(config)?;
    let loaded = fetch::load_latest_reviews(&api, limit).await;
    let filtered = filter_reviews(&loaded.items, search, category);

    if output.format() != OutputFormat::Human {
        output.json(&serde_json::json!({
            "reviews": filtered,
            "error": loaded.error,
            "from_fallback": loaded.from_fallback,
        }));
        return Ok(());
    }

    if let Some(error) = &loaded.error {
        output.warn(format!("{error} — showing the bundled snapshot"));
    }
    if filtered.is_empty() {
        output.info("No reviews matched the current filters.");
        return Ok(());
    }
    println!("{}", home::review_table(filtered));
    Ok(())
}

pub async fn run_show(config: &SiteConfig, id: &str, output: &Output) -> Result<()> {
    let api = commands::api_client(config)?;
    let review = api.review(id).await?;

    if output.format() != OutputFormat::Human {
        output.json(&serde_json::to_value(&review)?);
        return Ok(());
    }

    println!();
    println!("{}", review.title.bold());
    if let Some(title_hindi) = &review.title_hindi {
        println!("{}", title_hindi.dimmed());
    }
    println!(
        "{} {} • by {}",
        format::star_bar(review.rating).yellow(),
        format::rating_text(review.rating),
        review.author
    );
    if let Some(date) = review.published_at.or(review.created_at) {
        println!("{}", format::long_date(&date).dimmed());
    }
    if let Some(read_time) = &review.read_time {
        println!("{}", read_time.dimmed());
    }
    if !review.tags.is_empty() {
        println!("Tags: {}", review.tags.join(", "));
    }
    if review.tmdb_mapped() {
        println!("{}", "Linked to a movie record".green());
    }
    println!();
    if review.content.is_empty() {
        println!("{}", review.excerpt);
    } else {
        println!("{}", review.content);
    }
    println!();
    Ok(())
}
