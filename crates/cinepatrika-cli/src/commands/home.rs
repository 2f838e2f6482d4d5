use crate::commands;
use crate::output::{Output, OutputFormat};
use cine_review_config::SiteConfig;
use cine_review_core::fetch;
use cine_review_models::format;
use color_eyre::Result;
use comfy_table::{Cell, Table};
use owo_colors::OwoColorize;
use serde_json::json;

pub async fn run_home(config: &SiteConfig, limit: u32, output: &Output) -> Result<()> {
    let api = commands::api_client(config)?;
    let home = fetch::load_home(&api, limit).await;

    if output.format() != OutputFormat::Human {
        output.json(&json!({
            "movies": home.movies.items,
            "movies_error": home.movies.error,
            "movies_from_fallback": home.movies.from_fallback,
            "reviews": home.reviews.items,
            "reviews_error": home.reviews.error,
            "reviews_from_fallback": home.reviews.from_fallback,
        }));
        return Ok(());
    }

    if let Some(error) = &home.movies.error {
        output.warn(format!("{error} — showing the bundled snapshot"));
    }
    if let Some(hero) = home.movies.items.first() {
        print_hero(hero);
    }
    if home.movies.items.len() > 1 {
        println!("{}", "Featured this week".bold());
        println!("{}", movie_table(&home.movies.items[1..]));
        println!();
    }

    if let Some(error) = &home.reviews.error {
        output.warn(format!("{error} — showing the bundled snapshot"));
    }
    println!("{}", "Latest Reviews".bold());
    println!("{}", review_table(&home.reviews.items));

    Ok(())
}

/// Hero card: Devanagari title first, romanized title under it, rating and
/// cast the way the home page shows them.
fn print_hero(movie: &cine_review_models::Movie) {
    println!();
    println!("{}", movie.title.bold());
    if let Some(title_eng) = movie.display_title_eng() {
        println!("{}", title_eng.dimmed());
    }
    println!(
        "{} {} ({})",
        format::star_bar(movie.rating).yellow(),
        format::rating_text(movie.rating),
        movie.year
    );
    if let Some(excerpt) = &movie.review_excerpt {
        println!("{}", format::truncate_excerpt(excerpt, 160));
    }
    if !movie.cast.is_empty() {
        println!("मुख्य कलाकार • Starring: {}", movie.cast.join(", "));
    }
    if let Some(trailer) = &movie.trailer_url {
        println!("ट्रेलर देखें • Watch Trailer: {}", trailer.cyan());
    }
    println!();
}

pub(crate) fn movie_table(movies: &[cine_review_models::Movie]) -> Table {
    let mut table = Table::new();
    table.load_preset(comfy_table::presets::UTF8_FULL);
    table.apply_modifier(comfy_table::modifiers::UTF8_ROUND_CORNERS);
    table.set_header(vec!["Title", "Year", "Rating", "Genre", "Director"]);
    for movie in movies {
        let title = match movie.display_title_eng() {
            Some(eng) => format!("{} ({})", movie.title, eng),
            None => movie.title.clone(),
        };
        table.add_row(vec![
            Cell::new(title),
            Cell::new(movie.year),
            Cell::new(format!("{} {}", format::star_bar(movie.rating), format::rating_text(movie.rating))),
            Cell::new(movie.genre.join(", ")),
            Cell::new(movie.director.clone().unwrap_or_default()),
        ]);
    }
    table
}

pub(crate) fn review_table<'a>(
    reviews: impl IntoIterator<Item = &'a cine_review_models::Review>,
) -> Table {
    let mut table = Table::new();
    table.load_preset(comfy_table::presets::UTF8_FULL);
    table.apply_modifier(comfy_table::modifiers::UTF8_ROUND_CORNERS);
    table.set_header(vec!["Title", "Author", "Rating", "Tags", "Published"]);
    for review in reviews {
        let published = review
            .published_at
            .or(review.created_at)
            .map(|date| format::long_date(&date))
            .unwrap_or_default();
        table.add_row(vec![
            Cell::new(&review.title),
            Cell::new(&review.author),
            Cell::new(format::rating_text(review.rating)),
            Cell::new(review.tags.join(", ")),
            Cell::new(published),
        ]);
    }
    table
}
