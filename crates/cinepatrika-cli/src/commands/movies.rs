use crate::commands::{self, home};
use crate::output::{Output, OutputFormat};
use cine_review_client::ReviewApi;
use cine_review_config::SiteConfig;
use cine_review_models::format;
use color_eyre::Result;
use owo_colors::OwoColorize;

pub async fn run_featured(config: &SiteConfig, output: &Output) -> Result<()> {
    let api = commands::api_client(config)?;
    let movies = api.featured_movies().await?;

    if output.format() != OutputFormat::Human {
        output.json(&serde_json::to_value(&movies)?);
        return Ok(());
    }

    if movies.is_empty() {
        output.info("No featured movies right now.");
        return Ok(());
    }
    println!("{}", home::movie_table(&movies));
    Ok(())
}

pub async fn run_search(
    config: &SiteConfig,
    query: &str,
    language: &str,
    output: &Output,
) -> Result<()> {
    let api = commands::api_client(config)?;
    let movies = api.search_movies(query, language).await?;

    if output.format() != OutputFormat::Human {
        output.json(&serde_json::to_value(&movies)?);
        return Ok(());
    }

    if movies.is_empty() {
        output.info(format!("No movies matched \"{query}\"."));
        return Ok(());
    }
    println!("{}", home::movie_table(&movies));
    Ok(())
}

pub async fn run_show(config: &SiteConfig, id: &str, output: &Output) -> Result<()> {
    let api = commands::api_client(config)?;
    let movie = api.movie(id).await?;

    if output.format() != OutputFormat::Human {
        output.json(&serde_json::to_value(&movie)?);
        return Ok(());
    }

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
    if !movie.genre.is_empty() {
        println!("Genre: {}", movie.genre.join(", "));
    }
    if let Some(industry) = &movie.industry {
        println!("Industry: {industry}");
    }
    if let Some(director) = &movie.director {
        println!("Director: {director}");
    }
    if !movie.cast.is_empty() {
        println!("मुख्य कलाकार • Starring: {}", movie.cast.join(", "));
    }
    if let Some(synopsis) = &movie.synopsis {
        println!();
        println!("{synopsis}");
    }
    if let Some(excerpt) = &movie.review_excerpt {
        println!();
        println!("{}", excerpt.italic());
    }
    if let Some(trailer) = &movie.trailer_url {
        println!();
        println!("ट्रेलर देखें • Watch Trailer: {}", trailer.cyan());
    }
    println!();
    Ok(())
}
