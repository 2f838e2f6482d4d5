use crate::commands;
use crate::output::{Output, OutputFormat};
use cine_review_client::ReviewApi;
use cine_review_config::SiteConfig;
use cine_review_core::{decide_post, load_dashboard, run_migration, PollPolicy, PostEdits};
use cine_review_models::{format, FailedMappingsResponse, MigrationPost, MigrationStatus, PreviewPostsResponse};
use color_eyre::eyre::eyre;
use color_eyre::Result;
use comfy_table::{Cell, Table};
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use std::time::Duration;

pub async fn run_status(config: &SiteConfig, output: &Output) -> Result<()> {
    let api = commands::api_client(config)?;
    let status = api.migration_status().await?;

    if output.format() != OutputFormat::Human {
        output.json(&serde_json::to_value(&status)?);
        return Ok(());
    }

    println!("{}", status_table(&status));
    Ok(())
}

pub async fn run_migration_command(
    config: &SiteConfig,
    limit: u32,
    interval_secs: Option<u64>,
    max_attempts: Option<u32>,
    output: &Output,
) -> Result<()> {
    let api = commands::api_client(config)?;
    let policy = PollPolicy {
        interval: Duration::from_secs(interval_secs.unwrap_or(config.migration.poll_interval_secs)),
        max_attempts: max_attempts.unwrap_or(config.migration.max_poll_attempts),
    };

    let spinner = if output.format() == OutputFormat::Human {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap()
                .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
        );
        spinner.set_message("Migrating WordPress posts...");
        spinner.enable_steady_tick(Duration::from_millis(100));
        Some(spinner)
    } else {
        None
    };

    let result = run_migration(&api, policy, limit).await;
    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }
    let outcome = result?;

    if output.format() != OutputFormat::Human {
        output.json(&serde_json::json!({
            "status": outcome.status,
            "posts": outcome.posts,
            "failed_mappings": outcome.failed,
            "polls": outcome.polls,
        }));
        return Ok(());
    }

    output.success(format!("Migration completed after {} status checks.", outcome.polls));
    println!("{}", status_table(&outcome.status));
    print_posts(&outcome.posts, output);
    print_failed(&outcome.failed, output);
    Ok(())
}

pub async fn run_posts(config: &SiteConfig, limit: u32, output: &Output) -> Result<()> {
    let api = commands::api_client(config)?;
    let dashboard = load_dashboard(&api, limit).await?;

    if output.format() != OutputFormat::Human {
        output.json(&serde_json::to_value(&dashboard.posts)?);
        return Ok(());
    }

    print_posts(&dashboard.posts, output);
    Ok(())
}

pub async fn run_failed(config: &SiteConfig, output: &Output) -> Result<()> {
    let api = commands::api_client(config)?;
    let failed = api.failed_mappings().await?;

    if output.format() != OutputFormat::Human {
        output.json(&serde_json::to_value(&failed)?);
        return Ok(());
    }

    print_failed(&failed, output);
    Ok(())
}

#[allow(clippy::too_many_arguments)]
pub async fn run_approve(
    config: &SiteConfig,
    id: &str,
    approved: bool,
    title: Option<String>,
    excerpt: Option<String>,
    rating: Option<f32>,
    tags: Vec<String>,
    output: &Output,
) -> Result<()> {
    let api = commands::api_client(config)?;

    // The approve endpoint wants the staged post's current state, so look it
    // up in the preview list first.
    let preview = api.preview_posts(500).await?;
    let post = preview
        .posts
        .iter()
        .find(|post| post.id == id)
        .ok_or_else(|| eyre!("no staged post with id {id}"))?;

    let edits = PostEdits {
        title,
        excerpt,
        rating,
        tags: (!tags.is_empty()).then_some(tags),
    };

    let next = decide_post(&api, post, approved, edits).await?;
    output.success(format!("Post {} is now {:?}.", post.id, next));
    Ok(())
}

fn status_table(status: &MigrationStatus) -> Table {
    let mut table = Table::new();
    table.load_preset(comfy_table::presets::UTF8_FULL);
    table.apply_modifier(comfy_table::modifiers::UTF8_ROUND_CORNERS);
    table.set_header(vec![
        Cell::new("Migration").add_attribute(comfy_table::Attribute::Bold),
        Cell::new(&status.status),
    ]);
    if let Some(message) = &status.message {
        table.add_row(vec![Cell::new("Message"), Cell::new(message)]);
    }
    table.add_row(vec![Cell::new("Total posts"), Cell::new(status.total_posts)]);
    table.add_row(vec![Cell::new("Processed"), Cell::new(status.processed_posts)]);
    table.add_row(vec![Cell::new("Mapped movies"), Cell::new(status.mapped_movies)]);
    table.add_row(vec![Cell::new("Failed mappings"), Cell::new(status.failed_mappings)]);
    table
}

fn print_posts(posts: &PreviewPostsResponse, output: &Output) {
    if posts.posts.is_empty() {
        output.info("No posts staged for approval.");
        return;
    }
    println!("{} ({} total)", "Staged posts".bold(), posts.total);
    println!("{}", post_table(&posts.posts));
}

fn post_table(posts: &[MigrationPost]) -> Table {
    let mut table = Table::new();
    table.load_preset(comfy_table::presets::UTF8_FULL);
    table.apply_modifier(comfy_table::modifiers::UTF8_ROUND_CORNERS);
    table.set_header(vec!["ID", "Title", "Status", "TMDB", "Rating", "Created"]);
    for post in posts {
        let created = post
            .created_at
            .map(|date| format::short_date(&date))
            .unwrap_or_default();
        table.add_row(vec![
            Cell::new(&post.id),
            Cell::new(format::truncate_excerpt(&post.title, 48)),
            Cell::new(format!("{:?}", post.status)),
            Cell::new(if post.tmdb_mapped() { "✓" } else { "✗" }),
            Cell::new(post.rating.map(format::rating_text).unwrap_or_default()),
            Cell::new(created),
        ]);
    }
    table
}

fn print_failed(failed: &FailedMappingsResponse, output: &Output) {
    if failed.failed_mappings.is_empty() {
        output.info("No failed TMDB mappings.");
        return;
    }
    println!("{} ({} total)", "Failed TMDB mappings".bold(), failed.total);
    let mut table = Table::new();
    table.load_preset(comfy_table::presets::UTF8_FULL);
    table.apply_modifier(comfy_table::modifiers::UTF8_ROUND_CORNERS);
    table.set_header(vec!["ID", "Title", "Author", "Reason"]);
    for mapping in &failed.failed_mappings {
        table.add_row(vec![
            Cell::new(&mapping.id),
            Cell::new(&mapping.title),
            Cell::new(mapping.author.clone().unwrap_or_default()),
            Cell::new(mapping.reason.clone().unwrap_or_default()),
        ]);
    }
    println!("{table}");
}
