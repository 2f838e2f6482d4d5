use crate::output::{Output, OutputFormat};
use cine_review_config::{PathManager, SiteConfig, BACKEND_URL_ENV};
use color_eyre::Result;
use comfy_table::{Cell, Table};

pub fn run_show(config: &SiteConfig, output: &Output) -> Result<()> {
    if output.format() != OutputFormat::Human {
        output.json(&serde_json::to_value(config)?);
        return Ok(());
    }

    let paths = PathManager::default();

    let mut table = Table::new();
    table.load_preset(comfy_table::presets::UTF8_FULL);
    table.apply_modifier(comfy_table::modifiers::UTF8_ROUND_CORNERS);
    table.set_header(vec![
        Cell::new("Setting").add_attribute(comfy_table::Attribute::Bold),
        Cell::new("Value").add_attribute(comfy_table::Attribute::Bold),
    ]);
    table.add_row(vec![
        Cell::new("Config file"),
        Cell::new(paths.config_file().display().to_string()),
    ]);
    table.add_row(vec![Cell::new("Backend URL"), Cell::new(&config.backend.base_url)]);
    table.add_row(vec![
        Cell::new("Poll interval"),
        Cell::new(format!("{}s", config.migration.poll_interval_secs)),
    ]);
    table.add_row(vec![
        Cell::new("Max poll attempts"),
        Cell::new(config.migration.max_poll_attempts),
    ]);
    table.add_row(vec![
        Cell::new("Source language"),
        Cell::new(&config.translation.source_language),
    ]);
    table.add_row(vec![
        Cell::new("Default target"),
        Cell::new(&config.translation.default_target),
    ]);
    println!("{table}");

    if std::env::var(BACKEND_URL_ENV).is_ok() {
        output.info(format!("Backend URL comes from ${BACKEND_URL_ENV}."));
    }
    Ok(())
}

pub fn run_init(output: &Output) -> Result<()> {
    let paths = PathManager::default();
    let path = paths.config_file();

    if path.exists() {
        output.warn(format!("Config already exists at {}; leaving it alone.", path.display()));
        return Ok(());
    }

    SiteConfig::default()
        .save(&path)
        .map_err(|e| color_eyre::eyre::eyre!("Failed to write {}: {}", path.display(), e))?;
    output.success(format!("Wrote default config to {}.", path.display()));
    Ok(())
}
