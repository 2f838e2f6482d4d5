pub mod config;
pub mod health;
pub mod home;
pub mod migration;
pub mod movies;
pub mod reviews;
pub mod subscribe;
pub mod translate;

use crate::output::Output;
use cine_review_client::ApiClient;
use cine_review_config::{PathManager, SiteConfig};
use cine_review_core::{Banner, BannerKind};
use color_eyre::Result;

/// Effective configuration: file (if any), then env override, then the
/// `--base-url` flag on top.
pub fn load_config(base_url_flag: Option<&str>) -> Result<SiteConfig> {
    let paths = PathManager::default();
    let config_file = paths.config_file();
    let mut config = SiteConfig::load_or_default(&config_file)
        .map_err(|e| color_eyre::eyre::eyre!("Failed to load config from {}: {}", config_file.display(), e))?;
    if let Some(url) = base_url_flag {
        config.backend.base_url = url.trim_end_matches('/').to_string();
    }
    Ok(config)
}

pub fn api_client(config: &SiteConfig) -> Result<ApiClient> {
    Ok(ApiClient::new(&config.backend.base_url)?)
}

/// Print a form status banner through the shared output channel.
pub fn print_banner(banner: &Banner, output: &Output) {
    match banner.kind {
        BannerKind::Success => output.success(&banner.message),
        BannerKind::Error => output.error(&banner.message),
    }
}
