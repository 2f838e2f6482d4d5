use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct SiteConfig {
    #[serde(default)]
    pub backend: BackendConfig,
    #[serde(default)]
    pub migration: MigrationConfig,
    #[serde(default)]
    pub translation: TranslationConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BackendConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MigrationConfig {
    #[serde(default = "default_poll_interval_secs")]
    pub poll_interval_secs: u64,
    #[serde(default = "default_max_poll_attempts")]
    pub max_poll_attempts: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TranslationConfig {
    #[serde(default = "default_source_language")]
    pub source_language: String,
    #[serde(default = "default_target_language")]
    pub default_target: String,
}

fn default_base_url() -> String {
    "http://localhost:8001".to_string()
}

fn default_poll_interval_secs() -> u64 {
    2
}

fn default_max_poll_attempts() -> u32 {
    150
}

fn default_source_language() -> String {
    "en".to_string()
}

fn default_target_language() -> String {
    "hi".to_string()
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self { base_url: default_base_url() }
    }
}

impl Default for MigrationConfig {
    fn default() -> Self {
        Self {
            poll_interval_secs: default_poll_interval_secs(),
            max_poll_attempts: default_max_poll_attempts(),
        }
    }
}

impl Default for TranslationConfig {
    fn default() -> Self {
        Self {
            source_language: default_source_language(),
            default_target: default_target_language(),
        }
    }
}

impl SiteConfig {
    /// Load from a TOML file, falling back to defaults when the file does
    /// not exist. The backend URL env override is applied in both cases.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        let mut config = if path.exists() {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read config from {}", path.display()))?;
            toml::from_str(&content)
                .with_context(|| format!("invalid config at {}", path.display()))?
        } else {
            Self::default()
        };
        config.apply_env();
        Ok(config)
    }

    /// Apply the `CINEPATRIKA_BACKEND_URL` override when set and non-empty.
    pub fn apply_env(&mut self) {
        if let Ok(url) = std::env::var(crate::BACKEND_URL_ENV) {
            if !url.is_empty() {
                self.backend.base_url = url;
            }
        }
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self).context("failed to serialize config")?;
        std::fs::write(path, content)
            .with_context(|| format!("failed to write config to {}", path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_site_behavior() {
        let config = SiteConfig::default();
        assert_eq!(config.backend.base_url, "http://localhost:8001");
        assert_eq!(config.migration.poll_interval_secs, 2);
        assert_eq!(config.migration.max_poll_attempts, 150);
        assert_eq!(config.translation.source_language, "en");
        assert_eq!(config.translation.default_target, "hi");
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let config: SiteConfig = toml::from_str(
            r#"
            [backend]
            base_url = "https://api.example.com"
            "#,
        )
        .unwrap();
        assert_eq!(config.backend.base_url, "https://api.example.com");
        assert_eq!(config.migration.poll_interval_secs, 2);
    }

    #[test]
    fn round_trips_through_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = SiteConfig::default();
        config.backend.base_url = "https://cinepatrika.example".into();
        config.migration.max_poll_attempts = 10;
        config.save(&path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let loaded: SiteConfig = toml::from_str(&content).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = SiteConfig::load_or_default(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config.migration.poll_interval_secs, 2);
    }
}
