pub mod config;
pub mod paths;

pub use config::{BackendConfig, MigrationConfig, SiteConfig, TranslationConfig};
pub use paths::PathManager;

/// Environment variable that overrides the backend base URL. The web and
/// mobile frontends each read their own platform variable; this is the CLI's
/// equivalent and the only externally meaningful setting.
pub const BACKEND_URL_ENV: &str = "CINEPATRIKA_BACKEND_URL";
