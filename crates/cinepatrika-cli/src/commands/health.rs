use crate::commands;
use crate::output::{Output, OutputFormat};
use cine_review_client::ReviewApi;
use cine_review_config::SiteConfig;
use color_eyre::Result;

pub async fn run_health(config: &SiteConfig, output: &Output) -> Result<()> {
    let api = commands::api_client(config)?;

    match api.health().await {
        Ok(body) => {
            if output.format() != OutputFormat::Human {
                output.json(&body);
            } else {
                output.success(format!("Backend at {} is up.", config.backend.base_url));
            }
            Ok(())
        }
        Err(err) => {
            output.error(format!("Backend at {} is unreachable: {err}", config.backend.base_url));
            std::process::exit(1);
        }
    }
}
