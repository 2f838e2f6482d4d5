use crate::output::{Output, OutputFormat};
use cine_review_config::SiteConfig;
use cine_review_client::{MyMemoryProvider, Translator};
use cine_review_models::language::{language_by_code, SUPPORTED_LANGUAGES};
use color_eyre::Result;
use serde_json::json;

pub async fn run_translate(
    config: &SiteConfig,
    text: &str,
    target: &str,
    source: Option<&str>,
    output: &Output,
) -> Result<()> {
    if language_by_code(target).is_none() {
        let codes: Vec<&str> = SUPPORTED_LANGUAGES.iter().map(|lang| lang.code).collect();
        output.warn(format!(
            "\"{target}\" is not a site language ({}); trying anyway.",
            codes.join(", ")
        ));
    }

    let source = source.unwrap_or(config.translation.source_language.as_str());
    let provider = MyMemoryProvider::new()?;
    let translator = Translator::with_source_language(provider, source);

    let translated = translator.translate(text, target).await;

    if output.format() != OutputFormat::Human {
        output.json(&json!({
            "source": source,
            "target": target,
            "text": text,
            "translated": translated,
        }));
        return Ok(());
    }

    if let Some(language) = language_by_code(target) {
        output.info(format!("{} ({}):", language.name, language.native));
    }
    println!("{translated}");
    Ok(())
}
