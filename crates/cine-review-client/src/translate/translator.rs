use crate::translate::TranslationProvider;
use cine_review_models::SOURCE_LANGUAGE;
use std::collections::HashMap;
use std::sync::Mutex;
use tracing::debug;

/// How many leading chars of the source text participate in the cache key.
/// Two long texts sharing a 100-char prefix and target language collide;
/// that is the documented (if arguably buggy) behavior of the site and is
/// preserved for compatibility. Keys are char-counted so Devanagari text
/// never splits a code point.
const CACHE_KEY_PREFIX_CHARS: usize = 100;

/// Session-scoped translation front end: provider + append-only cache.
///
/// The cache is an explicit object owned by whoever constructs the
/// translator; there is no module-level singleton. Failed translations are
/// never cached, so a later call retries the provider.
pub struct Translator<P> {
    provider: P,
    source_language: String,
    cache: Mutex<HashMap<String, String>>,
}

impl<P: TranslationProvider> Translator<P> {
    pub fn new(provider: P) -> Self {
        Self::with_source_language(provider, SOURCE_LANGUAGE)
    }

    pub fn with_source_language(provider: P, source_language: &str) -> Self {
        Self {
            provider,
            source_language: source_language.to_string(),
            cache: Mutex::new(HashMap::new()),
        }
    }

    fn cache_key(target: &str, text: &str) -> String {
        let prefix: String = text.chars().take(CACHE_KEY_PREFIX_CHARS).collect();
        format!("{target}:{prefix}")
    }

    /// Translate `text` into `target`, or annotate it when the provider
    /// fails. Never returns an error: the widget always has something to
    /// render.
    ///
    /// Selecting the source language is a no-op short-circuit — the original
    /// text comes back without a provider call and without touching the
    /// cache.
    pub async fn translate(&self, text: &str, target: &str) -> String {
        if target == self.source_language {
            return text.to_string();
        }

        let key = Self::cache_key(target, text);
        if let Some(hit) = self.cache.lock().unwrap().get(&key).cloned() {
            debug!("translation cache hit for {}", target);
            return hit;
        }

        match self.provider.translate(text, &self.source_language, target).await {
            Ok(translated) => {
                self.cache.lock().unwrap().insert(key, translated.clone());
                translated
            }
            Err(err) => {
                debug!("translation failed, annotating original: {}", err);
                format!("{} [{} translation unavailable]", text, target.to_uppercase())
            }
        }
    }

    pub fn clear_cache(&self) {
        self.cache.lock().unwrap().clear();
    }

    pub fn cached_entries(&self) -> usize {
        self.cache.lock().unwrap().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::translate::StaticProvider;

    #[tokio::test]
    async fn second_identical_call_is_a_cache_hit() {
        let translator = Translator::new(StaticProvider::new());

        let first = translator.translate("Hello", "hi").await;
        let second = translator.translate("Hello", "hi").await;

        assert_eq!(first, "[hi] Hello");
        assert_eq!(second, first);
        assert_eq!(translator.provider.calls(), 1);
        assert_eq!(translator.cached_entries(), 1);
    }

    #[tokio::test]
    async fn source_language_is_a_no_op() {
        let translator = Translator::new(StaticProvider::new());

        let result = translator.translate("Hello", "en").await;

        assert_eq!(result, "Hello");
        assert_eq!(translator.provider.calls(), 0);
        assert_eq!(translator.cached_entries(), 0);
    }

    #[tokio::test]
    async fn failure_annotates_original_and_is_not_cached() {
        let translator = Translator::new(StaticProvider::failing());

        let result = translator.translate("Hello", "hi").await;
        assert_eq!(result, "Hello [HI translation unavailable]");
        assert_eq!(translator.cached_entries(), 0);

        // The next call retries the provider instead of serving the fallback.
        let _ = translator.translate("Hello", "hi").await;
        assert_eq!(translator.provider.calls(), 2);
    }

    #[tokio::test]
    async fn long_texts_sharing_a_prefix_collide() {
        let translator = Translator::new(StaticProvider::new());
        let prefix: String = "x".repeat(100);
        let a = format!("{prefix} first tail");
        let b = format!("{prefix} second tail");

        let first = translator.translate(&a, "hi").await;
        let second = translator.translate(&b, "hi").await;

        // Same cache slot: the second call returns the first translation.
        assert_eq!(second, first);
        assert_eq!(translator.provider.calls(), 1);
    }

    #[tokio::test]
    async fn distinct_targets_do_not_collide() {
        let translator = Translator::new(StaticProvider::new());

        let hindi = translator.translate("Hello", "hi").await;
        let tamil = translator.translate("Hello", "ta").await;

        assert_eq!(hindi, "[hi] Hello");
        assert_eq!(tamil, "[ta] Hello");
        assert_eq!(translator.provider.calls(), 2);
    }

    #[tokio::test]
    async fn clear_cache_forces_refetch() {
        let translator = Translator::new(StaticProvider::new());

        let _ = translator.translate("Hello", "hi").await;
        translator.clear_cache();
        let _ = translator.translate("Hello", "hi").await;

        assert_eq!(translator.provider.calls(), 2);
    }
}
