//! Translation support for the bilingual widget.
//!
//! A provider trait abstracts the actual MT backend (the free MyMemory
//! endpoint in production, a canned provider in tests) and `Translator`
//! layers the session cache and fallback annotation on top.

mod mock;
mod mymemory;
mod translator;

pub use mock::StaticProvider;
pub use mymemory::MyMemoryProvider;
pub use translator::Translator;

use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TranslateError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("translation failed: {0}")]
    Provider(String),
}

/// A machine-translation backend. Implementations translate a single text
/// between two language codes; batching and caching live above this trait.
#[async_trait]
pub trait TranslationProvider: Send + Sync {
    async fn translate(
        &self,
        text: &str,
        source: &str,
        target: &str,
    ) -> Result<String, TranslateError>;
}
