use crate::translate::{TranslateError, TranslationProvider};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Deterministic provider for tests and offline use: returns
/// `"[{target}] {text}"` and counts how many times it was invoked, or fails
/// every call when constructed with `failing()`.
pub struct StaticProvider {
    calls: AtomicUsize,
    fail: bool,
}

impl StaticProvider {
    pub fn new() -> Self {
        Self { calls: AtomicUsize::new(0), fail: false }
    }

    pub fn failing() -> Self {
        Self { calls: AtomicUsize::new(0), fail: true }
    }

    /// Number of translate calls that reached this provider.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Default for StaticProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TranslationProvider for StaticProvider {
    async fn translate(
        &self,
        text: &str,
        _source: &str,
        target: &str,
    ) -> Result<String, TranslateError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(TranslateError::Provider("static provider set to fail".into()));
        }
        Ok(format!("[{target}] {text}"))
    }
}
