//! Translatable-text widget state.
//!
//! Models the derived-state rule explicitly: whenever (text, language)
//! changes and the language is not the source, exactly one fetch is
//! scheduled, and a newer change supersedes any in-flight fetch through a
//! generation counter. Stale results are dropped instead of clobbering the
//! display.

use cine_review_models::SOURCE_LANGUAGE;

/// What the owner of the widget must do after a state change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetEffect {
    /// Nothing to do.
    None,
    /// Display was restored to the original text synchronously.
    Restored,
    /// Issue one translation fetch and report back with this generation.
    FetchTranslation { generation: u64 },
}

#[derive(Debug)]
pub struct TranslatableText {
    original: String,
    displayed: String,
    language: String,
    source_language: String,
    generation: u64,
    in_flight: Option<u64>,
}

impl TranslatableText {
    pub fn new(original: impl Into<String>) -> Self {
        let original = original.into();
        Self {
            displayed: original.clone(),
            original,
            language: SOURCE_LANGUAGE.to_string(),
            source_language: SOURCE_LANGUAGE.to_string(),
            generation: 0,
            in_flight: None,
        }
    }

    pub fn displayed(&self) -> &str {
        &self.displayed
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn is_pending(&self) -> bool {
        self.in_flight.is_some()
    }

    fn schedule_fetch(&mut self) -> WidgetEffect {
        self.generation += 1;
        self.in_flight = Some(self.generation);
        WidgetEffect::FetchTranslation { generation: self.generation }
    }

    /// Switch the target language. Selecting the source language restores
    /// the original synchronously, with no network involved.
    pub fn set_language(&mut self, language: &str) -> WidgetEffect {
        if language == self.language {
            return WidgetEffect::None;
        }
        self.language = language.to_string();
        if language == self.source_language {
            self.displayed = self.original.clone();
            self.in_flight = None;
            return WidgetEffect::Restored;
        }
        self.schedule_fetch()
    }

    /// Replace the source text. While a non-source language is active this
    /// re-translates automatically (a prop change, not a user action).
    pub fn set_text(&mut self, text: impl Into<String>) -> WidgetEffect {
        self.original = text.into();
        if self.language == self.source_language {
            self.displayed = self.original.clone();
            return WidgetEffect::Restored;
        }
        self.schedule_fetch()
    }

    /// Apply a completed fetch. Results from superseded generations are
    /// ignored; returns whether the display changed.
    pub fn apply_translation(&mut self, generation: u64, translated: impl Into<String>) -> bool {
        if self.in_flight != Some(generation) {
            return false;
        }
        self.displayed = translated.into();
        self.in_flight = None;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_in_source_language_with_original_text() {
        let widget = TranslatableText::new("Hello");
        assert_eq!(widget.displayed(), "Hello");
        assert_eq!(widget.language(), "en");
        assert!(!widget.is_pending());
    }

    #[test]
    fn selecting_source_language_restores_without_fetch() {
        let mut widget = TranslatableText::new("Hello");
        let effect = widget.set_language("hi");
        assert!(matches!(effect, WidgetEffect::FetchTranslation { .. }));

        let effect = widget.set_language("en");
        assert_eq!(effect, WidgetEffect::Restored);
        assert_eq!(widget.displayed(), "Hello");
        assert!(!widget.is_pending());
    }

    #[test]
    fn reselecting_active_language_is_a_no_op() {
        let mut widget = TranslatableText::new("Hello");
        assert_eq!(widget.set_language("en"), WidgetEffect::None);
    }

    #[test]
    fn text_change_retranslates_while_language_active() {
        let mut widget = TranslatableText::new("Hello");
        widget.set_language("hi");

        let effect = widget.set_text("Goodbye");
        assert!(matches!(effect, WidgetEffect::FetchTranslation { .. }));
    }

    #[test]
    fn stale_results_are_ignored() {
        let mut widget = TranslatableText::new("Hello");
        let WidgetEffect::FetchTranslation { generation: first } = widget.set_language("hi")
        else {
            panic!("expected fetch");
        };
        // Text changes before the first fetch lands.
        let WidgetEffect::FetchTranslation { generation: second } = widget.set_text("Goodbye")
        else {
            panic!("expected fetch");
        };

        assert!(!widget.apply_translation(first, "नमस्ते"));
        assert_eq!(widget.displayed(), "Hello");

        assert!(widget.apply_translation(second, "अलविदा"));
        assert_eq!(widget.displayed(), "अलविदा");
        assert!(!widget.is_pending());
    }

    #[test]
    fn switching_back_to_source_drops_in_flight_fetch() {
        let mut widget = TranslatableText::new("Hello");
        let WidgetEffect::FetchTranslation { generation } = widget.set_language("hi") else {
            panic!("expected fetch");
        };

        widget.set_language("en");
        assert!(!widget.apply_translation(generation, "नमस्ते"));
        assert_eq!(widget.displayed(), "Hello");
    }
}
