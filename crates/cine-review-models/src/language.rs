/// Languages the translation widget offers, with native-script labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    pub code: &'static str,
    pub name: &'static str,
    pub native: &'static str,
}

/// All site content is authored in English (with inline Devanagari titles);
/// translation always goes from this code.
pub const SOURCE_LANGUAGE: &str = "en";

pub const SUPPORTED_LANGUAGES: &[Language] = &[
    Language { code: "en", name: "English", native: "English" },
    Language { code: "hi", name: "Hindi", native: "हिन्दी" },
    Language { code: "gu", name: "Gujarati", native: "ગુજરાતી" },
    Language { code: "mr", name: "Marathi", native: "मराठी" },
    Language { code: "te", name: "Telugu", native: "తెలుగు" },
    Language { code: "ta", name: "Tamil", native: "தமிழ்" },
    Language { code: "ml", name: "Malayalam", native: "മലയാളം" },
];

pub fn language_by_code(code: &str) -> Option<&'static Language> {
    SUPPORTED_LANGUAGES.iter().find(|lang| lang.code == code)
}

pub fn is_supported(code: &str) -> bool {
    language_by_code(code).is_some()
}
