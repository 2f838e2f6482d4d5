use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Movie {
    #[serde(deserialize_with = "crate::id_string")]
    pub id: String,
    #[serde(default)]
    pub tmdb_id: Option<u64>,
    pub title: String,
    /// Romanized/English title when the primary title is in Devanagari.
    #[serde(default, alias = "titleEng")]
    pub title_eng: Option<String>,
    #[serde(default)]
    pub title_hindi: Option<String>,
    pub year: u32,
    /// Editorial rating on a 0-5 scale.
    pub rating: f32,
    #[serde(default)]
    pub genre: Vec<String>,
    #[serde(default)]
    pub language: Option<String>,
    pub poster: String,
    #[serde(default)]
    pub backdrop: Option<String>,
    #[serde(default)]
    pub director: Option<String>,
    #[serde(default)]
    pub cast: Vec<String>,
    #[serde(default)]
    pub synopsis: Option<String>,
    #[serde(default, alias = "reviewExcerpt")]
    pub review_excerpt: Option<String>,
    #[serde(default, alias = "trailerUrl")]
    pub trailer_url: Option<String>,
    /// Industry label: Bollywood, Kollywood, Sandalwood, etc.
    #[serde(default)]
    pub industry: Option<String>,
}

impl Movie {
    /// Title to show alongside the primary (often Devanagari) title.
    pub fn display_title_eng(&self) -> Option<&str> {
        self.title_eng.as_deref().filter(|t| *t != self.title)
    }
}
