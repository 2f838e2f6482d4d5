pub mod error;
pub mod rest;
pub mod translate;

pub use error::ApiError;
pub use rest::{ApiClient, ReviewApi};
pub use translate::{MyMemoryProvider, StaticProvider, TranslateError, TranslationProvider, Translator};
