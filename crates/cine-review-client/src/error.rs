use thiserror::Error;

/// Failure taxonomy for REST calls.
///
/// Exactly two kinds are distinguishable to callers: the request never got a
/// response (`Network`, which includes the 10s client timeout), or the
/// backend answered non-2xx (`Api`, optionally carrying the backend's
/// `detail` message to surface verbatim).
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("api error ({status}){}", detail.as_deref().map(|d| format!(": {d}")).unwrap_or_default())]
    Api { status: u16, detail: Option<String> },
}

impl ApiError {
    pub fn is_network(&self) -> bool {
        matches!(self, ApiError::Network(_))
    }

    /// Backend-provided detail message, when one was returned.
    pub fn detail(&self) -> Option<&str> {
        match self {
            ApiError::Api { detail, .. } => detail.as_deref(),
            ApiError::Network(_) => None,
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Api { status, .. } => Some(*status),
            ApiError::Network(_) => None,
        }
    }
}
