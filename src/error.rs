//! Error types for the ModPocket timetable wallpaper pipeline.

use thiserror::Error;

/// Share URL decoding errors. All of these are user-correctable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShareUrlError {
    #[error("Invalid URL: {0}")]
    Malformed(String),

    #[error("Invalid URL: must be a {expected} URL (got host '{actual}')")]
    WrongHost { expected: String, actual: String },

    #[error("Invalid URL: could not find term segment in path '{0}'")]
    MissingTermSegment(String),

    #[error("Invalid URL: could not parse term number from '{0}'")]
    InvalidTerm(String),
}

/// Catalog API errors for a single module lookup.
///
/// These never leave the resolver; a failed lookup degrades to an empty lesson list.
#[derive(Debug, Clone, Error)]
pub enum CatalogError {
    #[error("Catalog request failed: {0}")]
    Request(String),

    #[error("Catalog request timed out: {0}")]
    Timeout(String),

    #[error("Catalog returned status {status} for {module_code}")]
    Status { status: u16, module_code: String },

    #[error("Failed to decode catalog response: {0}")]
    Decode(String),
}

/// Pipeline-level errors surfaced to callers (CLI, embedding services).
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    InvalidUrl(#[from] ShareUrlError),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("No lessons found for the provided URL (modules: {})", .modules.join(", "))]
    NoLessonsResolved { modules: Vec<String> },

    #[error("Provider not configured: {0}")]
    ProviderNotConfigured(String),

    #[error("Provider request failed: {0}")]
    ProviderRequestFailed(String),

    #[error("Provider authentication failed: {0}")]
    ProviderAuthFailed(String),

    #[error("Provider rate limit exceeded: {0}")]
    ProviderRateLimit(String),

    #[error("Provider model not found: {0}")]
    ProviderModelNotFound(String),

    #[error("Provider error: {0}")]
    ProviderError(String),

    #[error("Image generation failed: {0}")]
    GenerationFailed(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<config::ConfigError> for ApiError {
    fn from(err: config::ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}

impl ApiError {
    /// True for errors the caller can fix by changing the request.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            ApiError::InvalidUrl(_) | ApiError::InvalidRequest(_) | ApiError::NoLessonsResolved { .. }
        )
    }
}
