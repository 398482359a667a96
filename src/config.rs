//! Configuration System
//!
//! Layered configuration for the wallpaper pipeline: built-in defaults, the user's global
//! file, a local `modpocket.toml`, then `MODPOCKET__SECTION__KEY` environment variables.

use crate::catalog::client::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
use crate::error::ApiError;
use crate::logging::LoggingConfig;
use crate::pipeline::ASPECT_RATIOS;
use crate::prompt::{is_known_style, DEFAULT_STYLE};
use crate::schedule::DEFAULT_MAX_CONCURRENT;
use crate::share_url::{DEFAULT_HOST, DEFAULT_TERM_MARKER};
use crate::types::Theme;
use serde::{Deserialize, Serialize};
use std::time::Duration;

mod loader;
mod merge;
mod sources;

pub use loader::ConfigLoader;

pub const DEFAULT_IMAGEN_LOCATION: &str = "us-central1";
pub const DEFAULT_IMAGEN_MODELS: &[&str] = &["imagen-4.0-ultra-generate-001", "imagen-3.0-generate-001"];
pub const DEFAULT_IMAGEN_TIMEOUT_SECS: u64 = 120;
pub const DEFAULT_ASPECT_RATIO: &str = "9:16";

const REDACTED: &str = "<redacted>";

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub share_url: ShareUrlConfig,

    #[serde(default)]
    pub catalog: CatalogConfig,

    #[serde(default)]
    pub imagen: ImagenConfig,

    #[serde(default)]
    pub defaults: DefaultsConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShareUrlConfig {
    #[serde(default = "default_host")]
    pub host: String,

    /// Path-segment prefix carrying the term number, e.g. `sem-` in `/timetable/sem-1/share`
    #[serde(default = "default_term_marker")]
    pub term_marker: String,
}

fn default_host() -> String {
    DEFAULT_HOST.to_string()
}

fn default_term_marker() -> String {
    DEFAULT_TERM_MARKER.to_string()
}

impl Default for ShareUrlConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            term_marker: default_term_marker(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_catalog_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "default_max_concurrent_requests")]
    pub max_concurrent_requests: usize,

    /// Fixed academic-year label (`2024-2025`); computed from today's date when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub academic_year: Option<String>,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_catalog_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT.as_secs()
}

fn default_max_concurrent_requests() -> usize {
    DEFAULT_MAX_CONCURRENT
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_catalog_timeout_secs(),
            max_concurrent_requests: default_max_concurrent_requests(),
            academic_year: None,
        }
    }
}

impl CatalogConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn validate(&self) -> Result<(), String> {
        if let Err(e) = url::Url::parse(&self.base_url) {
            return Err(format!("Invalid base_url '{}': {}", self.base_url, e));
        }
        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than 0".to_string());
        }
        if self.max_concurrent_requests == 0 {
            return Err("max_concurrent_requests must be greater than 0".to_string());
        }
        if let Some(year) = &self.academic_year {
            if !crate::catalog::is_valid_academic_year(year) {
                return Err(format!(
                    "Invalid academic_year '{}' (expected e.g. 2024-2025)",
                    year
                ));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImagenConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,

    #[serde(default = "default_location")]
    pub location: String,

    /// Tried in order until one succeeds
    #[serde(default = "default_models")]
    pub models: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,

    /// Overrides `https://{location}-aiplatform.googleapis.com`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,

    #[serde(default = "default_imagen_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_location() -> String {
    DEFAULT_IMAGEN_LOCATION.to_string()
}

fn default_models() -> Vec<String> {
    DEFAULT_IMAGEN_MODELS.iter().map(|m| m.to_string()).collect()
}

fn default_imagen_timeout_secs() -> u64 {
    DEFAULT_IMAGEN_TIMEOUT_SECS
}

impl Default for ImagenConfig {
    fn default() -> Self {
        Self {
            project: None,
            location: default_location(),
            models: default_models(),
            access_token: None,
            endpoint: None,
            timeout_secs: default_imagen_timeout_secs(),
        }
    }
}

impl ImagenConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn endpoint_url(&self) -> String {
        match &self.endpoint {
            Some(endpoint) => endpoint.trim_end_matches('/').to_string(),
            None => format!("https://{}-aiplatform.googleapis.com", self.location),
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.location.trim().is_empty() {
            return Err("location cannot be empty".to_string());
        }
        if self.models.is_empty() || self.models.iter().any(|m| m.trim().is_empty()) {
            return Err("models must list at least one non-empty model name".to_string());
        }
        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than 0".to_string());
        }
        if let Some(endpoint) = &self.endpoint {
            if let Err(e) = url::Url::parse(endpoint) {
                return Err(format!("Invalid endpoint '{}': {}", endpoint, e));
            }
        }
        Ok(())
    }
}

/// Request defaults applied when the CLI does not pass a value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DefaultsConfig {
    #[serde(default = "default_design_style")]
    pub design_style: String,

    #[serde(default)]
    pub theme: Theme,

    #[serde(default = "default_aspect_ratio")]
    pub aspect_ratio: String,
}

fn default_design_style() -> String {
    DEFAULT_STYLE.to_string()
}

fn default_aspect_ratio() -> String {
    DEFAULT_ASPECT_RATIO.to_string()
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            design_style: default_design_style(),
            theme: Theme::default(),
            aspect_ratio: default_aspect_ratio(),
        }
    }
}

impl DefaultsConfig {
    pub fn validate(&self) -> Result<(), String> {
        if !is_known_style(&self.design_style) {
            return Err(format!("Unknown design_style '{}'", self.design_style));
        }
        if !ASPECT_RATIOS.contains(&self.aspect_ratio.as_str()) {
            return Err(format!(
                "Unsupported aspect_ratio '{}' (expected one of {})",
                self.aspect_ratio,
                ASPECT_RATIOS.join(", ")
            ));
        }
        Ok(())
    }
}

/// Configuration validation errors
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    ShareUrl(String),
    Catalog(String),
    Imagen(String),
    Defaults(String),
    Logging(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::ShareUrl(msg) => write!(f, "share_url: {}", msg),
            ValidationError::Catalog(msg) => write!(f, "catalog: {}", msg),
            ValidationError::Imagen(msg) => write!(f, "imagen: {}", msg),
            ValidationError::Defaults(msg) => write!(f, "defaults: {}", msg),
            ValidationError::Logging(msg) => write!(f, "logging: {}", msg),
        }
    }
}

impl std::error::Error for ValidationError {}

impl AppConfig {
    /// Validate the entire configuration, collecting every problem.
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if self.share_url.host.trim().is_empty() {
            errors.push(ValidationError::ShareUrl("host cannot be empty".to_string()));
        }
        if self.share_url.term_marker.is_empty() {
            errors.push(ValidationError::ShareUrl(
                "term_marker cannot be empty".to_string(),
            ));
        }
        if let Err(e) = self.catalog.validate() {
            errors.push(ValidationError::Catalog(e));
        }
        if let Err(e) = self.imagen.validate() {
            errors.push(ValidationError::Imagen(e));
        }
        if let Err(e) = self.defaults.validate() {
            errors.push(ValidationError::Defaults(e));
        }
        if let Err(e) = self.logging.validate() {
            errors.push(ValidationError::Logging(e));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// `validate()` folded into a single `ApiError::ConfigError`.
    pub fn ensure_valid(&self) -> Result<(), ApiError> {
        self.validate().map_err(|errors| {
            let error_msgs: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            ApiError::ConfigError(format!(
                "Configuration validation failed:\n{}",
                error_msgs.join("\n")
            ))
        })
    }

    /// TOML rendering of the effective config with secrets masked.
    pub fn to_toml_redacted(&self) -> Result<String, ApiError> {
        let mut shown = self.clone();
        if shown.imagen.access_token.is_some() {
            shown.imagen.access_token = Some(REDACTED.to_string());
        }
        toml::to_string_pretty(&shown)
            .map_err(|e| ApiError::ConfigError(format!("Failed to render config: {}", e)))
    }
}
