//! Merge rules: defaults first, later sources override earlier ones key by key.

use crate::catalog::client::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
use crate::config::{DEFAULT_ASPECT_RATIO, DEFAULT_IMAGEN_LOCATION, DEFAULT_IMAGEN_TIMEOUT_SECS};
use crate::prompt::DEFAULT_STYLE;
use crate::schedule::DEFAULT_MAX_CONCURRENT;
use crate::share_url::{DEFAULT_HOST, DEFAULT_TERM_MARKER};
use config::Config;
use config::ConfigBuilder;
use config::ConfigError;

/// Create a Config builder with merge policy defaults applied.
///
/// List-valued keys (`imagen.models`) are left to serde defaults so a file that sets
/// them replaces the whole list.
pub fn builder_with_defaults() -> Result<ConfigBuilder<config::builder::DefaultState>, ConfigError>
{
    Config::builder()
        .set_default("share_url.host", DEFAULT_HOST)?
        .set_default("share_url.term_marker", DEFAULT_TERM_MARKER)?
        .set_default("catalog.base_url", DEFAULT_BASE_URL)?
        .set_default("catalog.timeout_secs", DEFAULT_TIMEOUT.as_secs())?
        .set_default("catalog.max_concurrent_requests", DEFAULT_MAX_CONCURRENT as u64)?
        .set_default("imagen.location", DEFAULT_IMAGEN_LOCATION)?
        .set_default("imagen.timeout_secs", DEFAULT_IMAGEN_TIMEOUT_SECS)?
        .set_default("defaults.design_style", DEFAULT_STYLE)?
        .set_default("defaults.theme", "light")?
        .set_default("defaults.aspect_ratio", DEFAULT_ASPECT_RATIO)
}
