//! Config loading: layer the sources in precedence order and deserialize.

use super::merge::merge_policy;
use super::sources::{environment, global_file, local_file};
use super::AppConfig;
use crate::error::ApiError;
use config::{File, FileFormat};
use std::path::{Path, PathBuf};
use tracing::debug;

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load from the current working directory.
    pub fn load() -> Result<AppConfig, ApiError> {
        let cwd = std::env::current_dir()?;
        Self::load_in(&cwd)
    }

    /// Defaults < global file < `<dir>/modpocket.toml` < environment.
    pub fn load_in(dir: &Path) -> Result<AppConfig, ApiError> {
        let builder = merge_policy::builder_with_defaults()?;
        let builder = global_file::add_to_builder(builder)?;
        let builder = local_file::add_to_builder(builder, dir)?;
        let builder = environment::add_to_builder(builder);

        let config: AppConfig = builder.build()?.try_deserialize()?;
        debug!(dir = %dir.display(), "Configuration loaded");
        Ok(config)
    }

    /// Defaults < `path` < environment. The file must exist.
    pub fn load_from_file(path: &Path) -> Result<AppConfig, ApiError> {
        if !path.exists() {
            return Err(ApiError::ConfigError(format!(
                "Config file not found: {}",
                path.display()
            )));
        }
        let builder = merge_policy::builder_with_defaults()?.add_source(
            File::from(path)
                .format(FileFormat::Toml)
                .required(true),
        );
        let builder = environment::add_to_builder(builder);

        let config: AppConfig = builder.build()?.try_deserialize()?;
        debug!(config_path = %path.display(), "Configuration loaded from file");
        Ok(config)
    }

    pub fn global_config_path() -> Option<PathBuf> {
        global_file::global_config_path()
    }

    pub fn local_config_path(dir: &Path) -> PathBuf {
        local_file::local_config_path(dir)
    }
}
