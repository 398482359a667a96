//! CLI route: single route table and run context. Dispatches to domain services and presentation.

use crate::catalog::{is_valid_academic_year, CatalogResolver, HttpCatalogSource};
use crate::cli::command_name;
use crate::cli::help::uses_network;
use crate::cli::parse::{Commands, ConfigCommands, StyleArgs};
use crate::cli::presentation::{
    format_config_validation, format_saved_wallpaper, format_schedule_json, format_schedule_text,
    format_selection_json, format_selection_text, format_styles_json, format_styles_text,
    format_wallpaper_json,
};
use crate::config::{AppConfig, ConfigLoader};
use crate::error::ApiError;
use crate::imagen::VertexImagenClient;
use crate::pipeline::{WallpaperPipeline, WallpaperRequest};
use crate::share_url::ShareUrlDecoder;
use std::path::{Path, PathBuf};
use tokio::runtime::Runtime;
use tracing::{debug, info};

/// Runtime context for CLI execution: the merged configuration and where it came from.
pub struct RunContext {
    config: AppConfig,
    config_path: Option<PathBuf>,
}

impl RunContext {
    /// Load config from `config_path`, or from the default layered sources.
    pub fn new(config_path: Option<PathBuf>) -> Result<Self, ApiError> {
        let config = match config_path {
            Some(ref path) => ConfigLoader::load_from_file(path)?,
            None => ConfigLoader::load()?,
        };
        Ok(Self::from_config(config, config_path))
    }

    pub fn from_config(config: AppConfig, config_path: Option<PathBuf>) -> Self {
        Self {
            config,
            config_path,
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Execute a CLI command via the single route table.
    pub fn execute(&self, command: &Commands) -> Result<String, ApiError> {
        let name = command_name(command);
        info!(command = %name, "Executing command");
        if uses_network(command) {
            self.config.ensure_valid()?;
        }

        match command {
            Commands::Decode { url, format } => {
                let decoder = ShareUrlDecoder::from_config(&self.config.share_url)?;
                let selection = decoder.decode(url)?;
                if format == "json" {
                    format_selection_json(&selection)
                } else {
                    Ok(format_selection_text(&selection))
                }
            }
            Commands::Schedule {
                url,
                format,
                academic_year,
            } => {
                let pipeline = self.pipeline(academic_year.as_deref())?;
                let timetable = runtime()?.block_on(pipeline.resolve(url))?;
                if format == "json" {
                    format_schedule_json(&timetable)
                } else {
                    Ok(format_schedule_text(&timetable))
                }
            }
            Commands::Prompt { url, style } => {
                let pipeline = self.pipeline(style.academic_year.as_deref())?;
                let request = self.build_request(url, style);
                let prepared = runtime()?.block_on(pipeline.prepare(&request))?;
                Ok(prepared.prompt)
            }
            Commands::Generate { url, style, output } => {
                let pipeline = self.pipeline(style.academic_year.as_deref())?;
                let request = self.build_request(url, style);
                let client = VertexImagenClient::new(&self.config.imagen)?;
                let wallpaper = runtime()?.block_on(pipeline.generate(&request, &client))?;
                match output {
                    Some(path) => {
                        write_image(path, &wallpaper.image.bytes)?;
                        Ok(format_saved_wallpaper(&wallpaper, path))
                    }
                    None => format_wallpaper_json(&wallpaper),
                }
            }
            Commands::Styles { format } => {
                if format == "json" {
                    format_styles_json()
                } else {
                    Ok(format_styles_text())
                }
            }
            Commands::Config { command } => self.handle_config_command(command),
        }
    }

    fn handle_config_command(&self, command: &ConfigCommands) -> Result<String, ApiError> {
        match command {
            ConfigCommands::Show => {
                let mut out = String::new();
                if let Some(path) = &self.config_path {
                    out.push_str(&format!("# loaded from {}\n", path.display()));
                }
                out.push_str(&self.config.to_toml_redacted()?);
                Ok(out)
            }
            ConfigCommands::Validate => {
                let result = self.config.validate();
                let text = format_config_validation(&result);
                if let Err(errors) = &result {
                    debug!(problems = errors.len(), "Invalid configuration");
                    return Err(ApiError::ConfigError(text));
                }
                Ok(text)
            }
        }
    }

    fn pipeline(
        &self,
        academic_year: Option<&str>,
    ) -> Result<WallpaperPipeline<CatalogResolver<HttpCatalogSource>>, ApiError> {
        let pipeline = WallpaperPipeline::from_config(&self.config)?;
        match academic_year {
            Some(year) if !is_valid_academic_year(year) => Err(ApiError::InvalidRequest(format!(
                "Invalid academic year '{}' (expected e.g. 2024-2025)",
                year
            ))),
            Some(year) => Ok(pipeline.with_academic_year(Some(year.to_string()))),
            None => Ok(pipeline),
        }
    }

    /// Flags win over `[defaults]`.
    fn build_request(&self, url: &str, style: &StyleArgs) -> WallpaperRequest {
        let defaults = &self.config.defaults;
        WallpaperRequest::new(url)
            .with_style(
                style
                    .style
                    .clone()
                    .unwrap_or_else(|| defaults.design_style.clone()),
            )
            .with_theme(style.theme.unwrap_or(defaults.theme))
            .with_aspect_ratio(
                style
                    .aspect_ratio
                    .clone()
                    .unwrap_or_else(|| defaults.aspect_ratio.clone()),
            )
    }
}

fn runtime() -> Result<Runtime, ApiError> {
    Ok(Runtime::new()?)
}

fn write_image(path: &Path, bytes: &[u8]) -> Result<(), ApiError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, bytes)?;
    info!(path = %path.display(), bytes = bytes.len(), "Wallpaper written");
    Ok(())
}
