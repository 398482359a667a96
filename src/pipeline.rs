//! Wallpaper Pipeline
//!
//! End-to-end orchestration: validate the request, decode the share URL, assemble the
//! schedule, render the prompt and hand it to an [`ImageSynthesizer`].

use crate::catalog::{current_academic_year, CatalogResolver, HttpCatalogSource};
use crate::config::{AppConfig, DEFAULT_ASPECT_RATIO};
use crate::error::ApiError;
use crate::imagen::{GeneratedImage, ImageSynthesizer};
use crate::prompt::{self, is_known_style, DEFAULT_STYLE};
use crate::schedule::{ModuleResolver, ScheduleAssembler};
use crate::share_url::ShareUrlDecoder;
use crate::types::{Schedule, Selection, StyleChoice, Theme};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Aspect ratios the image provider accepts.
pub const ASPECT_RATIOS: &[&str] = &["9:16", "3:4", "1:1", "4:3", "16:9"];

/// Inbound wallpaper request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WallpaperRequest {
    pub share_url: String,
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

impl WallpaperRequest {
    pub fn new(share_url: impl Into<String>) -> Self {
        Self {
            share_url: share_url.into(),
            design_style: default_design_style(),
            theme: Theme::default(),
            aspect_ratio: default_aspect_ratio(),
        }
    }

    pub fn with_style(mut self, design_style: impl Into<String>) -> Self {
        self.design_style = design_style.into();
        self
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn with_aspect_ratio(mut self, aspect_ratio: impl Into<String>) -> Self {
        self.aspect_ratio = aspect_ratio.into();
        self
    }

    pub fn style_choice(&self) -> StyleChoice {
        StyleChoice::new(self.design_style.clone(), self.theme)
    }

    pub fn validate(&self) -> Result<(), ApiError> {
        if self.share_url.trim().is_empty() {
            return Err(ApiError::InvalidRequest(
                "Share URL cannot be empty".to_string(),
            ));
        }
        if !is_known_style(&self.design_style) {
            return Err(ApiError::InvalidRequest(format!(
                "Unknown design style '{}' (expected one of {})",
                self.design_style,
                prompt::style::style_names().join(", ")
            )));
        }
        if !ASPECT_RATIOS.contains(&self.aspect_ratio.as_str()) {
            return Err(ApiError::InvalidRequest(format!(
                "Unsupported aspect ratio '{}' (expected one of {})",
                self.aspect_ratio,
                ASPECT_RATIOS.join(", ")
            )));
        }
        Ok(())
    }
}

/// Decoded selection plus the schedule assembled for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedTimetable {
    pub selection: Selection,
    pub academic_year: String,
    pub schedule: Schedule,
}

/// Everything up to, but not including, image synthesis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedWallpaper {
    pub selection: Selection,
    pub academic_year: String,
    pub schedule: Schedule,
    pub prompt: String,
    pub aspect_ratio: String,
}

impl PreparedWallpaper {
    /// Module codes in URL order.
    pub fn modules(&self) -> Vec<String> {
        self.selection.module_codes()
    }
}

#[derive(Debug, Clone)]
pub struct Wallpaper {
    pub modules: Vec<String>,
    pub prompt: String,
    pub image: GeneratedImage,
}

pub struct WallpaperPipeline<R> {
    decoder: ShareUrlDecoder,
    assembler: ScheduleAssembler<R>,
    academic_year: Option<String>,
}

impl WallpaperPipeline<CatalogResolver<HttpCatalogSource>> {
    /// Pipeline backed by the HTTP catalog.
    pub fn from_config(config: &AppConfig) -> Result<Self, ApiError> {
        let decoder = ShareUrlDecoder::from_config(&config.share_url)?;
        let source = HttpCatalogSource::from_config(&config.catalog)?;
        let assembler = ScheduleAssembler::new(CatalogResolver::new(source))
            .with_max_concurrent(config.catalog.max_concurrent_requests);
        Ok(Self::new(decoder, assembler).with_academic_year(config.catalog.academic_year.clone()))
    }
}

impl<R: ModuleResolver> WallpaperPipeline<R> {
    pub fn new(decoder: ShareUrlDecoder, assembler: ScheduleAssembler<R>) -> Self {
        Self {
            decoder,
            assembler,
            academic_year: None,
        }
    }

    /// Pin the academic year instead of computing it from today's date.
    pub fn with_academic_year(mut self, academic_year: Option<String>) -> Self {
        self.academic_year = academic_year;
        self
    }

    pub fn decoder(&self) -> &ShareUrlDecoder {
        &self.decoder
    }

    pub fn academic_year(&self) -> String {
        self.academic_year
            .clone()
            .unwrap_or_else(current_academic_year)
    }

    pub fn decode(&self, share_url: &str) -> Result<Selection, ApiError> {
        Ok(self.decoder.decode(share_url)?)
    }

    /// Decode and assemble. An empty schedule is not an error here.
    pub async fn resolve(&self, share_url: &str) -> Result<ResolvedTimetable, ApiError> {
        let selection = self.decode(share_url)?;
        let academic_year = self.academic_year();
        info!(
            term = selection.term,
            modules = selection.modules.len(),
            academic_year = %academic_year,
            "Resolving timetable"
        );
        let schedule = self.assembler.assemble(&selection, &academic_year).await;
        Ok(ResolvedTimetable {
            selection,
            academic_year,
            schedule,
        })
    }

    /// Validate, resolve and render. Fails with `NoLessonsResolved` when nothing matched.
    pub async fn prepare(&self, request: &WallpaperRequest) -> Result<PreparedWallpaper, ApiError> {
        request.validate()?;
        let ResolvedTimetable {
            selection,
            academic_year,
            schedule,
        } = self.resolve(&request.share_url).await?;

        if schedule.total_lessons() == 0 {
            warn!(modules = ?selection.module_codes(), "No lessons resolved");
            return Err(ApiError::NoLessonsResolved {
                modules: selection.module_codes(),
            });
        }

        let prompt = prompt::render(&schedule, &request.style_choice(), &request.aspect_ratio);
        Ok(PreparedWallpaper {
            selection,
            academic_year,
            schedule,
            prompt,
            aspect_ratio: request.aspect_ratio.clone(),
        })
    }

    pub async fn generate<I>(
        &self,
        request: &WallpaperRequest,
        synthesizer: &I,
    ) -> Result<Wallpaper, ApiError>
    where
        I: ImageSynthesizer + ?Sized,
    {
        let prepared = self.prepare(request).await?;
        info!(
            provider = synthesizer.provider_name(),
            lessons = prepared.schedule.total_lessons(),
            "Requesting wallpaper image"
        );
        let image = synthesizer
            .generate(&prepared.prompt, &prepared.aspect_ratio)
            .await?;
        Ok(Wallpaper {
            modules: prepared.modules(),
            prompt: prepared.prompt,
            image,
        })
    }
}
