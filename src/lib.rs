//! ModPocket: timetable share links to phone wallpapers
//!
//! Decodes a university timetable share URL, looks every selected module up in the public
//! course catalog, assembles the matching lessons into a weekly schedule and renders an
//! image-generation prompt for it. The [`imagen`] module sends that prompt to a
//! text-to-image provider.
//!
//! ```text
//! share URL ─▶ share_url ─▶ schedule (catalog × N) ─▶ prompt ─▶ imagen
//! ```

pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod imagen;
pub mod logging;
pub mod pipeline;
pub mod prompt;
pub mod schedule;
pub mod share_url;
pub mod types;

pub use error::{ApiError, CatalogError, ShareUrlError};
pub use pipeline::{WallpaperPipeline, WallpaperRequest};
pub use types::{Schedule, Selection, StyleChoice, Theme};
