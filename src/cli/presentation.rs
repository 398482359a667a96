//! CLI presentation: text and json formatters per command family.

mod config;
mod shared;
mod styles;
mod timetable;
mod wallpaper;

pub use config::format_config_validation;
pub use styles::{format_styles_json, format_styles_text};
pub use timetable::{
    format_schedule_json, format_schedule_text, format_selection_json, format_selection_text,
};
pub use wallpaper::{format_saved_wallpaper, format_wallpaper_json};
