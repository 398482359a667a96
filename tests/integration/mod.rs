//! Integration tests for the ModPocket wallpaper pipeline

mod cli_commands;
mod config_loading;
mod prompt_rendering;
mod schedule_resolution;
mod share_url_decoding;
mod wallpaper_pipeline;
