//! CLI domain: parse, route, help, output, and presentation only.
//! No domain orchestration; single route table dispatches to domain services.

mod help;
mod output;
mod parse;
mod presentation;
mod route;

pub use help::command_name;
pub use output::{exit_code, map_error};
pub use parse::{Cli, Commands, ConfigCommands, StyleArgs};
pub use presentation::{
    format_config_validation, format_saved_wallpaper, format_schedule_json, format_schedule_text,
    format_selection_json, format_selection_text, format_styles_json, format_styles_text,
    format_wallpaper_json,
};
pub use route::RunContext;
