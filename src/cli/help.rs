//! CLI command-name contract for logging and routing.

use crate::cli::parse::{Commands, ConfigCommands};

/// Command name string for log fields (e.g. "schedule", "config.show").
pub fn command_name(command: &Commands) -> String {
    match command {
        Commands::Decode { .. } => "decode".to_string(),
        Commands::Schedule { .. } => "schedule".to_string(),
        Commands::Prompt { .. } => "prompt".to_string(),
        Commands::Generate { .. } => "generate".to_string(),
        Commands::Styles { .. } => "styles".to_string(),
        Commands::Config { command } => format!("config.{}", config_command_name(command)),
    }
}

pub fn config_command_name(command: &ConfigCommands) -> &'static str {
    match command {
        ConfigCommands::Show => "show",
        ConfigCommands::Validate => "validate",
    }
}

/// Whether the command talks to the catalog or the image provider.
pub fn uses_network(command: &Commands) -> bool {
    matches!(
        command,
        Commands::Schedule { .. } | Commands::Prompt { .. } | Commands::Generate { .. }
    )
}
