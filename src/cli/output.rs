//! CLI output: error mapping from domain errors to stable CLI surface.

use crate::error::ApiError;

/// Map domain/service errors to a string for CLI output.
pub fn map_error(e: &ApiError) -> String {
    match e {
        ApiError::ProviderNotConfigured(_) => format!(
            "{}\nSet imagen.project and imagen.access_token in modpocket.toml, \
             or export MODPOCKET__IMAGEN__PROJECT and MODPOCKET__IMAGEN__ACCESS_TOKEN.",
            e
        ),
        ApiError::NoLessonsResolved { .. } => format!(
            "{}\nCheck that the link is for the current academic year, or pass --academic-year.",
            e
        ),
        _ => e.to_string(),
    }
}

/// 2 for problems with the user's input, 1 for everything else.
pub fn exit_code(e: &ApiError) -> i32 {
    if e.is_user_error() {
        2
    } else {
        1
    }
}
