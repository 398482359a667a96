use crate::config::ValidationError;

pub fn format_config_validation(result: &Result<(), Vec<ValidationError>>) -> String {
    match result {
        Ok(()) => "Configuration is valid".to_string(),
        Err(errors) => {
            let mut out = format!("Configuration has {} problem(s):", errors.len());
            for error in errors {
                out.push_str("\n  - ");
                out.push_str(&error.to_string());
            }
            out
        }
    }
}
