use super::shared::to_json;
use crate::error::ApiError;
use crate::prompt::STYLES;
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::{ContentArrangement, Table};

pub fn format_styles_text() -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Style", "Light", "Dark"]);
    for entry in STYLES {
        table.add_row(vec![entry.name, entry.light, entry.dark]);
    }
    table.to_string()
}

pub fn format_styles_json() -> Result<String, ApiError> {
    let styles: Vec<serde_json::Value> = STYLES
        .iter()
        .map(|entry| {
            serde_json::json!({
                "name": entry.name,
                "title": entry.title,
                "light": entry.light,
                "dark": entry.dark,
            })
        })
        .collect();
    to_json(&styles)
}
