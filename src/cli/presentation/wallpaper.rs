use super::shared::to_json;
use crate::error::ApiError;
use crate::pipeline::Wallpaper;
use std::path::Path;

/// `{success, image_base64, modules}`
pub fn format_wallpaper_json(wallpaper: &Wallpaper) -> Result<String, ApiError> {
    to_json(&serde_json::json!({
        "success": true,
        "image_base64": wallpaper.image.to_base64(),
        "modules": wallpaper.modules,
    }))
}

pub fn format_saved_wallpaper(wallpaper: &Wallpaper, path: &Path) -> String {
    format!(
        "Saved {} wallpaper ({} bytes, {}) to {}\nModules: {}",
        wallpaper.image.mime_type,
        wallpaper.image.bytes.len(),
        wallpaper.image.model,
        path.display(),
        wallpaper.modules.join(", ")
    )
}
