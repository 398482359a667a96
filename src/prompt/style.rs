//! Design styles and their per-theme descriptions.

use crate::types::Theme;

pub const DEFAULT_STYLE: &str = "minimalist";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleEntry {
    pub name: &'static str,
    pub title: &'static str,
    pub light: &'static str,
    pub dark: &'static str,
}

impl StyleEntry {
    pub fn description(&self, theme: Theme) -> &'static str {
        match theme {
            Theme::Light => self.light,
            Theme::Dark => self.dark,
        }
    }
}

/// Known styles. The first entry is the fallback.
pub const STYLES: &[StyleEntry] = &[
    StyleEntry {
        name: "minimalist",
        title: "Minimalist",
        light: "White background, sans-serif font, soft color blocks, clean lines.",
        dark: "Charcoal #1C1C1E background, white text, muted color blocks, OLED black.",
    },
    StyleEntry {
        name: "gradient",
        title: "Gradient",
        light: "Pastel mesh gradient (peach/periwinkle), glass containers, dark text.",
        dark: "Aurora gradient (violet/cyan/blue), translucent containers, white text.",
    },
    StyleEntry {
        name: "neon",
        title: "Neon",
        light: "White background, neon outlines (pink/blue), bold geometric type.",
        dark: "Black background, glowing neon borders, cyberpunk HUD style.",
    },
    StyleEntry {
        name: "pastel",
        title: "Pastel",
        light: "Cream background, marshmallow colors, rounded corners.",
        dark: "Navy background, dusty pastels, soft rounded elements.",
    },
    StyleEntry {
        name: "glass",
        title: "Glass",
        light: "Blurred background, frosted glass cards, iOS style.",
        dark: "Dark blur, smoked glass cards, subtle white borders.",
    },
    StyleEntry {
        name: "retro",
        title: "Retro",
        light: "Paper texture, 70s colors (mustard/orange), serif font.",
        dark: "Grainy texture, synthwave colors, terminal font.",
    },
    StyleEntry {
        name: "kawaii",
        title: "Kawaii",
        light: "Pastel dots, handwriting font, sticky-note blocks, doodle decorations.",
        dark: "Dark purple with stars, chalk-style blocks, cozy planner theme.",
    },
];

const ALIASES: &[(&str, &str)] = &[("minimal", "minimalist")];

pub fn find_style(name: &str) -> Option<&'static StyleEntry> {
    let name = name.trim().to_ascii_lowercase();
    let canonical = ALIASES
        .iter()
        .find(|(alias, _)| *alias == name)
        .map(|(_, target)| *target)
        .unwrap_or(name.as_str());
    STYLES.iter().find(|entry| entry.name == canonical)
}

/// Unknown names fall back to the first (minimalist) style.
pub fn style_or_default(name: &str) -> &'static StyleEntry {
    find_style(name).unwrap_or(&STYLES[0])
}

pub fn is_known_style(name: &str) -> bool {
    find_style(name).is_some()
}

pub fn style_names() -> Vec<&'static str> {
    STYLES.iter().map(|entry| entry.name).collect()
}
