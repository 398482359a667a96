//! Prompt template and placeholder substitution.

pub const PROMPT_TEMPLATE: &str = "iPhone {aspect_ratio} wallpaper. University timetable schedule.

CRITICAL LAYOUT:
- TOP 10%: Empty
- BOTTOM 10%: Empty
- MIDDLE: Schedule grid

{schedule}

STYLE: {style_name}
{style_description}

REQUIREMENTS: Grid layout, readable typography, color-coded modules, no device frames, no invented data
";

/// Replace `{key}` placeholders in a single pass.
///
/// Substituted values are never rescanned, so braces inside a venue name stay literal.
/// Unknown placeholders are left as written.
pub fn fill(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after_open = &rest[open + 1..];
        match after_open.find('}') {
            Some(close) => {
                let key = &after_open[..close];
                match values.iter().find(|(k, _)| *k == key) {
                    Some((_, value)) => out.push_str(value),
                    None => {
                        out.push('{');
                        out.push_str(key);
                        out.push('}');
                    }
                }
                rest = &after_open[close + 1..];
            }
            None => {
                out.push_str(&rest[open..]);
                rest = "";
            }
        }
    }
    out.push_str(rest);
    out
}
