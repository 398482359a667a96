//! Prompt Rendering
//!
//! Turns an assembled [`Schedule`] and a [`StyleChoice`] into the text request sent to
//! the image model. Rendering is pure: the same inputs always give the same bytes.
//!
//! Lessons are grouped by canonical weekday in Monday..Sunday order. Within a day they
//! are ordered by start time, then module code; ties keep append order. Lessons whose
//! day cannot be canonicalized are listed under a trailing `## Unscheduled` section.

use crate::types::{ResolvedLesson, Schedule, StyleChoice};
use tracing::debug;

pub mod day;
pub mod style;
pub mod template;

pub use day::{canonical_day, day_name};
pub use style::{find_style, is_known_style, style_or_default, StyleEntry, DEFAULT_STYLE, STYLES};
pub use template::PROMPT_TEMPLATE;

pub const EMPTY_SCHEDULE_TEXT: &str = "No classes scheduled.";
pub const UNSCHEDULED_HEADING: &str = "Unscheduled";

/// Render the full image-generation prompt.
///
/// An unknown `design_style` renders with the default style. Requests are expected to
/// be validated before they get here, so this is a degradation, not an error.
pub fn render(schedule: &Schedule, style: &StyleChoice, aspect_ratio: &str) -> String {
    if !is_known_style(&style.design_style) {
        debug!(
            requested = %style.design_style,
            fallback = DEFAULT_STYLE,
            "Unknown design style, using default"
        );
    }
    let entry = style_or_default(&style.design_style);

    let style_name = format!("{} ({} Mode)", entry.title, style.theme.title());
    let schedule_text = format_schedule(schedule);

    template::fill(
        PROMPT_TEMPLATE,
        &[
            ("aspect_ratio", aspect_ratio),
            ("schedule", &schedule_text),
            ("style_name", &style_name),
            ("style_description", entry.description(style.theme)),
        ],
    )
}

/// Day-grouped schedule text, e.g.
///
/// ```text
/// ## Monday
/// - CS2040 — Lecture — 10:00–12:00 @ I3-AUD
/// ```
pub fn format_schedule(schedule: &Schedule) -> String {
    if schedule.total_lessons() == 0 {
        return EMPTY_SCHEDULE_TEXT.to_string();
    }

    let mut week: [Vec<&ResolvedLesson>; 7] = Default::default();
    let mut unscheduled: Vec<&ResolvedLesson> = Vec::new();
    for lesson in schedule.iter_lessons() {
        match canonical_day(&lesson.day) {
            Some(d) => week[d.num_days_from_monday() as usize].push(lesson),
            None => unscheduled.push(lesson),
        }
    }

    let mut sections = Vec::new();
    for (day, lessons) in day::WEEK.iter().zip(week.iter_mut()) {
        if lessons.is_empty() {
            continue;
        }
        sections.push(format_section(day_name(*day), lessons));
    }
    if !unscheduled.is_empty() {
        sections.push(format_section(UNSCHEDULED_HEADING, &mut unscheduled));
    }

    sections.join("\n\n")
}

fn format_section(heading: &str, lessons: &mut [&ResolvedLesson]) -> String {
    // stable: equal (start, module) keep their append order
    lessons.sort_by(|a, b| {
        start_key(&a.start_time)
            .cmp(&start_key(&b.start_time))
            .then_with(|| a.module_code.cmp(&b.module_code))
    });

    let mut out = format!("## {}", heading);
    for lesson in lessons.iter() {
        out.push('\n');
        out.push_str(&format_lesson_line(lesson));
    }
    out
}

pub fn format_lesson_line(lesson: &ResolvedLesson) -> String {
    format!(
        "- {} — {} — {}–{} @ {}",
        lesson.module_code,
        lesson.lesson_type,
        format_time(&lesson.start_time),
        format_time(&lesson.end_time),
        lesson.venue
    )
}

/// Sort key for a start time: `"930"`, `"0930"` and `"09:30"` compare equal and before
/// `"1000"`. Unparseable times (e.g. `"TBA"`) sort last, by their text.
fn start_key(raw: &str) -> (bool, u32, &str) {
    let raw = raw.trim();
    let digits: String = raw.chars().filter(|c| *c != ':').collect();
    let numeric = (1..=4).contains(&digits.len()) && digits.bytes().all(|b| b.is_ascii_digit());
    match digits.parse::<u32>() {
        Ok(hhmm) if numeric => (false, hhmm, raw),
        _ => (true, 0, raw),
    }
}

/// `"0800"` -> `"08:00"`; anything else (e.g. `"TBA"`) is returned unchanged.
pub fn format_time(raw: &str) -> String {
    let raw = raw.trim();
    if raw.len() == 4 && raw.bytes().all(|b| b.is_ascii_digit()) {
        format!("{}:{}", &raw[..2], &raw[2..])
    } else {
        raw.to_string()
    }
}
