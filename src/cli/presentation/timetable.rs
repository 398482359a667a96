use super::shared::to_json;
use crate::error::ApiError;
use crate::pipeline::ResolvedTimetable;
use crate::prompt::format_time;
use crate::types::{ModuleResolution, ResolutionStatus, Selection};
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;

pub fn format_selection_text(selection: &Selection) -> String {
    let mut out = format!("Term {}", selection.term);
    if selection.is_empty() {
        out.push_str("\n(no modules selected)");
        return out;
    }
    for module in &selection.modules {
        out.push('\n');
        out.push_str(&module.module_code);
        for lesson in &module.lessons {
            out.push_str(&format!(
                "\n  {}: {}",
                lesson.lesson_type,
                lesson.class_numbers.join(", ")
            ));
        }
    }
    out
}

pub fn format_selection_json(selection: &Selection) -> Result<String, ApiError> {
    to_json(selection)
}

fn status_label(resolution: &ModuleResolution) -> String {
    match &resolution.status {
        ResolutionStatus::Resolved if resolution.lessons.is_empty() => "no matches".to_string(),
        ResolutionStatus::Resolved => "resolved".to_string(),
        ResolutionStatus::TermNotOffered => "not offered this term".to_string(),
        ResolutionStatus::Unavailable { reason } => format!("unavailable ({})", reason),
    }
}

pub fn format_schedule_text(timetable: &ResolvedTimetable) -> String {
    let mut out = format!(
        "Academic year {}, term {}\n",
        timetable.academic_year, timetable.selection.term
    );

    let mut modules = Table::new();
    modules.load_preset(UTF8_BORDERS_ONLY);
    modules.set_header(vec!["Module", "Status", "Lessons", "Unmatched"]);
    for resolution in timetable.schedule.modules() {
        let unmatched = resolution
            .unmatched
            .iter()
            .map(|u| format!("{}:{}", u.lesson_type, u.class_no))
            .collect::<Vec<_>>()
            .join(", ");
        modules.add_row(vec![
            resolution.module_code.clone(),
            status_label(resolution),
            resolution.lessons.len().to_string(),
            if unmatched.is_empty() {
                "-".to_string()
            } else {
                unmatched
            },
        ]);
    }
    out.push_str(&modules.to_string());

    if timetable.schedule.total_lessons() == 0 {
        out.push_str("\n\nNo lessons resolved.");
        return out;
    }

    let mut lessons = Table::new();
    lessons.load_preset(UTF8_BORDERS_ONLY);
    lessons.set_header(vec!["Module", "Type", "Class", "Day", "Time", "Venue"]);
    for lesson in timetable.schedule.iter_lessons() {
        lessons.add_row(vec![
            lesson.module_code.clone(),
            lesson.lesson_type.clone(),
            lesson.class_no.clone(),
            lesson.day.clone(),
            format!(
                "{}-{}",
                format_time(&lesson.start_time),
                format_time(&lesson.end_time)
            ),
            lesson.venue.clone(),
        ]);
    }
    out.push_str("\n\n");
    out.push_str(&lessons.to_string());
    out
}

pub fn format_schedule_json(timetable: &ResolvedTimetable) -> Result<String, ApiError> {
    to_json(timetable)
}
