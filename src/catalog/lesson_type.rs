//! Lesson type abbreviations used in share URLs, mapped to the catalog's display names.

/// Share URL code -> catalog `lessonType`.
pub const LESSON_TYPES: &[(&str, &str)] = &[
    ("LEC", "Lecture"),
    ("TUT", "Tutorial"),
    ("LAB", "Laboratory"),
    ("SEC", "Sectional Teaching"),
    ("REC", "Recitation"),
    ("SEM", "Seminar-Style Module Class"),
    ("PLE", "Plenary"),
    ("WS", "Workshop"),
    ("DOM", "Design Lecture"),
    ("MCT", "Mini-Project"),
    // spelled-out variants seen in older links
    ("LECTURE", "Lecture"),
    ("TUTORIAL", "Tutorial"),
    ("LABORATORY", "Laboratory"),
];

/// Expand a lesson type code; unknown codes pass through unchanged.
pub fn full_lesson_type(code: &str) -> &str {
    let code = code.trim();
    LESSON_TYPES
        .iter()
        .find(|(short, _)| short.eq_ignore_ascii_case(code))
        .map(|(_, full)| *full)
        .unwrap_or(code)
}
