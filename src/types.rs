//! Core data model shared by the decoder, resolver, assembler, and renderer.

use crate::catalog::class_numbers_match;
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Decoded intent from a share URL: term plus per-module lesson selections.
///
/// Modules keep the order they first appeared in the URL query.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Selection {
    pub term: u32,
    pub modules: Vec<ModuleSelection>,
}

impl Selection {
    pub fn new(term: u32) -> Self {
        Self {
            term,
            modules: Vec::new(),
        }
    }

    /// Module codes in URL order.
    pub fn module_codes(&self) -> Vec<String> {
        self.modules.iter().map(|m| m.module_code.clone()).collect()
    }

    pub fn get(&self, module_code: &str) -> Option<&ModuleSelection> {
        self.modules.iter().find(|m| m.module_code == module_code)
    }

    /// Insert a module, replacing an earlier entry with the same code in place.
    pub fn insert(&mut self, module: ModuleSelection) {
        match self
            .modules
            .iter_mut()
            .find(|m| m.module_code == module.module_code)
        {
            Some(existing) => *existing = module,
            None => self.modules.push(module),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }
}

impl Serialize for Selection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct Wire<'a> {
            term: u32,
            module_selections: OrderedModules<'a>,
        }
        Wire {
            term: self.term,
            module_selections: OrderedModules(&self.modules),
        }
        .serialize(serializer)
    }
}

struct OrderedModules<'a>(&'a [ModuleSelection]);

impl Serialize for OrderedModules<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for module in self.0 {
            map.serialize_entry(&module.module_code, &OrderedLessons(&module.lessons))?;
        }
        map.end()
    }
}

struct OrderedLessons<'a>(&'a [LessonSelection]);

impl Serialize for OrderedLessons<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for lesson in self.0 {
            map.serialize_entry(&lesson.lesson_type, &lesson.class_numbers)?;
        }
        map.end()
    }
}

/// Lesson selections for one module. Never empty once produced by the decoder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleSelection {
    pub module_code: String,
    pub lessons: Vec<LessonSelection>,
}

impl ModuleSelection {
    pub fn new(module_code: impl Into<String>) -> Self {
        Self {
            module_code: module_code.into(),
            lessons: Vec::new(),
        }
    }

    pub fn get(&self, lesson_type: &str) -> Option<&LessonSelection> {
        self.lessons.iter().find(|l| l.lesson_type == lesson_type)
    }

    /// Insert a lesson type entry, replacing an earlier one with the same code in place.
    pub fn insert(&mut self, lesson: LessonSelection) {
        match self
            .lessons
            .iter_mut()
            .find(|l| l.lesson_type == lesson.lesson_type)
        {
            Some(existing) => *existing = lesson,
            None => self.lessons.push(lesson),
        }
    }

    /// All requested `(lesson type code, class number)` pairs in selection order.
    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.lessons.iter().flat_map(|lesson| {
            lesson
                .class_numbers
                .iter()
                .map(move |class_no| (lesson.lesson_type.as_str(), class_no.as_str()))
        })
    }
}

/// One lesson type code (e.g. "LEC") with its ordered, de-duplicated class numbers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LessonSelection {
    pub lesson_type: String,
    pub class_numbers: Vec<String>,
}

impl LessonSelection {
    pub fn new<I, S>(lesson_type: impl Into<String>, class_numbers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        // "01" and "1" name the same class; the first spelling wins.
        let mut deduped: Vec<String> = Vec::new();
        for class_no in class_numbers {
            let class_no = class_no.into();
            if !deduped.iter().any(|seen| class_numbers_match(seen, &class_no)) {
                deduped.push(class_no);
            }
        }
        Self {
            lesson_type: lesson_type.into(),
            class_numbers: deduped,
        }
    }
}

/// One confirmed scheduled occurrence of a module's lesson.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedLesson {
    pub module_code: String,
    pub lesson_type: String,
    pub class_no: String,
    pub day: String,
    pub start_time: String,
    pub end_time: String,
    pub venue: String,
}

/// Outcome of looking a module up in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ResolutionStatus {
    /// The module and term were found; `lessons` holds whatever matched.
    Resolved,
    /// The module exists but has no data for the requested term.
    TermNotOffered,
    /// The catalog could not be reached or returned an unusable response.
    Unavailable { reason: String },
}

/// A requested `(lesson type, class number)` pair that matched no catalog row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnmatchedLesson {
    pub lesson_type: String,
    pub class_no: String,
}

/// Resolved lessons for one module plus diagnostics about how resolution went.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleResolution {
    pub module_code: String,
    pub lessons: Vec<ResolvedLesson>,
    #[serde(flatten)]
    pub status: ResolutionStatus,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub unmatched: Vec<UnmatchedLesson>,
}

impl ModuleResolution {
    pub fn empty(module_code: impl Into<String>, status: ResolutionStatus) -> Self {
        Self {
            module_code: module_code.into(),
            lessons: Vec::new(),
            status,
            unmatched: Vec::new(),
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self.status, ResolutionStatus::Resolved)
    }
}

/// Per-request schedule keyed by module code, in selection order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Schedule {
    modules: Vec<ModuleResolution>,
}

impl Schedule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a module's resolution, replacing an earlier one for the same code in place.
    pub fn insert(&mut self, resolution: ModuleResolution) {
        match self
            .modules
            .iter_mut()
            .find(|m| m.module_code == resolution.module_code)
        {
            Some(existing) => *existing = resolution,
            None => self.modules.push(resolution),
        }
    }

    pub fn get(&self, module_code: &str) -> Option<&ModuleResolution> {
        self.modules.iter().find(|m| m.module_code == module_code)
    }

    pub fn lessons(&self, module_code: &str) -> Option<&[ResolvedLesson]> {
        self.get(module_code).map(|m| m.lessons.as_slice())
    }

    pub fn contains(&self, module_code: &str) -> bool {
        self.get(module_code).is_some()
    }

    pub fn modules(&self) -> &[ModuleResolution] {
        &self.modules
    }

    pub fn module_codes(&self) -> Vec<String> {
        self.modules.iter().map(|m| m.module_code.clone()).collect()
    }

    /// All lessons across modules in module order, then append order.
    pub fn iter_lessons(&self) -> impl Iterator<Item = &ResolvedLesson> {
        self.modules.iter().flat_map(|m| m.lessons.iter())
    }

    pub fn total_lessons(&self) -> usize {
        self.modules.iter().map(|m| m.lessons.len()).sum()
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }
}

/// Wallpaper colour theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Theme::Light => "Light",
            Theme::Dark => "Dark",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(format!("Invalid theme '{}'. Use 'light' or 'dark'.", other)),
        }
    }
}

/// Visual style for the rendered prompt.
///
/// `design_style` is kept as free text; unknown names fall back to the default style
/// when rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleChoice {
    pub design_style: String,
    pub theme: Theme,
}

impl StyleChoice {
    pub fn new(design_style: impl Into<String>, theme: Theme) -> Self {
        Self {
            design_style: design_style.into(),
            theme,
        }
    }
}
