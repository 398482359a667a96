//! Narrow a module's catalog timetable down to the lessons picked in a share URL.

use crate::catalog::lesson_type::full_lesson_type;
use crate::catalog::model::SemesterData;
use crate::catalog::CatalogSource;
use crate::schedule::ModuleResolver;
use crate::types::{
    ModuleResolution, ModuleSelection, ResolutionStatus, ResolvedLesson, UnmatchedLesson,
};
use async_trait::async_trait;
use tracing::{debug, info, warn};

/// Resolves module selections against a [`CatalogSource`].
pub struct CatalogResolver<S> {
    source: S,
}

impl<S: CatalogSource> CatalogResolver<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Resolve one module. Never fails: catalog problems come back as an empty
    /// resolution with a non-`Resolved` status.
    pub async fn resolve_module(
        &self,
        module: &ModuleSelection,
        academic_year: &str,
        term: u32,
    ) -> ModuleResolution {
        let module_code = module.module_code.as_str();
        let record = match self.source.fetch_module(academic_year, module_code).await {
            Ok(record) => record,
            Err(e) => {
                warn!(
                    module_code,
                    academic_year,
                    source = self.source.source_name(),
                    error = %e,
                    "Catalog unavailable for module, reporting zero lessons"
                );
                return ModuleResolution::empty(
                    module_code,
                    ResolutionStatus::Unavailable {
                        reason: e.to_string(),
                    },
                );
            }
        };

        let Some(term_data) = record.term(term) else {
            warn!(module_code, academic_year, term, "Module has no data for term");
            return ModuleResolution::empty(module_code, ResolutionStatus::TermNotOffered);
        };

        debug!(
            module_code,
            rows = term_data.timetable.len(),
            "Matching selection against catalog timetable"
        );
        let (lessons, unmatched) = match_lessons(module, term_data);
        info!(
            module_code,
            matched = lessons.len(),
            unmatched = unmatched.len(),
            "Resolved module lessons"
        );

        ModuleResolution {
            module_code: module.module_code.clone(),
            lessons,
            status: ResolutionStatus::Resolved,
            unmatched,
        }
    }
}

#[async_trait]
impl<S: CatalogSource> ModuleResolver for CatalogResolver<S> {
    async fn resolve(
        &self,
        module: &ModuleSelection,
        academic_year: &str,
        term: u32,
    ) -> ModuleResolution {
        self.resolve_module(module, academic_year, term).await
    }
}

/// Match every requested `(lesson type, class number)` pair against the term's rows.
///
/// All matching rows are kept, so a class meeting twice a week yields two lessons.
/// A row is emitted at most once, even when several pairs select it (`LEC:1;LECTURE:1`).
/// Pairs with no match are returned separately.
pub fn match_lessons(
    module: &ModuleSelection,
    term_data: &SemesterData,
) -> (Vec<ResolvedLesson>, Vec<UnmatchedLesson>) {
    let mut lessons = Vec::new();
    let mut unmatched = Vec::new();
    let mut emitted = vec![false; term_data.timetable.len()];

    for (code, class_no) in module.pairs() {
        let lesson_type = full_lesson_type(code);
        let mut matched_any = false;

        for (idx, row) in term_data
            .timetable
            .iter()
            .enumerate()
            .filter(|(_, row)| row.lesson_type == lesson_type)
            .filter(|(_, row)| class_numbers_match(&row.class_no, class_no))
        {
            matched_any = true;
            if emitted[idx] {
                continue;
            }
            emitted[idx] = true;
            lessons.push(ResolvedLesson {
                module_code: module.module_code.clone(),
                lesson_type: row.lesson_type.clone(),
                class_no: row.class_no.clone(),
                day: row.day.clone(),
                start_time: row.start_time.clone(),
                end_time: row.end_time.clone(),
                venue: row.venue.clone(),
            });
        }

        if !matched_any {
            warn!(
                module_code = %module.module_code,
                lesson_type = code,
                class_no,
                "No catalog lesson matches selection"
            );
            unmatched.push(UnmatchedLesson {
                lesson_type: code.to_string(),
                class_no: class_no.to_string(),
            });
        }
    }

    (lessons, unmatched)
}

/// Exact match, or both sides are integers with the same value ("01" == "1").
pub fn class_numbers_match(catalog: &str, requested: &str) -> bool {
    let catalog = catalog.trim();
    let requested = requested.trim();
    if catalog == requested {
        return true;
    }
    match (catalog.parse::<i64>(), requested.parse::<i64>()) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}
