//! Course Catalog Integration
//!
//! Fetches a module's published timetable from the public catalog API and narrows it
//! down to the lessons picked in a share URL. Lookups are per module and independent;
//! an unreachable catalog degrades that module to an empty result instead of failing
//! the request.

use crate::error::CatalogError;
use async_trait::async_trait;

pub mod academic_year;
pub mod client;
pub mod lesson_type;
pub mod model;
pub mod resolve;

pub use academic_year::{academic_year_for, current_academic_year, is_valid_academic_year};
pub use client::HttpCatalogSource;
pub use lesson_type::full_lesson_type;
pub use model::{CatalogLesson, CatalogModule, SemesterData};
pub use resolve::{class_numbers_match, match_lessons, CatalogResolver};

/// Source of module records; the general (all-terms) record for one academic year.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn fetch_module(
        &self,
        academic_year: &str,
        module_code: &str,
    ) -> Result<CatalogModule, CatalogError>;

    /// Short name used in logs
    fn source_name(&self) -> &str;
}
