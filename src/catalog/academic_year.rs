//! Academic year labels.
//!
//! August through December belong to `{Y}-{Y+1}`; January through July to `{Y-1}-{Y}`.

use chrono::{Datelike, Local};

const FIRST_MONTH_OF_YEAR: u32 = 8;

pub fn academic_year_for<D: Datelike>(date: &D) -> String {
    let year = date.year();
    if date.month() >= FIRST_MONTH_OF_YEAR {
        format!("{}-{}", year, year + 1)
    } else {
        format!("{}-{}", year - 1, year)
    }
}

/// Label for today's local date.
pub fn current_academic_year() -> String {
    academic_year_for(&Local::now().date_naive())
}

/// `YYYY-YYYY` with consecutive years.
pub fn is_valid_academic_year(label: &str) -> bool {
    let Some((start, end)) = label.split_once('-') else {
        return false;
    };
    if start.len() != 4 || end.len() != 4 {
        return false;
    }
    match (start.parse::<i32>(), end.parse::<i32>()) {
        (Ok(start), Ok(end)) => end == start + 1,
        _ => false,
    }
}
