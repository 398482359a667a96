//! Catalog API response shapes.
//!
//! The upstream API is loose about types and presence: `classNo` is sometimes a number,
//! `semester` sometimes a string, and optional row fields may be absent or null.
//! Everything here normalizes to strings, with `"TBA"` standing in for missing values.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

pub const TBA: &str = "TBA";

fn tba() -> String {
    TBA.to_string()
}

/// General module record (`/{academicYear}/modules/{moduleCode}.json`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogModule {
    #[serde(default)]
    pub module_code: Option<String>,

    #[serde(default)]
    pub title: Option<String>,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub semester_data: Vec<SemesterData>,
}

impl CatalogModule {
    /// Sub-record for the requested term, if the module is offered then.
    pub fn term(&self, term: u32) -> Option<&SemesterData> {
        self.semester_data.iter().find(|s| s.semester == Some(term))
    }
}

/// Per-term record inside `semesterData`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SemesterData {
    #[serde(default, deserialize_with = "term_number")]
    pub semester: Option<u32>,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub timetable: Vec<CatalogLesson>,
}

/// One timetable row as published by the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogLesson {
    #[serde(default = "tba", deserialize_with = "loose_string")]
    pub lesson_type: String,

    #[serde(default = "tba", deserialize_with = "loose_string")]
    pub class_no: String,

    #[serde(default = "tba", deserialize_with = "loose_string")]
    pub day: String,

    #[serde(default = "tba", deserialize_with = "loose_string")]
    pub start_time: String,

    #[serde(default = "tba", deserialize_with = "loose_string")]
    pub end_time: String,

    #[serde(default = "tba", deserialize_with = "loose_string")]
    pub venue: String,
}

/// String, number, or null/blank (-> `"TBA"`).
fn loose_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) => tba(),
        Some(Value::String(s)) if s.trim().is_empty() => tba(),
        Some(Value::String(s)) => s.trim().to_string(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        Some(other) => other.to_string(),
    })
}

fn term_number<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(n)) => n.as_u64().and_then(|n| u32::try_from(n).ok()),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    })
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
