//! Share URL decoding
//!
//! Turns a shared timetable link such as
//! `https://nusmods.com/timetable/sem-2/share?CS2040=LEC:(1);TUT:(3,4)` into a
//! [`Selection`]: the term number plus, per module, each lesson type code and the
//! class numbers picked for it.

use crate::config::ShareUrlConfig;
use crate::error::{ApiError, ShareUrlError};
use crate::types::{LessonSelection, ModuleSelection, Selection};
use regex::Regex;
use tracing::{debug, info};
use url::Url;

pub const DEFAULT_HOST: &str = "nusmods.com";
pub const DEFAULT_TERM_MARKER: &str = "sem-";

/// Decoder bound to one timetable site (host + term marker).
#[derive(Debug, Clone)]
pub struct ShareUrlDecoder {
    host: String,
    term_marker: String,
    term_pattern: Regex,
}

impl ShareUrlDecoder {
    pub fn new(host: impl Into<String>, term_marker: impl Into<String>) -> Result<Self, ApiError> {
        let host = host.into().trim().to_ascii_lowercase();
        let term_marker = term_marker.into();
        if host.is_empty() {
            return Err(ApiError::ConfigError(
                "share URL host cannot be empty".to_string(),
            ));
        }
        if term_marker.is_empty() {
            return Err(ApiError::ConfigError(
                "share URL term marker cannot be empty".to_string(),
            ));
        }
        let term_pattern = Regex::new(&format!(r"{}(\d+)", regex::escape(&term_marker)))
            .map_err(|e| ApiError::ConfigError(format!("Invalid term marker: {}", e)))?;
        Ok(Self {
            host,
            term_marker,
            term_pattern,
        })
    }

    /// Decoder for the public NUSMods site.
    pub fn nusmods() -> Result<Self, ApiError> {
        Self::new(DEFAULT_HOST, DEFAULT_TERM_MARKER)
    }

    pub fn from_config(config: &ShareUrlConfig) -> Result<Self, ApiError> {
        Self::new(config.host.clone(), config.term_marker.clone())
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn term_marker(&self) -> &str {
        &self.term_marker
    }

    pub fn decode(&self, raw_url: &str) -> Result<Selection, ShareUrlError> {
        let url = parse_url(raw_url)?;
        self.check_host(&url)?;
        let term = self.extract_term(url.path())?;
        info!(term, "Parsed share URL term");

        let mut selection = Selection::new(term);
        for (key, value) in url.query_pairs() {
            let module_code = key.trim().to_ascii_uppercase();
            if module_code.is_empty() || value.trim().is_empty() {
                continue;
            }
            match parse_module_value(&module_code, &value) {
                Some(module) => {
                    debug!(
                        module_code = %module.module_code,
                        lesson_types = module.lessons.len(),
                        "Parsed module selection"
                    );
                    selection.insert(module);
                }
                None => debug!(module_code = %module_code, "Module has no usable lessons, skipping"),
            }
        }

        info!(modules = selection.modules.len(), "Decoded share URL");
        Ok(selection)
    }

    fn check_host(&self, url: &Url) -> Result<(), ShareUrlError> {
        let actual = url.host_str().unwrap_or_default().to_ascii_lowercase();
        let suffix = format!(".{}", self.host);
        if actual == self.host || actual.ends_with(&suffix) {
            Ok(())
        } else {
            Err(ShareUrlError::WrongHost {
                expected: self.host.clone(),
                actual,
            })
        }
    }

    fn extract_term(&self, path: &str) -> Result<u32, ShareUrlError> {
        let segment = path
            .split('/')
            .find(|segment| segment.contains(self.term_marker.as_str()))
            .ok_or_else(|| ShareUrlError::MissingTermSegment(path.to_string()))?;

        let digits = self
            .term_pattern
            .captures(segment)
            .and_then(|caps| caps.get(1))
            .ok_or_else(|| ShareUrlError::InvalidTerm(segment.to_string()))?;

        match digits.as_str().parse::<u32>() {
            Ok(term) if term > 0 => Ok(term),
            _ => Err(ShareUrlError::InvalidTerm(segment.to_string())),
        }
    }
}

/// Decode a NUSMods share URL with the default site settings.
pub fn decode(raw_url: &str) -> Result<Selection, ApiError> {
    Ok(ShareUrlDecoder::nusmods()?.decode(raw_url)?)
}

fn parse_url(raw_url: &str) -> Result<Url, ShareUrlError> {
    let trimmed = raw_url.trim();
    match Url::parse(trimmed) {
        Ok(url) => Ok(url),
        // Links pasted without a scheme ("nusmods.com/timetable/...")
        Err(url::ParseError::RelativeUrlWithoutBase) => Url::parse(&format!("https://{}", trimmed))
            .map_err(|e| ShareUrlError::Malformed(e.to_string())),
        Err(e) => Err(ShareUrlError::Malformed(e.to_string())),
    }
}

/// Parse one query value (e.g. `LEC:(1);TUT:(3,4)`) into a module selection.
///
/// Returns `None` when no lesson type survives parsing, so the module is omitted.
fn parse_module_value(module_code: &str, value: &str) -> Option<ModuleSelection> {
    let mut module = ModuleSelection::new(module_code);
    for token in split_lesson_tokens(value) {
        if let Some(lesson) = parse_lesson_token(token) {
            module.insert(lesson);
        }
    }
    if module.lessons.is_empty() {
        None
    } else {
        Some(module)
    }
}

/// `;` separates lesson types when present. The legacy format uses `,`, which
/// is only treated as a separator outside parentheses.
fn split_lesson_tokens(value: &str) -> Vec<&str> {
    if value.contains(';') {
        return value.split(';').collect();
    }

    let mut tokens = Vec::new();
    let mut depth = 0usize;
    let mut start = 0usize;
    for (idx, ch) in value.char_indices() {
        match ch {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                tokens.push(&value[start..idx]);
                start = idx + 1;
            }
            _ => {}
        }
    }
    tokens.push(&value[start..]);
    tokens
}

fn parse_lesson_token(token: &str) -> Option<LessonSelection> {
    let (lesson_type, raw_numbers) = token.split_once(':')?;
    let lesson_type = lesson_type.trim().to_ascii_uppercase();
    if lesson_type.is_empty() {
        return None;
    }

    let numbers = raw_numbers
        .trim()
        .trim_matches(|c| c == '(' || c == ')');
    let class_numbers: Vec<&str> = numbers
        .split(',')
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .collect();

    if class_numbers.is_empty() {
        None
    } else {
        Some(LessonSelection::new(lesson_type, class_numbers))
    }
}
