//! Total conversions from raw spreadsheet cells into canonical candidate values.
//!
//! Every function here returns a definite value for any input; unparseable
//! text falls back to the documented default instead of failing.

use super::domain::{Qualification, PROFESSIONAL_SKILLS};
use super::mapping;

const MAX_YEARS_EXPERIENCE: u32 = 70;
const DECADE_YEARS: u32 = 10;

/// Trims and strips one leading and one trailing quote character (`"` or `'`).
pub fn clean_text(raw: &str) -> String {
    let trimmed = raw.trim();
    let without_leading = trimmed.strip_prefix(['"', '\'']).unwrap_or(trimmed);
    without_leading
        .strip_suffix(['"', '\''])
        .unwrap_or(without_leading)
        .to_string()
}

/// Parses a fitting score such as `87.6%`, rounding to the nearest integer.
pub fn normalize_score(raw: &str) -> i32 {
    let without_percent = raw.replacen('%', "", 1);
    match leading_number(&without_percent) {
        Some(value) => value.round() as i32,
        None => 0,
    }
}

/// Reads years of experience from text like `14+ years`, `Over a decade` or `NA`.
pub fn normalize_experience(raw: &str) -> u32 {
    let lowered = raw.trim().to_lowercase();
    let years = if lowered == "na" {
        0
    } else if lowered.contains("decade") {
        DECADE_YEARS
    } else {
        first_digit_run(&lowered).unwrap_or(0)
    };

    years.min(MAX_YEARS_EXPERIENCE)
}

pub fn normalize_qualification(raw: &str) -> Qualification {
    let lowered = raw.trim().to_lowercase();
    if lowered.is_empty() {
        return Qualification::BelowDegree;
    }
    mapping::qualification_for(&lowered)
}

/// Comma-joined vocabulary skills mentioned in the title or snippet.
pub fn extract_skills(title: &str, snippet: &str) -> String {
    let text = format!("{title} {snippet}").to_lowercase();
    let skills = mapping::skills_in(&text);
    if skills.is_empty() {
        PROFESSIONAL_SKILLS.to_string()
    } else {
        skills.join(", ")
    }
}

/// Best-guess industry from free text, used only as a display hint.
pub fn infer_industry(title: &str, snippet: &str) -> &'static str {
    let text = format!("{title} {snippet}").to_lowercase();
    mapping::industry_for(&text)
}

/// Best-guess employer from phrases like "at Acme" or "currently at Acme".
pub fn infer_company(title: &str, snippet: &str) -> String {
    let title_match = mapping::title_company_pattern()
        .captures(title)
        .and_then(|captures| captures.get(1));
    if let Some(found) = title_match {
        return found.as_str().trim().to_string();
    }

    mapping::snippet_company_patterns()
        .iter()
        .find_map(|pattern| pattern.captures(snippet))
        .and_then(|captures| captures.get(1))
        .map(|found| found.as_str().trim().to_string())
        .unwrap_or_else(|| mapping::DEFAULT_COMPANY_HINT.to_string())
}

/// Longest leading decimal literal, after leading whitespace.
fn leading_number(value: &str) -> Option<f64> {
    let trimmed = value.trim_start();
    let bytes = trimmed.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }

    let integer_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - integer_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let fraction_start = end + 1;
        let mut cursor = fraction_start;
        while cursor < bytes.len() && bytes[cursor].is_ascii_digit() {
            cursor += 1;
        }
        digits += cursor - fraction_start;
        if digits > 0 {
            end = cursor;
        }
    }

    if digits == 0 {
        return None;
    }

    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut cursor = end + 1;
        if cursor < bytes.len() && matches!(bytes[cursor], b'+' | b'-') {
            cursor += 1;
        }
        let exponent_start = cursor;
        while cursor < bytes.len() && bytes[cursor].is_ascii_digit() {
            cursor += 1;
        }
        if cursor > exponent_start {
            end = cursor;
        }
    }

    trimmed[..end].parse::<f64>().ok()
}

fn first_digit_run(value: &str) -> Option<u32> {
    let start = value.find(|ch: char| ch.is_ascii_digit())?;
    let digits: String = value[start..]
        .chars()
        .take_while(|ch| ch.is_ascii_digit())
        .collect();
    Some(digits.parse::<u32>().unwrap_or(u32::MAX))
}
