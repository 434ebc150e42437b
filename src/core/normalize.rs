//! Value normalizers and narrow free-text parsers.
//!
//! Every parser here degrades to `None` (or an empty list) on unparseable
//! input; the matchers translate that into "allow". No function in this
//! module returns an error.

use chrono::{Datelike, NaiveDate, Utc};
use once_cell::sync::Lazy;
use regex::Regex;

use super::tables;

/// Lowercase + trim. The canonical form every comparison works on.
pub fn norm(value: &str) -> String {
    value.trim().to_lowercase()
}

/// True when the value is one of the "no preference" sentinels (or absent).
pub fn is_no_preference(value: Option<&str>) -> bool {
    match value {
        None => true,
        Some(v) => {
            let v = norm(v);
            tables::NO_PREFERENCE.contains(&v.as_str())
        }
    }
}

/// True when a preference value actually constrains candidates.
pub fn is_set(value: Option<&str>) -> bool {
    !is_no_preference(value)
}

/// Coerce a loosely-typed deal-breaker flag. Only boolean `true` and the
/// exact string `"true"` count; every other shape is false.
pub fn is_dealbreaker(flag: &serde_json::Value) -> bool {
    match flag {
        serde_json::Value::Bool(b) => *b,
        serde_json::Value::String(s) => s == "true",
        _ => false,
    }
}

/// Parse a list-valued preference.
///
/// Accepts a JSON-array-encoded string (`'["Hindi","Tamil"]'`) or a plain
/// comma-separated string. Elements are lowercased and trimmed. If any
/// element is itself a no-preference sentinel the whole preference collapses
/// to "no preference" and the empty list is returned.
pub fn parse_list(value: &str) -> Vec<String> {
    let trimmed = value.trim();
    let raw: Vec<String> = if trimmed.starts_with('[') {
        match serde_json::from_str::<serde_json::Value>(trimmed) {
            Ok(serde_json::Value::Array(items)) => items
                .iter()
                .map(|item| match item.as_str() {
                    Some(s) => s.to_string(),
                    None => item.to_string(),
                })
                .collect(),
            _ => trimmed.split(',').map(str::to_string).collect(),
        }
    } else {
        trimmed.split(',').map(str::to_string).collect()
    };

    let items: Vec<String> = raw
        .iter()
        .map(|s| norm(s))
        .filter(|s| !s.is_empty())
        .collect();

    if items.iter().any(|s| is_no_preference(Some(s))) {
        return Vec::new();
    }
    items
}

/// Whole calendar years between `birth` and `today`, accounting for a
/// birthday that has not yet occurred this year.
fn whole_years(birth: NaiveDate, today: NaiveDate) -> u32 {
    let mut age = today.year() - birth.year();
    if (today.month(), today.day()) < (birth.month(), birth.day()) {
        age -= 1;
    }
    age.max(0) as u32
}

static MONTH_YEAR: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*(\d{1,2})/(\d{4})\s*$").unwrap());

/// Derive an age from a date-of-birth string, as of `today`.
///
/// Accepted formats, tried in order: MM/DD/YYYY, MM/YYYY (only for years
/// strictly inside 1900..2020 — anything else in this bare format is judged
/// implausible), then an ISO date or RFC 3339 timestamp.
pub fn age_from_dob(dob: &str, today: NaiveDate) -> Option<u32> {
    let dob = dob.trim();
    if dob.is_empty() {
        return None;
    }

    if let Ok(date) = NaiveDate::parse_from_str(dob, "%m/%d/%Y") {
        return Some(whole_years(date, today));
    }

    if let Some(caps) = MONTH_YEAR.captures(dob) {
        let month: u32 = caps[1].parse().ok()?;
        let year: i32 = caps[2].parse().ok()?;
        if year > 1900 && year < 2020 {
            let date = NaiveDate::from_ymd_opt(year, month, 1)?;
            return Some(whole_years(date, today));
        }
        return None;
    }

    if let Ok(date) = NaiveDate::parse_from_str(dob, "%Y-%m-%d") {
        return Some(whole_years(date, today));
    }
    if let Ok(ts) = chrono::DateTime::parse_from_rfc3339(dob) {
        return Some(whole_years(ts.date_naive(), today));
    }

    None
}

/// `age_from_dob` against the current date.
pub fn age_from_dob_now(dob: &str) -> Option<u32> {
    age_from_dob(dob, Utc::now().date_naive())
}

static HEIGHT_CM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^\s*(\d+(?:\.\d+)?)\s*cm\s*$").unwrap());
static HEIGHT_FT_IN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)^\s*(\d)\s*(?:'|’|ft\.?|feet)\s*(\d{1,2})?\s*(?:"|''|in\.?|inches)?\s*$"#)
        .unwrap()
});

/// Parse a height string to inches. Supports `"170 cm"` and
/// `feet'inches` / `feet ft inches` notations. Unparseable input yields
/// `None`, which must never block a match.
pub fn height_to_inches(value: &str) -> Option<u32> {
    if let Some(caps) = HEIGHT_CM.captures(value) {
        let cm: f64 = caps[1].parse().ok()?;
        return Some((cm / 2.54).round() as u32);
    }
    if let Some(caps) = HEIGHT_FT_IN.captures(value) {
        let feet: u32 = caps[1].parse().ok()?;
        let inches: u32 = caps
            .get(2)
            .map(|m| m.as_str().parse().unwrap_or(0))
            .unwrap_or(0);
        return Some(feet * 12 + inches);
    }
    None
}

static BETWEEN_YEARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"between\s+(\d+)\s+(?:to|and)\s+(\d+)\s+years?").unwrap());
static LESS_THAN_YEARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"less\s+than\s+(\d+)\s+years?").unwrap());
static YEARS_YOUNGER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+)\s+years?\s+younger").unwrap());
static YEARS_OLDER: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d+)\s+years?\s+older").unwrap());
static ABSOLUTE_RANGE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*(\d{2})\s*(?:-|to)\s*(\d{2})\s*$").unwrap());
static BARE_NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*(\d+)\s*$").unwrap());

/// Parse a legacy free-text age preference (`prefAgeDiff`) into derived
/// min/max bounds. Relative patterns need the seeker's own age; without it
/// they yield `None` (no constraint). Bounds are exact — no buffer is added.
pub fn age_bounds_from_diff(pref: &str, seeker_age: Option<u32>) -> Option<(u32, u32)> {
    let pref = norm(pref);

    if let Some(caps) = ABSOLUTE_RANGE.captures(&pref) {
        let min: u32 = caps[1].parse().ok()?;
        let max: u32 = caps[2].parse().ok()?;
        return Some((min.min(max), min.max(max)));
    }
    if let Some(caps) = BETWEEN_YEARS.captures(&pref) {
        let age = seeker_age?;
        let lo: u32 = caps[1].parse().ok()?;
        let hi: u32 = caps[2].parse().ok()?;
        return Some((age + lo.min(hi), age + lo.max(hi)));
    }
    if let Some(caps) = LESS_THAN_YEARS.captures(&pref) {
        let age = seeker_age?;
        let n: u32 = caps[1].parse().ok()?;
        return Some((age.saturating_sub(n), age + n));
    }
    if let Some(caps) = YEARS_YOUNGER.captures(&pref) {
        let age = seeker_age?;
        let n: u32 = caps[1].parse().ok()?;
        return Some((age.saturating_sub(n), age));
    }
    if let Some(caps) = YEARS_OLDER.captures(&pref) {
        let age = seeker_age?;
        let n: u32 = caps[1].parse().ok()?;
        return Some((age, age + n));
    }
    if let Some(caps) = BARE_NUMBER.captures(&pref) {
        let age = seeker_age?;
        let n: u32 = caps[1].parse().ok()?;
        return Some((age.saturating_sub(n), age + n));
    }

    None
}

/// Canonicalize a marital-status string onto the stored vocabulary:
/// `never_married`, `divorced`, `widowed`, or an underscored passthrough.
pub fn normalize_marital_status(value: &str) -> String {
    let v = norm(value);
    if v.contains("never")
        || v.contains("single")
        || v.contains("unmarried")
        || v.contains("bachelor")
        || v.contains("spinster")
    {
        return "never_married".to_string();
    }
    if v.contains("divorc") {
        return "divorced".to_string();
    }
    if v.contains("widow") {
        return "widowed".to_string();
    }
    v.replace(' ', "_")
}

/// Dietary classes, coarsest useful grouping for matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DietClass {
    Veg,
    Egg,
    NonVeg,
    Unknown,
}

/// Classify a diet string. The check order matters: "non vegetarian"
/// contains "vegetarian", and "eggetarian" must be caught before the
/// vegetarian substring check.
pub fn classify_diet(value: &str) -> DietClass {
    let v = norm(value);
    if v.is_empty() {
        return DietClass::Unknown;
    }
    if v.contains("non") || v.contains("meat") || v.contains("chicken") || v.contains("fish") {
        return DietClass::NonVeg;
    }
    if v.contains("egg") {
        return DietClass::Egg;
    }
    if v.contains("veg") || v.contains("jain") {
        return DietClass::Veg;
    }
    DietClass::Unknown
}

/// Smoking/drinking frequency classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HabitLevel {
    No,
    Occasional,
    Regular,
    Unknown,
}

/// Classify a smoking or drinking answer. Negation keywords match as whole
/// words only, so "whenever" does not read as "never".
pub fn classify_habit(value: &str) -> HabitLevel {
    let v = norm(value);
    if v.is_empty() {
        return HabitLevel::Unknown;
    }
    if tokens(&v).iter().any(|t| t == "no" || t == "never" || t == "non") {
        return HabitLevel::No;
    }
    if v.contains("occasion") || v.contains("social") || v.contains("sometimes") {
        return HabitLevel::Occasional;
    }
    if v == "yes" || v.contains("regular") || v.contains("daily") {
        return HabitLevel::Regular;
    }
    HabitLevel::Unknown
}

fn tokens(value: &str) -> Vec<String> {
    value
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(str::to_lowercase)
        .collect()
}

/// Tokenized word overlap between two free-text strings.
pub fn words_overlap(a: &str, b: &str) -> bool {
    let ta = tokens(a);
    let tb = tokens(b);
    ta.iter().any(|t| tb.contains(t))
}

/// Reconcile two free-text values: exact match, substring containment in
/// either direction, or a word of one being a prefix of a word of the other
/// (minimum three characters, so "Telugu" matches "Telugu speaking" and
/// "Konkani" matches "Konkani-Marathi").
pub fn intelligent_text_match(a: &str, b: &str) -> bool {
    let a = norm(a);
    let b = norm(b);
    if a.is_empty() || b.is_empty() {
        return false;
    }
    if a == b || a.contains(&b) || b.contains(&a) {
        return true;
    }
    let ta = tokens(&a);
    let tb = tokens(&b);
    ta.iter().any(|wa| {
        tb.iter().any(|wb| {
            wa.len() >= 3 && wb.len() >= 3 && (wa.starts_with(wb.as_str()) || wb.starts_with(wa.as_str()))
        })
    })
}

/// Extract a US state (as its postal abbreviation) from a free-text
/// location. Abbreviations match only as standalone uppercase tokens
/// ("San Jose, CA"), since lowercase two-letter words like "in" or "or"
/// would otherwise read as states, and they are checked first so
/// "Washington, DC" resolves to DC rather than Washington state. Full names
/// match anywhere in the text, longest name first, so "West Virginia" is not
/// read as Virginia.
pub fn extract_us_state(location: &str) -> Option<&'static str> {
    for raw in location.split(|c: char| !c.is_alphanumeric()) {
        if raw.len() == 2 && raw.chars().all(|c| c.is_ascii_uppercase()) {
            let token = raw.to_lowercase();
            if let Some(&(_, abbr)) = tables::US_STATES.iter().find(|&&(_, a)| a == token) {
                return Some(abbr);
            }
        }
    }

    let lower = norm(location);
    if lower.contains("washington dc")
        || lower.contains("washington, dc")
        || lower.contains("washington d.c")
    {
        return Some("dc");
    }
    let mut best: Option<(usize, &'static str)> = None;
    for &(name, abbr) in tables::US_STATES {
        if lower.contains(name) && best.map_or(true, |(len, _)| name.len() > len) {
            best = Some((name.len(), abbr));
        }
    }
    best.map(|(_, abbr)| abbr)
}

/// True when a free-text location reads as being in the USA.
pub fn is_us_location(location: &str) -> bool {
    let lower = norm(location);
    tables::USA_MARKERS.iter().any(|m| lower.contains(m)) || extract_us_state(location).is_some()
}
