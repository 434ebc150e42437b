//! Per-attribute match predicates.
//!
//! Every matcher follows the same contract: an unset preference never
//! constrains, and missing candidate data never blocks a match. The one
//! deliberate exception is the `same_state`/`tri_state`/`dmv_area` location
//! family, which rejects when no US state can be extracted — inherited
//! behavior, kept as-is.

use crate::core::normalize::{self, DietClass, HabitLevel};
use crate::core::tables::{self, EducationPref};
use crate::models::{PartnerPreferences, Pref};

/// Case-insensitive substring containment in either direction. Inputs are
/// expected pre-normalized.
#[inline]
fn contains_either(a: &str, b: &str) -> bool {
    !a.is_empty() && !b.is_empty() && (a.contains(b) || b.contains(a))
}

/// Age check. Explicit min/max bounds win; the legacy free-text
/// `prefAgeDiff` is parsed into derived bounds otherwise. Bounds are exact —
/// an off-by-one candidate is rejected.
pub fn matches_age(
    prefs: &PartnerPreferences,
    seeker_age: Option<u32>,
    candidate_age: Option<u32>,
) -> bool {
    let (min, max) = if prefs.age_min.is_some() || prefs.age_max.is_some() {
        (prefs.age_min, prefs.age_max)
    } else if let Some(diff) = prefs.age_diff.first() {
        match normalize::age_bounds_from_diff(diff, seeker_age) {
            Some((lo, hi)) => (Some(lo), Some(hi)),
            None => return true,
        }
    } else {
        return true;
    };

    let Some(age) = candidate_age else { return true };
    if let Some(lo) = min {
        if age < lo {
            return false;
        }
    }
    if let Some(hi) = max {
        if age > hi {
            return false;
        }
    }
    true
}

/// Height check. Min/max preference bounds (inclusive) when present;
/// otherwise a single preference string with direction inferred from
/// keywords ("above"/"+" floor, "below" ceiling, else exact).
pub fn matches_height(prefs: &PartnerPreferences, candidate_inches: Option<u32>) -> bool {
    if !prefs.height_is_set() {
        return true;
    }
    let Some(height) = candidate_inches else { return true };

    if prefs.height_min.is_some() || prefs.height_max.is_some() {
        if let Some(lo) = prefs.height_min {
            if height < lo {
                return false;
            }
        }
        if let Some(hi) = prefs.height_max {
            if height > hi {
                return false;
            }
        }
        return true;
    }

    let Some(raw) = prefs.height.first() else { return true };
    let floor = raw.contains("above") || raw.contains('+');
    let ceiling = raw.contains("below");
    let cleaned = raw
        .replace("above", "")
        .replace("below", "")
        .replace('+', "");
    let Some(target) = normalize::height_to_inches(cleaned.trim()) else {
        return true;
    };
    if floor {
        height >= target
    } else if ceiling {
        height <= target
    } else {
        height == target
    }
}

/// Marital status: synonyms are canonicalized on both sides, then any
/// accepted status in the (possibly list-valued) preference matches by
/// containment.
pub fn matches_marital_status(pref: &Pref, candidate: Option<&str>) -> bool {
    if !pref.is_set() {
        return true;
    }
    let Some(candidate) = candidate else { return true };
    let cand = normalize::normalize_marital_status(candidate);
    pref.values()
        .iter()
        .map(|v| normalize::normalize_marital_status(v))
        .any(|p| contains_either(&p, &cand))
}

/// Partner's-children check. A never-married candidate with no explicit
/// children value is inferred as having none.
pub fn matches_has_children(
    pref: &Pref,
    candidate_children: Option<&str>,
    candidate_marital: Option<&str>,
) -> bool {
    let Some(p) = pref.first() else { return true };

    let cand = match candidate_children {
        Some(c) if !c.trim().is_empty() => normalize::norm(c),
        _ => {
            let never_married = candidate_marital
                .map(|m| normalize::normalize_marital_status(m) == "never_married")
                .unwrap_or(false);
            if never_married {
                "no".to_string()
            } else {
                return true;
            }
        }
    };

    let none = cand == "no" || cand == "none" || cand == "no_children" || cand.contains("no children");
    let not_living = cand.contains("not") && cand.contains("living");
    let living = cand.contains("living") && !not_living;

    match p {
        "no_children" => none,
        "ok_not_living" => none || not_living,
        "ok_living" => none || living,
        _ => true, // ok_any and anything unrecognized
    }
}

/// Diet check over the {veg, egg, nonveg, unknown} classes: veg seekers
/// accept only veg, egg seekers accept veg + egg, nonveg seekers accept
/// anyone. Unknown on either side allows.
pub fn matches_diet(pref: &Pref, candidate: Option<&str>) -> bool {
    let Some(p) = pref.first() else { return true };
    let wanted = normalize::classify_diet(p);
    let cand = candidate
        .map(normalize::classify_diet)
        .unwrap_or(DietClass::Unknown);

    match wanted {
        DietClass::Veg => matches!(cand, DietClass::Veg | DietClass::Unknown),
        DietClass::Egg => matches!(cand, DietClass::Veg | DietClass::Egg | DietClass::Unknown),
        DietClass::NonVeg | DietClass::Unknown => true,
    }
}

/// Smoking and drinking share the same policy: a "never" preference wants a
/// non-user, an "occasionally is fine" preference rejects only regulars, and
/// anything else matches everyone.
pub fn matches_habit(pref: &Pref, candidate: Option<&str>) -> bool {
    let Some(p) = pref.first() else { return true };
    let cand = candidate
        .map(normalize::classify_habit)
        .unwrap_or(HabitLevel::Unknown);

    match normalize::classify_habit(p) {
        HabitLevel::No => matches!(cand, HabitLevel::No | HabitLevel::Unknown),
        HabitLevel::Occasional => cand != HabitLevel::Regular,
        _ => true,
    }
}

/// Religion: substring overlap in either direction.
pub fn matches_religion(pref: &Pref, candidate: Option<&str>) -> bool {
    if !pref.is_set() {
        return true;
    }
    let Some(candidate) = candidate else { return true };
    let cand = normalize::norm(candidate);
    pref.values().iter().any(|p| contains_either(p, &cand))
}

/// True when the value names one of the curated Brahmin sub-groups.
pub fn is_brahmin(value: &str) -> bool {
    let v = normalize::norm(value);
    !v.is_empty() && tables::BRAHMIN_COMMUNITIES.iter().any(|b| v.contains(b))
}

fn community_value_match(pref_value: &str, seeker: Option<&str>, cand: &str) -> bool {
    if pref_value.contains("same") {
        let Some(own) = seeker else { return true };
        let own = normalize::norm(own);
        // Curated synonym list first: Iyer and Niyogi are both Brahmin
        // sub-groups even though the strings share no tokens.
        if is_brahmin(&own) && is_brahmin(cand) {
            return true;
        }
        return normalize::words_overlap(&own, cand);
    }
    if contains_either(pref_value, cand) {
        return true;
    }
    is_brahmin(pref_value) && is_brahmin(cand)
}

/// Community/caste check. List preferences are OR-ed across elements; the
/// "same community" sentinel falls back to the Brahmin synonym list, then to
/// tokenized word overlap with the seeker's own community.
pub fn matches_community(
    pref: &Pref,
    seeker_community: Option<&str>,
    candidate_community: Option<&str>,
) -> bool {
    if !pref.is_set() {
        return true;
    }
    let Some(candidate) = candidate_community else { return true };
    let cand = normalize::norm(candidate);
    pref.values()
        .iter()
        .any(|v| community_value_match(v, seeker_community, &cand))
}

/// Sub-community check: same shape as community but without the Brahmin
/// synonym fallback.
pub fn matches_sub_community(
    pref: &Pref,
    seeker_sub: Option<&str>,
    candidate_sub: Option<&str>,
) -> bool {
    if !pref.is_set() {
        return true;
    }
    let Some(candidate) = candidate_sub else { return true };
    let cand = normalize::norm(candidate);
    pref.values().iter().any(|v| {
        if v.contains("same") {
            match seeker_sub {
                Some(own) => normalize::words_overlap(&normalize::norm(own), &cand),
                None => true,
            }
        } else {
            contains_either(v, &cand)
        }
    })
}

/// Gotra check: "different"/"not" requires inequality, "same" requires
/// equality. Missing gotra on either side always allows. The evaluator
/// enforces this matcher unconditionally — it never soft-fails behind a
/// deal-breaker flag.
pub fn matches_gotra(pref: &Pref, seeker_gotra: Option<&str>, candidate_gotra: Option<&str>) -> bool {
    let Some(p) = pref.first() else { return true };
    let (Some(sg), Some(cg)) = (seeker_gotra, candidate_gotra) else {
        return true;
    };
    let sg = normalize::norm(sg);
    let cg = normalize::norm(cg);
    if sg.is_empty() || cg.is_empty() {
        return true;
    }
    if p.contains("different") || p.contains("not ") {
        sg != cg
    } else if p.contains("same") {
        sg == cg
    } else {
        true
    }
}

/// Resolve a preference element to a US state abbreviation when it names one
/// ("california", "new_york", "ny").
fn state_for_pref(element: &str) -> Option<&'static str> {
    let name = element.replace('_', " ");
    tables::US_STATES
        .iter()
        .find(|&&(full, abbr)| full == name || abbr == element)
        .map(|&(_, abbr)| abbr)
}

fn city_of(location: &str) -> String {
    normalize::norm(location.split(',').next().unwrap_or(location))
}

fn location_element_match(element: &str, seeker: Option<&str>, candidate: Option<&str>) -> bool {
    // Sentinels that always pass: no geocoding is available for radius
    // preferences, and relocation-friendly answers accept anywhere.
    if (element.starts_with("within") && element.contains("mile"))
        || element == "open_to_relocation"
        || element == "other_state"
    {
        return true;
    }

    match element {
        "usa" => match candidate {
            None => true,
            Some(c) => normalize::is_us_location(c),
        },
        "bay_area" => match candidate {
            None => true,
            Some(c) => {
                let c = normalize::norm(c);
                tables::BAY_AREA.iter().any(|k| c.contains(k))
            }
        },
        "southern_california" => match candidate {
            None => true,
            Some(c) => {
                let c = normalize::norm(c);
                tables::SOUTHERN_CALIFORNIA.iter().any(|k| c.contains(k))
            }
        },
        "same_city" => match (seeker, candidate) {
            (Some(s), Some(c)) => normalize::intelligent_text_match(&city_of(s), &city_of(c)),
            _ => true,
        },
        // The default-reject family: no extractable state means no match,
        // unlike every other matcher. Preserved from the original behavior.
        "same_state" => {
            let ss = seeker.and_then(normalize::extract_us_state);
            let cs = candidate.and_then(normalize::extract_us_state);
            matches!((ss, cs), (Some(a), Some(b)) if a == b)
        }
        "tri_state" => candidate
            .and_then(normalize::extract_us_state)
            .map(|s| tables::TRI_STATE.contains(&s))
            .unwrap_or(false),
        "dmv_area" => candidate
            .and_then(normalize::extract_us_state)
            .map(|s| tables::DMV_AREA.contains(&s))
            .unwrap_or(false),
        _ => {
            if let Some(abbr) = state_for_pref(element) {
                return match candidate {
                    None => true,
                    Some(c) => normalize::extract_us_state(c) == Some(abbr),
                };
            }
            // Free-text fallback: containment either way, or a shared state.
            match candidate {
                None => true,
                Some(c) => {
                    let cand = normalize::norm(c);
                    contains_either(element, &cand)
                        || match (
                            normalize::extract_us_state(element),
                            normalize::extract_us_state(c),
                        ) {
                            (Some(a), Some(b)) => a == b,
                            _ => false,
                        }
                }
            }
        }
    }
}

/// Location check. List preferences are OR-ed across elements; see
/// `location_element_match` for the dropdown sentinel semantics.
pub fn matches_location(
    pref: &Pref,
    seeker_location: Option<&str>,
    candidate_location: Option<&str>,
) -> bool {
    if !pref.is_set() {
        return true;
    }
    pref.values()
        .iter()
        .any(|e| location_element_match(e, seeker_location, candidate_location))
}

fn qual_tokens(value: &str) -> Vec<String> {
    normalize::norm(value)
        .replace('.', "")
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// Map a raw qualification string to its ordinal education level (1-4).
/// Short table keys match as whole tokens (so "bs" does not fire inside
/// "mbbs"); longer keys match by substring. The table is ordered highest
/// level first, so "MBBS, MD" resolves to the doctorate tier.
pub fn qualification_level(qualification: &str) -> Option<u8> {
    let text = normalize::norm(qualification).replace('.', "");
    let toks = qual_tokens(qualification);
    for &(key, level) in tables::EDUCATION_LEVELS {
        let hit = if key.len() <= 4 && !key.contains(' ') {
            toks.iter().any(|t| t == key)
        } else {
            text.contains(key)
        };
        if hit {
            return Some(level);
        }
    }
    None
}

fn fuzzy_qual_match(keyword: &str, qualification: &str) -> bool {
    let text = normalize::norm(qualification).replace('.', "");
    if keyword.len() <= 4 && !keyword.contains(' ') {
        qual_tokens(qualification).iter().any(|t| t == keyword)
    } else {
        contains_either(keyword, &text)
    }
}

fn qualification_value_match(pref_value: &str, candidate: Option<&str>) -> bool {
    match tables::EDUCATION_PREFS.get(pref_value) {
        Some(EducationPref::MinLevel(min)) => match candidate.and_then(qualification_level) {
            Some(level) => level >= *min,
            None => true,
        },
        Some(EducationPref::Categories(categories)) => match candidate {
            None => true,
            Some(c) => categories.iter().any(|k| fuzzy_qual_match(k, c)),
        },
        // Legacy fallback: run both sides through the level table and
        // compare as minimums.
        None => {
            let (Some(pl), Some(cl)) = (
                qualification_level(pref_value),
                candidate.and_then(qualification_level),
            ) else {
                return true;
            };
            cl >= pl
        }
    }
}

/// Education check via the two-tier table system: curated preference keys
/// resolve to a minimum level or a category whitelist; unrecognized keys
/// fall back to level-vs-level comparison.
pub fn matches_qualification(pref: &Pref, candidate_qualification: Option<&str>) -> bool {
    if !pref.is_set() {
        return true;
    }
    pref.values()
        .iter()
        .any(|v| qualification_value_match(v, candidate_qualification))
}

/// Map an income bucket or free-form string to a representative annual value
/// in thousands. `"N+"` reads as a minimum threshold of N.
pub fn income_value(value: &str) -> Option<u32> {
    let v = normalize::norm(value).replace(['$', ' '], "");
    for &(key, rep) in tables::INCOME_BUCKETS {
        if v == key.replace(' ', "") {
            return Some(rep);
        }
    }
    if let Some(stripped) = v.strip_suffix('+') {
        return stripped.trim_end_matches('k').parse().ok();
    }
    v.trim_end_matches('k').parse().ok()
}

/// Income check: candidate's representative value must meet or exceed the
/// preference's. Unrecognized buckets on either side allow.
pub fn matches_income(pref: &Pref, candidate_income: Option<&str>) -> bool {
    let Some(p) = pref.first() else { return true };
    let Some(wanted) = income_value(p) else { return true };
    let Some(c) = candidate_income else { return true };
    let Some(have) = income_value(c) else { return true };
    have >= wanted
}

/// List-overlap check shared by occupation, hobbies, fitness, and interests:
/// any pairwise substring overlap between the preference list and the
/// candidate's parsed free-text list. A `same_as_mine` element first checks
/// the seeker's own value in the same field, then falls back to the
/// remaining literal elements.
pub fn matches_list_overlap(
    pref: &Pref,
    seeker_own: Option<&str>,
    candidate_value: Option<&str>,
) -> bool {
    if !pref.is_set() {
        return true;
    }
    let Some(candidate) = candidate_value else { return true };
    let cand_items = normalize::parse_list(candidate);
    if cand_items.is_empty() {
        return true;
    }

    for p in pref.values() {
        if p == "same_as_mine" {
            if let Some(own) = seeker_own {
                let own_items = normalize::parse_list(own);
                if own_items
                    .iter()
                    .any(|o| cand_items.iter().any(|c| contains_either(o, c)))
                {
                    return true;
                }
            }
            continue;
        }
        if cand_items.iter().any(|c| contains_either(p, c)) {
            return true;
        }
    }
    false
}

/// Family values: `same_as_mine` compares to the seeker's own answer,
/// otherwise direct equality.
pub fn matches_family_values(
    pref: &Pref,
    seeker_values: Option<&str>,
    candidate_values: Option<&str>,
) -> bool {
    if !pref.is_set() {
        return true;
    }
    let Some(candidate) = candidate_values else { return true };
    let cand = normalize::norm(candidate);
    pref.values().iter().any(|p| {
        if p == "same_as_mine" {
            match seeker_values {
                Some(own) => normalize::norm(own) == cand,
                None => true,
            }
        } else {
            *p == cand
        }
    })
}

/// Family location: `same_as_mine`/`same_country` compare against the
/// seeker's own family location by containment or shared US state; the
/// `usa` sentinel checks the candidate side is a US location.
pub fn matches_family_location(
    pref: &Pref,
    seeker_family_location: Option<&str>,
    candidate_family_location: Option<&str>,
) -> bool {
    if !pref.is_set() {
        return true;
    }
    let Some(candidate) = candidate_family_location else {
        return true;
    };
    let cand = normalize::norm(candidate);
    pref.values().iter().any(|p| match p.as_str() {
        "same_as_mine" | "same_country" => match seeker_family_location {
            Some(own) => {
                let own_n = normalize::norm(own);
                contains_either(&own_n, &cand)
                    || matches!(
                        (
                            normalize::extract_us_state(own),
                            normalize::extract_us_state(candidate)
                        ),
                        (Some(a), Some(b)) if a == b
                    )
            }
            None => true,
        },
        "usa" => normalize::is_us_location(candidate),
        _ => contains_either(p, &cand),
    })
}

/// Resolve a stored language plus its "Other" free-text override into the
/// effective language string.
fn effective_language(language: Option<&str>, other: Option<&str>) -> Option<String> {
    match language {
        Some(l) if normalize::norm(l) == "other" => other.map(normalize::norm),
        Some(l) if !l.trim().is_empty() => Some(normalize::norm(l)),
        _ => other.map(normalize::norm),
    }
}

/// Mother tongue: multiple preferred languages, `other` on either side
/// paired with free-text overrides, and `same_as_mine`, reconciled via
/// `intelligent_text_match`.
#[allow(clippy::too_many_arguments)]
pub fn matches_mother_tongue(
    pref: &Pref,
    pref_other: Option<&str>,
    seeker_tongue: Option<&str>,
    seeker_other: Option<&str>,
    candidate_tongue: Option<&str>,
    candidate_other: Option<&str>,
) -> bool {
    if !pref.is_set() {
        return true;
    }
    let Some(cand_lang) = effective_language(candidate_tongue, candidate_other) else {
        return true;
    };
    if cand_lang.is_empty() {
        return true;
    }

    for p in pref.values() {
        let target = match p.as_str() {
            "same_as_mine" => effective_language(seeker_tongue, seeker_other),
            "other" => pref_other.map(normalize::norm),
            _ => Some(p.clone()),
        };
        if let Some(t) = target {
            if normalize::intelligent_text_match(&t, &cand_lang) {
                return true;
            }
        }
    }
    false
}

/// Shared shape for citizenship and grew-up-in: `same_as_mine` against the
/// seeker's own value, otherwise containment either direction.
pub fn matches_same_or_contains(
    pref: &Pref,
    seeker_own: Option<&str>,
    candidate: Option<&str>,
) -> bool {
    if !pref.is_set() {
        return true;
    }
    let Some(candidate) = candidate else { return true };
    let cand = normalize::norm(candidate);
    pref.values().iter().any(|p| {
        if p == "same_as_mine" {
            match seeker_own {
                Some(own) => normalize::intelligent_text_match(own, &cand),
                None => true,
            }
        } else {
            contains_either(p, &cand)
        }
    })
}

/// Relocation: a `yes` preference requires the candidate not to have
/// answered an explicit no; `open` and everything else constrain nothing.
pub fn matches_relocation(pref: &Pref, candidate: Option<&str>) -> bool {
    let Some(p) = pref.first() else { return true };
    let Some(c) = candidate else { return true };
    let cand = normalize::norm(c);
    if p.contains("yes") {
        return cand != "no" && !cand.contains("not");
    }
    true
}

/// Pets, over the have/love/open/prefer-not taxonomy: a prefer-not seeker
/// rejects pet owners, a have/love seeker rejects prefer-not candidates,
/// open matches everyone.
pub fn matches_pets(pref: &Pref, candidate: Option<&str>) -> bool {
    let Some(p) = pref.first() else { return true };
    let Some(c) = candidate else { return true };
    let cand = normalize::norm(c);
    if p.contains("prefer") || p == "no" {
        !cand.contains("have")
    } else if p.contains("have") || p.contains("love") {
        !cand.contains("prefer") && cand != "no"
    } else {
        true
    }
}
