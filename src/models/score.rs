use serde::{Deserialize, Serialize};

/// One row of the compatibility breakdown: how the candidate fared against a
/// single preference, with display-ready strings for the UI.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CriterionScore {
    /// Display name, e.g. "Age" or "Partner's Children".
    pub name: String,
    pub matched: bool,
    /// Seeker's preference, or "Doesn't matter" when unset.
    pub preference: String,
    /// Candidate's value, or "Not specified" when missing.
    pub candidate: String,
    #[serde(rename = "isDealbreaker")]
    pub dealbreaker: bool,
    /// Whether this row counts toward the percentage denominator. Unset
    /// preferences are shown but not counted.
    #[serde(skip)]
    pub counted: bool,
}

/// Full compatibility report for a seeker/candidate pair.
///
/// Built by re-running every matcher with no deal-breaker short-circuit, so
/// the breakdown stays complete even for pairs the mutual-match decision
/// rejects.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchScore {
    pub criteria: Vec<CriterionScore>,
    #[serde(rename = "matchedCount")]
    pub matched_count: usize,
    #[serde(rename = "totalCriteria")]
    pub total_criteria: usize,
    /// 0-100; defined as 100 when no preferences are set.
    pub percentage: u32,
}
