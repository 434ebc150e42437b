use tracing::{debug, trace};

use crate::config::MatchingSettings;
use crate::core::matchers;
use crate::models::Profile;

/// Result of a batch mutual-match pass.
#[derive(Debug)]
pub struct MatchResult {
    pub matches: Vec<Profile>,
    pub total_candidates: usize,
}

/// One-directional preference gate: does the candidate satisfy the seeker's
/// deal-breakers?
///
/// Gender is a hard, unconditional gate — only opposite genders can match.
/// After that, each attribute matcher runs in a fixed order and a failed
/// match vetoes the candidate only when that attribute is flagged as a
/// deal-breaker. Gotra is the exception: it is always enforced, whatever the
/// stored flag says. Non-deal-breaker mismatches do not affect the outcome
/// here; they only surface in the scoring breakdown.
pub fn matches_seeker_preferences(seeker: &Profile, candidate: &Profile) -> bool {
    if seeker.gender == candidate.gender {
        return false;
    }

    let prefs = seeker.partner_preferences();
    let seeker_age = seeker.age();
    let candidate_age = candidate.age();

    let mut failed: Option<&str> = None;

    if prefs.age_dealbreaker && !matchers::matches_age(&prefs, seeker_age, candidate_age) {
        failed = Some("age");
    } else if prefs.height_dealbreaker && !matchers::matches_height(&prefs, candidate.height_inches())
    {
        failed = Some("height");
    } else if prefs.marital_status.dealbreaker
        && !matchers::matches_marital_status(
            &prefs.marital_status.pref,
            candidate.marital_status.as_deref(),
        )
    {
        failed = Some("marital_status");
    } else if prefs.has_children.dealbreaker
        && !matchers::matches_has_children(
            &prefs.has_children.pref,
            candidate.has_children.as_deref(),
            candidate.marital_status.as_deref(),
        )
    {
        failed = Some("has_children");
    } else if prefs.diet.dealbreaker
        && !matchers::matches_diet(&prefs.diet.pref, candidate.dietary_preference.as_deref())
    {
        failed = Some("diet");
    } else if prefs.smoking.dealbreaker
        && !matchers::matches_habit(&prefs.smoking.pref, candidate.smoking.as_deref())
    {
        failed = Some("smoking");
    } else if prefs.drinking.dealbreaker
        && !matchers::matches_habit(&prefs.drinking.pref, candidate.drinking.as_deref())
    {
        failed = Some("drinking");
    } else if prefs.religion.dealbreaker
        && !matchers::matches_religion(&prefs.religion.pref, candidate.religion.as_deref())
    {
        failed = Some("religion");
    } else if prefs.community.dealbreaker
        && !matchers::matches_community(
            &prefs.community.pref,
            seeker.community.as_deref(),
            candidate.community.as_deref(),
        )
    {
        failed = Some("community");
    } else if prefs.sub_community.dealbreaker
        && !matchers::matches_sub_community(
            &prefs.sub_community.pref,
            seeker.sub_community.as_deref(),
            candidate.sub_community.as_deref(),
        )
    {
        failed = Some("sub_community");
    } else if !matchers::matches_gotra(
        // Always enforced, regardless of the stored flag.
        &prefs.gotra.pref,
        seeker.gotra.as_deref(),
        candidate.gotra.as_deref(),
    ) {
        failed = Some("gotra");
    } else if prefs.location.dealbreaker
        && !matchers::matches_location(
            &prefs.location.pref,
            seeker.current_location.as_deref(),
            candidate.current_location.as_deref(),
        )
    {
        failed = Some("location");
    } else if prefs.qualification.dealbreaker
        && !matchers::matches_qualification(
            &prefs.qualification.pref,
            candidate.qualification.as_deref(),
        )
    {
        failed = Some("qualification");
    } else if prefs.income.dealbreaker
        && !matchers::matches_income(&prefs.income.pref, candidate.annual_income.as_deref())
    {
        failed = Some("income");
    } else if prefs.occupation.dealbreaker
        && !matchers::matches_list_overlap(
            &prefs.occupation.pref,
            seeker.occupation.as_deref(),
            candidate.occupation.as_deref(),
        )
    {
        failed = Some("occupation");
    } else if prefs.family_values.dealbreaker
        && !matchers::matches_family_values(
            &prefs.family_values.pref,
            seeker.family_values.as_deref(),
            candidate.family_values.as_deref(),
        )
    {
        failed = Some("family_values");
    } else if prefs.family_location.dealbreaker
        && !matchers::matches_family_location(
            &prefs.family_location.pref,
            seeker.family_location.as_deref(),
            candidate.family_location.as_deref(),
        )
    {
        failed = Some("family_location");
    } else if prefs.mother_tongue.dealbreaker
        && !matchers::matches_mother_tongue(
            &prefs.mother_tongue.pref,
            prefs.mother_tongue_other.as_deref(),
            seeker.mother_tongue.as_deref(),
            seeker.mother_tongue_other.as_deref(),
            candidate.mother_tongue.as_deref(),
            candidate.mother_tongue_other.as_deref(),
        )
    {
        failed = Some("mother_tongue");
    } else if prefs.citizenship.dealbreaker
        && !matchers::matches_same_or_contains(
            &prefs.citizenship.pref,
            seeker.citizenship.as_deref(),
            candidate.citizenship.as_deref(),
        )
    {
        failed = Some("citizenship");
    } else if prefs.grew_up_in.dealbreaker
        && !matchers::matches_same_or_contains(
            &prefs.grew_up_in.pref,
            seeker.grew_up_in.as_deref(),
            candidate.grew_up_in.as_deref(),
        )
    {
        failed = Some("grew_up_in");
    } else if prefs.relocation.dealbreaker
        && !matchers::matches_relocation(
            &prefs.relocation.pref,
            candidate.open_to_relocation.as_deref(),
        )
    {
        failed = Some("relocation");
    } else if prefs.pets.dealbreaker
        && !matchers::matches_pets(&prefs.pets.pref, candidate.pets.as_deref())
    {
        failed = Some("pets");
    } else if prefs.hobbies.dealbreaker
        && !matchers::matches_list_overlap(
            &prefs.hobbies.pref,
            seeker.hobbies.as_deref(),
            candidate.hobbies.as_deref(),
        )
    {
        failed = Some("hobbies");
    } else if prefs.fitness.dealbreaker
        && !matchers::matches_list_overlap(
            &prefs.fitness.pref,
            seeker.fitness.as_deref(),
            candidate.fitness.as_deref(),
        )
    {
        failed = Some("fitness");
    } else if prefs.interests.dealbreaker
        && !matchers::matches_list_overlap(
            &prefs.interests.pref,
            seeker.interests.as_deref(),
            candidate.interests.as_deref(),
        )
    {
        failed = Some("interests");
    }

    if let Some(attribute) = failed {
        trace!(
            seeker = %seeker.user_id,
            candidate = %candidate.user_id,
            attribute,
            "deal-breaker rejected candidate"
        );
        return false;
    }
    true
}

/// Mutual match: opposite genders and each party's deal-breakers satisfied
/// by the other. Symmetric in effect even though each inner call is
/// directional with a different deal-breaker set.
pub fn is_mutual_match(a: &Profile, b: &Profile) -> bool {
    a.gender != b.gender && matches_seeker_preferences(b, a) && matches_seeker_preferences(a, b)
}

/// Batch mutual-match orchestrator.
///
/// Candidates are evaluated independently (order does not affect
/// correctness); the seeker's own record is excluded by id.
#[derive(Debug, Clone)]
pub struct Matcher {
    default_limit: usize,
    max_limit: usize,
}

impl Matcher {
    pub fn new(default_limit: usize, max_limit: usize) -> Self {
        Self {
            default_limit,
            max_limit,
        }
    }

    pub fn from_settings(settings: &MatchingSettings) -> Self {
        Self::new(settings.default_limit, settings.max_limit)
    }

    pub fn with_default_limit() -> Self {
        Self::from_settings(&MatchingSettings::default())
    }

    /// Filter `candidates` down to mutual matches for `seeker`.
    ///
    /// `limit` caps the returned matches; zero falls back to the configured
    /// default, and requests above the configured maximum are clamped to it.
    pub fn find_mutual_matches(
        &self,
        seeker: &Profile,
        candidates: Vec<Profile>,
        limit: usize,
    ) -> MatchResult {
        let total_candidates = candidates.len();
        let limit = if limit == 0 {
            self.default_limit
        } else {
            limit.min(self.max_limit)
        };

        let mut matches: Vec<Profile> = candidates
            .into_iter()
            .filter(|c| c.user_id != seeker.user_id)
            .filter(|c| is_mutual_match(seeker, c))
            .collect();
        matches.truncate(limit);

        debug!(
            seeker = %seeker.user_id,
            total_candidates,
            matched = matches.len(),
            "mutual match pass complete"
        );

        MatchResult {
            matches,
            total_candidates,
        }
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_default_limit()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Gender;

    fn seeker() -> Profile {
        Profile {
            user_id: "seeker".to_string(),
            gender: Gender::Female,
            date_of_birth: Some("05/10/1993".to_string()),
            pref_age_min: Some(30),
            pref_age_max: Some(35),
            pref_age_is_dealbreaker: true,
            ..Default::default()
        }
    }

    fn candidate(id: &str, dob: &str) -> Profile {
        Profile {
            user_id: id.to_string(),
            gender: Gender::Male,
            date_of_birth: Some(dob.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_same_gender_never_matches() {
        let a = seeker();
        let mut b = candidate("b", "05/10/1992");
        b.gender = Gender::Female;
        assert!(!matches_seeker_preferences(&a, &b));
        assert!(!is_mutual_match(&a, &b));
    }

    #[test]
    fn test_age_dealbreaker_gates() {
        let s = seeker();
        // Too young for the 30-35 window
        let young = candidate("young", "01/01/2000");
        assert!(!matches_seeker_preferences(&s, &young));
        // Inside the window
        let ok = candidate("ok", "01/01/1993");
        assert!(matches_seeker_preferences(&s, &ok));
    }

    #[test]
    fn test_non_dealbreaker_mismatch_passes() {
        let mut s = seeker();
        s.pref_diet = Some("Vegetarian".to_string());
        // diet mismatches but is not a deal-breaker
        let mut c = candidate("c", "01/01/1993");
        c.dietary_preference = Some("Non Vegetarian".to_string());
        assert!(matches_seeker_preferences(&s, &c));

        s.pref_diet_is_dealbreaker = true;
        assert!(!matches_seeker_preferences(&s, &c));
    }

    #[test]
    fn test_gotra_enforced_without_flag() {
        let mut s = seeker();
        s.pref_gotra = Some("different".to_string());
        s.gotra = Some("Bharadwaj".to_string());
        assert!(!s.pref_gotra_is_dealbreaker);

        let mut c = candidate("c", "01/01/1993");
        c.gotra = Some("Bharadwaj".to_string());
        assert!(!matches_seeker_preferences(&s, &c));

        c.gotra = Some("Kashyap".to_string());
        assert!(matches_seeker_preferences(&s, &c));
    }

    #[test]
    fn test_mutual_match_is_symmetric() {
        let mut a = seeker();
        a.pref_diet = Some("Vegetarian".to_string());
        a.pref_diet_is_dealbreaker = true;
        a.dietary_preference = Some("Vegetarian".to_string());

        let mut b = candidate("b", "01/01/1993");
        b.date_of_birth = Some("01/01/1992".to_string());
        b.dietary_preference = Some("Vegetarian".to_string());
        b.pref_marital_status = Some("never_married".to_string());
        b.pref_marital_status_is_dealbreaker = true;

        assert_eq!(is_mutual_match(&a, &b), is_mutual_match(&b, &a));
    }

    #[test]
    fn test_mutual_match_requires_both_directions() {
        let s = seeker();
        // Candidate matches the seeker's window but demands an older partner
        let mut c = candidate("c", "01/01/1993");
        c.pref_age_min = Some(40);
        c.pref_age_is_dealbreaker = true;
        assert!(matches_seeker_preferences(&s, &c));
        assert!(!matches_seeker_preferences(&c, &s));
        assert!(!is_mutual_match(&s, &c));
    }

    #[test]
    fn test_find_mutual_matches_excludes_self_and_limits() {
        let s = seeker();
        let mut own = s.clone();
        own.gender = Gender::Male; // same id, must still be excluded

        let candidates = vec![
            own,
            candidate("a", "01/01/1993"),
            candidate("b", "01/01/1994"),
            candidate("c", "01/01/1992"),
        ];

        let result = Matcher::with_default_limit().find_mutual_matches(&s, candidates, 2);
        assert_eq!(result.total_candidates, 4);
        assert_eq!(result.matches.len(), 2);
        assert!(result.matches.iter().all(|m| m.user_id != "seeker"));
    }

    #[test]
    fn test_matcher_from_settings_clamps_limit() {
        let s = seeker();
        let candidates = vec![
            candidate("a", "01/01/1993"),
            candidate("b", "01/01/1994"),
            candidate("c", "01/01/1992"),
        ];

        let matcher = Matcher::from_settings(&MatchingSettings {
            default_limit: 1,
            max_limit: 2,
        });
        // A request above max_limit is clamped to it
        let result = matcher.find_mutual_matches(&s, candidates.clone(), 50);
        assert_eq!(result.matches.len(), 2);
        // Zero falls back to the configured default
        let result = matcher.find_mutual_matches(&s, candidates, 0);
        assert_eq!(result.matches.len(), 1);
    }
}
