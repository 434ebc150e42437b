use crate::core::{matchers, normalize};
use crate::models::{CriterionScore, MatchScore, Profile};

/// Build the full compatibility breakdown for a seeker/candidate pair.
///
/// Every attribute matcher is re-run unconditionally — deal-breaker flags
/// are recorded for display but never short-circuit — so this report can
/// disagree with `matches_seeker_preferences` on "how many things matched"
/// while that function answers "is this a match". Both behaviors are
/// intended; this is a reporting view only.
///
/// Attributes with no preference set are shown ("Doesn't matter") but
/// excluded from the percentage denominator. "Partner's Children" is counted
/// only when the candidate's marital status is not never-married.
pub fn calculate_match_score(seeker: &Profile, candidate: &Profile) -> MatchScore {
    let prefs = seeker.partner_preferences();
    let seeker_age = seeker.age();
    let candidate_age = candidate.age();

    let mut criteria: Vec<CriterionScore> = Vec::with_capacity(25);
    let mut push = |name: &str,
                    matched: bool,
                    preference: Option<String>,
                    cand: Option<String>,
                    dealbreaker: bool,
                    counted: bool| {
        criteria.push(CriterionScore {
            name: name.to_string(),
            matched,
            preference: preference.unwrap_or_else(|| "Doesn't matter".to_string()),
            candidate: cand.unwrap_or_else(|| "Not specified".to_string()),
            dealbreaker,
            counted,
        });
    };

    let age_pref_display = match (prefs.age_min, prefs.age_max) {
        (Some(lo), Some(hi)) => Some(format!("{}-{}", lo, hi)),
        (Some(lo), None) => Some(format!("{}+", lo)),
        (None, Some(hi)) => Some(format!("up to {}", hi)),
        (None, None) => prefs.age_diff.display(),
    };
    push(
        "Age",
        matchers::matches_age(&prefs, seeker_age, candidate_age),
        age_pref_display,
        candidate_age.map(|a| a.to_string()),
        prefs.age_dealbreaker,
        prefs.age_is_set(),
    );

    let height_pref_display = if prefs.height_min.is_some() || prefs.height_max.is_some() {
        let lo = seeker.pref_height_min.clone().unwrap_or_default();
        let hi = seeker.pref_height_max.clone().unwrap_or_default();
        Some(format!("{} - {}", lo, hi).trim().to_string())
    } else {
        prefs.height.display()
    };
    push(
        "Height",
        matchers::matches_height(&prefs, candidate.height_inches()),
        if prefs.height_is_set() { height_pref_display } else { None },
        candidate.height.clone(),
        prefs.height_dealbreaker,
        prefs.height_is_set(),
    );

    push(
        "Marital Status",
        matchers::matches_marital_status(
            &prefs.marital_status.pref,
            candidate.marital_status.as_deref(),
        ),
        prefs.marital_status.pref.display(),
        candidate.marital_status.clone(),
        prefs.marital_status.dealbreaker,
        prefs.marital_status.is_set(),
    );

    // Only meaningful once the candidate has been married before.
    let candidate_never_married = candidate
        .marital_status
        .as_deref()
        .map(|m| normalize::normalize_marital_status(m) == "never_married")
        .unwrap_or(false);
    push(
        "Partner's Children",
        matchers::matches_has_children(
            &prefs.has_children.pref,
            candidate.has_children.as_deref(),
            candidate.marital_status.as_deref(),
        ),
        prefs.has_children.pref.display(),
        candidate.has_children.clone(),
        prefs.has_children.dealbreaker,
        prefs.has_children.is_set() && !candidate_never_married,
    );

    push(
        "Diet",
        matchers::matches_diet(&prefs.diet.pref, candidate.dietary_preference.as_deref()),
        prefs.diet.pref.display(),
        candidate.dietary_preference.clone(),
        prefs.diet.dealbreaker,
        prefs.diet.is_set(),
    );

    push(
        "Smoking",
        matchers::matches_habit(&prefs.smoking.pref, candidate.smoking.as_deref()),
        prefs.smoking.pref.display(),
        candidate.smoking.clone(),
        prefs.smoking.dealbreaker,
        prefs.smoking.is_set(),
    );

    push(
        "Drinking",
        matchers::matches_habit(&prefs.drinking.pref, candidate.drinking.as_deref()),
        prefs.drinking.pref.display(),
        candidate.drinking.clone(),
        prefs.drinking.dealbreaker,
        prefs.drinking.is_set(),
    );

    push(
        "Religion",
        matchers::matches_religion(&prefs.religion.pref, candidate.religion.as_deref()),
        prefs.religion.pref.display(),
        candidate.religion.clone(),
        prefs.religion.dealbreaker,
        prefs.religion.is_set(),
    );

    push(
        "Community",
        matchers::matches_community(
            &prefs.community.pref,
            seeker.community.as_deref(),
            candidate.community.as_deref(),
        ),
        prefs.community.pref.display(),
        candidate.community.clone(),
        prefs.community.dealbreaker,
        prefs.community.is_set(),
    );

    push(
        "Sub-community",
        matchers::matches_sub_community(
            &prefs.sub_community.pref,
            seeker.sub_community.as_deref(),
            candidate.sub_community.as_deref(),
        ),
        prefs.sub_community.pref.display(),
        candidate.sub_community.clone(),
        prefs.sub_community.dealbreaker,
        prefs.sub_community.is_set(),
    );

    push(
        "Gotra",
        matchers::matches_gotra(
            &prefs.gotra.pref,
            seeker.gotra.as_deref(),
            candidate.gotra.as_deref(),
        ),
        prefs.gotra.pref.display(),
        candidate.gotra.clone(),
        // Gotra is always enforced by the evaluator; surface it as a
        // deal-breaker whenever the preference is set.
        prefs.gotra.is_set(),
        prefs.gotra.is_set(),
    );

    push(
        "Location",
        matchers::matches_location(
            &prefs.location.pref,
            seeker.current_location.as_deref(),
            candidate.current_location.as_deref(),
        ),
        prefs.location.pref.display(),
        candidate.current_location.clone(),
        prefs.location.dealbreaker,
        prefs.location.is_set(),
    );

    push(
        "Education",
        matchers::matches_qualification(
            &prefs.qualification.pref,
            candidate.qualification.as_deref(),
        ),
        prefs.qualification.pref.display(),
        candidate.qualification.clone(),
        prefs.qualification.dealbreaker,
        prefs.qualification.is_set(),
    );

    push(
        "Income",
        matchers::matches_income(&prefs.income.pref, candidate.annual_income.as_deref()),
        prefs.income.pref.display(),
        candidate.annual_income.clone(),
        prefs.income.dealbreaker,
        prefs.income.is_set(),
    );

    push(
        "Occupation",
        matchers::matches_list_overlap(
            &prefs.occupation.pref,
            seeker.occupation.as_deref(),
            candidate.occupation.as_deref(),
        ),
        prefs.occupation.pref.display(),
        candidate.occupation.clone(),
        prefs.occupation.dealbreaker,
        prefs.occupation.is_set(),
    );

    push(
        "Family Values",
        matchers::matches_family_values(
            &prefs.family_values.pref,
            seeker.family_values.as_deref(),
            candidate.family_values.as_deref(),
        ),
        prefs.family_values.pref.display(),
        candidate.family_values.clone(),
        prefs.family_values.dealbreaker,
        prefs.family_values.is_set(),
    );

    push(
        "Family Location",
        matchers::matches_family_location(
            &prefs.family_location.pref,
            seeker.family_location.as_deref(),
            candidate.family_location.as_deref(),
        ),
        prefs.family_location.pref.display(),
        candidate.family_location.clone(),
        prefs.family_location.dealbreaker,
        prefs.family_location.is_set(),
    );

    push(
        "Mother Tongue",
        matchers::matches_mother_tongue(
            &prefs.mother_tongue.pref,
            prefs.mother_tongue_other.as_deref(),
            seeker.mother_tongue.as_deref(),
            seeker.mother_tongue_other.as_deref(),
            candidate.mother_tongue.as_deref(),
            candidate.mother_tongue_other.as_deref(),
        ),
        prefs.mother_tongue.pref.display(),
        candidate.mother_tongue.clone(),
        prefs.mother_tongue.dealbreaker,
        prefs.mother_tongue.is_set(),
    );

    push(
        "Citizenship",
        matchers::matches_same_or_contains(
            &prefs.citizenship.pref,
            seeker.citizenship.as_deref(),
            candidate.citizenship.as_deref(),
        ),
        prefs.citizenship.pref.display(),
        candidate.citizenship.clone(),
        prefs.citizenship.dealbreaker,
        prefs.citizenship.is_set(),
    );

    push(
        "Grew Up In",
        matchers::matches_same_or_contains(
            &prefs.grew_up_in.pref,
            seeker.grew_up_in.as_deref(),
            candidate.grew_up_in.as_deref(),
        ),
        prefs.grew_up_in.pref.display(),
        candidate.grew_up_in.clone(),
        prefs.grew_up_in.dealbreaker,
        prefs.grew_up_in.is_set(),
    );

    push(
        "Open to Relocation",
        matchers::matches_relocation(
            &prefs.relocation.pref,
            candidate.open_to_relocation.as_deref(),
        ),
        prefs.relocation.pref.display(),
        candidate.open_to_relocation.clone(),
        prefs.relocation.dealbreaker,
        prefs.relocation.is_set(),
    );

    push(
        "Pets",
        matchers::matches_pets(&prefs.pets.pref, candidate.pets.as_deref()),
        prefs.pets.pref.display(),
        candidate.pets.clone(),
        prefs.pets.dealbreaker,
        prefs.pets.is_set(),
    );

    push(
        "Hobbies",
        matchers::matches_list_overlap(
            &prefs.hobbies.pref,
            seeker.hobbies.as_deref(),
            candidate.hobbies.as_deref(),
        ),
        prefs.hobbies.pref.display(),
        candidate.hobbies.clone(),
        prefs.hobbies.dealbreaker,
        prefs.hobbies.is_set(),
    );

    push(
        "Fitness",
        matchers::matches_list_overlap(
            &prefs.fitness.pref,
            seeker.fitness.as_deref(),
            candidate.fitness.as_deref(),
        ),
        prefs.fitness.pref.display(),
        candidate.fitness.clone(),
        prefs.fitness.dealbreaker,
        prefs.fitness.is_set(),
    );

    push(
        "Interests",
        matchers::matches_list_overlap(
            &prefs.interests.pref,
            seeker.interests.as_deref(),
            candidate.interests.as_deref(),
        ),
        prefs.interests.pref.display(),
        candidate.interests.clone(),
        prefs.interests.dealbreaker,
        prefs.interests.is_set(),
    );

    let total_criteria = criteria.iter().filter(|c| c.counted).count();
    let matched_count = criteria.iter().filter(|c| c.counted && c.matched).count();
    let percentage = if total_criteria == 0 {
        // No preferences set: vacuously fully compatible.
        100
    } else {
        ((matched_count as f64 / total_criteria as f64) * 100.0).round() as u32
    };

    MatchScore {
        criteria,
        matched_count,
        total_criteria,
        percentage,
    }
}
