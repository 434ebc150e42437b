// Unit tests for Sangam Algo

use chrono::NaiveDate;
use sangam_algo::core::matchers;
use sangam_algo::core::normalize::{
    self, age_bounds_from_diff, age_from_dob, classify_diet, classify_habit, height_to_inches,
    normalize_marital_status, DietClass, HabitLevel,
};
use sangam_algo::models::{Gender, Pref, Profile};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 8, 30).unwrap()
}

#[test]
fn test_age_from_dob_formats() {
    assert_eq!(age_from_dob("06/15/1990", today()), Some(36));
    assert_eq!(age_from_dob("1990-06-15", today()), Some(36));
    // MM/YYYY assumes mid-month, year window (1900, 2020)
    assert_eq!(age_from_dob("06/1990", today()), Some(36));
    assert_eq!(age_from_dob("06/2021", today()), None);
    assert_eq!(age_from_dob("not a date", today()), None);
}

#[test]
fn test_height_parsing() {
    assert_eq!(height_to_inches("5'6\""), Some(66));
    assert_eq!(height_to_inches("5 ft 6 in"), Some(66));
    assert_eq!(height_to_inches("168 cm"), Some(66));
    assert_eq!(height_to_inches("tall"), None);
}

#[test]
fn test_age_bounds_patterns() {
    // Absolute range wins over relative phrasing
    assert_eq!(age_bounds_from_diff("28-34", Some(30)), Some((28, 34)));
    assert_eq!(age_bounds_from_diff("28 to 34", Some(30)), Some((28, 34)));
    // Relative windows anchored on the seeker's own age
    assert_eq!(
        age_bounds_from_diff("between 2 and 5 years", Some(30)),
        Some((32, 35))
    );
    assert_eq!(age_bounds_from_diff("less than 3 years", Some(30)), Some((27, 33)));
    assert_eq!(age_bounds_from_diff("2 years younger", Some(30)), Some((28, 30)));
    assert_eq!(age_bounds_from_diff("3 years older", Some(30)), Some((30, 33)));
    // Relative phrasing without a seeker age constrains nothing
    assert_eq!(age_bounds_from_diff("less than 3 years", None), None);
}

#[test]
fn test_marital_status_synonyms() {
    for raw in ["Never Married", "single", "Unmarried", "Bachelor", "Spinster"] {
        assert_eq!(normalize_marital_status(raw), "never_married");
    }
    assert_eq!(normalize_marital_status("Divorcee"), "divorced");
    assert_eq!(normalize_marital_status("Widow"), "widowed");
}

#[test]
fn test_diet_classification() {
    assert_eq!(classify_diet("Vegetarian"), DietClass::Veg);
    assert_eq!(classify_diet("Jain"), DietClass::Veg);
    assert_eq!(classify_diet("Eggetarian"), DietClass::Egg);
    assert_eq!(classify_diet("Non Vegetarian"), DietClass::NonVeg);
    // "non veg" must not be mistaken for veg
    assert_eq!(classify_diet("non-vegetarian"), DietClass::NonVeg);
    assert_eq!(classify_diet("keto"), DietClass::Unknown);
}

#[test]
fn test_habit_classification() {
    assert_eq!(classify_habit("No"), HabitLevel::No);
    assert_eq!(classify_habit("Never"), HabitLevel::No);
    assert_eq!(classify_habit("Socially"), HabitLevel::Occasional);
    assert_eq!(classify_habit("Regularly"), HabitLevel::Regular);
    assert_eq!(classify_habit("whenever"), HabitLevel::Unknown);
}

#[test]
fn test_state_extraction() {
    assert_eq!(normalize::extract_us_state("Edison, New Jersey"), Some("nj"));
    assert_eq!(normalize::extract_us_state("Dallas, TX"), Some("tx"));
    // Lowercase two-letter words are not abbreviations
    assert_eq!(normalize::extract_us_state("living in portland"), None);
    assert_eq!(normalize::extract_us_state("Chennai, India"), None);
}

// --- concrete matching scenarios ---

fn profile(id: &str, gender: Gender) -> Profile {
    Profile {
        user_id: id.to_string(),
        gender,
        date_of_birth: Some("01/01/1993".to_string()),
        ..Default::default()
    }
}

#[test]
fn test_scenario_same_community_spans_brahmin_group() {
    // Iyer seeker asking for "same" community accepts a Niyogi candidate:
    // both fall in the Brahmin group.
    let mut seeker = profile("s", Gender::Female);
    seeker.community = Some("Iyer".to_string());
    seeker.pref_community = Some("same_community".to_string());
    seeker.pref_community_is_dealbreaker = true;

    let mut candidate = profile("c", Gender::Male);
    candidate.community = Some("Niyogi".to_string());
    assert!(sangam_algo::matches_seeker_preferences(&seeker, &candidate));

    candidate.community = Some("Nair".to_string());
    assert!(!sangam_algo::matches_seeker_preferences(&seeker, &candidate));
}

#[test]
fn test_scenario_vegetarian_rejects_eggetarian() {
    let mut seeker = profile("s", Gender::Female);
    seeker.pref_diet = Some("Vegetarian".to_string());
    seeker.pref_diet_is_dealbreaker = true;

    let mut candidate = profile("c", Gender::Male);
    candidate.dietary_preference = Some("Eggetarian".to_string());
    assert!(!sangam_algo::matches_seeker_preferences(&seeker, &candidate));

    candidate.dietary_preference = Some("Jain".to_string());
    assert!(sangam_algo::matches_seeker_preferences(&seeker, &candidate));

    // Missing diet never blocks
    candidate.dietary_preference = None;
    assert!(sangam_algo::matches_seeker_preferences(&seeker, &candidate));
}

#[test]
fn test_scenario_tri_state_location() {
    let pref = Pref::parse(Some("tri_state"));
    assert!(matchers::matches_location(
        &pref,
        Some("Jersey City, NJ"),
        Some("Stamford, Connecticut")
    ));
    // Unextractable state rejects for the state-scoped keywords
    assert!(!matchers::matches_location(
        &pref,
        Some("Jersey City, NJ"),
        Some("somewhere nice")
    ));
    assert!(!matchers::matches_location(
        &pref,
        Some("Jersey City, NJ"),
        Some("Austin, TX")
    ));
}

#[test]
fn test_scenario_occasional_smoker_window() {
    let pref = Pref::parse(Some("occasionally"));
    assert!(matchers::matches_habit(&pref, Some("No")));
    assert!(matchers::matches_habit(&pref, Some("Socially")));
    assert!(!matchers::matches_habit(&pref, Some("Regularly")));

    // "No" preference tolerates only non-smokers and unknowns
    let strict = Pref::parse(Some("no"));
    assert!(matchers::matches_habit(&strict, None));
    assert!(!matchers::matches_habit(&strict, Some("Socially")));
}

#[test]
fn test_scenario_income_floor() {
    let pref = Pref::parse(Some("100k-150k"));
    assert!(matchers::matches_income(&pref, Some("250k+")));
    assert!(matchers::matches_income(&pref, Some("100k-150k")));
    assert!(!matchers::matches_income(&pref, Some("<50k")));
    // Missing income never blocks
    assert!(matchers::matches_income(&pref, None));
}

#[test]
fn test_scenario_education_category_and_level() {
    let medical = Pref::parse(Some("medical_masters"));
    assert!(matchers::matches_qualification(&medical, Some("MD")));
    assert!(!matchers::matches_qualification(&medical, Some("MBA")));

    let masters = Pref::parse(Some("masters"));
    assert!(matchers::matches_qualification(&masters, Some("MS in CS")));
    assert!(matchers::matches_qualification(&masters, Some("PhD")));
    assert!(!matchers::matches_qualification(&masters, Some("B.Tech")));
    // Unknown qualification text never blocks
    assert!(matchers::matches_qualification(&masters, Some("autodidact")));
}

#[test]
fn test_scenario_children_inferred_from_marital_status() {
    let pref = Pref::parse(Some("no_children"));
    // Never-married candidate with no children field is assumed childless
    assert!(matchers::matches_has_children(&pref, None, Some("Single")));
    assert!(!matchers::matches_has_children(
        &pref,
        Some("yes_living_with_me"),
        Some("Divorced")
    ));
}
