// Integration tests for Sangam Algo

use sangam_algo::core::Matcher;
use sangam_algo::models::Profile;
use sangam_algo::{calculate_match_score, is_mutual_match, matches_seeker_preferences};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_test_writer()
        .try_init();
}

fn profile_from_json(json: &str) -> Profile {
    serde_json::from_str(json).expect("test profile must deserialize")
}

fn seeker_priya() -> Profile {
    profile_from_json(
        r#"{
            "userId": "priya",
            "name": "Priya",
            "gender": "female",
            "dateOfBirth": "05/10/1994",
            "currentLocation": "Jersey City, NJ",
            "community": "Iyer",
            "gotra": "Bharadwaj",
            "dietaryPreference": "Vegetarian",
            "qualification": "MS in Computer Science",
            "height": "5'4",
            "maritalStatus": "Never Married",
            "prefAgeMin": 30,
            "prefAgeMax": 38,
            "prefAgeIsDealbreaker": true,
            "prefDiet": "Vegetarian",
            "prefDietIsDealbreaker": "true",
            "prefCommunity": "same_community",
            "prefCommunityIsDealbreaker": true,
            "prefGotra": "different",
            "prefLocation": "tri_state",
            "prefLocationIsDealbreaker": true,
            "prefSmoking": "no",
            "prefSmokingIsDealbreaker": true
        }"#,
    )
}

fn candidate_arun() -> Profile {
    profile_from_json(
        r#"{
            "userId": "arun",
            "name": "Arun",
            "gender": "male",
            "dateOfBirth": "03/20/1992",
            "currentLocation": "Stamford, Connecticut",
            "community": "Niyogi",
            "gotra": "Kashyap",
            "dietaryPreference": "Jain",
            "qualification": "PhD in Physics",
            "height": "5'10",
            "smoking": "Never",
            "maritalStatus": "Single",
            "prefMaritalStatus": "never_married",
            "prefMaritalStatusIsDealbreaker": true,
            "prefDiet": "Vegetarian"
        }"#,
    )
}

#[test]
fn test_end_to_end_mutual_match() {
    init_tracing();
    let priya = seeker_priya();
    let arun = candidate_arun();

    // Every deal-breaker holds in both directions: age in window, veg diet,
    // Iyer/Niyogi both Brahmin, different gotra, tri-state location,
    // non-smoker, never married.
    assert!(matches_seeker_preferences(&priya, &arun));
    assert!(matches_seeker_preferences(&arun, &priya));
    assert!(is_mutual_match(&priya, &arun));
}

#[test]
fn test_end_to_end_dealbreaker_rejects() {
    init_tracing();
    let priya = seeker_priya();

    // Same profile but relocated to Texas: the tri-state deal-breaker fires.
    let mut texan = candidate_arun();
    texan.current_location = Some("Austin, TX".to_string());
    assert!(!matches_seeker_preferences(&priya, &texan));
    assert!(!is_mutual_match(&priya, &texan));

    // Same gotra is rejected even though no deal-breaker flag is stored.
    let mut same_gotra = candidate_arun();
    same_gotra.gotra = Some("Bharadwaj".to_string());
    assert!(!matches_seeker_preferences(&priya, &same_gotra));
}

#[test]
fn test_string_encoded_dealbreaker_flag_is_honored() {
    init_tracing();
    let priya = seeker_priya();
    assert!(priya.pref_diet_is_dealbreaker);

    let mut nonveg = candidate_arun();
    nonveg.dietary_preference = Some("Non Vegetarian".to_string());
    assert!(!matches_seeker_preferences(&priya, &nonveg));
}

#[test]
fn test_missing_candidate_data_does_not_block() {
    init_tracing();
    let priya = seeker_priya();

    // Diet, smoking, gotra and age all missing: none of those deal-breakers
    // can fire. Location stays because tri_state rejects unknown states.
    let sparse = profile_from_json(
        r#"{
            "userId": "sparse",
            "gender": "male",
            "currentLocation": "Hoboken, NJ"
        }"#,
    );
    assert!(matches_seeker_preferences(&priya, &sparse));
}

#[test]
fn test_batch_matching_with_limit() {
    init_tracing();
    let priya = seeker_priya();

    let mut pool: Vec<Profile> = Vec::new();
    // Seeker's own record sneaks into the pool and must be skipped.
    pool.push(seeker_priya());
    pool.push(candidate_arun());

    let mut texan = candidate_arun();
    texan.user_id = "texan".to_string();
    texan.current_location = Some("Austin, TX".to_string());
    pool.push(texan);

    let mut second = candidate_arun();
    second.user_id = "arun2".to_string();
    pool.push(second);

    let result = Matcher::with_default_limit().find_mutual_matches(&priya, pool, 0);
    assert_eq!(result.total_candidates, 4);
    assert_eq!(result.matches.len(), 2);
    assert!(result.matches.iter().all(|m| m.user_id != "priya"));
    assert!(result.matches.iter().all(|m| m.user_id != "texan"));

    let priya2 = seeker_priya();
    let pool2 = vec![candidate_arun(), {
        let mut c = candidate_arun();
        c.user_id = "arun3".to_string();
        c
    }];
    let limited = Matcher::new(20, 100).find_mutual_matches(&priya2, pool2, 1);
    assert_eq!(limited.matches.len(), 1);
}

#[test]
fn test_score_breakdown_serializes_camel_case() {
    init_tracing();
    let priya = seeker_priya();
    let arun = candidate_arun();

    let score = calculate_match_score(&priya, &arun);
    assert!(score.percentage <= 100);
    assert!(score.total_criteria >= score.matched_count);

    // All of the seeker's set preferences are satisfied by this candidate.
    assert_eq!(score.percentage, 100);

    let json = serde_json::to_value(&score).expect("score must serialize");
    assert!(json.get("matchedCount").is_some());
    assert!(json.get("totalCriteria").is_some());
    let first = &json["criteria"][0];
    assert!(first.get("isDealbreaker").is_some());

    let age = score
        .criteria
        .iter()
        .find(|c| c.name == "Age")
        .expect("age criterion present");
    assert!(age.matched);
    assert_eq!(age.preference, "30-38");
}

#[test]
fn test_score_and_decision_can_disagree() {
    init_tracing();
    let priya = seeker_priya();

    // High breakdown score, but the location deal-breaker still vetoes.
    let mut texan = candidate_arun();
    texan.user_id = "texan".to_string();
    texan.current_location = Some("Dallas, TX".to_string());

    let score = calculate_match_score(&priya, &texan);
    assert!(score.percentage < 100);
    assert!(score.percentage > 50);
    assert!(!is_mutual_match(&priya, &texan));
}
