// Core algorithm exports
pub mod matcher;
pub mod matchers;
pub mod normalize;
pub mod scoring;
pub mod tables;

pub use matcher::{is_mutual_match, matches_seeker_preferences, MatchResult, Matcher};
pub use scoring::calculate_match_score;
