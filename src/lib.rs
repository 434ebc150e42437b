//! Sangam Algo - compatibility engine for the Sangam matrimonial platform
//!
//! This library decides whether two member profiles are a mutual match and
//! explains why. Profiles carry a self-attribute facet and a
//! partner-preference facet; the engine normalizes the loosely-typed
//! preference strings once, evaluates each attribute with a dedicated
//! matcher, and gates rejections on deal-breaker flags. A separate scoring
//! pass re-runs every matcher to build a full per-criterion breakdown.

pub mod config;
pub mod core;
pub mod models;

// Re-export commonly used types
pub use self::core::{calculate_match_score, is_mutual_match, matches_seeker_preferences, Matcher};
pub use self::models::{MatchScore, Profile};
