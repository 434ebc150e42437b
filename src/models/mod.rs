// Model exports
pub mod domain;
pub mod score;

pub use domain::{Constraint, Gender, PartnerPreferences, Pref, Profile};
pub use score::{CriterionScore, MatchScore};
