use serde::{Deserialize, Deserializer, Serialize};

use crate::core::normalize;

/// Profile gender. Matching only ever pairs opposite genders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    #[default]
    Female,
    Male,
}

/// A member profile as the profile store supplies it: the self-attribute
/// facet plus the partner-preference facet, all loosely string-typed.
///
/// Preference strings may be comma-separated or JSON-array-encoded lists,
/// and deal-breaker flags may arrive as JSON booleans or the string
/// `"true"`. The engine parses this shape once via
/// [`Profile::partner_preferences`]; it never mutates a profile.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Profile {
    #[serde(rename = "userId", alias = "id")]
    pub user_id: String,
    pub name: Option<String>,
    pub gender: Gender,
    pub date_of_birth: Option<String>,
    pub current_location: Option<String>,
    pub community: Option<String>,
    pub sub_community: Option<String>,
    pub gotra: Option<String>,
    pub dietary_preference: Option<String>,
    pub qualification: Option<String>,
    pub height: Option<String>,
    pub smoking: Option<String>,
    pub drinking: Option<String>,
    pub mother_tongue: Option<String>,
    pub mother_tongue_other: Option<String>,
    pub family_values: Option<String>,
    pub family_location: Option<String>,
    pub marital_status: Option<String>,
    pub has_children: Option<String>,
    pub annual_income: Option<String>,
    pub religion: Option<String>,
    pub citizenship: Option<String>,
    pub grew_up_in: Option<String>,
    pub open_to_relocation: Option<String>,
    pub pets: Option<String>,
    pub hobbies: Option<String>,
    pub fitness: Option<String>,
    pub interests: Option<String>,
    pub occupation: Option<String>,

    // Partner preferences. `prefCaste` and `prefLocationList` are legacy
    // aliases kept for older records; the canonical field wins when both
    // are present.
    pub pref_age_min: Option<u32>,
    pub pref_age_max: Option<u32>,
    pub pref_age_diff: Option<String>,
    pub pref_height_min: Option<String>,
    pub pref_height_max: Option<String>,
    pub pref_height: Option<String>,
    pub pref_marital_status: Option<String>,
    pub pref_has_children: Option<String>,
    pub pref_diet: Option<String>,
    pub pref_smoking: Option<String>,
    pub pref_drinking: Option<String>,
    pub pref_religion: Option<String>,
    pub pref_community: Option<String>,
    pub pref_caste: Option<String>,
    pub pref_sub_community: Option<String>,
    pub pref_gotra: Option<String>,
    pub pref_location: Option<String>,
    pub pref_location_list: Option<String>,
    pub pref_qualification: Option<String>,
    pub pref_income: Option<String>,
    pub pref_occupation: Option<String>,
    pub pref_family_values: Option<String>,
    pub pref_family_location: Option<String>,
    pub pref_mother_tongue: Option<String>,
    pub pref_mother_tongue_other: Option<String>,
    pub pref_citizenship: Option<String>,
    pub pref_grew_up_in: Option<String>,
    pub pref_relocation: Option<String>,
    pub pref_pets: Option<String>,
    pub pref_hobbies: Option<String>,
    pub pref_fitness: Option<String>,
    pub pref_interests: Option<String>,

    #[serde(deserialize_with = "flag")]
    pub pref_age_is_dealbreaker: bool,
    #[serde(deserialize_with = "flag")]
    pub pref_height_is_dealbreaker: bool,
    #[serde(deserialize_with = "flag")]
    pub pref_marital_status_is_dealbreaker: bool,
    #[serde(deserialize_with = "flag")]
    pub pref_has_children_is_dealbreaker: bool,
    #[serde(deserialize_with = "flag")]
    pub pref_diet_is_dealbreaker: bool,
    #[serde(deserialize_with = "flag")]
    pub pref_smoking_is_dealbreaker: bool,
    #[serde(deserialize_with = "flag")]
    pub pref_drinking_is_dealbreaker: bool,
    #[serde(deserialize_with = "flag")]
    pub pref_religion_is_dealbreaker: bool,
    #[serde(deserialize_with = "flag")]
    pub pref_community_is_dealbreaker: bool,
    #[serde(deserialize_with = "flag")]
    pub pref_sub_community_is_dealbreaker: bool,
    #[serde(deserialize_with = "flag")]
    pub pref_gotra_is_dealbreaker: bool,
    #[serde(deserialize_with = "flag")]
    pub pref_location_is_dealbreaker: bool,
    #[serde(deserialize_with = "flag")]
    pub pref_qualification_is_dealbreaker: bool,
    #[serde(deserialize_with = "flag")]
    pub pref_income_is_dealbreaker: bool,
    #[serde(deserialize_with = "flag")]
    pub pref_occupation_is_dealbreaker: bool,
    #[serde(deserialize_with = "flag")]
    pub pref_family_values_is_dealbreaker: bool,
    #[serde(deserialize_with = "flag")]
    pub pref_family_location_is_dealbreaker: bool,
    #[serde(deserialize_with = "flag")]
    pub pref_mother_tongue_is_dealbreaker: bool,
    #[serde(deserialize_with = "flag")]
    pub pref_citizenship_is_dealbreaker: bool,
    #[serde(deserialize_with = "flag")]
    pub pref_grew_up_in_is_dealbreaker: bool,
    #[serde(deserialize_with = "flag")]
    pub pref_relocation_is_dealbreaker: bool,
    #[serde(deserialize_with = "flag")]
    pub pref_pets_is_dealbreaker: bool,
    #[serde(deserialize_with = "flag")]
    pub pref_hobbies_is_dealbreaker: bool,
    #[serde(deserialize_with = "flag")]
    pub pref_fitness_is_dealbreaker: bool,
    #[serde(deserialize_with = "flag")]
    pub pref_interests_is_dealbreaker: bool,
}

/// Accept a deal-breaker flag as JSON boolean, the string `"true"`, or
/// anything else (coerced to false).
fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.map(|v| normalize::is_dealbreaker(&v)).unwrap_or(false))
}

impl Profile {
    /// Age derived from the date-of-birth string, as of today. None when the
    /// date is absent or unparseable.
    pub fn age(&self) -> Option<u32> {
        self.date_of_birth
            .as_deref()
            .and_then(normalize::age_from_dob_now)
    }

    /// Height in inches, parsed from the stored height string.
    pub fn height_inches(&self) -> Option<u32> {
        self.height.as_deref().and_then(normalize::height_to_inches)
    }

    /// Parse the raw preference facet once into the typed form the matchers
    /// consume, resolving legacy aliases.
    pub fn partner_preferences(&self) -> PartnerPreferences {
        let community_raw = match Pref::parse(self.pref_community.as_deref()) {
            Pref::Unset => Pref::parse(self.pref_caste.as_deref()),
            set => set,
        };
        let location_raw = match Pref::parse(self.pref_location.as_deref()) {
            Pref::Unset => Pref::parse(self.pref_location_list.as_deref()),
            set => set,
        };

        PartnerPreferences {
            age_min: self.pref_age_min,
            age_max: self.pref_age_max,
            age_diff: Pref::parse(self.pref_age_diff.as_deref()),
            age_dealbreaker: self.pref_age_is_dealbreaker,
            height_min: self
                .pref_height_min
                .as_deref()
                .and_then(normalize::height_to_inches),
            height_max: self
                .pref_height_max
                .as_deref()
                .and_then(normalize::height_to_inches),
            height: Pref::parse(self.pref_height.as_deref()),
            height_dealbreaker: self.pref_height_is_dealbreaker,
            marital_status: Constraint::new(
                self.pref_marital_status.as_deref(),
                self.pref_marital_status_is_dealbreaker,
            ),
            has_children: Constraint::new(
                self.pref_has_children.as_deref(),
                self.pref_has_children_is_dealbreaker,
            ),
            diet: Constraint::new(self.pref_diet.as_deref(), self.pref_diet_is_dealbreaker),
            smoking: Constraint::new(self.pref_smoking.as_deref(), self.pref_smoking_is_dealbreaker),
            drinking: Constraint::new(
                self.pref_drinking.as_deref(),
                self.pref_drinking_is_dealbreaker,
            ),
            religion: Constraint::new(
                self.pref_religion.as_deref(),
                self.pref_religion_is_dealbreaker,
            ),
            community: Constraint {
                pref: community_raw,
                dealbreaker: self.pref_community_is_dealbreaker,
            },
            sub_community: Constraint::new(
                self.pref_sub_community.as_deref(),
                self.pref_sub_community_is_dealbreaker,
            ),
            // The stored flag is parsed but the evaluator enforces gotra
            // unconditionally.
            gotra: Constraint::new(self.pref_gotra.as_deref(), self.pref_gotra_is_dealbreaker),
            location: Constraint {
                pref: location_raw,
                dealbreaker: self.pref_location_is_dealbreaker,
            },
            qualification: Constraint::new(
                self.pref_qualification.as_deref(),
                self.pref_qualification_is_dealbreaker,
            ),
            income: Constraint::new(self.pref_income.as_deref(), self.pref_income_is_dealbreaker),
            occupation: Constraint::new(
                self.pref_occupation.as_deref(),
                self.pref_occupation_is_dealbreaker,
            ),
            family_values: Constraint::new(
                self.pref_family_values.as_deref(),
                self.pref_family_values_is_dealbreaker,
            ),
            family_location: Constraint::new(
                self.pref_family_location.as_deref(),
                self.pref_family_location_is_dealbreaker,
            ),
            mother_tongue: Constraint::new(
                self.pref_mother_tongue.as_deref(),
                self.pref_mother_tongue_is_dealbreaker,
            ),
            mother_tongue_other: self.pref_mother_tongue_other.clone(),
            citizenship: Constraint::new(
                self.pref_citizenship.as_deref(),
                self.pref_citizenship_is_dealbreaker,
            ),
            grew_up_in: Constraint::new(
                self.pref_grew_up_in.as_deref(),
                self.pref_grew_up_in_is_dealbreaker,
            ),
            relocation: Constraint::new(
                self.pref_relocation.as_deref(),
                self.pref_relocation_is_dealbreaker,
            ),
            pets: Constraint::new(self.pref_pets.as_deref(), self.pref_pets_is_dealbreaker),
            hobbies: Constraint::new(self.pref_hobbies.as_deref(), self.pref_hobbies_is_dealbreaker),
            fitness: Constraint::new(self.pref_fitness.as_deref(), self.pref_fitness_is_dealbreaker),
            interests: Constraint::new(
                self.pref_interests.as_deref(),
                self.pref_interests_is_dealbreaker,
            ),
        }
    }
}

/// A single parsed preference value.
///
/// Sentinel "no preference" strings collapse to `Unset`; comma or
/// JSON-array encoded strings parse to `Many`. Values are stored lowercased
/// and trimmed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Pref {
    #[default]
    Unset,
    One(String),
    Many(Vec<String>),
}

impl Pref {
    pub fn parse(raw: Option<&str>) -> Self {
        let Some(raw) = raw else { return Pref::Unset };
        if normalize::is_no_preference(Some(raw)) {
            return Pref::Unset;
        }
        let trimmed = raw.trim();
        if trimmed.starts_with('[') || trimmed.contains(',') {
            let mut items = normalize::parse_list(trimmed);
            match items.len() {
                0 => Pref::Unset,
                1 => Pref::One(items.remove(0)),
                _ => Pref::Many(items),
            }
        } else {
            Pref::One(normalize::norm(trimmed))
        }
    }

    pub fn is_set(&self) -> bool {
        !matches!(self, Pref::Unset)
    }

    /// All values as a slice: empty for `Unset`, one element for `One`.
    pub fn values(&self) -> &[String] {
        match self {
            Pref::Unset => &[],
            Pref::One(v) => std::slice::from_ref(v),
            Pref::Many(vs) => vs,
        }
    }

    pub fn first(&self) -> Option<&str> {
        self.values().first().map(String::as_str)
    }

    /// Human-readable form for score breakdowns.
    pub fn display(&self) -> Option<String> {
        match self {
            Pref::Unset => None,
            _ => Some(self.values().join(", ")),
        }
    }
}

/// A preference paired with its deal-breaker flag. The flag is meaningful
/// only when the preference is set; an unset preference never rejects.
#[derive(Debug, Clone, Default)]
pub struct Constraint {
    pub pref: Pref,
    pub dealbreaker: bool,
}

impl Constraint {
    pub fn new(raw: Option<&str>, dealbreaker: bool) -> Self {
        Self {
            pref: Pref::parse(raw),
            dealbreaker,
        }
    }

    pub fn is_set(&self) -> bool {
        self.pref.is_set()
    }
}

/// The preference facet of a profile after the one-time boundary parse.
#[derive(Debug, Clone, Default)]
pub struct PartnerPreferences {
    pub age_min: Option<u32>,
    pub age_max: Option<u32>,
    pub age_diff: Pref,
    pub age_dealbreaker: bool,
    pub height_min: Option<u32>,
    pub height_max: Option<u32>,
    pub height: Pref,
    pub height_dealbreaker: bool,
    pub marital_status: Constraint,
    pub has_children: Constraint,
    pub diet: Constraint,
    pub smoking: Constraint,
    pub drinking: Constraint,
    pub religion: Constraint,
    pub community: Constraint,
    pub sub_community: Constraint,
    pub gotra: Constraint,
    pub location: Constraint,
    pub qualification: Constraint,
    pub income: Constraint,
    pub occupation: Constraint,
    pub family_values: Constraint,
    pub family_location: Constraint,
    pub mother_tongue: Constraint,
    pub mother_tongue_other: Option<String>,
    pub citizenship: Constraint,
    pub grew_up_in: Constraint,
    pub relocation: Constraint,
    pub pets: Constraint,
    pub hobbies: Constraint,
    pub fitness: Constraint,
    pub interests: Constraint,
}

impl PartnerPreferences {
    /// True when the age preference constrains candidates, through either the
    /// explicit min/max or the legacy free-text field.
    pub fn age_is_set(&self) -> bool {
        self.age_min.is_some() || self.age_max.is_some() || self.age_diff.is_set()
    }

    /// True when any height preference is present.
    pub fn height_is_set(&self) -> bool {
        self.height_min.is_some() || self.height_max.is_some() || self.height.is_set()
    }
}
