//! Static lookup tables used by the matchers.
//!
//! Kept separate from the matcher logic so the data can be extended and
//! tested on its own.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Sentinel strings that mean "no preference set". Compared case-insensitively
/// against trimmed input; the empty string covers blank form submissions.
pub const NO_PREFERENCE: &[&str] = &[
    "",
    "doesnt_matter",
    "doesn't matter",
    "doesnt matter",
    "any",
    "no preference",
    "no_preference",
];

/// Brahmin community synonyms. Used by the community matcher when a seeker
/// asks for "same community": two profiles from different sub-groups on this
/// list (e.g. Iyer and Niyogi) are still treated as compatible.
pub const BRAHMIN_COMMUNITIES: &[&str] = &[
    "brahmin",
    "iyer",
    "iyengar",
    "niyogi",
    "vaidiki",
    "velanadu",
    "dravida",
    "smartha",
    "madhwa",
    "deshastha",
    "chitpavan",
    "karhade",
    "saraswat",
    "gaud saraswat",
    "kanyakubja",
    "maithil",
    "saryupareen",
    "gaur",
    "nagar",
    "namboodiri",
    "havyaka",
    "shivalli",
    "hoysala",
    "daivadnya",
    "rarhi",
    "barendra",
    "utkala",
    "kashmiri pandit",
    "pandit",
    "sharma",
    "bhumihar",
    "tyagi",
    "mohyal",
];

/// US state full names paired with their postal abbreviations. Includes DC
/// for the DMV-area check.
pub const US_STATES: &[(&str, &str)] = &[
    ("alabama", "al"),
    ("alaska", "ak"),
    ("arizona", "az"),
    ("arkansas", "ar"),
    ("california", "ca"),
    ("colorado", "co"),
    ("connecticut", "ct"),
    ("delaware", "de"),
    ("district of columbia", "dc"),
    ("florida", "fl"),
    ("georgia", "ga"),
    ("hawaii", "hi"),
    ("idaho", "id"),
    ("illinois", "il"),
    ("indiana", "in"),
    ("iowa", "ia"),
    ("kansas", "ks"),
    ("kentucky", "ky"),
    ("louisiana", "la"),
    ("maine", "me"),
    ("maryland", "md"),
    ("massachusetts", "ma"),
    ("michigan", "mi"),
    ("minnesota", "mn"),
    ("mississippi", "ms"),
    ("missouri", "mo"),
    ("montana", "mt"),
    ("nebraska", "ne"),
    ("nevada", "nv"),
    ("new hampshire", "nh"),
    ("new jersey", "nj"),
    ("new mexico", "nm"),
    ("new york", "ny"),
    ("north carolina", "nc"),
    ("north dakota", "nd"),
    ("ohio", "oh"),
    ("oklahoma", "ok"),
    ("oregon", "or"),
    ("pennsylvania", "pa"),
    ("rhode island", "ri"),
    ("south carolina", "sc"),
    ("south dakota", "sd"),
    ("tennessee", "tn"),
    ("texas", "tx"),
    ("utah", "ut"),
    ("vermont", "vt"),
    ("virginia", "va"),
    ("washington", "wa"),
    ("west virginia", "wv"),
    ("wisconsin", "wi"),
    ("wyoming", "wy"),
];

/// Tri-state area: New York, New Jersey, Connecticut.
pub const TRI_STATE: &[&str] = &["ny", "nj", "ct"];

/// DMV area: DC, Maryland, Virginia.
pub const DMV_AREA: &[&str] = &["dc", "md", "va"];

/// Keywords that place a free-text location in the San Francisco Bay Area.
pub const BAY_AREA: &[&str] = &[
    "bay area",
    "san francisco",
    "san jose",
    "oakland",
    "fremont",
    "sunnyvale",
    "santa clara",
    "mountain view",
    "palo alto",
    "cupertino",
    "milpitas",
    "berkeley",
    "pleasanton",
    "dublin",
    "san ramon",
];

/// Keywords that place a free-text location in Southern California.
pub const SOUTHERN_CALIFORNIA: &[&str] = &[
    "southern california",
    "socal",
    "los angeles",
    "san diego",
    "orange county",
    "irvine",
    "anaheim",
    "long beach",
    "santa monica",
    "pasadena",
    "riverside",
    "san bernardino",
];

/// Markers that identify a free-text location as being in the USA even when
/// no state can be extracted.
pub const USA_MARKERS: &[&str] = &["usa", "united states", "u.s.", "america"];

/// Qualification keyword -> ordinal education level.
///
/// 1 = high school / diploma, 2 = bachelor's tier (incl. MBBS/BDS/LLB),
/// 3 = master's tier (incl. MBA/CA/CPA/LLM), 4 = doctorate tier
/// (incl. MD/PhD/JD).
///
/// Ordered highest level first; lookup takes the first hit so a string like
/// "MBBS, MD" resolves to the doctorate tier. Short keys are matched as
/// whole tokens, longer keys by substring (see `qualification_level`).
pub const EDUCATION_LEVELS: &[(&str, u8)] = &[
    ("phd", 4),
    ("doctorate", 4),
    ("doctoral", 4),
    ("post doc", 4),
    ("postdoc", 4),
    ("md", 4),
    ("dm", 4),
    ("jd", 4),
    ("dnb", 4),
    ("mba", 3),
    ("pgdm", 3),
    ("mtech", 3),
    ("mcom", 3),
    ("msc", 3),
    ("meng", 3),
    ("ms", 3),
    ("ma", 3),
    ("mca", 3),
    ("mds", 3),
    ("llm", 3),
    ("ca", 3),
    ("cpa", 3),
    ("cfa", 3),
    ("icwa", 3),
    ("master", 3),
    ("masters", 3),
    ("mbbs", 2),
    ("bds", 2),
    ("llb", 2),
    ("btech", 2),
    ("beng", 2),
    ("be", 2),
    ("bsc", 2),
    ("bs", 2),
    ("ba", 2),
    ("bcom", 2),
    ("bca", 2),
    ("bba", 2),
    ("bachelor", 2),
    ("bachelors", 2),
    ("undergraduate", 2),
    ("high school", 1),
    ("highschool", 1),
    ("secondary", 1),
    ("intermediate", 1),
    ("12th", 1),
    ("associate", 1),
    ("diploma", 1),
];

/// How a curated education-preference key constrains a candidate.
#[derive(Debug, Clone, Copy)]
pub enum EducationPref {
    /// Candidate's qualification must map to at least this level.
    MinLevel(u8),
    /// Candidate's raw qualification must fuzzy-match one of these keywords.
    Categories(&'static [&'static str]),
}

/// Curated dropdown keys for the education preference field.
pub static EDUCATION_PREFS: Lazy<HashMap<&'static str, EducationPref>> = Lazy::new(|| {
    use EducationPref::*;
    HashMap::from([
        ("bachelors", MinLevel(2)),
        ("any_bachelors", MinLevel(2)),
        ("masters", MinLevel(3)),
        ("any_masters", MinLevel(3)),
        ("doctorate", MinLevel(4)),
        ("phd", MinLevel(4)),
        (
            "eng_undergrad",
            Categories(&["btech", "be", "beng", "bs", "engineering", "computer science"]),
        ),
        (
            "eng_masters",
            Categories(&["mtech", "ms", "meng", "engineering", "computer science"]),
        ),
        (
            "medical_undergrad",
            Categories(&["mbbs", "bds", "nursing", "pharmacy", "physiotherapy"]),
        ),
        (
            "medical_masters",
            Categories(&["md", "ms", "mds", "dnb", "dm"]),
        ),
        ("mba", Categories(&["mba", "pgdm", "management"])),
        ("law", Categories(&["llb", "llm", "jd", "law"])),
        ("finance", Categories(&["ca", "cpa", "cfa", "icwa", "finance", "accounting"])),
    ])
});

/// Income bucket -> representative annual value in thousands of dollars.
/// Buckets map to their midpoints; open-ended top buckets to a value past
/// their floor.
pub const INCOME_BUCKETS: &[(&str, u32)] = &[
    ("<50k", 25),
    ("under_50k", 25),
    ("under 50k", 25),
    ("50k-100k", 75),
    ("50k_100k", 75),
    ("100k-150k", 125),
    ("100k_150k", 125),
    ("150k-200k", 175),
    ("150k_200k", 175),
    ("200k-250k", 225),
    ("200k_250k", 225),
    ("250k+", 300),
    ("300k+", 350),
];
