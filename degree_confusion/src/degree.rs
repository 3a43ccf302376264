use crate::error::{DegreeError, Result};
use serde::Serialize;

// Declared from the most distant to the closest: the derived Ord is the reporting order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum CanonicalDegree {
    Unrelated,
    Fifth,
    Fourth,
    Third,
    Second,
    First,
    // A sample compared against itself.
    #[serde(rename = "Self")]
    Identical,
}

impl CanonicalDegree {
    pub const ALL: [CanonicalDegree; 7] = [
        CanonicalDegree::Unrelated,
        CanonicalDegree::Fifth,
        CanonicalDegree::Fourth,
        CanonicalDegree::Third,
        CanonicalDegree::Second,
        CanonicalDegree::First,
        CanonicalDegree::Identical,
    ];
    pub fn as_str(&self) -> &'static str {
        match self {
            CanonicalDegree::Unrelated => "Unrelated",
            CanonicalDegree::Fifth => "Fifth",
            CanonicalDegree::Fourth => "Fourth",
            CanonicalDegree::Third => "Third",
            CanonicalDegree::Second => "Second",
            CanonicalDegree::First => "First",
            CanonicalDegree::Identical => "Self",
        }
    }
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl std::fmt::Display for CanonicalDegree {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for CanonicalDegree {
    type Err = DegreeError;
    fn from_str(s: &str) -> Result<Self> {
        CanonicalDegree::ALL
            .iter()
            .find(|degree| degree.as_str() == s)
            .copied()
            .ok_or_else(|| DegreeError::Lookup {
                label: s.to_string(),
            })
    }
}

/// Exact, case sensitive translation of a classifier label.
pub fn normalize(raw: &str) -> Result<CanonicalDegree> {
    let degree = match raw {
        "Fifth" => CanonicalDegree::Fifth,
        "Fourth" => CanonicalDegree::Fourth,
        "Cousins" | "Third" => CanonicalDegree::Third,
        "GPGC" | "Second" => CanonicalDegree::Second,
        "Siblings" | "First" => CanonicalDegree::First,
        "Self" => CanonicalDegree::Identical,
        "Unrelated" => CanonicalDegree::Unrelated,
        _ => {
            return Err(DegreeError::Lookup {
                label: raw.to_string(),
            })
        }
    };
    Ok(degree)
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn normalize_all_labels() {
        let expected = [
            ("Fifth", "Fifth"),
            ("Fourth", "Fourth"),
            ("Cousins", "Third"),
            ("Third", "Third"),
            ("GPGC", "Second"),
            ("Second", "Second"),
            ("Siblings", "First"),
            ("First", "First"),
            ("Self", "Self"),
            ("Unrelated", "Unrelated"),
        ];
        for (raw, degree) in expected.iter() {
            assert_eq!(normalize(raw).unwrap().as_str(), *degree);
        }
    }
    #[test]
    fn normalize_unknown() {
        for raw in &["cousins", "Parent", "", " Self", "Siblings\n"] {
            match normalize(raw) {
                Err(DegreeError::Lookup { label }) => assert_eq!(label, *raw),
                other => panic!("{:?}", other),
            }
        }
    }
    #[test]
    fn canonical_order() {
        let mut degrees = CanonicalDegree::ALL.to_vec();
        degrees.reverse();
        degrees.sort();
        assert_eq!(degrees, CanonicalDegree::ALL.to_vec());
        for (idx, degree) in CanonicalDegree::ALL.iter().enumerate() {
            assert_eq!(degree.index(), idx);
        }
    }
    #[test]
    fn from_str_accepts_canonical_names_only() {
        assert_eq!("Self".parse::<CanonicalDegree>().unwrap(), CanonicalDegree::Identical);
        assert_eq!("Third".parse::<CanonicalDegree>().unwrap(), CanonicalDegree::Third);
        assert!("Cousins".parse::<CanonicalDegree>().is_err());
    }
    #[test]
    fn serialize_name() {
        let json = serde_json::to_string(&CanonicalDegree::Identical).unwrap();
        assert_eq!(json, "\"Self\"");
    }
}
