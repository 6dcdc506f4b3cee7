use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Fixed category of a grappling position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum Realm {
    Standing,
    Guard,
    #[serde(alias = "Controll")]
    Control,
    Submission,
}

impl Realm {
    pub const ALL: [Realm; 4] = [
        Realm::Standing,
        Realm::Guard,
        Realm::Control,
        Realm::Submission,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Realm::Standing => "Standing",
            Realm::Guard => "Guard",
            Realm::Control => "Control",
            Realm::Submission => "Submission",
        }
    }

    /// Parse user input: either the 1-based option number or the name
    /// (case-insensitive). Empty input selects the first option.
    pub fn from_input(s: &str) -> Option<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Some(Realm::Standing);
        }

        if let Ok(n) = s.parse::<usize>() {
            return n.checked_sub(1).and_then(|i| Self::ALL.get(i).copied());
        }

        match s.to_lowercase().as_str() {
            "standing" => Some(Realm::Standing),
            "guard" => Some(Realm::Guard),
            "control" | "controll" => Some(Realm::Control),
            "submission" => Some(Realm::Submission),
            _ => None,
        }
    }
}

impl fmt::Display for Realm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_input_accepts_numbers_and_names() {
        assert_eq!(Realm::from_input("2"), Some(Realm::Guard));
        assert_eq!(Realm::from_input("SUBMISSION"), Some(Realm::Submission));
        assert_eq!(Realm::from_input("controll"), Some(Realm::Control));
        assert_eq!(Realm::from_input(""), Some(Realm::Standing));
        assert_eq!(Realm::from_input("0"), None);
        assert_eq!(Realm::from_input("5"), None);
        assert_eq!(Realm::from_input("mount"), None);
    }

    #[test]
    fn legacy_spelling_deserializes() {
        let r: Realm = serde_json::from_str("\"Controll\"").unwrap();
        assert_eq!(r, Realm::Control);
        assert_eq!(serde_json::to_string(&r).unwrap(), "\"Control\"");
    }
}
