//! Bracket finish labels for already-placed teams.

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::str::FromStr;

/// A bracket-finish descriptor as published by the league ("1", "5-6", "TBD").
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PlacementLabel {
    First,
    Second,
    Third,
    Fourth,
    FifthSixth,
    SeventhEighth,
    NinthTwelfth,
    ThirteenthSixteenth,
    /// Still competing, no finish yet.
    Tbd,
    /// Anything the league publishes that we don't recognise.
    Other(String),
}

impl PlacementLabel {
    /// Ordinal used to sort placed teams; higher is better.
    ///
    /// `TBD` and unknown labels rank lowest rather than failing.
    pub fn rank_score(&self) -> u32 {
        match self {
            PlacementLabel::First => 8,
            PlacementLabel::Second => 7,
            PlacementLabel::Third => 6,
            PlacementLabel::Fourth => 5,
            PlacementLabel::FifthSixth => 4,
            PlacementLabel::SeventhEighth => 3,
            PlacementLabel::NinthTwelfth => 2,
            PlacementLabel::ThirteenthSixteenth => 1,
            PlacementLabel::Tbd | PlacementLabel::Other(_) => 0,
        }
    }

    /// Whether the team already has a bracket finish.
    pub fn is_decided(&self) -> bool {
        !matches!(self, PlacementLabel::Tbd)
    }

    pub fn as_str(&self) -> &str {
        match self {
            PlacementLabel::First => "1",
            PlacementLabel::Second => "2",
            PlacementLabel::Third => "3",
            PlacementLabel::Fourth => "4",
            PlacementLabel::FifthSixth => "5-6",
            PlacementLabel::SeventhEighth => "7-8",
            PlacementLabel::NinthTwelfth => "9-12",
            PlacementLabel::ThirteenthSixteenth => "13-16",
            PlacementLabel::Tbd => "TBD",
            PlacementLabel::Other(raw) => raw,
        }
    }
}

impl FromStr for PlacementLabel {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "1" => PlacementLabel::First,
            "2" => PlacementLabel::Second,
            "3" => PlacementLabel::Third,
            "4" => PlacementLabel::Fourth,
            "5-6" => PlacementLabel::FifthSixth,
            "7-8" => PlacementLabel::SeventhEighth,
            "9-12" => PlacementLabel::NinthTwelfth,
            "13-16" => PlacementLabel::ThirteenthSixteenth,
            "TBD" => PlacementLabel::Tbd,
            other => PlacementLabel::Other(other.to_string()),
        })
    }
}

impl From<String> for PlacementLabel {
    fn from(s: String) -> Self {
        match s.parse::<PlacementLabel>() {
            Ok(label) => label,
            Err(never) => match never {},
        }
    }
}

impl From<&str> for PlacementLabel {
    fn from(s: &str) -> Self {
        PlacementLabel::from(s.to_string())
    }
}

impl From<PlacementLabel> for String {
    fn from(label: PlacementLabel) -> Self {
        label.as_str().to_string()
    }
}

impl std::fmt::Display for PlacementLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Finish label shown on a team card at a 0-based position in the ranked order.
pub fn finish_label(index: usize) -> &'static str {
    match index {
        0 => "1st",
        1 => "2nd",
        2 => "3rd",
        3 => "4th",
        4 | 5 => "5/6",
        6 | 7 => "7/8",
        8..=11 => "9-12",
        _ => "13-16",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_score_table() {
        let expected = [
            ("1", 8),
            ("2", 7),
            ("3", 6),
            ("4", 5),
            ("5-6", 4),
            ("7-8", 3),
            ("9-12", 2),
            ("13-16", 1),
            ("TBD", 0),
        ];
        for (raw, score) in expected {
            assert_eq!(PlacementLabel::from(raw).rank_score(), score, "label {}", raw);
        }
    }

    #[test]
    fn test_unknown_label_ranks_lowest() {
        let label = PlacementLabel::from("17-24");
        assert_eq!(label, PlacementLabel::Other("17-24".to_string()));
        assert_eq!(label.rank_score(), 0);
        assert!(label.is_decided());
    }

    #[test]
    fn test_tbd_is_not_decided() {
        assert!(!PlacementLabel::Tbd.is_decided());
        assert!(PlacementLabel::Fourth.is_decided());
    }

    #[test]
    fn test_serialization_uses_raw_label() {
        let json = serde_json::to_string(&PlacementLabel::FifthSixth).unwrap();
        assert_eq!(json, "\"5-6\"");

        let parsed: PlacementLabel = serde_json::from_str("\"13-16\"").unwrap();
        assert_eq!(parsed, PlacementLabel::ThirteenthSixteenth);

        let other: PlacementLabel = serde_json::from_str("\"DQ\"").unwrap();
        assert_eq!(other.to_string(), "DQ");
    }

    #[test]
    fn test_finish_label() {
        assert_eq!(finish_label(0), "1st");
        assert_eq!(finish_label(3), "4th");
        assert_eq!(finish_label(5), "5/6");
        assert_eq!(finish_label(7), "7/8");
        assert_eq!(finish_label(8), "9-12");
        assert_eq!(finish_label(11), "9-12");
        assert_eq!(finish_label(12), "13-16");
        assert_eq!(finish_label(40), "13-16");
    }
}
