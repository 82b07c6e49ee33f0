//! Regions and the per-region data snapshots handed to the engine.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::{Player, Roster};

/// A league region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Region {
    #[default]
    NorthAmerica,
    Emea,
}

impl Region {
    /// Short key used in ids and on the command line.
    pub fn key(&self) -> &'static str {
        match self {
            Region::NorthAmerica => "na",
            Region::Emea => "emea",
        }
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Region::NorthAmerica => write!(f, "North America"),
            Region::Emea => write!(f, "EMEA"),
        }
    }
}

impl FromStr for Region {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "na" | "north-america" | "north america" => Ok(Region::NorthAmerica),
            "emea" => Ok(Region::Emea),
            other => Err(format!("unknown region: {}", other)),
        }
    }
}

/// The teams of one region, split by whether they have finished their bracket.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RegionPartition {
    /// Teams still playing, ranked by total
    #[serde(default)]
    pub competing: Vec<Roster>,

    /// Teams with a bracket finish, ranked by placement
    #[serde(default)]
    pub placed: Vec<Roster>,
}

impl RegionPartition {
    pub fn team_count(&self) -> usize {
        self.competing.len() + self.placed.len()
    }
}

/// Team rosters for every region, as loaded once per session.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamSnapshot {
    #[serde(alias = "naTeams", default)]
    pub na: RegionPartition,

    #[serde(alias = "emeaTeams", default)]
    pub emea: RegionPartition,
}

impl TeamSnapshot {
    pub fn region(&self, region: Region) -> &RegionPartition {
        match region {
            Region::NorthAmerica => &self.na,
            Region::Emea => &self.emea,
        }
    }
}

/// Individual player points for every region.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerPoolSnapshot {
    #[serde(alias = "naPoints", default)]
    pub na: Vec<Player>,

    #[serde(alias = "emeaPoints", default)]
    pub emea: Vec<Player>,
}

impl PlayerPoolSnapshot {
    pub fn region(&self, region: Region) -> &[Player] {
        match region {
            Region::NorthAmerica => &self.na,
            Region::Emea => &self.emea,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_parse() {
        assert_eq!("na".parse::<Region>().unwrap(), Region::NorthAmerica);
        assert_eq!("North-America".parse::<Region>().unwrap(), Region::NorthAmerica);
        assert_eq!("EMEA".parse::<Region>().unwrap(), Region::Emea);
        assert!("apac".parse::<Region>().is_err());
    }

    #[test]
    fn test_region_display_and_key() {
        assert_eq!(Region::NorthAmerica.to_string(), "North America");
        assert_eq!(Region::Emea.key(), "emea");
        assert_eq!(Region::default(), Region::NorthAmerica);
    }

    #[test]
    fn test_team_snapshot_api_aliases() {
        let json = r#"{
            "naTeams": {
                "competing": [{"teamName": "Alpha", "players": []}],
                "placed": []
            },
            "emeaTeams": {"competing": [], "placed": [{"teamName": "Bravo"}]}
        }"#;
        let snapshot: TeamSnapshot = serde_json::from_str(json).unwrap();

        assert_eq!(snapshot.region(Region::NorthAmerica).competing[0].team_name, "Alpha");
        assert_eq!(snapshot.region(Region::Emea).placed[0].team_name, "Bravo");
        assert_eq!(snapshot.region(Region::Emea).team_count(), 1);
    }

    #[test]
    fn test_player_pool_api_aliases() {
        let json = r#"{
            "naPoints": [{"playerId": "1", "ign": "A", "teamId": "t", "points": 5}],
            "emeaPoints": []
        }"#;
        let snapshot: PlayerPoolSnapshot = serde_json::from_str(json).unwrap();

        assert_eq!(snapshot.region(Region::NorthAmerica).len(), 1);
        assert!(snapshot.region(Region::Emea).is_empty());
    }
}
