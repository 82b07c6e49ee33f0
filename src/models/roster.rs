//! Team roster model.

use serde::{Deserialize, Serialize};

use super::{PlacementLabel, Player};

/// Number of roster entries that count toward a team's total.
pub const CORE_SIZE: usize = 5;

/// One team's ordered lineup. Only the first [`CORE_SIZE`] entries score.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Roster {
    pub team_name: String,

    #[serde(default)]
    pub players: Vec<Player>,
}

impl Roster {
    pub fn new(team_name: impl Into<String>, players: Vec<Player>) -> Self {
        Self {
            team_name: team_name.into(),
            players,
        }
    }

    /// The scoring prefix of the lineup (fewer entries when the roster is short).
    pub fn core(&self, size: usize) -> &[Player] {
        &self.players[..self.players.len().min(size)]
    }

    /// Placement label of the team, read from its first player.
    pub fn placement(&self) -> Option<&PlacementLabel> {
        self.players.first().and_then(|p| p.place.as_ref())
    }

    /// Ordinal of the team's bracket finish (0 when unknown).
    pub fn rank_score(&self) -> u32 {
        self.placement().map(PlacementLabel::rank_score).unwrap_or(0)
    }

    /// Whether the team has already finished its bracket.
    ///
    /// Players without a label are treated as placed, matching how the
    /// points API only ever tags competing teams with "TBD".
    pub fn is_placed(&self) -> bool {
        match self.players.first() {
            Some(first) => first.place.as_ref().map_or(true, PlacementLabel::is_decided),
            None => false,
        }
    }

    /// Whether the entry at `index` counts toward the team total.
    pub fn counts_toward_total(index: usize, core_size: usize) -> bool {
        index < core_size
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player(id: &str, place: Option<&str>) -> Player {
        let p = Player::new(id, id, "t", 10.0).with_team_name("Falcons");
        match place {
            Some(label) => p.with_place(PlacementLabel::from(label)),
            None => p,
        }
    }

    #[test]
    fn test_core_truncates_to_five() {
        let roster = Roster::new(
            "Falcons",
            (0..7).map(|i| player(&i.to_string(), None)).collect(),
        );
        assert_eq!(roster.core(CORE_SIZE).len(), 5);
        assert_eq!(roster.core(CORE_SIZE)[4].name, "4");
    }

    #[test]
    fn test_core_of_short_roster() {
        let roster = Roster::new("Falcons", vec![player("a", None), player("b", None)]);
        assert_eq!(roster.core(CORE_SIZE).len(), 2);
        assert!(Roster::default().core(CORE_SIZE).is_empty());
    }

    #[test]
    fn test_placement_from_first_player() {
        let roster = Roster::new("Falcons", vec![player("a", Some("3")), player("b", Some("TBD"))]);
        assert_eq!(roster.placement(), Some(&PlacementLabel::Third));
        assert_eq!(roster.rank_score(), 6);
        assert!(roster.is_placed());
    }

    #[test]
    fn test_tbd_roster_is_not_placed() {
        let roster = Roster::new("Falcons", vec![player("a", Some("TBD"))]);
        assert!(!roster.is_placed());
        assert!(!Roster::default().is_placed());
    }

    #[test]
    fn test_counts_toward_total() {
        assert!(Roster::counts_toward_total(4, CORE_SIZE));
        assert!(!Roster::counts_toward_total(5, CORE_SIZE));
    }
}
