//! Composed standings.

use serde::{Deserialize, Serialize};

/// Number of standings positions that qualify for the next stage.
pub const QUALIFYING_SLOTS: usize = 3;

/// A team's entry in the standings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamStanding {
    pub team_name: String,

    /// Capped core total
    pub base_total: f64,

    /// Bonus for the team's position in the ranked order
    pub bonus: f64,

    /// `base_total + bonus`
    pub total: f64,

    /// 0-based position in the ranked order the bonus was derived from
    pub seed: usize,
}

impl TeamStanding {
    pub fn new(team_name: impl Into<String>, base_total: f64, bonus: f64, seed: usize) -> Self {
        Self {
            team_name: team_name.into(),
            base_total,
            bonus,
            total: base_total + bonus,
            seed,
        }
    }
}

/// Final ordered standings, first entry is the winner.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Standings(Vec<TeamStanding>);

impl Standings {
    pub fn new(entries: Vec<TeamStanding>) -> Self {
        Self(entries)
    }

    pub fn entries(&self) -> &[TeamStanding] {
        &self.0
    }

    pub fn winner(&self) -> Option<&TeamStanding> {
        self.0.first()
    }

    /// 0-based position of a team, if present.
    pub fn position_of(&self, team_name: &str) -> Option<usize> {
        self.0.iter().position(|s| s.team_name == team_name)
    }

    /// The entries that finish inside the qualifying slots.
    pub fn qualified(&self, slots: usize) -> &[TeamStanding] {
        &self.0[..self.0.len().min(slots)]
    }

    pub fn is_qualified(&self, team_name: &str, slots: usize) -> bool {
        self.position_of(team_name).is_some_and(|pos| pos < slots)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TeamStanding> {
        self.0.iter()
    }

    pub fn into_inner(self) -> Vec<TeamStanding> {
        self.0
    }
}

impl<'a> IntoIterator for &'a Standings {
    type Item = &'a TeamStanding;
    type IntoIter = std::slice::Iter<'a, TeamStanding>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
