//! Circuit points standings calculator.
//!
//! Teams of a region are ranked once on load (competing teams by total, then
//! placed teams by finish). The user can then drag teams within that order and
//! shuffle players inside or between rosters; each edit rescores the touched
//! rosters and recomposes the standings.

use tracing::{debug, info};

use super::moves::{move_item, pair_mut, transfer_item};
use super::SessionState;
use crate::calculate::{compose_from_totals, rank_region, sort_players, team_total};
use crate::calculate::{PinnedWinner, StandingsPolicy};
use crate::config::EngineConfig;
use crate::models::{Region, Roster, Standings, TeamSnapshot};

/// Working set for the circuit points calculator.
pub struct CircuitSession {
    snapshot: TeamSnapshot,
    config: EngineConfig,
    policy: Box<dyn StandingsPolicy>,
    region: Region,
    state: SessionState,

    /// Rosters in ranked order
    teams: Vec<Roster>,

    /// Running capped total per team, aligned with `teams`
    totals: Vec<f64>,

    standings: Standings,
}

impl CircuitSession {
    /// Start a session on North America with the pinned-winner policy.
    pub fn new(snapshot: TeamSnapshot, config: EngineConfig) -> Self {
        Self::with_policy(snapshot, config, Box::new(PinnedWinner))
    }

    pub fn with_policy(
        snapshot: TeamSnapshot,
        config: EngineConfig,
        policy: Box<dyn StandingsPolicy>,
    ) -> Self {
        let mut session = Self {
            snapshot,
            config,
            policy,
            region: Region::default(),
            state: SessionState::Idle,
            teams: Vec::new(),
            totals: Vec::new(),
            standings: Standings::default(),
        };
        session.load(Region::default());
        session
    }

    /// Replace the working set with another region's snapshot.
    ///
    /// Every edit made in the current region is discarded.
    pub fn swap_to_region(&mut self, region: Region) -> &Standings {
        self.load(region);
        &self.standings
    }

    /// Reload the current region from its snapshot.
    pub fn reset(&mut self) -> &Standings {
        self.load(self.region);
        &self.standings
    }

    /// Move a team within the ranked order.
    ///
    /// The destination is clamped to the configured drag limit.
    pub fn reorder_team(&mut self, from: usize, to: usize) -> &Standings {
        self.state = SessionState::Mutating;

        let to = match self.config.team_drop_limit {
            Some(limit) => to.min(limit),
            None => to,
        };
        if move_item(&mut self.teams, from, to) {
            move_item(&mut self.totals, from, to);
            debug!("Moved team from {} to {}", from, to);
        }

        self.recompose();
        &self.standings
    }

    /// Move a player within one roster.
    pub fn reorder_within_roster(&mut self, team: usize, from: usize, to: usize) -> &Standings {
        self.state = SessionState::Mutating;

        if let Some(roster) = self.teams.get_mut(team) {
            if move_item(&mut roster.players, from, to) {
                debug!("Moved player in {} from {} to {}", roster.team_name, from, to);
                self.rescore(team);
            }
        }

        self.recompose();
        &self.standings
    }

    /// Move a player from one roster into another.
    pub fn transfer_between_rosters(
        &mut self,
        source: usize,
        destination: usize,
        from: usize,
        to: usize,
    ) -> &Standings {
        if source == destination {
            return self.reorder_within_roster(source, from, to);
        }

        self.state = SessionState::Mutating;

        if let Some((src, dst)) = pair_mut(&mut self.teams, source, destination) {
            if transfer_item(&mut src.players, &mut dst.players, from, to) {
                debug!(
                    "Transferred player from {} to {}",
                    src.team_name, dst.team_name
                );
                self.rescore(source);
                self.rescore(destination);
            }
        }

        self.recompose();
        &self.standings
    }

    pub fn region(&self) -> Region {
        self.region
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Rosters in the current ranked order.
    pub fn teams(&self) -> &[Roster] {
        &self.teams
    }

    /// Running capped total of a team, by name.
    pub fn team_total(&self, team_name: &str) -> Option<f64> {
        self.teams
            .iter()
            .position(|r| r.team_name == team_name)
            .map(|idx| self.totals[idx])
    }

    /// Whether the team at a ranked position already has a bracket finish.
    pub fn is_placed(&self, index: usize) -> bool {
        self.teams.get(index).is_some_and(Roster::is_placed)
    }

    pub fn standings(&self) -> &Standings {
        &self.standings
    }

    fn load(&mut self, region: Region) {
        self.state = SessionState::Mutating;

        let mut partition = self.snapshot.region(region).clone();
        for roster in partition.competing.iter_mut().chain(partition.placed.iter_mut()) {
            sort_players(&mut roster.players, self.config.player_order);
        }

        self.region = region;
        self.teams = rank_region(&partition, &self.config.rules);
        self.totals = self
            .teams
            .iter()
            .map(|roster| team_total(roster, &self.config.rules))
            .collect();

        info!(
            "Loaded {} teams for {} ({} competing, {} placed)",
            self.teams.len(),
            region,
            partition.competing.len(),
            partition.placed.len()
        );

        self.recompose();
    }

    fn rescore(&mut self, team: usize) {
        if let (Some(roster), Some(total)) = (self.teams.get(team), self.totals.get_mut(team)) {
            *total = team_total(roster, &self.config.rules);
        }
    }

    fn recompose(&mut self) {
        self.standings = compose_from_totals(
            self.teams
                .iter()
                .zip(&self.totals)
                .map(|(roster, total)| (roster.team_name.clone(), *total)),
            self.policy.as_ref(),
        );
        self.state = SessionState::Idle;
    }
}
