//! Roster mania team builder.
//!
//! A region's players sit in one pool. The user drags them into a fixed number
//! of ad-hoc team slots, reorders them, and can add unlisted players by name.
//! Each slot's capped total is recomputed after every edit.

use tracing::{debug, info};

use super::moves::{move_item, pair_mut, transfer_item};
use super::SessionState;
use crate::calculate::{core_total, sort_players};
use crate::config::EngineConfig;
use crate::models::{EntityId, Player, PlayerId, PlayerPoolSnapshot, Region, Roster};

/// One of the lists players can be dragged between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Board {
    /// The region's unassigned players
    Pool,
    /// An ad-hoc team slot, 0-based
    Team(usize),
}

/// Working set for the roster mania builder.
pub struct ManiaSession {
    snapshot: PlayerPoolSnapshot,
    config: EngineConfig,
    region: Region,
    state: SessionState,
    pool: Vec<Player>,
    teams: Vec<Roster>,
    totals: Vec<f64>,
    filter: String,
    free_agents: u64,
}

impl ManiaSession {
    /// Start a session on North America.
    pub fn new(snapshot: PlayerPoolSnapshot, config: EngineConfig) -> Self {
        let mut session = Self {
            snapshot,
            config,
            region: Region::default(),
            state: SessionState::Idle,
            pool: Vec::new(),
            teams: Vec::new(),
            totals: Vec::new(),
            filter: String::new(),
            free_agents: 0,
        };
        session.load(Region::default());
        session
    }

    /// Switch region: reload the pool and empty every team slot.
    pub fn swap_to_region(&mut self, region: Region) -> &[f64] {
        self.load(region);
        &self.totals
    }

    /// Reload the current region, discarding every edit.
    pub fn reset(&mut self) -> &[f64] {
        self.load(self.region);
        &self.totals
    }

    /// Move a player within one list.
    pub fn reorder(&mut self, board: Board, from: usize, to: usize) -> &[f64] {
        self.state = SessionState::Mutating;

        let moved = match board {
            Board::Pool => move_item(&mut self.pool, from, to),
            Board::Team(slot) => self
                .teams
                .get_mut(slot)
                .is_some_and(|roster| move_item(&mut roster.players, from, to)),
        };
        if moved {
            debug!("Moved player in {:?} from {} to {}", board, from, to);
        }

        self.rescore();
        &self.totals
    }

    /// Move a player from one list into another.
    pub fn transfer(
        &mut self,
        source: Board,
        destination: Board,
        from: usize,
        to: usize,
    ) -> &[f64] {
        if source == destination {
            return self.reorder(source, from, to);
        }

        self.state = SessionState::Mutating;

        let moved = match self.lists_mut(source, destination) {
            Some((src, dst)) => transfer_item(src, dst, from, to),
            None => false,
        };
        if moved {
            debug!("Transferred player from {:?} to {:?}", source, destination);
        }

        self.rescore();
        &self.totals
    }

    /// Add an unlisted player to the pool.
    ///
    /// Blank names are ignored. The player gets synthesized ids, no points and
    /// every role. Added players live in the working pool only, so `reset` and
    /// `swap_to_region` drop them along with every other edit.
    pub fn add_player(&mut self, name: &str) -> Option<PlayerId> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }

        self.state = SessionState::Mutating;
        self.free_agents += 1;

        let seq = self.free_agents.to_string();
        let id = EntityId::generate(&["free-agent", self.region.key(), name, &seq]);
        let origin = EntityId::generate(&["free-agent-origin", self.region.key(), name, &seq]);
        self.pool.push(Player::free_agent(id.clone(), origin, name));
        debug!("Added free agent {} ({})", name, id);

        self.rescore();
        Some(id)
    }

    /// Set the pool filter text.
    pub fn set_filter(&mut self, text: &str) {
        self.filter = text.trim().to_lowercase();
    }

    /// Pool players matching the filter by name or team, with their pool index.
    pub fn filtered(&self) -> Vec<(usize, &Player)> {
        self.pool
            .iter()
            .enumerate()
            .filter(|(_, p)| {
                self.filter.is_empty()
                    || p.name.to_lowercase().contains(&self.filter)
                    || p.team_name.to_lowercase().contains(&self.filter)
            })
            .collect()
    }

    /// Pool index of a player by in-game name (case-insensitive).
    pub fn find_in_pool(&self, name: &str) -> Option<usize> {
        self.pool
            .iter()
            .position(|p| p.name.eq_ignore_ascii_case(name.trim()))
    }

    pub fn region(&self) -> Region {
        self.region
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn pool(&self) -> &[Player] {
        &self.pool
    }

    pub fn team(&self, slot: usize) -> Option<&Roster> {
        self.teams.get(slot)
    }

    pub fn teams(&self) -> &[Roster] {
        &self.teams
    }

    /// Capped total of every team slot.
    pub fn team_totals(&self) -> &[f64] {
        &self.totals
    }

    fn load(&mut self, region: Region) {
        self.state = SessionState::Mutating;

        self.region = region;
        self.pool = self.snapshot.region(region).to_vec();
        self.teams = (1..=self.config.team_slots)
            .map(|n| Roster::new(format!("Team {n}"), Vec::new()))
            .collect();
        self.filter.clear();

        info!("Loaded {} players for {}", self.pool.len(), region);

        self.rescore();
    }

    fn lists_mut(
        &mut self,
        source: Board,
        destination: Board,
    ) -> Option<(&mut Vec<Player>, &mut Vec<Player>)> {
        match (source, destination) {
            (Board::Pool, Board::Team(slot)) => {
                let team = &mut self.teams.get_mut(slot)?.players;
                Some((&mut self.pool, team))
            }
            (Board::Team(slot), Board::Pool) => {
                let team = &mut self.teams.get_mut(slot)?.players;
                Some((team, &mut self.pool))
            }
            (Board::Team(a), Board::Team(b)) => {
                let (left, right) = pair_mut(&mut self.teams, a, b)?;
                Some((&mut left.players, &mut right.players))
            }
            (Board::Pool, Board::Pool) => None,
        }
    }

    fn rescore(&mut self) {
        sort_players(&mut self.pool, self.config.player_order);
        self.totals = self
            .teams
            .iter()
            .map(|roster| core_total(&roster.players, &self.config.rules))
            .collect();
        self.state = SessionState::Idle;
    }
}
