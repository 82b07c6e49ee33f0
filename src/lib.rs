//! # Circuit Points
//!
//! Circuit point scoring and roster standings for an esports league.
//!
//! ## Architecture
//!
//! - **models**: Core data structures (players, rosters, placements, standings)
//! - **calculate**: Capped team totals, ranking, seeding bonus, standings composition
//! - **session**: Interactive working sets (circuit standings, roster mania)
//! - **snapshot**: Loading region snapshots from JSON files
//! - **config**: Configuration loading and validation

pub mod calculate;
pub mod config;
pub mod models;
pub mod session;
pub mod snapshot;

pub use models::*;

/// Parse a team move given as `FROM:TO` (0-based ranked positions).
pub fn parse_move(s: &str) -> Option<(usize, usize)> {
    let (from, to) = s.trim().split_once(':')?;
    Some((from.trim().parse().ok()?, to.trim().parse().ok()?))
}
