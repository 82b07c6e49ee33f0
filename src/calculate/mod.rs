//! Scoring and standings calculation.
//!
//! Pure functions over rosters:
//! - Capped team totals (anti-stacking rule)
//! - Ranked ordering of competing and placed teams
//! - Seeding bonus by position
//! - Final standings composition

pub mod aggregate;
pub mod bonus;
pub mod compose;
pub mod sort;

pub use aggregate::{core_total, origin_groups, stack_cap, team_total, OriginGroup};
pub use bonus::bonus;
pub use compose::{compose_from_totals, compose_standings, ByTotal, PinnedWinner, StandingsPolicy};
pub use sort::{rank_region, sort_competing, sort_placed, sort_players};
