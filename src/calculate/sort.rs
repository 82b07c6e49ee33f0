//! Ordering of teams and player pools.
//!
//! All sorts here are stable: bonus allocation and the pinned winner depend
//! on position, so equal keys must keep their input order.

use std::cmp::Ordering;

use super::aggregate::team_total;
use crate::config::{PlayerOrder, ScoringRules};
use crate::models::{Player, RegionPartition, Roster};

/// Order teams still competing by capped total, highest first.
pub fn sort_competing(rosters: &mut [Roster], rules: &ScoringRules) {
    rosters.sort_by(|left, right| team_total(right, rules).total_cmp(&team_total(left, rules)));
}

/// Order already-placed teams by bracket finish, best first.
pub fn sort_placed(rosters: &mut [Roster]) {
    rosters.sort_by_key(|r| std::cmp::Reverse(r.rank_score()));
}

/// The ranked team list of a region: competing teams, then placed teams.
pub fn rank_region(partition: &RegionPartition, rules: &ScoringRules) -> Vec<Roster> {
    let mut competing = partition.competing.clone();
    sort_competing(&mut competing, rules);

    let mut placed = partition.placed.clone();
    sort_placed(&mut placed);

    competing.extend(placed);
    competing
}

/// Order a player pool.
pub fn sort_players(players: &mut [Player], order: PlayerOrder) {
    match order {
        PlayerOrder::AsProvided => {}
        PlayerOrder::Points => players.sort_by(by_points),
        PlayerOrder::PointsRoleName => players.sort_by(|left, right| {
            by_points(left, right)
                .then_with(|| compare_text(left.primary_role_name(), right.primary_role_name()))
                .then_with(|| compare_text(&left.name, &right.name))
        }),
    }
}

fn by_points(left: &Player, right: &Player) -> Ordering {
    right.scoring_points().total_cmp(&left.scoring_points())
}

/// Case-insensitive comparison, falling back to exact order for ties.
fn compare_text(left: &str, right: &str) -> Ordering {
    left.to_lowercase()
        .cmp(&right.to_lowercase())
        .then_with(|| left.cmp(right))
}
