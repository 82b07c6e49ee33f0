//! Standings composition: base totals plus seeding bonus, then final order.

use tracing::debug;

use super::aggregate::team_total;
use super::bonus::bonus;
use crate::config::ScoringRules;
use crate::models::{Roster, Standings, TeamStanding};

/// Decides the final order of bonus-adjusted standings.
pub trait StandingsPolicy {
    /// Arrange entries given in ranked (seed) order.
    fn arrange(&self, entries: Vec<TeamStanding>) -> Vec<TeamStanding>;
}

/// The team in the first ranked slot keeps first place; everyone else is
/// ordered by total.
#[derive(Debug, Clone, Copy, Default)]
pub struct PinnedWinner;

impl StandingsPolicy for PinnedWinner {
    fn arrange(&self, mut entries: Vec<TeamStanding>) -> Vec<TeamStanding> {
        if entries.len() > 1 {
            sort_by_total(&mut entries[1..]);
        }
        entries
    }
}

/// Every team ordered by total, no pinned slot.
#[derive(Debug, Clone, Copy, Default)]
pub struct ByTotal;

impl StandingsPolicy for ByTotal {
    fn arrange(&self, mut entries: Vec<TeamStanding>) -> Vec<TeamStanding> {
        sort_by_total(&mut entries);
        entries
    }
}

fn sort_by_total(entries: &mut [TeamStanding]) {
    entries.sort_by(|left, right| right.total.total_cmp(&left.total));
}

/// Compose standings from rosters in ranked order.
pub fn compose_standings(
    ordered: &[Roster],
    rules: &ScoringRules,
    policy: &dyn StandingsPolicy,
) -> Standings {
    compose_from_totals(
        ordered
            .iter()
            .map(|roster| (roster.team_name.clone(), team_total(roster, rules))),
        policy,
    )
}

/// Compose standings from `(team name, base total)` pairs in ranked order.
pub fn compose_from_totals<I>(ordered: I, policy: &dyn StandingsPolicy) -> Standings
where
    I: IntoIterator<Item = (String, f64)>,
{
    let entries: Vec<TeamStanding> = ordered
        .into_iter()
        .enumerate()
        .map(|(seed, (team_name, base_total))| {
            TeamStanding::new(team_name, base_total, bonus(seed), seed)
        })
        .collect();

    debug!("Composing standings for {} teams", entries.len());
    Standings::new(policy.arrange(entries))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Player;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn team(name: &str, points: f64) -> Roster {
        Roster::new(name, vec![Player::new(name, name, name, points)])
    }

    fn names(standings: &Standings) -> Vec<&str> {
        standings.iter().map(|s| s.team_name.as_str()).collect()
    }

    #[test]
    fn test_bonus_added_by_seed() {
        let ordered = vec![team("A", 100.0), team("B", 100.0), team("C", 100.0)];
        let standings = compose_standings(&ordered, &ScoringRules::default(), &PinnedWinner);

        let totals: Vec<f64> = standings.iter().map(|s| s.total).collect();
        assert_eq!(totals, vec![600.0, 500.0, 400.0]);
        assert_eq!(standings.entries()[2].bonus, 300.0);
        assert_eq!(standings.entries()[2].seed, 2);
    }

    #[test]
    fn test_winner_pinned_even_when_overtaken() {
        let ordered = vec![
            team("Seed", 0.0),
            team("Mid", 200.0),
            team("Rocket", 2000.0),
        ];
        let standings = compose_standings(&ordered, &ScoringRules::default(), &PinnedWinner);

        // Seed: 500, Mid: 600, Rocket: 2300
        assert_eq!(names(&standings), vec!["Seed", "Rocket", "Mid"]);
        assert_eq!(standings.winner().unwrap().total, 500.0);
    }

    #[test]
    fn test_by_total_policy_unpins() {
        let ordered = vec![team("Seed", 0.0), team("Rocket", 2000.0)];
        let standings = compose_standings(&ordered, &ScoringRules::default(), &ByTotal);
        assert_eq!(names(&standings), vec!["Rocket", "Seed"]);
    }

    #[test]
    fn test_rest_sorted_stably() {
        let standings = compose_from_totals(
            vec![
                ("W".to_string(), 0.0),
                ("X".to_string(), 100.0), // 500
                ("Y".to_string(), 200.0), // 500
                ("Z".to_string(), 250.0), // 500
            ],
            &PinnedWinner,
        );
        assert_eq!(names(&standings), vec!["W", "X", "Y", "Z"]);
    }

    #[test]
    fn test_empty_and_single() {
        assert!(compose_from_totals(Vec::<(String, f64)>::new(), &PinnedWinner).is_empty());

        let single = compose_from_totals(vec![("Solo".to_string(), 10.0)], &PinnedWinner);
        assert_eq!(single.winner().unwrap().total, 510.0);
    }

    proptest! {
        #[test]
        fn prop_winner_always_pinned(totals in prop::collection::vec(0u32..5000, 1..16)) {
            let ordered: Vec<(String, f64)> = totals
                .iter()
                .enumerate()
                .map(|(i, t)| (format!("team{i}"), *t as f64))
                .collect();
            let standings = compose_from_totals(ordered, &PinnedWinner);
            prop_assert_eq!(standings.winner().unwrap().team_name.as_str(), "team0");
            prop_assert_eq!(standings.len(), totals.len());
        }
    }
}
