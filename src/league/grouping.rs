use itertools::iproduct;
use serde::Serialize;
use tracing::trace;

use crate::model::{Fixture, MatchResult};

/// Sentinel returned by the `min_*` reductions on empty input.
pub const NO_MINIMUM: u32 = u32::MAX;

/// Anything that can be placed in a (season, round) slot.
pub trait SeasonRound {
    fn season(&self) -> u32;
    fn round(&self) -> u32;
}

impl SeasonRound for Fixture {
    fn season(&self) -> u32 {
        self.season
    }

    fn round(&self) -> u32 {
        self.round
    }
}

/// Keyed on the embedded fixture. Results sent without one sit in slot (0, 0),
/// which no group covers.
impl SeasonRound for MatchResult {
    fn season(&self) -> u32 {
        self.fixture.as_ref().map_or(0, |f| f.season)
    }

    fn round(&self) -> u32 {
        self.fixture.as_ref().map_or(0, |f| f.round)
    }
}

/// Items sharing one (season, round) slot, in input order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeasonRoundGroup<'a, T> {
    pub season: u32,
    pub round: u32,
    pub items: Vec<&'a T>,
}

pub type GroupedFixtures<'a> = SeasonRoundGroup<'a, Fixture>;
pub type GroupedMatchResults<'a> = SeasonRoundGroup<'a, MatchResult>;

/// Bucket items by (season, round), season-major then round-minor, skipping
/// empty slots. Seasons and rounds are enumerated from 1 to the largest
/// observed value, so items with a 0 season or round land in no group.
///
/// When `round_filter` is set it replaces the round on *every* iteration of
/// the round loop rather than narrowing it: each season's matching group is
/// emitted once per enumerated round. Callers currently rely on this shape.
/// A filter of 0 counts as no filter.
pub fn group_by_season_and_round<T: SeasonRound>(
    items: &[T],
    round_filter: Option<u32>,
) -> Vec<SeasonRoundGroup<'_, T>> {
    let max_season = items.iter().map(SeasonRound::season).max().unwrap_or(0);
    let max_round = items.iter().map(SeasonRound::round).max().unwrap_or(0);

    let groups: Vec<_> = iproduct!(1..=max_season, 1..=max_round)
        .filter_map(|(season, round)| {
            let round = round_filter.filter(|r| *r > 0).unwrap_or(round);
            let matching: Vec<&T> = items
                .iter()
                .filter(|item| item.season() == season && item.round() == round)
                .collect();
            (!matching.is_empty()).then_some(SeasonRoundGroup {
                season,
                round,
                items: matching,
            })
        })
        .collect();
    trace!(
        items = items.len(),
        groups = groups.len(),
        max_season,
        max_round,
        ?round_filter,
        "grouped by season and round"
    );
    groups
}

pub fn group_fixtures(fixtures: &[Fixture], round_filter: Option<u32>) -> Vec<GroupedFixtures<'_>> {
    group_by_season_and_round(fixtures, round_filter)
}

pub fn group_match_results_by_fixture_season_and_round(
    results: &[MatchResult],
    round_filter: Option<u32>,
) -> Vec<GroupedMatchResults<'_>> {
    group_by_season_and_round(results, round_filter)
}

/// 0 when empty.
pub fn max_number_of_round<T: SeasonRound>(items: &[T]) -> u32 {
    items.iter().map(SeasonRound::round).max().unwrap_or(0)
}

/// [`NO_MINIMUM`] when empty.
pub fn min_number_of_round<T: SeasonRound>(items: &[T]) -> u32 {
    items.iter().map(SeasonRound::round).min().unwrap_or(NO_MINIMUM)
}

/// 0 when empty.
pub fn max_number_of_season<T: SeasonRound>(items: &[T]) -> u32 {
    items.iter().map(SeasonRound::season).max().unwrap_or(0)
}

/// [`NO_MINIMUM`] when empty.
pub fn min_number_of_season<T: SeasonRound>(items: &[T]) -> u32 {
    items.iter().map(SeasonRound::season).min().unwrap_or(NO_MINIMUM)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture(id: u32, season: u32, round: u32) -> Fixture {
        Fixture {
            id,
            season,
            round,
            ..Default::default()
        }
    }

    fn result(id: u32, fixture: Option<Fixture>) -> MatchResult {
        MatchResult {
            id,
            fixture_id: fixture.as_ref().map(|f| f.id),
            fixture,
            ..Default::default()
        }
    }

    fn summary<T>(groups: &[SeasonRoundGroup<'_, T>], id: impl Fn(&T) -> u32) -> Vec<(u32, u32, Vec<u32>)> {
        groups
            .iter()
            .map(|g| (g.season, g.round, g.items.iter().map(|item| id(item)).collect()))
            .collect()
    }

    #[test]
    fn test_group_fixtures() {
        let fixtures = vec![fixture(10, 1, 1), fixture(11, 1, 2), fixture(12, 2, 1)];
        let groups = group_fixtures(&fixtures, None);

        assert_eq!(
            summary(&groups, |f| f.id),
            vec![(1, 1, vec![10]), (1, 2, vec![11]), (2, 1, vec![12])]
        );
    }

    #[test]
    fn test_group_fixtures_empty() {
        assert!(group_fixtures(&[], None).is_empty());
        assert!(group_fixtures(&[], Some(3)).is_empty());
    }

    #[test]
    fn test_groups_are_sorted_and_lossless() {
        let fixtures = vec![
            fixture(1, 2, 3),
            fixture(2, 1, 2),
            fixture(3, 2, 1),
            fixture(4, 1, 2),
            fixture(5, 1, 1),
            fixture(6, 2, 3),
        ];
        let groups = group_fixtures(&fixtures, None);

        assert_eq!(
            summary(&groups, |f| f.id),
            vec![
                (1, 1, vec![5]),
                (1, 2, vec![2, 4]),
                (2, 1, vec![3]),
                (2, 3, vec![1, 6]),
            ]
        );

        let keys: Vec<(u32, u32)> = groups.iter().map(|g| (g.season, g.round)).collect();
        let mut sorted = keys.clone();
        sorted.sort();
        assert_eq!(keys, sorted);

        let mut ids: Vec<u32> = groups.iter().flat_map(|g| g.items.iter().map(|f| f.id)).collect();
        ids.sort();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);

        for group in &groups {
            assert!(group
                .items
                .iter()
                .all(|f| f.season == group.season && f.round == group.round));
        }
    }

    #[test]
    fn test_zero_season_or_round_is_in_no_group() {
        let fixtures = vec![fixture(1, 0, 1), fixture(2, 1, 0), fixture(3, 1, 1)];
        let groups = group_fixtures(&fixtures, None);

        assert_eq!(summary(&groups, |f| f.id), vec![(1, 1, vec![3])]);
    }

    #[test]
    fn test_round_filter_repeats_group_per_enumerated_round() {
        let fixtures = vec![
            fixture(10, 1, 1),
            fixture(11, 1, 2),
            fixture(12, 2, 1),
            fixture(13, 1, 3),
        ];
        let groups = group_fixtures(&fixtures, Some(2));

        // max_round is 3, so season 1's round-2 group appears three times
        // and season 2 (no round 2) contributes nothing.
        assert_eq!(
            summary(&groups, |f| f.id),
            vec![(1, 2, vec![11]), (1, 2, vec![11]), (1, 2, vec![11])]
        );
    }

    #[test]
    fn test_zero_round_filter_is_ignored() {
        let fixtures = vec![fixture(1, 1, 0), fixture(2, 1, 1)];

        assert_eq!(
            summary(&group_fixtures(&fixtures, Some(0)), |f| f.id),
            vec![(1, 1, vec![2])]
        );
    }

    #[test]
    fn test_round_filter_beyond_observed_rounds() {
        let fixtures = vec![fixture(10, 1, 1), fixture(11, 1, 2)];

        assert!(group_fixtures(&fixtures, Some(5)).is_empty());
    }

    #[test]
    fn test_group_match_results() {
        let results = vec![
            result(1, Some(fixture(10, 1, 2))),
            result(2, Some(fixture(11, 1, 1))),
            result(3, None),
            result(4, Some(fixture(12, 1, 2))),
        ];
        let groups = group_match_results_by_fixture_season_and_round(&results, None);

        assert_eq!(
            summary(&groups, |r| r.id),
            vec![(1, 1, vec![2]), (1, 2, vec![1, 4])]
        );
    }

    #[test]
    fn test_group_match_results_with_round_filter() {
        let results = vec![
            result(1, Some(fixture(10, 1, 1))),
            result(2, Some(fixture(11, 1, 2))),
        ];
        let groups = group_match_results_by_fixture_season_and_round(&results, Some(1));

        assert_eq!(
            summary(&groups, |r| r.id),
            vec![(1, 1, vec![1]), (1, 1, vec![1])]
        );
    }

    #[test]
    fn test_min_max_reductions() {
        let fixtures = vec![fixture(1, 2, 4), fixture(2, 3, 1), fixture(3, 1, 7)];

        assert_eq!(max_number_of_round(&fixtures), 7);
        assert_eq!(min_number_of_round(&fixtures), 1);
        assert_eq!(max_number_of_season(&fixtures), 3);
        assert_eq!(min_number_of_season(&fixtures), 1);
    }

    #[test]
    fn test_min_max_reductions_empty() {
        let fixtures: Vec<Fixture> = Vec::new();

        assert_eq!(max_number_of_round(&fixtures), 0);
        assert_eq!(max_number_of_season(&fixtures), 0);
        assert_eq!(min_number_of_round(&fixtures), NO_MINIMUM);
        assert_eq!(min_number_of_season(&fixtures), NO_MINIMUM);
    }
}
