use serde::Serialize;

use crate::model::{Fixture, MatchResult};

/// A fixture paired with its result, if one has been recorded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FixtureWithResult<'a> {
    pub fixture: &'a Fixture,
    pub match_result: Option<&'a MatchResult>,
}

impl FixtureWithResult<'_> {
    pub fn has_result(&self) -> bool {
        self.match_result.is_some()
    }
}

/// Left-join fixtures with their results on the fixture id.
///
/// Yields one entry per fixture, in fixture order. When several results
/// reference the same fixture the first one wins; results for fixtures not
/// in `fixtures` are dropped.
pub fn combine_fixtures_with_match_result_data<'a>(
    fixtures: &'a [Fixture],
    results: &'a [MatchResult],
) -> Vec<FixtureWithResult<'a>> {
    fixtures
        .iter()
        .map(|fixture| FixtureWithResult {
            fixture,
            match_result: results.iter().find(|r| r.fixture_id == Some(fixture.id)),
        })
        .collect()
}
