use serde::{Deserialize, Serialize};
use strum_macros::EnumString;

use crate::league::combine::FixtureWithResult;
use crate::utils::normalize_numeric_filter;

/// Whether to list upcoming fixtures or recorded results.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, strum_macros::Display,
)]
#[strum(ascii_case_insensitive)]
pub enum FixtureKind {
    Fixture,
    Result,
}

/// Criteria for the fixture/result list. Blank or unset criteria match
/// everything; set criteria are combined with AND.
///
/// Team and round arrive as raw text from the input controls and are
/// parsed to numbers before comparison. Text that is not a number matches
/// nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FixtureFilter {
    pub kind: Option<FixtureKind>,
    pub team_id: Option<String>,
    pub round: Option<String>,
}

impl FixtureFilter {
    pub fn matches(&self, entry: &FixtureWithResult<'_>) -> bool {
        self.matches_kind(entry) && self.matches_team(entry) && self.matches_round(entry)
    }

    /// Entries passing every active criterion, in input order.
    pub fn apply<'a>(&self, entries: &[FixtureWithResult<'a>]) -> Vec<FixtureWithResult<'a>> {
        entries.iter().filter(|e| self.matches(e)).copied().collect()
    }

    fn matches_kind(&self, entry: &FixtureWithResult<'_>) -> bool {
        match self.kind {
            None => true,
            Some(FixtureKind::Fixture) => !entry.has_result(),
            Some(FixtureKind::Result) => entry.has_result(),
        }
    }

    fn matches_team(&self, entry: &FixtureWithResult<'_>) -> bool {
        match normalize_numeric_filter(self.team_id.as_deref()) {
            None => true,
            Some(team_id) => team_id.is_some_and(|id| entry.fixture.involves_team(id)),
        }
    }

    fn matches_round(&self, entry: &FixtureWithResult<'_>) -> bool {
        match normalize_numeric_filter(self.round.as_deref()) {
            None => true,
            Some(round) => round == Some(entry.fixture.round),
        }
    }
}
