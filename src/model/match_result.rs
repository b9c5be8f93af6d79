use serde::{Deserialize, Serialize};
use strum_macros::EnumString;

use super::common::Side;
use super::fixture::Fixture;

/// A list of match results as returned by the result endpoint.
pub type MatchResultList = Vec<MatchResult>;

/// The recorded outcome of a fixture.
///
/// The API references the fixture either by an embedded object, a flat
/// `fixtureId`, or both. Deserialization folds these into [`fixture_id`]
/// so nothing downstream has to care which shape the server sent.
///
/// [`fixture_id`]: MatchResult::fixture_id
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "MatchResultWire")]
pub struct MatchResult {
    pub id: u32,
    pub fixture_id: Option<u32>,
    pub fixture: Option<Fixture>,
    pub game_results: Vec<GameResult>,
    pub home_total_points: i32,
    pub away_total_points: i32,
    pub home_player_points: i32,
    pub away_player_points: i32,
    pub home_additional_points: i32,
    pub away_additional_points: i32,
    pub status: MatchResultStatus,
    pub submitted: bool,
    pub reject_reason: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct MatchResultWire {
    id: u32,
    fixture_id: Option<u32>,
    fixture: Option<Fixture>,
    #[serde(default)]
    game_results: Vec<GameResult>,
    #[serde(default)]
    home_total_points: i32,
    #[serde(default)]
    away_total_points: i32,
    #[serde(default)]
    home_player_points: i32,
    #[serde(default)]
    away_player_points: i32,
    #[serde(default)]
    home_additional_points: i32,
    #[serde(default)]
    away_additional_points: i32,
    #[serde(default)]
    status: MatchResultStatus,
    #[serde(default, alias = "isSubmitted")]
    submitted: bool,
    reject_reason: Option<String>,
}

impl From<MatchResultWire> for MatchResult {
    fn from(wire: MatchResultWire) -> Self {
        let fixture_id = wire.fixture.as_ref().map(|f| f.id).or(wire.fixture_id);
        Self {
            id: wire.id,
            fixture_id,
            fixture: wire.fixture,
            game_results: wire.game_results,
            home_total_points: wire.home_total_points,
            away_total_points: wire.away_total_points,
            home_player_points: wire.home_player_points,
            away_player_points: wire.away_player_points,
            home_additional_points: wire.home_additional_points,
            away_additional_points: wire.away_additional_points,
            status: wire.status,
            submitted: wire.submitted,
            reject_reason: wire.reject_reason,
        }
    }
}

impl MatchResult {
    /// Outcome by total points.
    pub fn outcome(&self) -> MatchOutcome {
        match self.home_total_points.cmp(&self.away_total_points) {
            std::cmp::Ordering::Greater => MatchOutcome::HomeWin,
            std::cmp::Ordering::Less => MatchOutcome::AwayWin,
            std::cmp::Ordering::Equal => MatchOutcome::Draw,
        }
    }

    /// Number of games (boards) won by each side, as `(home, away)`.
    pub fn games_won(&self) -> (u32, u32) {
        self.game_results
            .iter()
            .filter_map(GameResult::winner)
            .fold((0, 0), |(home, away), side| match side {
                Side::Home => (home + 1, away),
                Side::Away => (home, away + 1),
            })
    }
}

/// Review state of a match result.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumString,
    strum_macros::Display,
)]
pub enum MatchResultStatus {
    #[default]
    Pending,
    Acknowledged,
    Approved,
    Rejected,
    #[serde(other)]
    #[strum(serialize = "Unknown")]
    Unknown,
}

impl MatchResultStatus {
    /// Approved results count towards standings and can no longer change.
    pub fn is_final(&self) -> bool {
        *self == MatchResultStatus::Approved
    }
}

impl MatchResult {
    /// A submitted result the away team has not yet acknowledged or rejected.
    pub fn awaits_acknowledgement(&self) -> bool {
        self.submitted && self.status == MatchResultStatus::Pending
    }
}

/// Outcome of a whole match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, strum_macros::Display)]
pub enum MatchOutcome {
    HomeWin,
    AwayWin,
    Draw,
}

/// One board within a match.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameResult {
    #[serde(default)]
    pub game_number: u32,
    #[serde(default)]
    pub home_player_name: String,
    #[serde(default)]
    pub away_player_name: String,
    #[serde(default)]
    pub set_results: Vec<SetResult>,
    #[serde(default)]
    pub home_sets_won: u32,
    #[serde(default)]
    pub away_sets_won: u32,
}

impl GameResult {
    /// Recompute the set-win counts from the individual sets.
    pub fn tally_sets(&mut self) {
        let (home, away) = self
            .set_results
            .iter()
            .filter_map(SetResult::winner)
            .fold((0, 0), |(home, away), side| match side {
                Side::Home => (home + 1, away),
                Side::Away => (home, away + 1),
            });
        self.home_sets_won = home;
        self.away_sets_won = away;
    }

    /// The side that won more sets, if any.
    pub fn winner(&self) -> Option<Side> {
        match self.home_sets_won.cmp(&self.away_sets_won) {
            std::cmp::Ordering::Greater => Some(Side::Home),
            std::cmp::Ordering::Less => Some(Side::Away),
            std::cmp::Ordering::Equal => None,
        }
    }
}

/// One set within a game.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetResult {
    #[serde(default)]
    pub set_number: u32,
    #[serde(default)]
    pub home_score: u32,
    #[serde(default)]
    pub away_score: u32,
}

impl SetResult {
    /// `None` for a level or unplayed set.
    pub fn winner(&self) -> Option<Side> {
        match self.home_score.cmp(&self.away_score) {
            std::cmp::Ordering::Greater => Some(Side::Home),
            std::cmp::Ordering::Less => Some(Side::Away),
            std::cmp::Ordering::Equal => None,
        }
    }
}

/// Body for saving or submitting a match result.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResultSubmission {
    pub game_results: Vec<GameResult>,
    pub home_additional_points: i32,
    pub away_additional_points: i32,
}

impl From<&MatchResult> for MatchResultSubmission {
    fn from(result: &MatchResult) -> Self {
        Self {
            game_results: result.game_results.clone(),
            home_additional_points: result.home_additional_points,
            away_additional_points: result.away_additional_points,
        }
    }
}

/// The away team's response to a submitted result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, EnumString, strum_macros::Display)]
pub enum AcknowledgeAction {
    Acknowledge,
    Reject,
}

/// Body of an acknowledgement request.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Acknowledgement {
    pub action: AcknowledgeAction,
    pub parameters: AcknowledgementParameters,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct AcknowledgementParameters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reject_reason: Option<String>,
}

impl Acknowledgement {
    pub fn accept() -> Self {
        Self {
            action: AcknowledgeAction::Acknowledge,
            parameters: AcknowledgementParameters::default(),
        }
    }

    pub fn reject(reason: impl Into<String>) -> Self {
        Self {
            action: AcknowledgeAction::Reject,
            parameters: AcknowledgementParameters {
                reject_reason: Some(reason.into()),
            },
        }
    }
}
