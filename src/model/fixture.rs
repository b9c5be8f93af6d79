use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::common::{TeamSummary, Venue};
use crate::utils::deserialize_api_date;

/// A list of fixtures as returned by the fixture endpoint.
pub type FixtureList = Vec<Fixture>;

/// A scheduled match between two teams within a division.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fixture {
    pub id: u32,
    #[serde(default, deserialize_with = "deserialize_api_date")]
    pub date: Option<NaiveDate>,
    pub time: Option<String>,
    pub venue: Option<Venue>,
    #[serde(default)]
    pub home_team: TeamSummary,
    #[serde(default)]
    pub away_team: TeamSummary,
    pub division_id: Option<u32>,
    #[serde(default)]
    pub season: u32,
    #[serde(default)]
    pub round: u32,
}

impl Fixture {
    /// Whether the given team plays in this fixture, home or away.
    pub fn involves_team(&self, team_id: u32) -> bool {
        self.home_team.id == team_id || self.away_team.id == team_id
    }
}
