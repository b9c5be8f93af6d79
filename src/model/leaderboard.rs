use serde::{Deserialize, Serialize};

/// Which leaderboard of a division to fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum_macros::Display)]
#[strum(serialize_all = "lowercase")]
pub enum LeaderboardType {
    Individual,
    Team,
}

/// A player's row in a division's individual leaderboard.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardIndividualResponse {
    #[serde(default)]
    pub player_id: u32,
    #[serde(default)]
    pub player_name: String,
    pub team_name: Option<String>,
    #[serde(default)]
    pub games_played: u32,
    #[serde(default)]
    pub games_won: u32,
    #[serde(default)]
    pub games_lost: u32,
    #[serde(default)]
    pub points: i32,
    #[serde(default)]
    pub win_rate: f64,
}

/// A team's row in a division's team leaderboard.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardTeamResponse {
    #[serde(default)]
    pub team_id: u32,
    #[serde(default)]
    pub team_name: String,
    #[serde(default)]
    pub matches_played: u32,
    #[serde(default)]
    pub matches_won: u32,
    #[serde(default)]
    pub matches_drawn: u32,
    #[serde(default)]
    pub matches_lost: u32,
    #[serde(default)]
    pub points: i32,
    #[serde(default)]
    pub win_rate: f64,
}
