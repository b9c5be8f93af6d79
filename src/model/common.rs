use serde::{Deserialize, Serialize};

/// One side of a fixture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum_macros::Display)]
#[strum(serialize_all = "lowercase")]
pub enum Side {
    Home,
    Away,
}

/// A team as embedded in fixtures.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamSummary {
    #[serde(default)]
    pub id: u32,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub players: Vec<PlayerSummary>,
}

/// A rostered player as embedded in a team.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerSummary {
    #[serde(default)]
    pub id: u32,
    #[serde(default)]
    pub name: String,
}

/// The venue a fixture is played at.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Venue {
    #[serde(default)]
    pub id: u32,
    #[serde(default)]
    pub name: String,
    pub address: Option<String>,
}
