use serde::{Deserialize, Serialize};

/// A league and the divisions it runs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct League {
    pub id: u32,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub divisions: Vec<Division>,
}

/// A named, tiered group of teams within a league season.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Division {
    pub id: u32,
    #[serde(default)]
    pub name: String,
    pub tier: Option<u32>,
}
