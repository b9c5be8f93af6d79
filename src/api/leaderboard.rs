use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

use crate::api::Transport;
use crate::error::Result;
use crate::model::{LeaderboardIndividualResponse, LeaderboardTeamResponse, LeaderboardType};

#[instrument(skip(transport))]
pub(crate) async fn get_individual_leaderboard(
    transport: &Transport,
    division_id: u32,
) -> Result<Vec<LeaderboardIndividualResponse>> {
    get_leaderboard(transport, division_id, LeaderboardType::Individual).await
}

#[instrument(skip(transport))]
pub(crate) async fn get_team_leaderboard(
    transport: &Transport,
    division_id: u32,
) -> Result<Vec<LeaderboardTeamResponse>> {
    get_leaderboard(transport, division_id, LeaderboardType::Team).await
}

async fn get_leaderboard<T: DeserializeOwned>(
    transport: &Transport,
    division_id: u32,
    kind: LeaderboardType,
) -> Result<Vec<T>> {
    let url = transport.endpoint(
        &[
            "result",
            "division",
            &division_id.to_string(),
            &kind.to_string(),
            "leaderboard",
        ],
        &[],
    )?;
    let rows: Vec<T> = transport.get_json(url).await?;
    debug!(count = rows.len(), division_id, %kind, "parsed leaderboard");
    Ok(rows)
}
