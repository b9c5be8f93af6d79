use tracing::{debug, instrument};

use crate::api::Transport;
use crate::error::Result;
use crate::model::League;

#[instrument(skip(transport))]
pub(crate) async fn get_leagues(transport: &Transport) -> Result<Vec<League>> {
    let url = transport.endpoint(&["league"], &[])?;
    let leagues: Vec<League> = transport.get_json(url).await?;
    debug!(count = leagues.len(), "parsed league list");
    Ok(leagues)
}
