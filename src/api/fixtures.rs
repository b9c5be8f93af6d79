use tracing::{debug, instrument};

use crate::api::Transport;
use crate::error::Result;
use crate::model::{FixtureList, FixtureQuery};

#[instrument(skip(transport))]
pub(crate) async fn get_fixtures(transport: &Transport, query: &FixtureQuery) -> Result<FixtureList> {
    let url = transport.endpoint(&["fixture"], &query.to_pairs())?;
    let fixtures: FixtureList = transport.get_json(url).await?;
    debug!(count = fixtures.len(), "parsed fixture list");
    Ok(fixtures)
}
