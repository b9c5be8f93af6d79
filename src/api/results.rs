use reqwest::Method;
use serde::Serialize;
use tracing::{debug, instrument};

use crate::api::Transport;
use crate::error::Result;
use crate::model::{Acknowledgement, MatchResultList, MatchResultQuery, MatchResultSubmission};

#[derive(Serialize)]
struct Approval {
    action: &'static str,
}

#[instrument(skip(transport))]
pub(crate) async fn get_match_results(
    transport: &Transport,
    query: &MatchResultQuery,
) -> Result<MatchResultList> {
    let url = transport.endpoint(&["result"], &query.to_pairs())?;
    let results: MatchResultList = transport.get_json(url).await?;
    debug!(count = results.len(), "parsed match result list");
    Ok(results)
}

/// Store a draft without submitting it to the away team.
#[instrument(skip(transport, submission))]
pub(crate) async fn save_match_result(
    transport: &Transport,
    result_id: u32,
    submission: &MatchResultSubmission,
) -> Result<()> {
    let url = transport.endpoint(&["result", &result_id.to_string()], &[])?;
    transport.send_json(Method::PUT, url, submission).await?;
    debug!(result_id, games = submission.game_results.len(), "saved match result");
    Ok(())
}

#[instrument(skip(transport, submission))]
pub(crate) async fn submit_match_result(
    transport: &Transport,
    fixture_id: u32,
    submission: &MatchResultSubmission,
) -> Result<()> {
    let url = transport.endpoint(&["result", &fixture_id.to_string()], &[])?;
    transport.send_json(Method::POST, url, submission).await?;
    debug!(fixture_id, games = submission.game_results.len(), "submitted match result");
    Ok(())
}

#[instrument(skip(transport))]
pub(crate) async fn approve_match_result(transport: &Transport, result_id: u32) -> Result<()> {
    let url = transport.endpoint(&["result", &result_id.to_string()], &[])?;
    let body = Approval { action: "Approve" };
    transport.send_json(Method::PATCH, url, &body).await?;
    debug!(result_id, "approved match result");
    Ok(())
}

#[instrument(skip(transport))]
pub(crate) async fn acknowledge_match_result(
    transport: &Transport,
    result_id: u32,
    acknowledgement: &Acknowledgement,
) -> Result<()> {
    let url = transport.endpoint(&["result", &result_id.to_string(), "acknowledge"], &[])?;
    transport.send_json(Method::PUT, url, acknowledgement).await?;
    debug!(result_id, action = %acknowledgement.action, "acknowledged match result");
    Ok(())
}
