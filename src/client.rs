use tracing::instrument;

use crate::api::{self, Transport};
use crate::config::LeagueConfig;
use crate::error::{LeagueError, Result};
use crate::model::*;

/// The main entry point for talking to the league API.
///
/// `LeagueClient` wraps a [`reqwest::Client`] and an in-memory response
/// cache. Reads are cached by URL until [`invalidate_cache`] is called or a
/// write succeeds; concurrent reads of the same URL share one request.
/// Cloning is cheap and clones share the cache.
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> tt_league::Result<()> {
/// use tt_league::{group_fixtures, FixtureQuery, LeagueClient, LeagueConfig};
///
/// let client = LeagueClient::new(LeagueConfig::new("https://league.example.com/api")?)?;
/// let fixtures = client.get_fixtures(&FixtureQuery::for_division(3)).await?;
/// for group in group_fixtures(&fixtures, None) {
///     println!("season {} round {}: {} fixtures", group.season, group.round, group.items.len());
/// }
/// # Ok(())
/// # }
/// ```
///
/// [`invalidate_cache`]: LeagueClient::invalidate_cache
#[derive(Clone)]
pub struct LeagueClient {
    transport: Transport,
}

impl LeagueClient {
    /// Create a client with an HTTP client built from `config`.
    pub fn new(config: LeagueConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|source| LeagueError::Http {
                url: config.base_url.to_string(),
                source,
            })?;
        Ok(Self::with_client(http, config))
    }

    /// Create a client using the provided [`reqwest::Client`].
    ///
    /// Use this when you need to configure proxies, headers, auth, etc.
    pub fn with_client(client: reqwest::Client, config: LeagueConfig) -> Self {
        Self {
            transport: Transport::new(client, &config),
        }
    }

    /// Fetch all leagues with their divisions.
    #[instrument(skip(self))]
    pub async fn get_leagues(&self) -> Result<Vec<League>> {
        api::leagues::get_leagues(&self.transport).await
    }

    /// Fetch fixtures matching `query`.
    #[instrument(skip(self))]
    pub async fn get_fixtures(&self, query: &FixtureQuery) -> Result<FixtureList> {
        api::fixtures::get_fixtures(&self.transport, query).await
    }

    /// Fetch match results matching `query`.
    #[instrument(skip(self))]
    pub async fn get_match_results(&self, query: &MatchResultQuery) -> Result<MatchResultList> {
        api::results::get_match_results(&self.transport, query).await
    }

    /// Fetch the server-computed individual leaderboard of a division.
    #[instrument(skip(self))]
    pub async fn get_individual_leaderboard(
        &self,
        division_id: u32,
    ) -> Result<Vec<LeaderboardIndividualResponse>> {
        api::leaderboard::get_individual_leaderboard(&self.transport, division_id).await
    }

    /// Fetch the server-computed team leaderboard of a division.
    #[instrument(skip(self))]
    pub async fn get_team_leaderboard(&self, division_id: u32) -> Result<Vec<LeaderboardTeamResponse>> {
        api::leaderboard::get_team_leaderboard(&self.transport, division_id).await
    }

    /// Save an existing result without submitting it.
    #[instrument(skip(self, submission))]
    pub async fn save_match_result(
        &self,
        result_id: u32,
        submission: &MatchResultSubmission,
    ) -> Result<()> {
        api::results::save_match_result(&self.transport, result_id, submission).await
    }

    /// Submit the first result for a fixture.
    #[instrument(skip(self, submission))]
    pub async fn submit_match_result(
        &self,
        fixture_id: u32,
        submission: &MatchResultSubmission,
    ) -> Result<()> {
        api::results::submit_match_result(&self.transport, fixture_id, submission).await
    }

    /// Approve a result.
    #[instrument(skip(self))]
    pub async fn approve_match_result(&self, result_id: u32) -> Result<()> {
        api::results::approve_match_result(&self.transport, result_id).await
    }

    /// Acknowledge or reject a result on behalf of the away team.
    #[instrument(skip(self))]
    pub async fn acknowledge_match_result(
        &self,
        result_id: u32,
        acknowledgement: &Acknowledgement,
    ) -> Result<()> {
        api::results::acknowledge_match_result(&self.transport, result_id, acknowledgement).await
    }

    /// Drop every cached response so the next reads hit the server.
    pub fn invalidate_cache(&self) {
        self.transport.invalidate_all();
    }
}
