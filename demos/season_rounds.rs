use tracing_subscriber::EnvFilter;
use tt_league::{
    combine_fixtures_with_match_result_data, group_fixtures, AppContext, FixtureFilter,
    FixtureKind, FixtureQuery, LeagueConfig, MatchResultQuery,
};

#[tokio::main]
async fn main() -> tt_league::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let division_id: u32 = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(1);

    let ctx = AppContext::new(LeagueConfig::from_env()?)?;
    let client = ctx.client();

    for league in client.get_leagues().await? {
        println!("{} ({} divisions)", league.name, league.divisions.len());
    }

    let fixtures = client
        .get_fixtures(&FixtureQuery::for_division(division_id))
        .await?;
    let results = client
        .get_match_results(&MatchResultQuery::for_division(division_id))
        .await?;

    for group in group_fixtures(&fixtures, None) {
        println!("Season {} / Round {}", group.season, group.round);
        for fixture in group.items {
            println!("  {} vs {}", fixture.home_team.name, fixture.away_team.name);
        }
    }

    let combined = combine_fixtures_with_match_result_data(&fixtures, &results);
    let played = FixtureFilter {
        kind: Some(FixtureKind::Result),
        ..Default::default()
    };
    for entry in played.apply(&combined) {
        if let Some(result) = entry.match_result {
            println!(
                "{} {}-{} {} [{}]",
                entry.fixture.home_team.name,
                result.home_total_points,
                result.away_total_points,
                entry.fixture.away_team.name,
                result.status
            );
        }
    }

    for row in client.get_team_leaderboard(division_id).await? {
        println!("{:<24} {:>3} pts", row.team_name, row.points);
    }

    Ok(())
}
