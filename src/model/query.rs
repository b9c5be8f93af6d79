use chrono::NaiveDate;

use crate::utils::format_api_date;

/// Filters accepted by the fixture endpoint. Unset fields are not sent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FixtureQuery {
    pub division_id: Option<u32>,
    pub team_id: Option<u32>,
    pub from_date: Option<NaiveDate>,
    pub to_date: Option<NaiveDate>,
    pub home_team_id: Option<u32>,
    pub away_team_id: Option<u32>,
    pub user_id: Option<String>,
}

impl FixtureQuery {
    pub fn for_division(division_id: u32) -> Self {
        Self {
            division_id: Some(division_id),
            ..Default::default()
        }
    }

    pub(crate) fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        push_pair(&mut pairs, "divisionId", self.division_id);
        push_pair(&mut pairs, "teamId", self.team_id);
        push_pair(&mut pairs, "fromDate", self.from_date.map(format_api_date));
        push_pair(&mut pairs, "toDate", self.to_date.map(format_api_date));
        push_pair(&mut pairs, "homeTeamId", self.home_team_id);
        push_pair(&mut pairs, "awayTeamId", self.away_team_id);
        push_pair(&mut pairs, "userId", self.user_id.as_deref());
        pairs
    }
}

/// Filters accepted by the result endpoint. Unset fields are not sent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchResultQuery {
    pub division_id: Option<u32>,
    pub season: Option<u32>,
    pub round: Option<u32>,
    pub user_id: Option<String>,
}

impl MatchResultQuery {
    pub fn for_division(division_id: u32) -> Self {
        Self {
            division_id: Some(division_id),
            ..Default::default()
        }
    }

    pub(crate) fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        push_pair(&mut pairs, "divisionId", self.division_id);
        push_pair(&mut pairs, "season", self.season);
        push_pair(&mut pairs, "round", self.round);
        push_pair(&mut pairs, "userId", self.user_id.as_deref());
        pairs
    }
}

fn push_pair<V: ToString>(pairs: &mut Vec<(&'static str, String)>, key: &'static str, value: Option<V>) {
    if let Some(value) = value {
        pairs.push((key, value.to_string()));
    }
}
