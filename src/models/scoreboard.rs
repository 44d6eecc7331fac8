use serde::Serialize;

use super::Record;

/// A game as listed on one day's scoreboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreboardRecord {
    pub game_id: String,
    pub season_id: i32,
    pub game_date: String,
    pub season_stage_id: String,
    pub league_name: String,
    pub start_time_eastern: String,
    #[serde(rename = "startTimeUTC")]
    pub start_time_utc: String,
    #[serde(rename = "endTimeUTC")]
    pub end_time_utc: String,
    pub start_date_eastern: String,
    pub nugget: String,
    pub attendance: i32,
    pub h_team_id: String,
    pub v_team_id: String,
}

impl Record for ScoreboardRecord {
    const KIND: &'static str = "scoreboard";

    const HEADERS: &'static [&'static str] = &[
        "gameId",
        "seasonId",
        "gameDate",
        "seasonStageId",
        "leagueName",
        "startTimeEastern",
        "startTimeUTC",
        "endTimeUTC",
        "startDateEastern",
        "nugget",
        "attendance",
        "hTeamId",
        "vTeamId",
    ];

    fn row(&self) -> Vec<String> {
        vec![
            self.game_id.clone(),
            self.season_id.to_string(),
            self.game_date.clone(),
            self.season_stage_id.clone(),
            self.league_name.clone(),
            self.start_time_eastern.clone(),
            self.start_time_utc.clone(),
            self.end_time_utc.clone(),
            self.start_date_eastern.clone(),
            self.nugget.clone(),
            self.attendance.to_string(),
            self.h_team_id.clone(),
            self.v_team_id.clone(),
        ]
    }
}
