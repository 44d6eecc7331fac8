use serde::Serialize;

use super::Record;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleRecord {
    pub season_id: i32,
    pub game_id: String,
    pub season_stage_id: String,
    #[serde(rename = "startTimeUTC")]
    pub start_time_utc: String,
    pub start_date_eastern: String,
    pub nugget: String,
    pub h_team_id: String,
    pub v_team_id: String,
}

impl Record for ScheduleRecord {
    const KIND: &'static str = "schedule";

    const HEADERS: &'static [&'static str] = &[
        "seasonId",
        "gameId",
        "seasonStageId",
        "startTimeUTC",
        "startDateEastern",
        "nugget",
        "hTeamId",
        "vTeamId",
    ];

    fn row(&self) -> Vec<String> {
        vec![
            self.season_id.to_string(),
            self.game_id.clone(),
            self.season_stage_id.clone(),
            self.start_time_utc.clone(),
            self.start_date_eastern.clone(),
            self.nugget.clone(),
            self.h_team_id.clone(),
            self.v_team_id.clone(),
        ]
    }
}
