use serde::Serialize;

use super::Record;

/// A franchise as listed for one season.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamRecord {
    pub team_id: String,
    pub season_id: i32,
    pub full_name: String,
    pub tricode: String,
    pub nickname: String,
    pub team_short_name: String,
    pub city: String,
    pub alt_city_name: String,
    pub is_all_star: bool,
    pub conf_name: String,
    pub div_name: String,
}

impl Record for TeamRecord {
    const KIND: &'static str = "teams";

    const HEADERS: &'static [&'static str] = &[
        "teamId",
        "seasonId",
        "fullName",
        "tricode",
        "nickname",
        "teamShortName",
        "city",
        "altCityName",
        "isAllStar",
        "confName",
        "divName",
    ];

    fn row(&self) -> Vec<String> {
        vec![
            self.team_id.clone(),
            self.season_id.to_string(),
            self.full_name.clone(),
            self.tricode.clone(),
            self.nickname.clone(),
            self.team_short_name.clone(),
            self.city.clone(),
            self.alt_city_name.clone(),
            self.is_all_star.to_string(),
            self.conf_name.clone(),
            self.div_name.clone(),
        ]
    }
}
