use serde::Serialize;

use super::Record;

/// A player's roster entry for one season.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerSeasonRecord {
    pub player_season_id: String,
    pub person_id: String,
    pub team_id: String,
    pub season_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub temporary_display_name: String,
    pub height_feet: i32,
    pub height_inches: i32,
    pub height_meters: f64,
    pub weight_pounds: i32,
    pub weight_kilograms: f64,
    pub pos: String,
    pub nba_debut_year: i32,
    pub college_name: String,
    pub years_pro: i32,
    #[serde(rename = "dateOfBirthUTC")]
    pub date_of_birth_utc: String,
}

impl Record for PlayerSeasonRecord {
    const KIND: &'static str = "players";

    const HEADERS: &'static [&'static str] = &[
        "playerSeasonId",
        "personId",
        "teamId",
        "seasonId",
        "firstName",
        "lastName",
        "temporaryDisplayName",
        "heightFeet",
        "heightInches",
        "heightMeters",
        "weightPounds",
        "weightKilograms",
        "pos",
        "nbaDebutYear",
        "collegeName",
        "yearsPro",
        "dateOfBirthUTC",
    ];

    fn row(&self) -> Vec<String> {
        vec![
            self.player_season_id.clone(),
            self.person_id.clone(),
            self.team_id.clone(),
            self.season_id.to_string(),
            self.first_name.clone(),
            self.last_name.clone(),
            self.temporary_display_name.clone(),
            self.height_feet.to_string(),
            self.height_inches.to_string(),
            self.height_meters.to_string(),
            self.weight_pounds.to_string(),
            self.weight_kilograms.to_string(),
            self.pos.clone(),
            self.nba_debut_year.to_string(),
            self.college_name.clone(),
            self.years_pro.to_string(),
            self.date_of_birth_utc.clone(),
        ]
    }
}
