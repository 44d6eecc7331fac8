use serde::Serialize;

use super::Record;

/// One player's line in a single game.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoxscoreRecord {
    pub boxscore_id: String,
    pub game_id: String,
    pub person_id: String,
    pub team_id: String,
    pub game_date: String,
    pub points: i32,
    pub pos: String,
    pub min: String,
    pub fgm: i32,
    pub fga: i32,
    pub fgp: f64,
    pub ftm: i32,
    pub fta: i32,
    pub ftp: f64,
    pub tpm: i32,
    pub tpa: i32,
    pub tpp: f64,
    pub off_reb: i32,
    pub def_reb: i32,
    pub tot_reb: i32,
    pub assists: i32,
    pub p_fouls: i32,
    pub steals: i32,
    pub turnovers: i32,
    pub blocks: i32,
    pub plus_minus: i32,
    pub dnp: String,
}

impl Record for BoxscoreRecord {
    const KIND: &'static str = "boxscore";

    const HEADERS: &'static [&'static str] = &[
        "boxscoreId",
        "gameId",
        "personId",
        "teamId",
        "gameDate",
        "points",
        "pos",
        "min",
        "fgm",
        "fga",
        "fgp",
        "ftm",
        "fta",
        "ftp",
        "tpm",
        "tpa",
        "tpp",
        "offReb",
        "defReb",
        "totReb",
        "assists",
        "pFouls",
        "steals",
        "turnovers",
        "blocks",
        "plusMinus",
        "dnp",
    ];

    fn row(&self) -> Vec<String> {
        vec![
            self.boxscore_id.clone(),
            self.game_id.clone(),
            self.person_id.clone(),
            self.team_id.clone(),
            self.game_date.clone(),
            self.points.to_string(),
            self.pos.clone(),
            self.min.clone(),
            self.fgm.to_string(),
            self.fga.to_string(),
            self.fgp.to_string(),
            self.ftm.to_string(),
            self.fta.to_string(),
            self.ftp.to_string(),
            self.tpm.to_string(),
            self.tpa.to_string(),
            self.tpp.to_string(),
            self.off_reb.to_string(),
            self.def_reb.to_string(),
            self.tot_reb.to_string(),
            self.assists.to_string(),
            self.p_fouls.to_string(),
            self.steals.to_string(),
            self.turnovers.to_string(),
            self.blocks.to_string(),
            self.plus_minus.to_string(),
            self.dnp.clone(),
        ]
    }
}
