//! One normalizer per entity: projected raw row + call context → record.

use serde_json::{Map, Value};

use super::coerce::{nested_string, to_bool, to_f64, to_i32, to_string};
use super::synthetic_id;
use crate::domain::{GameDate, GameId, Season};
use crate::models::{
    BoxscoreRecord, PlayerSeasonRecord, ScheduleRecord, ScoreboardRecord, TeamRecord,
};

type Row = Map<String, Value>;

/// What to do with player rows that carry no team assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnassignedPlayers {
    #[default]
    Skip,
    Keep,
}

#[must_use]
pub fn boxscore(row: &Row, game_date: GameDate, game_id: &GameId) -> BoxscoreRecord {
    let person_id = to_string(row.get("personId"));

    BoxscoreRecord {
        boxscore_id: synthetic_id(&person_id, game_id.as_str()),
        game_id: game_id.to_string(),
        person_id,
        team_id: to_string(row.get("teamId")),
        game_date: game_date.to_string(),
        points: to_i32(row.get("points")),
        pos: to_string(row.get("pos")),
        min: to_string(row.get("min")),
        fgm: to_i32(row.get("fgm")),
        fga: to_i32(row.get("fga")),
        fgp: to_f64(row.get("fgp")),
        ftm: to_i32(row.get("ftm")),
        fta: to_i32(row.get("fta")),
        ftp: to_f64(row.get("ftp")),
        tpm: to_i32(row.get("tpm")),
        tpa: to_i32(row.get("tpa")),
        tpp: to_f64(row.get("tpp")),
        off_reb: to_i32(row.get("offReb")),
        def_reb: to_i32(row.get("defReb")),
        tot_reb: to_i32(row.get("totReb")),
        assists: to_i32(row.get("assists")),
        p_fouls: to_i32(row.get("pFouls")),
        steals: to_i32(row.get("steals")),
        turnovers: to_i32(row.get("turnovers")),
        blocks: to_i32(row.get("blocks")),
        plus_minus: to_i32(row.get("plusMinus")),
        dnp: to_string(row.get("dnp")),
    }
}

/// Returns `None` for players without a team unless `unassigned` is `Keep`.
#[must_use]
pub fn player_season(
    row: &Row,
    season: Season,
    unassigned: UnassignedPlayers,
) -> Option<PlayerSeasonRecord> {
    let team_id = to_string(row.get("teamId"));
    if team_id.is_empty() && unassigned == UnassignedPlayers::Skip {
        return None;
    }

    let person_id = to_string(row.get("personId"));

    Some(PlayerSeasonRecord {
        player_season_id: synthetic_id(&person_id, &season.to_string()),
        person_id,
        team_id,
        season_id: season.value(),
        first_name: to_string(row.get("firstName")),
        last_name: to_string(row.get("lastName")),
        temporary_display_name: to_string(row.get("temporaryDisplayName")),
        height_feet: to_i32(row.get("heightFeet")),
        height_inches: to_i32(row.get("heightInches")),
        height_meters: to_f64(row.get("heightMeters")),
        weight_pounds: to_i32(row.get("weightPounds")),
        weight_kilograms: to_f64(row.get("weightKilograms")),
        pos: to_string(row.get("pos")),
        nba_debut_year: to_i32(row.get("nbaDebutYear")),
        college_name: to_string(row.get("collegeName")),
        years_pro: to_i32(row.get("yearsPro")),
        date_of_birth_utc: to_string(row.get("dateOfBirthUTC")),
    })
}

#[must_use]
pub fn schedule(row: &Row, season: Season) -> ScheduleRecord {
    ScheduleRecord {
        season_id: season.value(),
        game_id: to_string(row.get("gameId")),
        season_stage_id: to_string(row.get("seasonStageId")),
        start_time_utc: to_string(row.get("startTimeUTC")),
        start_date_eastern: to_string(row.get("startDateEastern")),
        nugget: nested_string(row, "nugget", "text"),
        h_team_id: nested_string(row, "hTeam", "teamId"),
        v_team_id: nested_string(row, "vTeam", "teamId"),
    }
}

/// Returns `None` unless the row is flagged as an NBA franchise.
#[must_use]
pub fn team(row: &Row, season: Season) -> Option<TeamRecord> {
    if !to_bool(row.get("isNBAFranchise")) {
        return None;
    }

    Some(TeamRecord {
        team_id: to_string(row.get("teamId")),
        season_id: season.value(),
        full_name: to_string(row.get("fullName")),
        tricode: to_string(row.get("tricode")),
        nickname: to_string(row.get("nickname")),
        team_short_name: to_string(row.get("teamShortName")),
        city: to_string(row.get("city")),
        alt_city_name: to_string(row.get("altCityName")),
        is_all_star: to_bool(row.get("isAllStar")),
        conf_name: to_string(row.get("confName")),
        div_name: to_string(row.get("divName")),
    })
}

#[must_use]
pub fn scoreboard(row: &Row, game_date: GameDate) -> ScoreboardRecord {
    ScoreboardRecord {
        game_id: to_string(row.get("gameId")),
        season_id: to_i32(row.get("seasonYear")),
        game_date: game_date.to_string(),
        season_stage_id: to_string(row.get("seasonStageId")),
        league_name: to_string(row.get("leagueName")),
        start_time_eastern: to_string(row.get("startTimeEastern")),
        start_time_utc: to_string(row.get("startTimeUTC")),
        end_time_utc: to_string(row.get("endTimeUTC")),
        start_date_eastern: to_string(row.get("startDateEastern")),
        nugget: nested_string(row, "nugget", "text"),
        attendance: to_i32(row.get("attendance")),
        h_team_id: nested_string(row, "hTeam", "teamId"),
        v_team_id: nested_string(row, "vTeam", "teamId"),
    }
}
