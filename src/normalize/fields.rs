//! Upstream field allowlists per endpoint.

pub const SCHEDULE: &[&str] = &[
    "gameId",
    "seasonStageId",
    "startTimeUTC",
    "startDateEastern",
    "nugget",
    "hTeam",
    "vTeam",
];

pub const SCOREBOARD: &[&str] = &[
    "seasonStageId",
    "seasonYear",
    "leagueName",
    "gameId",
    "startTimeEastern",
    "startTimeUTC",
    "endTimeUTC",
    "startDateEastern",
    "nugget",
    "attendance",
    "vTeam",
    "hTeam",
];

pub const TEAMS: &[&str] = &[
    "isNBAFranchise",
    "isAllStar",
    "city",
    "altCityName",
    "fullName",
    "tricode",
    "teamId",
    "nickname",
    "teamShortName",
    "confName",
    "divName",
];

pub const BOXSCORE: &[&str] = &[
    "personId",
    "teamId",
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

pub const PLAYERS: &[&str] = &[
    "firstName",
    "lastName",
    "temporaryDisplayName",
    "personId",
    "teamId",
    "pos",
    "heightFeet",
    "heightInches",
    "heightMeters",
    "weightPounds",
    "weightKilograms",
    "dateOfBirthUTC",
    "nbaDebutYear",
    "yearsPro",
    "collegeName",
];
