//! Domain primitives for the stats pipeline.
//!
//! Newtypes keep seasons, game dates and game ids from being mixed up when
//! they are threaded through endpoint construction and record normalization.

use chrono::{Days, Local, NaiveDate};
use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;
use thiserror::Error;

/// Errors raised when parsing user-supplied context values.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid season: {0} (expected a year such as 2018)")]
    InvalidSeason(String),

    #[error("Invalid game date: {0} (expected YYYYMMDD)")]
    InvalidGameDate(String),

    #[error("Invalid game id: {0} (expected 10 digits)")]
    InvalidGameId(String),
}

/// Season identified by its starting year (the 2018-19 season is `2018`).
///
/// # Examples
///
/// ```rust
/// use courtside::domain::Season;
///
/// let season: Season = "2018".parse().unwrap();
/// assert_eq!(season.value(), 2018);
/// assert_eq!(season.to_string(), "2018");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Season(i32);

impl Season {
    const MIN_YEAR: i32 = 1946;
    const MAX_YEAR: i32 = 9999;

    pub fn new(year: i32) -> Result<Self, DomainError> {
        if (Self::MIN_YEAR..=Self::MAX_YEAR).contains(&year) {
            Ok(Self(year))
        } else {
            Err(DomainError::InvalidSeason(year.to_string()))
        }
    }

    #[must_use]
    pub const fn value(&self) -> i32 {
        self.0
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Season {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let year = s
            .trim()
            .parse::<i32>()
            .map_err(|_| DomainError::InvalidSeason(s.to_string()))?;
        Self::new(year)
    }
}

/// Calendar date of a game, rendered as `YYYYMMDD` in URLs and object names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GameDate(NaiveDate);

impl GameDate {
    const FORMAT: &'static str = "%Y%m%d";

    #[must_use]
    pub const fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// The day before today in local time; the daily job runs on finished games.
    #[must_use]
    pub fn yesterday() -> Self {
        let today = Local::now().date_naive();
        Self(today.checked_sub_days(Days::new(1)).unwrap_or(today))
    }

    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for GameDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(Self::FORMAT))
    }
}

impl FromStr for GameDate {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.len() != 8 || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DomainError::InvalidGameDate(s.to_string()));
        }
        NaiveDate::parse_from_str(trimmed, Self::FORMAT)
            .map(Self)
            .map_err(|_| DomainError::InvalidGameDate(s.to_string()))
    }
}

/// Upstream game identifier, e.g. `0021800001`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GameId(String);

impl GameId {
    pub fn new(id: impl Into<String>) -> Result<Self, DomainError> {
        static RE: OnceLock<Regex> = OnceLock::new();
        let re = RE.get_or_init(|| Regex::new(r"^\d{10}$").expect("Invalid regex"));

        let id = id.into();
        if re.is_match(&id) {
            Ok(Self(id))
        } else {
            Err(DomainError::InvalidGameId(id))
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for GameId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s.trim())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_season_parse() {
        assert_eq!("2018".parse::<Season>().unwrap().value(), 2018);
        assert!("18-19".parse::<Season>().is_err());
        assert!("1900".parse::<Season>().is_err());
    }

    #[test]
    fn test_game_date_round_trip_format() {
        let date: GameDate = "20181016".parse().unwrap();
        assert_eq!(date.to_string(), "20181016");
        assert_eq!(date.date(), NaiveDate::from_ymd_opt(2018, 10, 16).unwrap());
    }

    #[test]
    fn test_game_date_rejects_other_formats() {
        assert!("2018-10-16".parse::<GameDate>().is_err());
        assert!("20181332".parse::<GameDate>().is_err());
        assert!("".parse::<GameDate>().is_err());
    }

    #[test]
    fn test_game_id_validation() {
        assert_eq!(GameId::new("0021800001").unwrap().as_str(), "0021800001");
        assert_eq!(
            GameId::new("21800001"),
            Err(DomainError::InvalidGameId("21800001".to_string()))
        );
        assert!(GameId::new("00218000x1").is_err());
    }
}
