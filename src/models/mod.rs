//! Flat, typed records produced by the normalization pipeline.

pub mod boxscore;
pub mod player;
pub mod schedule;
pub mod scoreboard;
pub mod team;

pub use boxscore::BoxscoreRecord;
pub use player::PlayerSeasonRecord;
pub use schedule::ScheduleRecord;
pub use scoreboard::ScoreboardRecord;
pub use team::TeamRecord;

/// A record with a fixed, ordered column set.
///
/// `row()` must return exactly one cell per entry in `HEADERS`, in the same
/// order.
pub trait Record {
    /// Entity kind, used in object names (`{partition}_{KIND}_data.csv`).
    const KIND: &'static str;

    const HEADERS: &'static [&'static str];

    fn row(&self) -> Vec<String>;
}
