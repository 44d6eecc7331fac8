//! Fetch pipeline: transport → row location → projection → normalization.

use serde_json::{Map, Value};
use thiserror::Error;
use tracing::{debug, info, warn};
use url::Url;

use crate::clients::nba::{Endpoint, Transport, TransportError};
use crate::domain::{GameDate, GameId, Season};
use crate::models::{
    BoxscoreRecord, PlayerSeasonRecord, ScheduleRecord, ScoreboardRecord, TeamRecord,
};
use crate::normalize::{self, UnassignedPlayers, extract, project};

#[derive(Debug, Error)]
pub enum FetchError {
    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error("Invalid endpoint URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Malformed {endpoint} response: {reason}")]
    MalformedResponse {
        endpoint: &'static str,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PipelineOptions {
    pub unassigned_players: UnassignedPlayers,
}

/// Stateless fetchers, one per entity. Each call issues exactly one request.
pub struct StatsService<T> {
    transport: T,
    base_url: Url,
    options: PipelineOptions,
}

impl<T: Transport> StatsService<T> {
    pub fn new(transport: T, base_url: &str, options: PipelineOptions) -> Result<Self, FetchError> {
        // Url::join drops the last segment unless the base ends with '/'.
        let base_url = if base_url.ends_with('/') {
            Url::parse(base_url)?
        } else {
            Url::parse(&format!("{base_url}/"))?
        };

        Ok(Self {
            transport,
            base_url,
            options,
        })
    }

    #[must_use]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub async fn fetch_schedule(&self, season: Season) -> Result<Vec<ScheduleRecord>, FetchError> {
        let rows = self.rows(&Endpoint::Schedule(season)).await?;
        Ok(rows
            .iter()
            .map(|row| normalize::schedule(row, season))
            .collect())
    }

    pub async fn fetch_scoreboard(
        &self,
        game_date: GameDate,
    ) -> Result<Vec<ScoreboardRecord>, FetchError> {
        let rows = self.rows(&Endpoint::Scoreboard(game_date)).await?;
        Ok(rows
            .iter()
            .map(|row| normalize::scoreboard(row, game_date))
            .collect())
    }

    pub async fn fetch_boxscore(
        &self,
        game_date: GameDate,
        game_id: &GameId,
    ) -> Result<Vec<BoxscoreRecord>, FetchError> {
        let rows = self
            .rows(&Endpoint::Boxscore(game_date, game_id.clone()))
            .await?;
        Ok(rows
            .iter()
            .map(|row| normalize::boxscore(row, game_date, game_id))
            .collect())
    }

    pub async fn fetch_players(&self, season: Season) -> Result<Vec<PlayerSeasonRecord>, FetchError> {
        let rows = self.rows(&Endpoint::Players(season)).await?;
        let records: Vec<_> = rows
            .iter()
            .filter_map(|row| {
                normalize::player_season(row, season, self.options.unassigned_players)
            })
            .collect();

        if records.len() < rows.len() {
            debug!(
                "Skipped {} players without a team assignment",
                rows.len() - records.len()
            );
        }
        Ok(records)
    }

    pub async fn fetch_teams(&self, season: Season) -> Result<Vec<TeamRecord>, FetchError> {
        let rows = self.rows(&Endpoint::Teams(season)).await?;
        Ok(rows
            .iter()
            .filter_map(|row| normalize::team(row, season))
            .collect())
    }

    /// Ids of the games on a date's scoreboard, in scoreboard order.
    pub async fn game_ids(&self, game_date: GameDate) -> Result<Vec<GameId>, FetchError> {
        let games = self.fetch_scoreboard(game_date).await?;
        Ok(games
            .into_iter()
            .filter_map(|game| match GameId::new(game.game_id) {
                Ok(id) => Some(id),
                Err(e) => {
                    warn!("Skipping scoreboard entry: {}", e);
                    None
                }
            })
            .collect())
    }

    /// Box scores for every game of `game_date`, fetched one game at a time.
    pub async fn fetch_daily_boxscores(
        &self,
        game_date: GameDate,
    ) -> Result<Vec<BoxscoreRecord>, FetchError> {
        let game_ids = self.game_ids(game_date).await?;
        info!("Found {} games on {}", game_ids.len(), game_date);

        let mut records = Vec::new();
        for game_id in &game_ids {
            records.extend(self.fetch_boxscore(game_date, game_id).await?);
        }
        Ok(records)
    }

    async fn rows(&self, endpoint: &Endpoint) -> Result<Vec<Map<String, Value>>, FetchError> {
        let url = endpoint.url(&self.base_url)?;
        let response = self.transport.get_json(&url).await?;

        let rows = locate_rows(&response, endpoint)?;
        let projected: Vec<_> = rows
            .iter()
            .filter_map(|item| match item {
                Value::Object(row) => Some(project(row, endpoint.fields())),
                other => {
                    debug!("Skipping non-object {} row: {}", endpoint.name(), other);
                    None
                }
            })
            .collect();

        info!("Fetched {} {} rows", projected.len(), endpoint.name());
        Ok(projected)
    }
}

/// Finds the row array: fixed pointer first, then the first key match.
///
/// A non-object top level is an error; a missing or non-array match is an
/// empty result.
fn locate_rows<'a>(response: &'a Value, endpoint: &Endpoint) -> Result<&'a [Value], FetchError> {
    if !response.is_object() {
        return Err(FetchError::MalformedResponse {
            endpoint: endpoint.name(),
            reason: format!("expected a JSON object at the top level, got {}", kind(response)),
        });
    }

    let found = response.pointer(endpoint.pointer()).or_else(|| {
        debug!(
            "{} not found in {} response, searching for '{}'",
            endpoint.pointer(),
            endpoint.name(),
            endpoint.key()
        );
        extract(response, endpoint.key()).next()
    });

    match found {
        Some(Value::Array(items)) => Ok(items),
        Some(other) => {
            warn!(
                "'{}' in {} response is {}, not a list",
                endpoint.key(),
                endpoint.name(),
                kind(other)
            );
            Ok(&[])
        }
        None => {
            warn!("No '{}' in {} response", endpoint.key(), endpoint.name());
            Ok(&[])
        }
    }
}

const fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
