use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;
use url::Url;

use crate::config::ApiConfig;
use crate::domain::{GameDate, GameId, Season};
use crate::normalize::fields;

pub const DEFAULT_BASE_URL: &str = "http://data.nba.net/data/10s/";

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("HTTP {status} from {url}: {body}")]
    Status {
        status: reqwest::StatusCode,
        url: String,
        body: String,
    },

    #[error("Invalid JSON body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Fetches a URL and parses the body as JSON.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get_json(&self, url: &Url) -> Result<Value, TransportError>;
}

/// Upstream endpoints, one variant per response shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    Schedule(Season),
    Scoreboard(GameDate),
    Boxscore(GameDate, GameId),
    Players(Season),
    Teams(Season),
}

impl Endpoint {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Schedule(_) => "schedule",
            Self::Scoreboard(_) => "scoreboard",
            Self::Boxscore(..) => "boxscore",
            Self::Players(_) => "players",
            Self::Teams(_) => "teams",
        }
    }

    /// Path relative to the API base URL.
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Self::Schedule(season) => format!("prod/v1/{season}/schedule.json"),
            Self::Scoreboard(date) => format!("prod/v2/{date}/scoreboard.json"),
            Self::Boxscore(date, game_id) => format!("prod/v1/{date}/{game_id}_boxscore.json"),
            Self::Players(season) => format!("prod/v1/{season}/players.json"),
            Self::Teams(season) => format!("prod/v2/{season}/teams.json"),
        }
    }

    /// JSON pointer to the row array in a well-formed response.
    #[must_use]
    pub const fn pointer(&self) -> &'static str {
        match self {
            Self::Schedule(_) | Self::Players(_) | Self::Teams(_) => "/league/standard",
            Self::Scoreboard(_) => "/games",
            Self::Boxscore(..) => "/stats/activePlayers",
        }
    }

    /// Key searched for when the fixed pointer does not resolve.
    #[must_use]
    pub const fn key(&self) -> &'static str {
        match self {
            Self::Schedule(_) | Self::Players(_) | Self::Teams(_) => "standard",
            Self::Scoreboard(_) => "games",
            Self::Boxscore(..) => "activePlayers",
        }
    }

    #[must_use]
    pub const fn fields(&self) -> &'static [&'static str] {
        match self {
            Self::Schedule(_) => fields::SCHEDULE,
            Self::Scoreboard(_) => fields::SCOREBOARD,
            Self::Boxscore(..) => fields::BOXSCORE,
            Self::Players(_) => fields::PLAYERS,
            Self::Teams(_) => fields::TEAMS,
        }
    }

    pub fn url(&self, base: &Url) -> Result<Url, url::ParseError> {
        base.join(&self.path())
    }
}

/// reqwest-backed [`Transport`] for the public stats feed.
#[derive(Clone)]
pub struct NbaClient {
    client: Client,
}

impl NbaClient {
    pub fn new(config: &ApiConfig) -> Result<Self, TransportError> {
        let client = Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(Duration::from_secs(config.request_timeout_seconds))
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for NbaClient {
    async fn get_json(&self, url: &Url) -> Result<Value, TransportError> {
        debug!("GET {}", url);
        let response = self.client.get(url.clone()).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(TransportError::Status {
                status,
                url: url.to_string(),
                body,
            });
        }

        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}
