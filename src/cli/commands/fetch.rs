//! Single-feed fetch command handlers

use anyhow::Context as _;

use super::Context;
use crate::domain::{GameDate, GameId, Season};

pub async fn cmd_schedule(ctx: &Context, season: Season) -> anyhow::Result<()> {
    let records = ctx
        .stats
        .fetch_schedule(season)
        .await
        .with_context(|| format!("Failed to fetch {season} schedule"))?;
    ctx.emit(&season.to_string(), &records).await
}

pub async fn cmd_scoreboard(ctx: &Context, date: GameDate) -> anyhow::Result<()> {
    let records = ctx
        .stats
        .fetch_scoreboard(date)
        .await
        .with_context(|| format!("Failed to fetch scoreboard for {date}"))?;
    ctx.emit(&date.to_string(), &records).await
}

pub async fn cmd_boxscore(ctx: &Context, date: GameDate, game_id: &GameId) -> anyhow::Result<()> {
    let records = ctx
        .stats
        .fetch_boxscore(date, game_id)
        .await
        .with_context(|| format!("Failed to fetch box score for game {game_id}"))?;
    ctx.emit(&format!("{date}_{game_id}"), &records).await
}

pub async fn cmd_players(ctx: &Context, season: Season) -> anyhow::Result<()> {
    let records = ctx
        .stats
        .fetch_players(season)
        .await
        .with_context(|| format!("Failed to fetch {season} players"))?;
    ctx.emit(&season.to_string(), &records).await
}

pub async fn cmd_teams(ctx: &Context, season: Season) -> anyhow::Result<()> {
    let records = ctx
        .stats
        .fetch_teams(season)
        .await
        .with_context(|| format!("Failed to fetch {season} teams"))?;
    ctx.emit(&season.to_string(), &records).await
}
