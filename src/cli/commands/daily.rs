//! Daily box score job: every game of one date into a single file

use anyhow::Context as _;
use tracing::{info, warn};

use super::Context;
use crate::domain::GameDate;

pub async fn cmd_daily(ctx: &Context, date: Option<GameDate>) -> anyhow::Result<()> {
    let date = date.unwrap_or_else(GameDate::yesterday);
    info!("Running daily box score export for {}", date);

    let records = ctx
        .stats
        .fetch_daily_boxscores(date)
        .await
        .with_context(|| format!("Failed to fetch box scores for {date}"))?;

    if records.is_empty() {
        warn!("No box scores found for {}", date);
    }

    ctx.emit(&date.to_string(), &records).await
}
