mod daily;
mod fetch;
mod init;

pub use daily::cmd_daily;
pub use fetch::{cmd_boxscore, cmd_players, cmd_schedule, cmd_scoreboard, cmd_teams};
pub use init::cmd_init;

use anyhow::Context as _;
use std::io::Write;

use crate::clients::NbaClient;
use crate::config::Config;
use crate::models::Record;
use crate::normalize::UnassignedPlayers;
use crate::services::{ExportService, PipelineOptions, StatsService};
use crate::storage::{self, csv};

enum Output {
    Stdout,
    Store(ExportService),
}

/// Everything a fetch command needs: the pipeline and where results go.
pub struct Context {
    pub stats: StatsService<NbaClient>,
    output: Output,
}

impl Context {
    pub fn from_config(config: &Config, stdout: bool) -> anyhow::Result<Self> {
        let client = NbaClient::new(&config.api).context("Failed to build HTTP client")?;

        let options = PipelineOptions {
            unassigned_players: if config.pipeline.include_unassigned_players {
                UnassignedPlayers::Keep
            } else {
                UnassignedPlayers::Skip
            },
        };
        let stats = StatsService::new(client, &config.api.base_url, options)?;

        let output = if stdout {
            Output::Stdout
        } else {
            let store = storage::from_config(&config.storage)
                .context("Failed to initialize storage")?;
            Output::Store(ExportService::new(store))
        };

        Ok(Self { stats, output })
    }

    pub async fn emit<R: Record>(&self, partition: &str, records: &[R]) -> anyhow::Result<()> {
        match &self.output {
            Output::Stdout => {
                let mut out = std::io::stdout().lock();
                csv::write_records(&mut out, records)?;
                out.flush()?;
            }
            Output::Store(export) => {
                let key = export
                    .export(partition, records)
                    .await
                    .with_context(|| format!("Failed to store {} data", R::KIND))?;
                println!("Stored {} {} records as {}", records.len(), R::KIND, key);
            }
        }
        Ok(())
    }
}
