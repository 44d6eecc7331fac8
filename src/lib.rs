pub mod cli;
pub mod clients;
pub mod config;
pub mod domain;
pub mod models;
pub mod normalize;
pub mod services;
pub mod storage;

use clap::Parser;
use cli::{Cli, Commands, Context};
pub use config::Config;
use tracing::info;
use tracing_subscriber::EnvFilter;

pub async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config_path = Config::resolve_path(cli.config.as_deref());
    let config = Config::load(config_path.as_deref())?;
    init_logging(&config);

    match &config_path {
        Some(path) => info!("Loaded config from: {}", path.display()),
        None => info!("No config file found, using defaults"),
    }

    if let Commands::Init = cli.command {
        return cli::cmd_init(cli.config.as_deref());
    }

    config.validate()?;
    info!("Using API at {}", config.api.base_url);

    let ctx = Context::from_config(&config, cli.stdout)?;

    match cli.command {
        Commands::Schedule { season } => cli::cmd_schedule(&ctx, season).await,
        Commands::Scoreboard { date } => cli::cmd_scoreboard(&ctx, date).await,
        Commands::Boxscore { date, game_id } => cli::cmd_boxscore(&ctx, date, &game_id).await,
        Commands::Players { season } => cli::cmd_players(&ctx, season).await,
        Commands::Teams { season } => cli::cmd_teams(&ctx, season).await,
        Commands::Daily { date } => cli::cmd_daily(&ctx, date).await,
        Commands::Init => Ok(()),
    }
}

fn init_logging(config: &Config) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.general.log_level));

    // Logs go to stderr so `--stdout` output stays clean CSV.
    let registry = tracing_subscriber::registry().with(env_filter);

    if config.general.log_json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}
