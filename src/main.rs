use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use photofeed::app::AppContext;
use photofeed::cli::{commands, Cli, Commands};
use photofeed::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    let ctx = AppContext::new(config)?;

    match cli.command {
        Commands::Search {
            query,
            details,
            json,
            open,
        } => {
            commands::search(&ctx, &query, details, json, open).await?;
        }
        Commands::Browse => {
            commands::browse(&ctx).await?;
        }
        Commands::Config => {
            commands::show_config(&ctx)?;
        }
    }

    Ok(())
}
