use clap::Parser;
use pebble_series::cli::{Cli, Commands};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pebble_series=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Init { path, name }) => {
            pebble_series::cli::init::run(&path, name)?;
        }
        Some(Commands::Series { slug, page }) => {
            pebble_series::cli::series::run(&cli.config, slug, page)?;
        }
        Some(Commands::Verify) => {
            pebble_series::cli::verify::run(&cli.config)?;
        }
        Some(Commands::Build { output, base_url }) => {
            pebble_series::cli::build::run(&cli.config, &output, base_url)?;
        }
        None => {
            use clap::CommandFactory;
            Cli::command().print_help()?;
        }
    }

    Ok(())
}
