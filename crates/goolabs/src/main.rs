mod cli;
mod commands;
mod display;
mod translator;

use clap::Parser;
use cli::{Cli, Commands};
use commands::analyze::Output;
use goolabs_core::LoggingConfig;
use tracing_subscriber::EnvFilter;

/// Logs go to stderr, and only when switched on
fn init_logging(config: &LoggingConfig) {
    if !config.enabled {
        return;
    }
    let filter = EnvFilter::try_new(&config.level).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    init_logging(&LoggingConfig::from_env());

    let cli = Cli::parse();

    match cli.command {
        Commands::Version => commands::version::run(),
        Commands::History { stats, limit } => commands::history::run(stats, limit),
        command => {
            let output = Output::new(cli.json, &cli.lang, cli.translations.as_deref())?;
            let service = commands::analyze::connect()?;
            println!("{}", commands::analyze::run(&service, &output, command)?);
            Ok(())
        }
    }
}
