mod cli;
mod commands;

use clap::Parser;

use thaid::config::Config;
use thaid::logger::Logger;

use cli::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let logger = Logger::new(cli.verbose);
    let config = Config::load_or_default(cli.config.as_deref(), &logger)?;
    let json = cli.json || config.json;

    match cli.command {
        Commands::Generate {
            count,
            formatted,
            first_digit,
            seed,
        } => commands::run_generate(count, formatted, first_digit, seed, &config, json, &logger),
        Commands::Validate { ids, file } => {
            commands::run_validate(ids, file.as_deref(), json, &logger)
        }
        Commands::Format { id } => commands::run_format(&id, json),
    }
}
