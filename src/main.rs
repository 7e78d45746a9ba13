//! colorexpansi - CLI entry point

mod commands;

use anyhow::Result;
use clap::{CommandFactory, Parser};

use colorexpansi::cli::{Cli, Commands, ConfigCommands};
use colorexpansi::logging::verbose_level;
use colorexpansi::{init_logging, Config};

#[cfg(not(tarpaulin_include))]
fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;

    let mut logging = config.logging.clone();
    if cli.verbose {
        logging.level = verbose_level(&logging.level);
    }
    init_logging(&logging, config.formatter())?;

    match cli.command {
        Commands::Render {
            template,
            fields,
            separator,
        } => commands::render::handle(&config, &template, &fields, separator),
        Commands::Sequence { spec, show } => commands::sequence::handle(&spec, show),
        Commands::Idents => commands::idents::handle(),
        Commands::Config(cmd) => match cmd {
            ConfigCommands::Show => commands::config::handle_show(&config),
            ConfigCommands::Path => commands::config::handle_path(),
        },
        Commands::Completions { shell } => {
            commands::completions::generate_completions(Cli::command(), shell)
        }
    }
}
