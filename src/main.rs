mod catalog;
mod cli;
mod input;
mod progress;
mod setup;
mod summary;
mod ui;
mod wizard;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::generate;
use cli::{Cli, Command};
use std::io;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    let log_level = match cli.verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };

    env_logger::Builder::new()
        .filter_level(if cli.quiet {
            log::LevelFilter::Error
        } else {
            log_level
        })
        .format_timestamp(None)
        .init();

    match cli.command {
        Some(Command::List) => {
            setup::list();
            Ok(())
        }
        Some(Command::Completions { shell }) => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "macsetup", &mut io::stdout());
            Ok(())
        }
        None => {
            let code = setup::run(cli.yes)?;
            if code != 0 {
                std::process::exit(code);
            }
            Ok(())
        }
    }
}
