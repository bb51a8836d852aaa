//! Sportsdesk CLI Binary
//!
//! Command-line interface for the sports agent data store.

use clap::Parser;
use sportsdesk::config::ConfigLoader;
use sportsdesk::logging::init_logging;
use sportsdesk::tooling::cli::{Cli, CliContext};
use std::process;

fn main() {
    let cli = Cli::parse();

    let loaded = match &cli.config {
        Some(path) => ConfigLoader::load_from_file(path),
        None => std::env::current_dir()
            .map_err(|e| config::ConfigError::Message(e.to_string()))
            .and_then(|dir| ConfigLoader::load(&dir)),
    };
    let mut config = match loaded {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error loading configuration: {}", e);
            process::exit(1);
        }
    };
    cli.apply_overrides(&mut config);

    if let Err(e) = init_logging(Some(&config.logging)) {
        eprintln!("Error initializing logging: {}", e);
        process::exit(1);
    }

    let mut context = CliContext::new(&config);

    match context.execute(&cli.command) {
        Ok(output) => {
            if !output.is_empty() {
                println!("{}", output);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
