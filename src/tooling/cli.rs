//! CLI Tooling
//!
//! Command-line interface for the sports agent data store. `run` executes one
//! command line, `shell` reads command lines from stdin, and `show` prints the
//! stored records. Mutating entry points save the model on the way out.

use crate::command::{parse_command, Command, CommandKind, CommandResult};
use crate::config::AppConfig;
use crate::error::{ApiError, StorageError};
use crate::model::ModelStore;
use crate::storage::{load_model, JsonModelStorage, ModelStorage};
use clap::{Parser, Subcommand, ValueEnum};
use std::io::{BufRead, Write};
use std::path::PathBuf;
use tracing::{debug, info, warn};

use super::format::{
    format_athletes_table, format_contracts_table, format_model_json, format_model_text,
    format_organizations_table,
};

const WELCOME: &str = "Welcome to sportsdesk! Type help to see every command.";

/// Sportsdesk CLI - manage athletes, organizations and contracts
#[derive(Parser)]
#[command(name = "sportsdesk")]
#[command(about = "Manage athletes, organizations and the contracts between them")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Directory holding athletes.json, organizations.json and contracts.json
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Configuration file path (overrides ./sportsdesk.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long, global = true)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file, file+stderr, both)
    #[arg(long, global = true)]
    pub log_output: Option<String>,

    /// Log file path (if output includes "file")
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Fold command-line overrides into a loaded configuration.
    pub fn apply_overrides(&self, config: &mut AppConfig) {
        if let Some(dir) = &self.data_dir {
            config.storage.data_dir = Some(dir.clone());
        }
        if let Some(level) = &self.log_level {
            config.logging.level = level.clone();
        }
        if let Some(format) = &self.log_format {
            config.logging.format = format.clone();
        }
        if let Some(output) = &self.log_output {
            config.logging.output = output.clone();
        }
        if let Some(file) = &self.log_file {
            config.logging.file = Some(file.clone());
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Execute a single command line, e.g. `run add-o o/Inter Miami p/98765432 e/ops@im.com`
    Run {
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        input: Vec<String>,
    },
    /// Read command lines from stdin until `exit` or end of input
    Shell,
    /// Print stored records
    Show {
        #[arg(value_enum, default_value_t = ShowTarget::All)]
        target: ShowTarget,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
}

/// Which collections `show` prints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ShowTarget {
    Athletes,
    Organizations,
    Contracts,
    All,
}

/// CLI context: the loaded model plus the storage it is saved back to.
pub struct CliContext {
    storage: Box<dyn ModelStorage>,
    store: ModelStore,
}

impl CliContext {
    /// Load the model from the configured data directory.
    pub fn new(config: &AppConfig) -> Self {
        let data_dir = config.storage.resolve_data_dir();
        debug!(data_dir = %data_dir.display(), "Using data directory");
        Self::with_storage(Box::new(JsonModelStorage::new(data_dir)))
    }

    pub fn with_storage(storage: Box<dyn ModelStorage>) -> Self {
        let store = load_model(storage.as_ref());
        Self { storage, store }
    }

    pub fn store(&self) -> &ModelStore {
        &self.store
    }

    /// Parse and run one command line against the model.
    ///
    /// Parse and command errors come back as recoverable [`ApiError`]s; the
    /// model is unchanged when either occurs.
    pub fn execute_line(&mut self, line: &str) -> Result<CommandResult, ApiError> {
        let command = parse_command(line).map_err(|e| {
            debug!(error = %e, "Command rejected by parser");
            e
        })?;
        self.run_command(&command)
    }

    fn run_command(&mut self, command: &Command) -> Result<CommandResult, ApiError> {
        match command.execute(&mut self.store) {
            Ok(result) => {
                info!(command = command.word(), "Command executed");
                Ok(result)
            }
            Err(e) => {
                info!(command = command.word(), error = %e, "Command failed");
                Err(e.into())
            }
        }
    }

    /// Write the current collections back to storage.
    pub fn save(&self) -> Result<(), ApiError> {
        self.storage.save(&self.store.snapshot())?;
        Ok(())
    }

    /// Interactive loop: one command per line, feedback after each.
    ///
    /// Blank lines are skipped. Bytes that are not UTF-8 are replaced rather
    /// than rejected. Recoverable errors are printed and the loop continues;
    /// `exit` or end of input stops it. Saving is left to the caller, see
    /// [`CliContext::shell_with`].
    pub fn run_shell<R: BufRead, W: Write>(
        &mut self,
        mut input: R,
        mut output: W,
    ) -> Result<(), ApiError> {
        writeln!(output, "{}", WELCOME).map_err(io_error)?;
        let mut buffer = Vec::new();
        loop {
            buffer.clear();
            if input.read_until(b'\n', &mut buffer).map_err(io_error)? == 0 {
                break;
            }
            let line = String::from_utf8_lossy(&buffer);
            if line.trim().is_empty() {
                continue;
            }
            let outcome = parse_command(&line)
                .map_err(ApiError::from)
                .and_then(|command| {
                    let result = self.run_command(&command)?;
                    Ok((command.kind(), result))
                });
            match outcome {
                Ok((kind, result)) => {
                    writeln!(output, "{}", result.feedback).map_err(io_error)?;
                    if let Some(view) = self.render_views(kind) {
                        write!(output, "{}", view).map_err(io_error)?;
                    }
                    if result.exit {
                        break;
                    }
                }
                Err(e) if e.is_recoverable() => {
                    writeln!(output, "{}", e).map_err(io_error)?;
                }
                Err(e) => return Err(e),
            }
        }
        Ok(())
    }

    /// Run the command loop, then save. The save happens even when the loop
    /// stops on an I/O error; that error is returned afterwards.
    pub fn shell_with<R: BufRead, W: Write>(&mut self, input: R, output: W) -> Result<(), ApiError> {
        let outcome = self.run_shell(input, output);
        if let Err(e) = &outcome {
            warn!(error = %e, "Shell stopped early, saving session");
        }
        let saved = self.save();
        outcome.and(saved)
    }

    /// Filtered views a command changed, rendered for display.
    fn render_views(&self, kind: CommandKind) -> Option<String> {
        let store = &self.store;
        match kind {
            CommandKind::FindAthlete => Some(format_athletes_table(store.filtered_athletes())),
            CommandKind::FindOrganization => {
                Some(format_organizations_table(store.filtered_organizations()))
            }
            CommandKind::FindContract => {
                Some(format_contracts_table(store, store.filtered_contracts()))
            }
            CommandKind::List => Some(
                [
                    format_athletes_table(store.filtered_athletes()),
                    format_organizations_table(store.filtered_organizations()),
                    format_contracts_table(store, store.filtered_contracts()),
                ]
                .join("\n"),
            ),
            _ => None,
        }
    }

    /// Execute a CLI subcommand and return the text to print.
    pub fn execute(&mut self, command: &Commands) -> Result<String, ApiError> {
        match command {
            Commands::Run { input } => {
                let line = input.join(" ");
                let feedback = match self.execute_line(&line) {
                    Ok(result) => result.feedback,
                    Err(e) if e.is_recoverable() => e.to_string(),
                    Err(e) => return Err(e),
                };
                self.save()?;
                Ok(feedback)
            }
            Commands::Shell => {
                let stdin = std::io::stdin();
                self.shell_with(stdin.lock(), std::io::stdout())?;
                Ok(String::new())
            }
            Commands::Show { target, format } => match format.as_str() {
                "json" => format_model_json(&self.store, *target),
                "text" => Ok(format_model_text(&self.store, *target)),
                other => Err(ApiError::ConfigError(format!(
                    "Invalid output format: {} (must be 'text' or 'json')",
                    other
                ))),
            },
        }
    }
}

fn io_error(e: std::io::Error) -> ApiError {
    ApiError::StorageError(StorageError::IoError(e))
}
