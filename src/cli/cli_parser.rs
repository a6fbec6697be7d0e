use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "blobs-config")]
#[command(about = "Load and inspect the blobs server configuration files")]
pub struct Cli {
    /// Main server config file (JSON object with "port")
    #[arg(short, long, default_value = "configs/config.json")]
    pub config: PathBuf,

    /// Database config file (JSON object owned by the storage layer)
    #[arg(short, long, default_value = "configs/database.json")]
    pub database: PathBuf,

    /// Log at debug level
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Load both files and report whether they parse
    #[command(name = "check")]
    Check,

    /// Load both files and print the result as JSON
    #[command(name = "show")]
    Show,
}

impl Cli {
    pub fn selected_command(&self) -> Command {
        self.command.unwrap_or(Command::Check)
    }
}

pub fn parse_args() -> Cli {
    Cli::parse()
}
