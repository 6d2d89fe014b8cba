//! CLI argument parsing
//!
//! Uses clap for argument parsing with derive macros.

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use std::io;
use std::path::PathBuf;

/// Terminal watchlist for tracking TV series
#[derive(Parser, Debug)]
#[command(name = "watchboard")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "RUST_LOG", default_value = "info", global = true)]
    pub log_level: String,

    /// Watchlist file (default: $XDG_DATA_HOME/watchboard/series.json)
    #[arg(short = 'f', long, env = "WATCHBOARD_DATA", global = true)]
    pub data_file: Option<PathBuf>,

    /// Config file (default: $XDG_CONFIG_HOME/watchboard/config.toml)
    #[arg(short = 'c', long, env = "WATCHBOARD_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Seconds between autoload reloads (overrides config file)
    #[arg(short = 'a', long, global = true)]
    pub autoload_interval: Option<u64>,

    /// Tick rate in ticks per second (default: 1.0)
    #[arg(short = 't', long, default_value_t = 1.0, global = true)]
    pub tick_rate: f64,

    /// Frame rate in frames per second (default: 30.0)
    #[arg(short = 'F', long, default_value_t = 30.0, global = true)]
    pub frame_rate: f64,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Print shell completions to stdout
pub fn print_completions(shell: Shell) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
}
