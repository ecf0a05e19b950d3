//! CLI module
//!
//! This module defines the command-line interface using clap and implements
//! the command execution logic.

use crate::{Config, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

pub mod commands;
pub mod output;

/// LTS Model Visualizer CLI
#[derive(Parser, Debug)]
#[command(name = "lts-model-viz")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true, env = "LTS_MODEL_VIZ_CONFIG")]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Reconstruct a solution snapshot and print the model
    Analyze {
        /// Solution dump file (JSON)
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Solution source
        #[arg(short, long, value_enum, default_value = "file")]
        source: SolutionSource,

        /// Which solution to reconstruct (0 = first, n = nth "next solution")
        #[arg(short = 'n', long, default_value = "0")]
        solution: usize,

        /// Output format (defaults to the configured one)
        #[arg(short, long, value_enum)]
        output: Option<OutputFormat>,
    },

    /// Write DOT files for the model, its executions, and its traces
    Export {
        /// Solution dump file (JSON)
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Solution source
        #[arg(short, long, value_enum, default_value = "file")]
        source: SolutionSource,

        /// Which solution to reconstruct
        #[arg(short = 'n', long, default_value = "0")]
        solution: usize,

        /// Target directory (defaults to a timestamped directory under the
        /// configured export directory)
        #[arg(short, long)]
        dir: Option<PathBuf>,
    },
}

/// Solution source types
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SolutionSource {
    /// JSON dump produced by a solver run
    File,
    /// Built-in sample instance
    Mock,
}

/// Output format types
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Plain text tables
    Table,
    /// JSON output
    Json,
    /// DOT format (Graphviz)
    Dot,
}

/// Execute the CLI command
pub fn execute(args: Cli, config: Config) -> Result<()> {
    let result = match args.command {
        Commands::Analyze { .. } => commands::analyze::execute(args, config),
        Commands::Export { .. } => commands::export::execute(args, config),
    };

    // Unsatisfiable is an answer, not a failure; report it as such.
    match result {
        Err(error) if error.is_no_solution() => {
            println!("{error}!");
            Ok(())
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::try_parse_from([
            "lts-model-viz",
            "analyze",
            "--file",
            "solution.json",
            "--output",
            "table",
        ]);

        assert!(cli.is_ok());
    }

    #[test]
    fn test_cli_parsing_mock_source() {
        let cli = Cli::try_parse_from(["lts-model-viz", "analyze", "--source", "mock"]).unwrap();
        match cli.command {
            Commands::Analyze {
                source, solution, ..
            } => {
                assert_eq!(source, SolutionSource::Mock);
                assert_eq!(solution, 0);
            }
            _ => panic!("expected analyze command"),
        }
    }
}
