//! CLI command implementations
//!
//! This module contains the implementation for each CLI command.

use crate::cli::SolutionSource;
use crate::error::Error;
use crate::model::{SolutionModel, import_solution};
use crate::solver::{SolutionInstance, SolutionSet, mock};
use crate::{Config, Result, cli::Cli};
use std::path::PathBuf;

/// Load the requested solution snapshot from the selected source
fn load_instance(
    source: SolutionSource,
    file: Option<&PathBuf>,
    solution: usize,
) -> Result<SolutionInstance> {
    match source {
        SolutionSource::Mock => {
            // The mock source has exactly one satisfying instance
            if solution > 0 {
                return Err(Error::NoMoreSolutions);
            }
            Ok(mock::sample_instance())
        }
        SolutionSource::File => {
            let path = file.ok_or_else(|| {
                Error::config("--file is required when the solution source is `file`")
            })?;
            let set = SolutionSet::from_file(path)?;
            tracing::debug!(instances = set.len(), "loaded solution dump");
            set.select(solution).cloned()
        }
    }
}

/// Load and reconstruct in one go
fn load_model(
    source: SolutionSource,
    file: Option<&PathBuf>,
    solution: usize,
) -> Result<SolutionModel> {
    let instance = load_instance(source, file, solution)?;
    tracing::info!(solution, "reconstructing model");
    let model = import_solution(&instance)?;
    for issue in model.issues() {
        tracing::warn!(entity = %issue.entity, error = %issue.error, "entity not reconstructed");
    }
    Ok(model)
}

/// Analyze command implementation
pub mod analyze {
    use super::*;
    use crate::cli::{Commands, OutputFormat};
    use clap::ValueEnum;

    /// Execute the analyze command
    pub fn execute(args: Cli, config: Config) -> Result<()> {
        let (file, source, solution, output) = match args.command {
            Commands::Analyze {
                file,
                source,
                solution,
                output,
            } => (file, source, solution, output),
            _ => unreachable!("analyze::execute called with wrong command"),
        };

        let output_format = match output {
            Some(format) => format,
            None => OutputFormat::from_str(&config.default.output, true)
                .map_err(|_| Error::config(format!(
                    "unknown output format `{}` in configuration",
                    config.default.output
                )))?,
        };

        let model = load_model(source, file.as_ref(), solution)?;

        match output_format {
            OutputFormat::Table => {
                crate::cli::output::output_table(&mut std::io::stdout(), &model)?;
            }
            OutputFormat::Json => {
                crate::cli::output::output_json(&mut std::io::stdout(), &model)?;
            }
            OutputFormat::Dot => {
                let graph = crate::graph::transitions_graph(&model)?;
                print!("{}", crate::graph::dot::transitions_dot(&graph));
            }
        }

        Ok(())
    }
}

/// Export command implementation
pub mod export {
    use super::*;
    use crate::cli::Commands;
    use crate::graph::dot;

    /// Execute the export command
    pub fn execute(args: Cli, config: Config) -> Result<()> {
        let (file, source, solution, dir) = match args.command {
            Commands::Export {
                file,
                source,
                solution,
                dir,
            } => (file, source, solution, dir),
            _ => unreachable!("export::execute called with wrong command"),
        };

        let model = load_model(source, file.as_ref(), solution)?;

        let target = dir.unwrap_or_else(|| {
            let stamp = chrono::Utc::now().format("%Y%m%d%H%M%S");
            config
                .export_directory()
                .join(format!("{stamp}-solution{solution}"))
        });
        std::fs::create_dir_all(&target)?;

        // Per-file IO failures are logged and skipped; the model is intact
        // and the remaining exports still go out.
        let mut written = 0usize;
        let mut failures = 0usize;
        let mut emit = |name: String, contents: String| {
            let path = target.join(name);
            match dot::write_dot(&path, &contents) {
                Ok(()) => written += 1,
                Err(error) => {
                    tracing::error!(path = %path.display(), %error, "DOT export failed");
                    failures += 1;
                }
            }
        };

        let graph = crate::graph::transitions_graph(&model)?;
        emit("transitions.dot".to_string(), dot::transitions_dot(&graph));

        for &id in model.executions() {
            let name = dot::dot_id(model.store()[id].name());
            emit(format!("{name}.dot"), dot::execution_dot(&model, id)?);
        }

        for &id in model.traces() {
            let name = dot::dot_id(model.store()[id].name());
            emit(format!("{name}.dot"), dot::trace_dot(&model, id));
        }

        println!(
            "Exported {} DOT file(s) to {}{}",
            written,
            target.display(),
            if failures > 0 {
                format!(" ({failures} failed)")
            } else {
                String::new()
            }
        );

        Ok(())
    }
}
