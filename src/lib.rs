//! LTS Model Visualizer
//!
//! A tool for reconstructing and visualizing labeled-transition-system
//! models from the relational output of a finite-model solver.
//!
//! This library provides functionality for:
//! - Consuming solver solutions (named relations over atoms) through a
//!   trait boundary or a JSON dump file
//! - Interning states, labels, transitions, executions, and traces into a
//!   typed entity store
//! - Reassembling ordered executions and traces from unordered positional
//!   relations
//! - Deriving directed graphs of the transition relation and of single
//!   executions for rendering
//! - Exporting DOT descriptions of the reconstructed model

pub mod cli;
pub mod config;
pub mod error;
pub mod graph;
pub mod model;
pub mod solver;

pub use config::Config;
pub use error::{Error, Result};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Initialize logging with the given log level
pub fn init_logging(level: &str) {
    use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
        assert_eq!(NAME, "lts-model-viz");
    }
}
