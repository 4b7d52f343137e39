//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Top-level CLI parser for `mockscribe`.
#[derive(Debug, Parser)]
#[command(name = "mockscribe", version, about = "Turn recorded sessions into mocked UI tests")]
pub struct Cli {
    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Split a recorded session into named action buckets.
    Segment {
        /// Recorded event file (JSON or YAML).
        #[arg(long)]
        events: PathBuf,
        /// Existing tests whose mocks name the buckets.
        #[arg(long)]
        tests: Option<PathBuf>,
    },
    /// Generate one test file per bucket.
    Generate {
        /// Recorded event file (JSON or YAML).
        #[arg(long)]
        events: PathBuf,
        /// Existing tests whose mocks name the buckets.
        #[arg(long)]
        tests: Option<PathBuf>,
        /// Backend id; see `mockscribe backends`.
        #[arg(long, default_value = "playwright")]
        backend: String,
        /// Write files into this directory instead of printing them.
        #[arg(long)]
        out: Option<PathBuf>,
        /// Config file; defaults to `mockscribe.yaml` when present.
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Flag mocks that stub the same request as another mock.
    Dedupe {
        /// Mock collection file.
        #[arg(long)]
        mocks: PathBuf,
    },
    /// List mocks that were never served.
    Unused {
        /// Mock collection file.
        #[arg(long)]
        mocks: PathBuf,
    },
    /// List the available code generation backends.
    Backends,
}

#[cfg(test)]
mod tests {
    use super::{Cli, Command};
    use clap::Parser;

    #[test]
    fn parses_generate_with_defaults() {
        let cli = Cli::parse_from(["mockscribe", "generate", "--events", "rec.json"]);
        match cli.command {
            Command::Generate { events, tests, backend, out, config } => {
                assert_eq!(events.to_str(), Some("rec.json"));
                assert_eq!(backend, "playwright");
                assert!(tests.is_none() && out.is_none() && config.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn parses_dedupe_subcommand() {
        let cli = Cli::parse_from(["mockscribe", "dedupe", "--mocks", "m.json"]);
        assert!(matches!(cli.command, Command::Dedupe { .. }));
    }

    #[test]
    fn segment_requires_events() {
        assert!(Cli::try_parse_from(["mockscribe", "segment"]).is_err());
    }
}
