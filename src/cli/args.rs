//! Command-line argument parsing for demobuddy
//!
//! Provides clap-based CLI with subcommands and verbosity control.

use clap::{Parser, Subcommand};

/// demobuddy - Offline security-awareness demos for the terminal
#[derive(Parser, Debug)]
#[command(name = "demobuddy")]
#[command(author = "Jerome (Kubashen) Naidoo")]
#[command(version = "0.3.0")]
#[command(
    about = "Run simulated admin actions and a toy RAG exercise, fully offline",
    long_about = None
)]
pub struct Args {
    /// Answer yes to every confirmation gate (non-interactive runs)
    #[arg(short = 'y', long)]
    pub yes: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Verbosity level: default (normal), -v (verbose)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (suppress banners and progress)
    #[arg(short, long)]
    pub quiet: bool,

    /// Subcommand (full demo when omitted)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run only the simulated admin actions stage
    Admin,

    /// Run only the RAG retrieval stage
    Rag {
        /// Demo query (prompted for interactively when omitted)
        #[arg(short = 'Q', long)]
        query: Option<String>,

        /// Documents to retrieve per query
        #[arg(short = 'k', long)]
        top_k: Option<usize>,

        /// Print the pipeline result as JSON instead of formatted output
        #[arg(long)]
        json: bool,
    },

    /// Display current configuration
    Config,
}

/// Verbosity level enum
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    Normal,
    Verbose,
}

impl Args {
    /// Get verbosity level based on flags
    pub fn verbosity(&self) -> Verbosity {
        if self.quiet {
            Verbosity::Quiet
        } else if self.verbose > 0 {
            Verbosity::Verbose
        } else {
            Verbosity::Normal
        }
    }

    /// `--json` must come with `--yes` or a `--query`; otherwise the run
    /// would block on a prompt while emitting machine output.
    pub fn validate(&self) -> Result<(), String> {
        if let Some(Commands::Rag { query, json, .. }) = &self.command {
            if *json && query.is_none() && !self.yes {
                return Err(
                    "--json requires --query (or --yes) so the run cannot block on a prompt"
                        .to_string(),
                );
            }
        }
        Ok(())
    }
}

impl Verbosity {
    /// Check if banners and progress should be shown
    pub fn show_progress(&self) -> bool {
        !matches!(self, Verbosity::Quiet)
    }

    /// Check if per-step detail should be shown
    pub fn show_detail(&self) -> bool {
        matches!(self, Verbosity::Verbose)
    }
}
