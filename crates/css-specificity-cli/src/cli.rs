//! Argument parsing and command dispatch for the `css-specificity` binary.

use std::io::Write;

use clap::{Parser, Subcommand};
use css_specificity::{compare, most_specific};
use tracing::debug;

use crate::config::{LogLevel, OutputFormat};
use crate::error::CliError;
use crate::output::{ScoreReport, write_comparison, write_rank, write_scores};

/// Score CSS selectors and pick cascade winners.
#[derive(Parser, Debug)]
#[command(name = "css-specificity", version, about)]
pub struct Cli {
    /// Log level (trace, debug, info, warn, error).
    #[arg(long, global = true)]
    pub log_level: Option<LogLevel>,

    /// Output format (text, json).
    #[arg(long, global = true)]
    pub format: Option<OutputFormat>,

    /// Command to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported commands.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print the specificity of each selector.
    Score {
        /// Selectors to score; quote selectors containing spaces.
        #[arg(required = true)]
        selectors: Vec<String>,
        /// Include per-category match counts.
        #[arg(long)]
        breakdown: bool,
    },
    /// Print whichever of two selectors wins; ties go to the second.
    Compare {
        /// Earlier selector.
        a: String,
        /// Later selector.
        b: String,
    },
    /// Print the selector that wins among all given; ties go to the latest.
    Rank {
        /// Selectors in declaration order.
        #[arg(required = true)]
        selectors: Vec<String>,
    },
}

/// Run `command`, writing results to `writer` in `format`.
///
/// # Errors
///
/// Returns [`CliError`] when results cannot be written.
pub fn run(command: &Command, format: OutputFormat, writer: &mut dyn Write) -> Result<(), CliError> {
    match command {
        Command::Score {
            selectors,
            breakdown,
        } => {
            let reports: Vec<_> = selectors
                .iter()
                .map(|selector| ScoreReport::new(selector, *breakdown))
                .collect();
            debug!(count = reports.len(), "scored selectors");
            write_scores(writer, &reports, format)
        }
        Command::Compare { a, b } => {
            let winner = compare(a, b);
            write_comparison(writer, a, b, winner, format)
        }
        // clap rejects an empty selector list, so there is always a winner.
        Command::Rank { selectors } => most_specific(selectors.iter().map(String::as_str))
            .map_or(Ok(()), |winner| write_rank(writer, winner, format)),
    }
}
