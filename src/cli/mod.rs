//! Command-line interface for blast-diff.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **compare**: Reconcile two BLAST tabular result files
//! - **summaries**: Look up Entrez metadata for the accessions in a result file
//!
//! ## Usage
//!
//! ```text
//! # Compare two runs of the same search
//! blast-diff compare run1.tsv run2.tsv
//!
//! # Write each side annotated with equal/similar status
//! blast-diff compare run1.tsv run2.tsv --out-a run1.status.tsv --out-b run2.status.tsv
//!
//! # JSON output for scripting
//! blast-diff compare run1.tsv run2.tsv --format json
//!
//! # Check which GenBank records behind the hits changed
//! blast-diff summaries run2.tsv --email someone@example.org
//! ```

use clap::{Parser, Subcommand};

pub mod compare;
pub mod summaries;

#[derive(Parser)]
#[command(name = "blast-diff")]
#[command(author = "Fulcrum Genomics")]
#[command(version)]
#[command(about = "Compare tabular BLAST results between two runs")]
#[command(
    long_about = "blast-diff compares two BLAST extended tabular result files and classifies every hit as:\n- equal: the same hit is reported by the other run\n- similar: the same alignment, with a drifted e-value or alignment statistics\n- unknown: no counterpart in the other run"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compare two BLAST tabular files
    Compare(compare::CompareArgs),

    /// Fetch Entrez summaries for the accessions in a BLAST tabular file
    Summaries(summaries::SummariesArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}
