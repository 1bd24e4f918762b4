use std::path::PathBuf;

use anyhow::Context;
use clap::Args;

use crate::cli::OutputFormat;
use crate::entrez::client::{EntrezClient, EntrezConfig, DEFAULT_DATABASE};
use crate::entrez::summary::{collect_accessions, DocumentSummary, DEFAULT_TAG};
use crate::parsing::tabular::parse_tabular_file;

#[derive(Args)]
pub struct SummariesArgs {
    /// BLAST tabular file (plain or gzipped)
    #[arg(required = true)]
    pub input: PathBuf,

    /// Contact email sent to NCBI (required by their usage policy)
    #[arg(long, required = true)]
    pub email: String,

    /// Database tag of the subject ids to look up
    #[arg(long, default_value = DEFAULT_TAG)]
    pub tag: String,

    /// Entrez database to query (e.g. nucleotide, protein)
    #[arg(long, default_value = DEFAULT_DATABASE)]
    pub db: String,

    /// Tool name reported to NCBI
    #[arg(long, default_value = env!("CARGO_PKG_NAME"))]
    pub tool: String,
}

/// Execute summaries subcommand
///
/// # Errors
///
/// Returns an error if the input cannot be parsed or the Entrez request fails.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: SummariesArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let hits = parse_tabular_file(&args.input)
        .with_context(|| format!("Failed to parse {}", args.input.display()))?;

    let accessions = collect_accessions(&hits, &args.tag);
    if verbose {
        eprintln!(
            "Found {} distinct '{}' accessions in {} hits",
            accessions.len(),
            args.tag,
            hits.len()
        );
    }

    if accessions.is_empty() {
        eprintln!("Warning: No '{}' accessions found, nothing to look up.", args.tag);
        return Ok(());
    }

    let config = EntrezConfig {
        tool: args.tool.clone(),
        ..EntrezConfig::new(&args.email).with_database(&args.db)
    };
    let client = EntrezClient::new(config)?;
    let summaries = client.fetch_summaries(&accessions)?;

    // Report in the order the accessions first appear in the hits
    let ordered: Vec<&DocumentSummary> = accessions
        .iter()
        .filter_map(|a| summaries.get(a.as_str()))
        .collect();

    match format {
        OutputFormat::Text => print_text_summaries(&ordered),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&ordered)?),
        OutputFormat::Tsv => print_tsv_summaries(&ordered),
    }

    Ok(())
}

fn print_text_summaries(summaries: &[&DocumentSummary]) {
    for summary in summaries {
        println!("{} ({})", summary.uid, summary.caption);
        println!("  Title: {}", summary.title);
        println!("  Created: {}", summary.create_date);
        println!("  Updated: {}", summary.update_date);
        println!("  Status: {}", status_label(summary));
        if !summary.replaced_by.is_empty() {
            println!("  Replaced by: {}", summary.replaced_by);
        }
    }
}

fn print_tsv_summaries(summaries: &[&DocumentSummary]) {
    println!("uid\tcaption\tcreate_date\tupdate_date\tstatus\ttitle");
    for summary in summaries {
        println!("{}", tsv_row(summary));
    }
}

fn tsv_row(summary: &DocumentSummary) -> String {
    format!(
        "{}\t{}\t{}\t{}\t{}\t{}",
        summary.uid,
        summary.caption,
        summary.create_date,
        summary.update_date,
        status_label(summary),
        summary.title,
    )
}

/// The record status reported by Entrez, or `live`/`replaced` when absent
fn status_label(summary: &DocumentSummary) -> &str {
    if !summary.status.is_empty() {
        &summary.status
    } else if summary.is_live() {
        "live"
    } else {
        "replaced"
    }
}
