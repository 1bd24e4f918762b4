use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Args;

use crate::cli::OutputFormat;
use crate::core::hit::HitRecord;
use crate::matching::reconcile::{reconcile_with, HitPartition, ReconcileConfig};
use crate::parsing::tabular::parse_tabular_file;

#[derive(Args)]
pub struct CompareArgs {
    /// First BLAST tabular file (plain or gzipped)
    #[arg(required = true)]
    pub input_a: PathBuf,

    /// Second BLAST tabular file (plain or gzipped)
    #[arg(required = true)]
    pub input_b: PathBuf,

    /// Pair hits even when their subject identifiers differ
    #[arg(long)]
    pub ignore_ids: bool,

    /// Write hits of the first file with their status appended
    #[arg(long)]
    pub out_a: Option<PathBuf>,

    /// Write hits of the second file with their status appended
    #[arg(long)]
    pub out_b: Option<PathBuf>,
}

/// Execute compare subcommand
///
/// # Errors
///
/// Returns an error if either input cannot be parsed or an output file
/// cannot be written.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: CompareArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let hits_a = parse_tabular_file(&args.input_a)
        .with_context(|| format!("Failed to parse {}", args.input_a.display()))?;
    let hits_b = parse_tabular_file(&args.input_b)
        .with_context(|| format!("Failed to parse {}", args.input_b.display()))?;

    if verbose {
        eprintln!("Input A: {} hits", hits_a.len());
        eprintln!("Input B: {} hits", hits_b.len());
    }

    let config = ReconcileConfig {
        check_ids: !args.ignore_ids,
    };
    let (result_a, result_b) = reconcile_with(&hits_a, &hits_b, &config);

    if let Some(path) = &args.out_a {
        write_annotated(path, &result_a)?;
    }
    if let Some(path) = &args.out_b {
        write_annotated(path, &result_b)?;
    }

    match format {
        OutputFormat::Text => print_text_comparison(&args, &result_a, &result_b),
        OutputFormat::Json => print_json_comparison(&args, &result_a, &result_b)?,
        OutputFormat::Tsv => print_tsv_comparison(&args, &result_a, &result_b),
    }

    Ok(())
}

/// Write every classified hit (same, similar, unknown) with its status
fn write_annotated(path: &Path, partition: &HitPartition) -> anyhow::Result<()> {
    let file =
        File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
    let mut writer = BufWriter::new(file);

    for hit in partition.annotated() {
        let text = hit.to_text();
        writer.write_all(text.as_bytes())?;
        if !text.ends_with('\n') {
            writer.write_all(b"\n")?;
        }
    }

    writer.flush()?;
    Ok(())
}

fn print_text_comparison(args: &CompareArgs, result_a: &HitPartition, result_b: &HitPartition) {
    println!("Comparison Results");
    println!("{}", "=".repeat(60));

    for (label, path, partition) in [
        ("A", &args.input_a, result_a),
        ("B", &args.input_b, result_b),
    ] {
        let counts = partition.counts();
        println!("\nInput {label}: {}", path.display());
        println!("  Hits: {}", counts.total);
        println!("  Equal: {}", counts.same);
        println!("  Similar: {}", counts.similar);
        println!("  Unknown: {}", counts.unknown);
    }

    if !result_a.unknown.is_empty() || !result_b.unknown.is_empty() {
        println!("\nUnmatched hits:");
        for hit in &result_a.unknown {
            println!("  A only: {} {}", hit.hit.name, subject_label(&hit.hit));
        }
        for hit in &result_b.unknown {
            println!("  B only: {} {}", hit.hit.name, subject_label(&hit.hit));
        }
    }
}

fn subject_label(hit: &HitRecord) -> String {
    hit.ids
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("|")
}

fn print_json_comparison(
    args: &CompareArgs,
    result_a: &HitPartition,
    result_b: &HitPartition,
) -> anyhow::Result<()> {
    let unknown = |partition: &HitPartition| -> Vec<String> {
        partition
            .unknown
            .iter()
            .map(|h| h.hit.raw.trim_end().to_string())
            .collect()
    };

    let output = serde_json::json!({
        "input_a": {
            "path": args.input_a.display().to_string(),
            "counts": result_a.counts(),
            "unknown": unknown(result_a),
        },
        "input_b": {
            "path": args.input_b.display().to_string(),
            "counts": result_b.counts(),
            "unknown": unknown(result_b),
        },
        "check_ids": !args.ignore_ids,
    });

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_tsv_comparison(args: &CompareArgs, result_a: &HitPartition, result_b: &HitPartition) {
    println!("input\tpath\ttotal\tequal\tsimilar\tunknown");
    for (label, path, partition) in [
        ("A", &args.input_a, result_a),
        ("B", &args.input_b, result_b),
    ] {
        let counts = partition.counts();
        println!(
            "{label}\t{}\t{}\t{}\t{}\t{}",
            path.display(),
            counts.total,
            counts.same,
            counts.similar,
            counts.unknown,
        );
    }
}
