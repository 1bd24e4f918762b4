//! End-to-end reconciliation of BLAST tabular files
//!
//! These tests write realistic `-outfmt 7` style files to disk, parse them
//! back and check the reconciliation properties callers rely on.

use std::io::Write;

use blast_diff::parsing::tabular::{parse_tabular_file, ParseError};
use blast_diff::{reconcile, Comparison, Difference, HitPartition, HitRecord, HitStatus};
use tempfile::NamedTempFile;

/// Build one 22-column hit line
fn hit_line(name: &str, sseqid: &str, qstart: u32, evalue: &str, qseq: &str) -> String {
    let sseq = qseq.replace('-', "");
    format!(
        "{name}\t{sseqid}\t100.0\t{len}\t0\t0\t{qstart}\t{qend}\t500\t{send}\t{evalue}\t\
         30.1\tsubject title\t30\t{len}\t{len}\t0\t100.0\t1\t1\t{qseq}\t{sseq}\n",
        len = sseq.len(),
        qend = qstart as usize + sseq.len() - 1,
        send = 500 + sseq.len() - 1,
    )
}

fn write_hits(lines: &[String]) -> NamedTempFile {
    let mut file = NamedTempFile::with_suffix(".tsv").expect("Failed to create temp file");
    writeln!(file, "# BLASTN 2.13.0+").unwrap();
    writeln!(file, "# Fields: query acc.ver, subject ids, ...").unwrap();
    for line in lines {
        file.write_all(line.as_bytes()).unwrap();
    }
    file.flush().unwrap();
    file
}

fn names(partition: &[blast_diff::matching::AnnotatedHit]) -> Vec<&str> {
    partition.iter().map(|h| h.hit.name.as_str()).collect()
}

fn classified(partition: &HitPartition) -> usize {
    partition.same.len() + partition.similar.len() + partition.unknown.len()
}

#[test]
fn test_reconcile_two_runs() {
    let run1 = write_hits(&[
        hit_line("q1", "gi|11111111|gb|AB000001.1|", 1, "1e-40", "ACGTACGTAC"),
        hit_line("q2", "gi|22222222|gb|AB000002.1|", 5, "1e-20", "ACG-TTGCA"),
        hit_line("q3", "gi|33333333|gb|AB000003.1|", 9, "1e-10", "TTTTGGGG"),
    ]);
    let run2 = write_hits(&[
        hit_line("q2", "gi|22222222|gb|AB000002.1|", 5, "3e-20", "ACGT-TGCA"),
        hit_line("q1", "gi|11111111|gb|AB000001.1|", 1, "1e-40", "ACGTACGTAC"),
        hit_line("q4", "gi|44444444|gb|AB000004.1|", 2, "1e-05", "CCCCAAAA"),
    ]);

    let hits_a = parse_tabular_file(run1.path()).unwrap();
    let hits_b = parse_tabular_file(run2.path()).unwrap();
    assert_eq!(hits_a.len(), 3);
    assert_eq!(hits_b.len(), 3);

    let (a, b) = reconcile(&hits_a, &hits_b);

    assert_eq!(names(&a.same), vec!["q1"]);
    assert_eq!(names(&a.similar), vec!["q2"]);
    assert_eq!(names(&a.unknown), vec!["q3"]);
    assert_eq!(names(&b.same), vec!["q1"]);
    assert_eq!(names(&b.similar), vec!["q2"]);
    assert_eq!(names(&b.unknown), vec!["q4"]);

    // q2 moved a gap and gained an e-value change
    assert_eq!(
        hits_a[1].compare(&hits_b[0]),
        Comparison::Match(vec![Difference::EValue, Difference::Alignment])
    );
}

#[test]
fn test_reconcile_conserves_every_hit() {
    let lines_a: Vec<String> = (0..20)
        .map(|i| hit_line(&format!("a{i}"), "gi|12345678|", i % 7 + 1, "1e-9", "ACGTAC"))
        .collect();
    let lines_b: Vec<String> = (0..15)
        .map(|i| {
            let evalue = if i % 3 == 0 { "2e-9" } else { "1e-9" };
            hit_line(&format!("b{i}"), "gi|12345678|", i % 5 + 1, evalue, "ACGTAC")
        })
        .collect();

    let hits_a: Vec<HitRecord> = lines_a.iter().map(|l| HitRecord::parse(l).unwrap()).collect();
    let hits_b: Vec<HitRecord> = lines_b.iter().map(|l| HitRecord::parse(l).unwrap()).collect();

    let (a, b) = reconcile(&hits_a, &hits_b);

    assert_eq!(a.all, hits_a);
    assert_eq!(b.all, hits_b);
    assert_eq!(classified(&a), hits_a.len());
    assert_eq!(classified(&b), hits_b.len());

    // Paired buckets line up one to one
    assert_eq!(a.same.len(), b.same.len());
    assert_eq!(a.similar.len(), b.similar.len());

    // No B hit appears twice
    let mut matched_b: Vec<&str> = b
        .same
        .iter()
        .chain(&b.similar)
        .map(|h| h.hit.name.as_str())
        .collect();
    let before = matched_b.len();
    matched_b.sort_unstable();
    matched_b.dedup();
    assert_eq!(matched_b.len(), before);
}

#[test]
fn test_reconcile_output_round_trip() {
    let line = hit_line("q1", "ref|NC_000913.3|", 1, "0.0", "ACGTACGT");
    let hits = vec![HitRecord::parse(&line).unwrap()];

    let (a, _) = reconcile(&hits, &hits);
    let annotated = &a.same[0];

    assert_eq!(annotated.status, Some(HitStatus::Equal));
    assert_eq!(annotated.hit.to_text(None), line);
    assert_eq!(
        annotated.to_text(),
        format!("{}\tequal", line.trim_end_matches('\n'))
    );
}

#[test]
fn test_parse_file_rejects_truncated_line() {
    let file = write_hits(&[
        hit_line("q1", "gi|11111111|", 1, "1e-40", "ACGTACGTAC"),
        "q2\tgi|22222222|\t99.0\n".to_string(),
    ]);

    let err = parse_tabular_file(file.path()).unwrap_err();
    match err {
        // Two comment lines precede the data
        ParseError::InvalidLine { line, .. } => assert_eq!(line, 4),
        other => panic!("unexpected error: {other}"),
    }
}
