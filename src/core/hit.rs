use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::identifier::{parse_identifiers, Identifier};
use crate::core::types::{Comparison, Difference, HitStatus};

/// Number of tab-separated fields a line must have (the subject alignment
/// string is the last field read, at index 21)
pub const MIN_FIELDS: usize = 22;

// Field positions in BLAST extended tabular output
const NAME: usize = 0;
const IDS: usize = 1;
const LENGTH: usize = 3;
const MISMATCH: usize = 4;
const QUERY_START: usize = 6;
const SUBJECT_START: usize = 8;
const E_VALUE: usize = 10;
// Index 11 (bit score) is not used: it switches between plain and
// exponential notation across runs (12261 vs 1.226e04).
const SCORE: usize = 13;
const IDENTITIES: usize = 14;
const POSITIVES: usize = 15;
const GAPS: usize = 16;
const QUERY_FRAME: usize = 18;
const SUBJECT_FRAME: usize = 19;
const QUERY_SEQ: usize = 20;
const SUBJECT_SEQ: usize = 21;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HitParseError {
    #[error("expected at least {required} tab-separated fields, found {found}")]
    TooFewFields { found: usize, required: usize },
}

/// One line of BLAST extended tabular output.
///
/// All fields are kept as the original text: e-values and scores come in
/// several notations and are only ever compared textually.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HitRecord {
    /// The source line, including its line terminator if it had one
    pub raw: String,

    /// Query sequence name
    pub name: String,

    /// Subject identifiers in the order they were parsed
    pub ids: Vec<Identifier>,

    pub length: String,
    pub mismatch: String,
    pub query_start: String,
    pub subject_start: String,
    pub e_value: String,
    pub score: String,
    pub identities: String,
    pub positives: String,
    pub gaps: String,
    pub query_frame: String,
    pub subject_frame: String,

    /// Aligned query sequence (with gaps)
    pub query_seq: String,

    /// Aligned subject sequence (with gaps)
    pub subject_seq: String,
}

impl HitRecord {
    /// Parse one tabular line. The line may still carry its terminator,
    /// which is kept in [`HitRecord::raw`] for round-tripping.
    ///
    /// # Errors
    ///
    /// Returns `HitParseError::TooFewFields` if the line has fewer than
    /// [`MIN_FIELDS`] tab-separated fields.
    pub fn parse(line: &str) -> Result<Self, HitParseError> {
        let fields: Vec<&str> = strip_terminator(line).0.split('\t').collect();

        if fields.len() < MIN_FIELDS {
            return Err(HitParseError::TooFewFields {
                found: fields.len(),
                required: MIN_FIELDS,
            });
        }

        let field = |idx: usize| fields[idx].to_string();

        Ok(Self {
            raw: line.to_string(),
            name: field(NAME),
            ids: parse_identifiers(fields[IDS]),
            length: field(LENGTH),
            mismatch: field(MISMATCH),
            query_start: field(QUERY_START),
            subject_start: field(SUBJECT_START),
            e_value: field(E_VALUE),
            score: field(SCORE),
            identities: field(IDENTITIES),
            positives: field(POSITIVES),
            gaps: field(GAPS),
            query_frame: field(QUERY_FRAME),
            subject_frame: field(SUBJECT_FRAME),
            query_seq: field(QUERY_SEQ),
            subject_seq: field(SUBJECT_SEQ),
        })
    }

    /// Compare against another hit, requiring identical identifiers
    #[must_use]
    pub fn compare(&self, other: &HitRecord) -> Comparison {
        self.compare_with(other, true)
    }

    /// Compare against another hit.
    ///
    /// Positions, frames and the bases of both alignment strings must agree
    /// (and, with `check_ids`, the identifier lists) or the result is a
    /// [`Comparison::Mismatch`]. Gap placement is ignored for this check, so
    /// `AC-GT` and `ACG-T` describe the same alignment. Anything else that
    /// differs is reported as a [`Difference`] on a match.
    #[must_use]
    pub fn compare_with(&self, other: &HitRecord, check_ids: bool) -> Comparison {
        if check_ids && self.ids != other.ids {
            return Comparison::Mismatch;
        }

        if self.query_start != other.query_start
            || self.subject_start != other.subject_start
            || self.query_frame != other.query_frame
            || self.subject_frame != other.subject_frame
        {
            return Comparison::Mismatch;
        }

        if !same_bases(&self.query_seq, &other.query_seq)
            || !same_bases(&self.subject_seq, &other.subject_seq)
        {
            return Comparison::Mismatch;
        }

        let mut differences = Vec::new();

        if self.e_value != other.e_value {
            differences.push(Difference::EValue);
        }

        if self.identities != other.identities
            || self.query_seq != other.query_seq
            || self.subject_seq != other.subject_seq
            || self.score != other.score
            || self.positives != other.positives
            || self.gaps != other.gaps
            || self.mismatch != other.mismatch
        {
            differences.push(Difference::Alignment);
        }

        Comparison::Match(differences)
    }

    /// Render the hit as a tabular line. Without a status this is the
    /// source line verbatim; with one, the line terminator is replaced by a
    /// tab and the status, so the result carries no trailing newline.
    #[must_use]
    pub fn to_text(&self, status: Option<HitStatus>) -> String {
        match status {
            None => self.raw.clone(),
            Some(status) => {
                let (body, _) = strip_terminator(&self.raw);
                format!("{body}\t{status}")
            }
        }
    }

    /// Identifiers with the given database tag
    pub fn ids_with_tag<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a Identifier> {
        self.ids.iter().filter(move |id| id.database_tag == tag)
    }
}

/// Split a line into its content and trailing terminator (`\n`, `\r\n`, or none)
fn strip_terminator(line: &str) -> (&str, &str) {
    if let Some(body) = line.strip_suffix("\r\n") {
        (body, "\r\n")
    } else if let Some(body) = line.strip_suffix('\n') {
        (body, "\n")
    } else {
        (line, "")
    }
}

/// Compare two alignment strings on their A/C/G/T content only
fn same_bases(a: &str, b: &str) -> bool {
    let bases = |s: &str| {
        s.chars()
            .filter(|c| matches!(c, 'A' | 'C' | 'G' | 'T'))
            .collect::<Vec<_>>()
    };
    bases(a) == bases(b)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Build a 22-field tabular line with sensible defaults
    pub(crate) struct LineBuilder {
        fields: Vec<String>,
    }

    impl LineBuilder {
        pub(crate) fn new() -> Self {
            let fields = [
                "query1",                     // 0 qseqid
                "gi|312836823|gb|CP002323.1|", // 1 sseqid
                "98.5",                       // 2 pident
                "12",                         // 3 length
                "0",                          // 4 mismatch
                "0",                          // 5 gapopen
                "1",                          // 6 qstart
                "12",                         // 7 qend
                "1001",                       // 8 sstart
                "1012",                       // 9 send
                "1e-30",                      // 10 evalue
                "24.3",                       // 11 bitscore
                "Escherichia coli",           // 12 stitle
                "24",                         // 13 score
                "12",                         // 14 nident
                "12",                         // 15 positive
                "0",                          // 16 gaps
                "100.0",                      // 17 ppos
                "1",                          // 18 qframe
                "1",                          // 19 sframe
                "ACGTACGTACGT",               // 20 qseq
                "ACGTACGTACGT",               // 21 sseq
            ];
            Self {
                fields: fields.iter().map(|s| (*s).to_string()).collect(),
            }
        }

        pub(crate) fn set(mut self, idx: usize, value: &str) -> Self {
            self.fields[idx] = value.to_string();
            self
        }

        pub(crate) fn line(&self) -> String {
            format!("{}\n", self.fields.join("\t"))
        }

        pub(crate) fn hit(&self) -> HitRecord {
            HitRecord::parse(&self.line()).unwrap()
        }
    }

    #[test]
    fn test_parse_fields() {
        let hit = LineBuilder::new().hit();

        assert_eq!(hit.name, "query1");
        assert_eq!(
            hit.ids,
            vec![
                Identifier::new("gi", "312836823"),
                Identifier::new("gb", "CP002323.1"),
            ]
        );
        assert_eq!(hit.length, "12");
        assert_eq!(hit.query_start, "1");
        assert_eq!(hit.subject_start, "1001");
        assert_eq!(hit.e_value, "1e-30");
        assert_eq!(hit.score, "24");
        assert_eq!(hit.query_frame, "1");
        assert_eq!(hit.subject_seq, "ACGTACGTACGT");
        assert!(hit.raw.ends_with('\n'));
    }

    #[test]
    fn test_parse_too_few_fields() {
        let err = HitRecord::parse("query1\tgi|12345\t99.0\n").unwrap_err();
        assert_eq!(
            err,
            HitParseError::TooFewFields {
                found: 3,
                required: MIN_FIELDS
            }
        );
    }

    #[test]
    fn test_parse_keeps_numeric_text() {
        let hit = LineBuilder::new().set(10, "0.0").set(13, "1.226e04").hit();
        assert_eq!(hit.e_value, "0.0");
        assert_eq!(hit.score, "1.226e04");
    }

    #[test]
    fn test_identical_lines_are_equal() {
        let a = LineBuilder::new().hit();
        let b = LineBuilder::new().hit();
        assert_eq!(a.compare(&b), Comparison::Match(vec![]));
    }

    #[test]
    fn test_evalue_only_difference() {
        let a = LineBuilder::new().hit();
        let b = LineBuilder::new().set(10, "2e-30").hit();
        assert_eq!(a.compare(&b), Comparison::Match(vec![Difference::EValue]));
    }

    #[test]
    fn test_alignment_statistics_give_single_tag() {
        let a = LineBuilder::new().hit();
        let b = LineBuilder::new()
            .set(13, "25")
            .set(14, "11")
            .set(15, "11")
            .set(4, "1")
            .hit();
        assert_eq!(a.compare(&b), Comparison::Match(vec![Difference::Alignment]));
    }

    #[test]
    fn test_both_differences() {
        let a = LineBuilder::new().hit();
        let b = LineBuilder::new().set(10, "3e-29").set(16, "1").hit();
        assert_eq!(
            a.compare(&b),
            Comparison::Match(vec![Difference::EValue, Difference::Alignment])
        );
    }

    #[test]
    fn test_bit_score_is_ignored() {
        let a = LineBuilder::new().set(11, "12261").hit();
        let b = LineBuilder::new().set(11, "1.226e04").hit();
        assert_eq!(a.compare(&b), Comparison::Match(vec![]));
    }

    #[test]
    fn test_hard_mismatches() {
        let base = LineBuilder::new().hit();

        for (idx, value) in [
            (6, "2"),             // query start
            (8, "1002"),          // subject start
            (18, "-1"),           // query frame
            (19, "-2"),           // subject frame
            (20, "ACGTACGTACGA"), // query bases
            (21, "ACGTACCTACGT"), // subject bases
            (1, "gi|999999999"),  // identifiers
        ] {
            let other = LineBuilder::new().set(idx, value).hit();
            assert_eq!(
                base.compare(&other),
                Comparison::Mismatch,
                "field {idx} = {value} should be a hard mismatch"
            );
        }
    }

    #[test]
    fn test_gap_placement_is_tolerated() {
        let a = LineBuilder::new().set(20, "AC-GT").set(21, "ACCGT").hit();
        let b = LineBuilder::new().set(20, "ACG-T").set(21, "ACCGT").hit();

        let cmp = a.compare(&b);
        assert!(cmp.is_match());
        // The raw strings still differ, so this is flagged as an alignment change
        assert_eq!(cmp.differences(), Some(&[Difference::Alignment][..]));
    }

    #[test]
    fn test_ambiguity_codes_are_ignored() {
        let a = LineBuilder::new().set(20, "ACNGT").hit();
        let b = LineBuilder::new().set(20, "AC-GT").hit();
        assert!(a.compare(&b).is_match());
    }

    #[test]
    fn test_compare_without_ids() {
        let a = LineBuilder::new().hit();
        let b = LineBuilder::new().set(1, "gi|999999999|gb|ZZ999999.1|").hit();

        assert_eq!(a.compare(&b), Comparison::Mismatch);
        assert_eq!(a.compare_with(&b, false), Comparison::Match(vec![]));
    }

    #[test]
    fn test_id_order_matters() {
        let a = LineBuilder::new().set(1, "gi|123456|gb|AB12345").hit();
        let b = LineBuilder::new().set(1, "gb|AB12345|gi|123456").hit();
        assert_eq!(a.compare(&b), Comparison::Mismatch);
    }

    #[test]
    fn test_match_verdict_is_symmetric() {
        let variants = [
            LineBuilder::new(),
            LineBuilder::new().set(10, "5e-10"),
            LineBuilder::new().set(6, "7"),
            LineBuilder::new().set(20, "ACGT-ACGTACGT"),
            LineBuilder::new().set(14, "10").set(10, "1e-2"),
            LineBuilder::new().set(1, "ref|NC_000913.3|"),
        ];
        let hits: Vec<HitRecord> = variants.iter().map(LineBuilder::hit).collect();

        for a in &hits {
            for b in &hits {
                let ab = a.compare(b);
                let ba = b.compare(a);
                assert_eq!(ab.is_match(), ba.is_match());
                assert_eq!(ab.differences(), ba.differences());
            }
        }
    }

    #[test]
    fn test_to_text_without_status() {
        let builder = LineBuilder::new();
        let hit = builder.hit();
        assert_eq!(hit.to_text(None), builder.line());
    }

    #[test]
    fn test_to_text_with_status() {
        let builder = LineBuilder::new();
        let hit = builder.hit();

        let text = hit.to_text(Some(HitStatus::Similar));
        let line = builder.line();
        let expected = format!("{}\tsimilar", &line[..line.len() - 1]);
        assert_eq!(text, expected);
        assert!(!text.ends_with('\n'));
    }

    #[test]
    fn test_to_text_without_terminator() {
        let line = LineBuilder::new().line();
        let unterminated = line.trim_end_matches('\n');
        let hit = HitRecord::parse(unterminated).unwrap();

        assert_eq!(
            hit.to_text(Some(HitStatus::Equal)),
            format!("{unterminated}\tequal")
        );
    }

    #[test]
    fn test_to_text_crlf() {
        let line = LineBuilder::new().line().replace('\n', "\r\n");
        let hit = HitRecord::parse(&line).unwrap();
        assert_eq!(hit.subject_seq, "ACGTACGTACGT");

        let text = hit.to_text(Some(HitStatus::Equal));
        assert!(text.ends_with("ACGTACGTACGT\tequal"));
        assert!(!text.contains('\r'));
    }

    #[test]
    fn test_ids_with_tag() {
        let hit = LineBuilder::new().hit();
        let gi: Vec<_> = hit.ids_with_tag("gi").collect();
        assert_eq!(gi, vec![&Identifier::new("gi", "312836823")]);
        assert_eq!(hit.ids_with_tag("emb").count(), 0);
    }
}
