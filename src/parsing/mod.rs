//! Parsers for BLAST result files.
//!
//! ## Example
//!
//! ```rust,no_run
//! use blast_diff::parsing::tabular::{parse_tabular_file, parse_tabular_text};
//! use std::path::Path;
//!
//! // Parse from a file (plain or gzipped)
//! let hits = parse_tabular_file(Path::new("run1.tsv.gz")).unwrap();
//!
//! // Or from text
//! let hits = parse_tabular_text("# BLASTN 2.12.0+\n").unwrap();
//! ```
//!
//! ## Fields
//!
//! Lines must come from BLAST extended tabular output (22 or more
//! columns). The following columns are read; the rest are kept only in the
//! raw line:
//!
//! | Index | Field | Used for |
//! |-------|-------|----------|
//! | 0  | query id | name |
//! | 1  | subject id | identifiers (hard) |
//! | 3  | length | - |
//! | 4  | mismatches | alignment (soft) |
//! | 6  | query start | hard |
//! | 8  | subject start | hard |
//! | 10 | e-value | eValue (soft) |
//! | 13 | raw score | alignment (soft) |
//! | 14 | identities | alignment (soft) |
//! | 15 | positives | alignment (soft) |
//! | 16 | gaps | alignment (soft) |
//! | 18 | query frame | hard |
//! | 19 | subject frame | hard |
//! | 20 | aligned query | bases hard, text soft |
//! | 21 | aligned subject | bases hard, text soft |

pub mod tabular;
