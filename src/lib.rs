//! # blast-diff
//!
//! A library for comparing BLAST tabular results between two runs of the
//! same search.
//!
//! Re-running a BLAST search months later rarely reproduces the old output
//! byte for byte. The database has grown, so e-values drift, and newer BLAST
//! versions may place gaps differently within an otherwise identical
//! alignment. A line-by-line diff reports all of these as changes.
//!
//! `blast-diff` instead pairs hits that describe the same alignment and
//! separates real changes from database noise.
//!
//! ## Features
//!
//! - **Gap-tolerant matching**: Alignments are compared on their bases, so
//!   `C-TGC` and `CT-GC` count as the same alignment
//! - **Drift detection**: Paired hits with a changed e-value or alignment
//!   statistics are reported as `similar` rather than `equal`
//! - **One-to-one pairing**: Every hit is paired at most once
//! - **Entrez lookup**: Fetches creation/update dates and status of the
//!   subject records to explain hits that appeared or disappeared
//!
//! ## Example
//!
//! ```rust
//! use blast_diff::{reconcile, HitRecord};
//!
//! let line = "q1\tgi|312836823|gb|CP002323.1|\t100.0\t12\t0\t0\t1\t12\t1001\t1012\t\
//!             1e-30\t24.3\tE. coli\t24\t12\t12\t0\t100.0\t1\t1\tACGTACGTACGT\tACGTACGTACGT\n";
//! let drifted = line.replace("1e-30", "2e-30");
//!
//! let run1 = vec![HitRecord::parse(line).unwrap()];
//! let run2 = vec![HitRecord::parse(&drifted).unwrap()];
//!
//! let (a, b) = reconcile(&run1, &run2);
//! assert_eq!(a.similar.len(), 1);
//! assert!(b.similar[0].to_text().ends_with("\tsimilar"));
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Identifiers, hit records and comparison types
//! - [`parsing`]: Parser for BLAST tabular files
//! - [`matching`]: Reconciliation of two result sets
//! - [`entrez`]: NCBI Entrez metadata lookup
//! - [`cli`]: Command-line interface implementation

pub mod cli;
pub mod core;
pub mod entrez;
pub mod matching;
pub mod parsing;
pub mod utils;

// Re-export commonly used types for convenience
pub use crate::core::hit::HitRecord;
pub use crate::core::identifier::{parse_identifiers, Identifier};
pub use crate::core::types::*;
pub use crate::matching::reconcile::{reconcile, reconcile_with, HitPartition, ReconcileConfig};
