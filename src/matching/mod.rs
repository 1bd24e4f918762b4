//! Reconciliation of two BLAST result sets.
//!
//! Two runs of the same search rarely produce byte-identical output: the
//! database grows (changing e-values), and BLAST versions place gaps
//! differently. [`reconcile`] pairs hits that describe the same alignment
//! and sorts both sides into three buckets:
//!
//! - **same**: identical hit in the other run
//! - **similar**: same alignment, but e-value or alignment statistics changed
//! - **unknown**: no counterpart in the other run
//!
//! ## Example
//!
//! ```rust,no_run
//! use blast_diff::matching::reconcile;
//! use blast_diff::parsing::tabular::parse_tabular_file;
//! use std::path::Path;
//!
//! let run1 = parse_tabular_file(Path::new("run1.tsv")).unwrap();
//! let run2 = parse_tabular_file(Path::new("run2.tsv")).unwrap();
//!
//! let (a, b) = reconcile(&run1, &run2);
//! println!("{:?} / {:?}", a.counts(), b.counts());
//!
//! for hit in &b.unknown {
//!     print!("{}", hit.to_text());
//! }
//! ```

pub mod reconcile;

pub use reconcile::{
    reconcile, reconcile_with, AnnotatedHit, HitPartition, PartitionCounts, ReconcileConfig,
};
