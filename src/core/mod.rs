//! Core data types for BLAST hit comparison.
//!
//! - [`Identifier`]: One `(database tag, accession)` pair from a subject id field
//! - [`HitRecord`]: One parsed line of BLAST extended tabular output
//! - [`HitStatus`], [`Difference`], [`Comparison`]: Comparison outcomes
//!
//! ## Subject ids
//!
//! BLAST writes subject ids as pipe-delimited tag/accession runs:
//!
//! | Field | Identifiers |
//! |-------|-------------|
//! | `gi\|312836823\|gb\|CP002323.1\|` | (gi, 312836823), (gb, CP002323.1) |
//! | `ref\|NC_000913.3\|` | (ref, NC_000913.3) |
//!
//! Tokens shorter than five characters are taken as tags, longer ones as
//! accessions. There is no list of known databases.

pub mod hit;
pub mod identifier;
pub mod types;

pub use hit::HitRecord;
pub use identifier::Identifier;
pub use types::{Comparison, Difference, HitStatus};
