//! Hit metadata from NCBI Entrez.
//!
//! BLAST subject ids only carry accession numbers. This module looks the
//! accessions up with the E-utilities `esummary` endpoint to find out when a
//! record was created or last updated and whether it is still live, which
//! explains most `unknown` hits between two runs against a growing database.
//!
//! ## Example
//!
//! ```rust,no_run
//! use blast_diff::entrez::{EntrezClient, EntrezConfig};
//! use blast_diff::parsing::tabular::parse_tabular_file;
//! use std::path::Path;
//!
//! let hits = parse_tabular_file(Path::new("run1.tsv")).unwrap();
//! let client = EntrezClient::new(EntrezConfig::new("someone@example.org")).unwrap();
//!
//! for (uid, summary) in client.fetch_for_hits(&hits, "gi").unwrap() {
//!     println!("{uid}\t{}\t{}", summary.update_date, summary.title);
//! }
//! ```

pub mod client;
pub mod summary;

pub use client::{EntrezClient, EntrezConfig, FetchError};
pub use summary::{collect_accessions, parse_esummary, DocumentSummary};
