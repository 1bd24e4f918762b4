//! Parser for BLAST tabular output (`-outfmt 6` / `-outfmt 7`).
//!
//! Lines starting with `#` (the comment block written by `-outfmt 7`) and
//! blank lines are skipped. Every other line must carry the extended field
//! set described in [`crate::core::hit`].
//!
//! Supported extensions:
//! - any plain-text extension (`.tsv`, `.txt`, `.blast`, `.out`, ...)
//! - `.gz`, `.bgz` (gzip/bgzip compressed)

use std::io::{BufRead, BufReader};
use std::path::Path;

use flate2::read::MultiGzDecoder;
use thiserror::Error;
use tracing::debug;

use crate::core::hit::{HitParseError, HitRecord};
use crate::utils::validation::{check_hit_limit, MAX_HITS};

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid hit on line {line}: {source}")]
    InvalidLine {
        line: usize,
        #[source]
        source: HitParseError,
    },

    #[error("Too many hits: {0} exceeds maximum allowed ({MAX_HITS})")]
    TooManyHits(usize),
}

fn is_gzipped(path: &Path) -> bool {
    let path_str = path.to_string_lossy().to_lowercase();
    path_str.ends_with(".gz") || path_str.ends_with(".bgz")
}

/// Parse a BLAST tabular file, decompressing it first if it is gzipped
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, or other parse errors
/// if the content is invalid.
pub fn parse_tabular_file(path: &Path) -> Result<Vec<HitRecord>, ParseError> {
    let file = std::fs::File::open(path)?;

    let hits = if is_gzipped(path) {
        parse_tabular_reader(BufReader::new(MultiGzDecoder::new(file)))?
    } else {
        parse_tabular_reader(BufReader::new(file))?
    };

    debug!("Parsed {} hits from {}", hits.len(), path.display());
    Ok(hits)
}

/// Parse BLAST tabular text
///
/// # Errors
///
/// Returns `ParseError::InvalidLine` if a data line has too few fields, or
/// `ParseError::TooManyHits` if the limit is exceeded.
pub fn parse_tabular_text(text: &str) -> Result<Vec<HitRecord>, ParseError> {
    parse_tabular_reader(text.as_bytes())
}

/// Parse BLAST tabular lines from any buffered reader. Line terminators are
/// kept on each [`HitRecord::raw`].
///
/// # Errors
///
/// Returns `ParseError::Io` on read failure, `ParseError::InvalidLine` if a
/// data line has too few fields, or `ParseError::TooManyHits` if the limit
/// is exceeded.
pub fn parse_tabular_reader<R: BufRead>(mut reader: R) -> Result<Vec<HitRecord>, ParseError> {
    let mut hits = Vec::new();
    let mut buf = String::new();
    let mut line_num = 0;

    loop {
        buf.clear();
        if reader.read_line(&mut buf)? == 0 {
            break;
        }
        line_num += 1;

        let content = buf.trim();
        if content.is_empty() || content.starts_with('#') {
            continue;
        }

        if check_hit_limit(hits.len()).is_some() {
            return Err(ParseError::TooManyHits(hits.len()));
        }

        let hit = HitRecord::parse(&buf).map_err(|source| ParseError::InvalidLine {
            line: line_num,
            source,
        })?;
        hits.push(hit);
    }

    Ok(hits)
}
