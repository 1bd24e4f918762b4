use serde::{Deserialize, Serialize};

/// Tokens shorter than this are database tags, longer ones are accessions
pub const MIN_ACCESSION_LEN: usize = 5;

/// One accession reference from a pipe-delimited subject id field
/// (e.g. `gi|123456789|gb|AB012345.1|`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Identifier {
    /// Database tag (`gi`, `gb`, `ref`, `emb`, ...)
    pub database_tag: String,

    /// Accession number within that database
    pub accession_number: String,
}

impl Identifier {
    pub fn new(database_tag: impl Into<String>, accession_number: impl Into<String>) -> Self {
        Self {
            database_tag: database_tag.into(),
            accession_number: accession_number.into(),
        }
    }
}

impl std::fmt::Display for Identifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}|{}", self.database_tag, self.accession_number)
    }
}

/// Parse a pipe-delimited id field into (tag, accession) pairs.
///
/// A token shorter than [`MIN_ACCESSION_LEN`] opens a new tag; every token
/// directly after it that is at least that long becomes an accession for the
/// tag. Accessions that appear before any tag are dropped. Malformed input
/// yields fewer identifiers, never an error.
///
/// # Examples
///
/// ```
/// use blast_diff::core::identifier::{parse_identifiers, Identifier};
///
/// let ids = parse_identifiers("gb|ABC123|gi|456789");
/// assert_eq!(
///     ids,
///     vec![Identifier::new("gb", "ABC123"), Identifier::new("gi", "456789")]
/// );
/// assert!(parse_identifiers("").is_empty());
/// ```
#[must_use]
pub fn parse_identifiers(raw: &str) -> Vec<Identifier> {
    let mut ids = Vec::new();
    let mut current_tag: Option<&str> = None;

    for token in raw.trim_matches('|').split('|') {
        if token.chars().count() < MIN_ACCESSION_LEN {
            current_tag = Some(token);
        } else if let Some(tag) = current_tag {
            ids.push(Identifier::new(tag, token));
        }
    }

    ids
}
