//! Centralized validation and helper functions.

/// Maximum number of hits allowed in a single file (DOS protection)
pub const MAX_HITS: usize = 1_000_000;

/// Maximum number of accessions sent in one esummary request
pub const MAX_ACCESSIONS_PER_REQUEST: usize = 10_000;

/// Check if adding another hit would exceed the maximum allowed.
///
/// Call this with the current count BEFORE adding a new hit.
/// Returns an error message if adding would exceed the limit, None if safe to add.
///
/// # Example
/// ```ignore
/// if check_hit_limit(hits.len()).is_some() {
///     return Err(...);
/// }
/// hits.push(new_hit); // Safe to add
/// ```
#[must_use]
pub fn check_hit_limit(count: usize) -> Option<String> {
    if count >= MAX_HITS {
        Some(format!(
            "Too many hits: adding another would exceed maximum of {MAX_HITS}"
        ))
    } else {
        None
    }
}

/// Validate a contact email for NCBI E-utilities.
///
/// NCBI only needs an address it can reach; this rejects values that are
/// obviously not one.
///
/// # Examples
///
/// ```
/// use blast_diff::utils::validation::is_plausible_email;
///
/// assert!(is_plausible_email("someone@example.org"));
/// assert!(!is_plausible_email(""));
/// assert!(!is_plausible_email("no-at-sign"));
/// assert!(!is_plausible_email("two words@example.org"));
/// ```
#[must_use]
pub fn is_plausible_email(s: &str) -> bool {
    let Some((local, domain)) = s.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.is_empty()
        && !s.chars().any(char::is_whitespace)
        && !domain.contains('@')
}
