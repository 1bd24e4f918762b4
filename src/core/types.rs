use serde::{Deserialize, Serialize};

/// Reconciliation status of a hit that was found in the other result set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HitStatus {
    /// Every compared field is identical
    Equal,
    /// Same alignment, but e-value or alignment statistics drifted
    Similar,
}

impl HitStatus {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Equal => "equal",
            Self::Similar => "similar",
        }
    }
}

impl std::fmt::Display for HitStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Tolerated difference between two matching hits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Difference {
    /// E-value text differs (usually database growth)
    #[serde(rename = "eValue")]
    EValue,
    /// Identities, score, positives, gaps, mismatches or raw alignment strings differ
    #[serde(rename = "alignment")]
    Alignment,
}

impl std::fmt::Display for Difference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EValue => write!(f, "eValue"),
            Self::Alignment => write!(f, "alignment"),
        }
    }
}

/// Outcome of comparing two hits
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Comparison {
    /// A hard field disagrees; the hits describe different alignments
    Mismatch,
    /// Same alignment, with zero or more tolerated differences
    Match(Vec<Difference>),
}

impl Comparison {
    #[must_use]
    pub fn is_match(&self) -> bool {
        matches!(self, Self::Match(_))
    }

    /// Tolerated differences, or `None` for a mismatch
    #[must_use]
    pub fn differences(&self) -> Option<&[Difference]> {
        match self {
            Self::Mismatch => None,
            Self::Match(diffs) => Some(diffs),
        }
    }

    /// Status both hits receive when they are paired by the reconciler
    #[must_use]
    pub fn status(&self) -> Option<HitStatus> {
        match self {
            Self::Mismatch => None,
            Self::Match(diffs) if diffs.is_empty() => Some(HitStatus::Equal),
            Self::Match(_) => Some(HitStatus::Similar),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_text() {
        assert_eq!(HitStatus::Equal.to_string(), "equal");
        assert_eq!(HitStatus::Similar.to_string(), "similar");
    }

    #[test]
    fn test_difference_text() {
        assert_eq!(Difference::EValue.to_string(), "eValue");
        assert_eq!(Difference::Alignment.to_string(), "alignment");
        assert_eq!(
            serde_json::to_string(&Difference::EValue).unwrap(),
            "\"eValue\""
        );
    }

    #[test]
    fn test_comparison_status() {
        assert_eq!(Comparison::Mismatch.status(), None);
        assert_eq!(Comparison::Match(vec![]).status(), Some(HitStatus::Equal));
        assert_eq!(
            Comparison::Match(vec![Difference::EValue]).status(),
            Some(HitStatus::Similar)
        );
    }

    #[test]
    fn test_comparison_differences() {
        assert!(Comparison::Mismatch.differences().is_none());
        assert!(!Comparison::Mismatch.is_match());

        let cmp = Comparison::Match(vec![Difference::Alignment]);
        assert!(cmp.is_match());
        assert_eq!(cmp.differences(), Some(&[Difference::Alignment][..]));
    }
}
