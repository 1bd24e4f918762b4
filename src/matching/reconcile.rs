use serde::Serialize;
use tracing::debug;

use crate::core::hit::HitRecord;
use crate::core::types::HitStatus;

/// Options for reconciling two result sets
#[derive(Debug, Clone)]
pub struct ReconcileConfig {
    /// Require identical subject identifiers for a match. Turn off to pair
    /// hits whose database entry was re-accessioned between runs.
    pub check_ids: bool,
}

impl Default for ReconcileConfig {
    fn default() -> Self {
        Self { check_ids: true }
    }
}

/// A hit together with the status the reconciler assigned to it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnnotatedHit {
    pub hit: HitRecord,

    /// `None` when no counterpart was found
    pub status: Option<HitStatus>,
}

impl AnnotatedHit {
    #[must_use]
    pub fn to_text(&self) -> String {
        self.hit.to_text(self.status)
    }
}

/// One side of a reconciliation
#[derive(Debug, Clone, Default, Serialize)]
pub struct HitPartition {
    /// Hits with an exact counterpart
    pub same: Vec<AnnotatedHit>,

    /// Hits with a counterpart that differs in e-value or alignment statistics
    pub similar: Vec<AnnotatedHit>,

    /// Hits without a counterpart
    pub unknown: Vec<AnnotatedHit>,

    /// The untouched input, in order
    pub all: Vec<HitRecord>,
}

/// Bucket sizes of a [`HitPartition`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PartitionCounts {
    pub same: usize,
    pub similar: usize,
    pub unknown: usize,
    pub total: usize,
}

impl HitPartition {
    fn new(all: &[HitRecord]) -> Self {
        Self {
            all: all.to_vec(),
            ..Self::default()
        }
    }

    fn push_matched(&mut self, hit: &HitRecord, status: HitStatus) {
        let annotated = AnnotatedHit {
            hit: hit.clone(),
            status: Some(status),
        };
        match status {
            HitStatus::Equal => self.same.push(annotated),
            HitStatus::Similar => self.similar.push(annotated),
        }
    }

    fn push_unknown(&mut self, hit: &HitRecord) {
        self.unknown.push(AnnotatedHit {
            hit: hit.clone(),
            status: None,
        });
    }

    #[must_use]
    pub fn counts(&self) -> PartitionCounts {
        PartitionCounts {
            same: self.same.len(),
            similar: self.similar.len(),
            unknown: self.unknown.len(),
            total: self.all.len(),
        }
    }

    /// All classified hits: same, then similar, then unknown
    pub fn annotated(&self) -> impl Iterator<Item = &AnnotatedHit> {
        self.same
            .iter()
            .chain(self.similar.iter())
            .chain(self.unknown.iter())
    }
}

/// Reconcile two hit lists with the default configuration.
///
/// See [`reconcile_with`].
#[must_use]
pub fn reconcile(a: &[HitRecord], b: &[HitRecord]) -> (HitPartition, HitPartition) {
    reconcile_with(a, b, &ReconcileConfig::default())
}

/// Pair hits of `a` with hits of `b` and classify both sides.
///
/// Each hit of `a`, in order, is paired with the first not-yet-paired hit of
/// `b` that it matches, so every hit ends up paired at most once. Hits left
/// over on either side are `unknown`. When several hits of `b` could match
/// the same hit of `a`, the earliest one wins.
#[must_use]
pub fn reconcile_with(
    a: &[HitRecord],
    b: &[HitRecord],
    config: &ReconcileConfig,
) -> (HitPartition, HitPartition) {
    let mut result_a = HitPartition::new(a);
    let mut result_b = HitPartition::new(b);
    let mut used = vec![false; b.len()];

    for hit_a in a {
        let paired = b.iter().enumerate().find_map(|(idx, hit_b)| {
            if used[idx] {
                return None;
            }
            hit_a
                .compare_with(hit_b, config.check_ids)
                .status()
                .map(|status| (idx, status))
        });

        match paired {
            Some((idx, status)) => {
                used[idx] = true;
                result_a.push_matched(hit_a, status);
                result_b.push_matched(&b[idx], status);
            }
            None => result_a.push_unknown(hit_a),
        }
    }

    for (hit_b, _) in b.iter().zip(&used).filter(|(_, used)| !**used) {
        result_b.push_unknown(hit_b);
    }

    debug!(
        "Reconciled {} vs {} hits: {} equal, {} similar, {}/{} unknown",
        a.len(),
        b.len(),
        result_a.same.len(),
        result_a.similar.len(),
        result_a.unknown.len(),
        result_b.unknown.len(),
    );

    (result_a, result_b)
}
