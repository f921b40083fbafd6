//! Domain-of-Validity engine (C2): axis-aligned integer boxes over the state space, and the
//! `intersect`/`union` combinators atomic formulae are built from.

use crate::kripke::Variable;

/// An `n`-dimensional axis-aligned integer box: one sorted, deduplicated set of valid values per
/// variable, in variable order. A state is *inside* the box iff every coordinate lies in its
/// axis's set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DomainOfValidity {
    axes: Vec<Vec<u32>>,
}

impl DomainOfValidity {
    /// The ambient (full) box over the given variables: every axis ranges over `0..=max_v`.
    pub fn full(variables: &[Variable]) -> Self {
        DomainOfValidity {
            axes: variables
                .iter()
                .map(|v| (0..=v.max_value).collect())
                .collect(),
        }
    }

    /// Build a box directly from per-axis value sets (used by tests and by the atomic
    /// constructors below). Each axis is sorted and deduplicated.
    pub fn from_axes(mut axes: Vec<Vec<u32>>) -> Self {
        for axis in &mut axes {
            axis.sort_unstable();
            axis.dedup();
        }
        DomainOfValidity { axes }
    }

    pub fn num_axes(&self) -> usize {
        self.axes.len()
    }

    pub fn axis(&self, index: usize) -> &[u32] {
        &self.axes[index]
    }

    /// Whether `state` lies inside the box.
    pub fn contains(&self, state: &[u32]) -> bool {
        state
            .iter()
            .zip(self.axes.iter())
            .all(|(coord, axis)| axis.binary_search(coord).is_ok())
    }

    /// Restrict axis `index` to `[lo, hi]` intersected with its current set of valid values.
    /// `lo`/`hi` are signed so atomic constraints like `x <= -1` collapse the axis to empty
    /// rather than wrapping, instead of having to pre-clamp at every call site.
    pub fn restrict_axis(&self, index: usize, lo: i64, hi: i64) -> Self {
        let mut axes = self.axes.clone();
        axes[index].retain(|&v| (v as i64) >= lo && (v as i64) <= hi);
        DomainOfValidity { axes }
    }

    /// Per-axis intersection with `other`.
    pub fn intersect(&self, other: &DomainOfValidity) -> Self {
        let axes = self
            .axes
            .iter()
            .zip(other.axes.iter())
            .map(|(a, b)| intersect_sorted(a, b))
            .collect();
        DomainOfValidity { axes }
    }

    /// Per-axis union with `other`. Note this yields the bounding box of the union, not the exact
    /// (possibly non-convex) union of the two regions — see the `Union` atomic formula for why
    /// that is the right trade-off here.
    pub fn union(&self, other: &DomainOfValidity) -> Self {
        let axes = self
            .axes
            .iter()
            .zip(other.axes.iter())
            .map(|(a, b)| union_sorted(a, b))
            .collect();
        DomainOfValidity { axes }
    }
}

fn intersect_sorted(a: &[u32], b: &[u32]) -> Vec<u32> {
    a.iter().copied().filter(|v| b.binary_search(v).is_ok()).collect()
}

fn union_sorted(a: &[u32], b: &[u32]) -> Vec<u32> {
    let mut merged: Vec<u32> = a.iter().chain(b.iter()).copied().collect();
    merged.sort_unstable();
    merged.dedup();
    merged
}
