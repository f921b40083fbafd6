//! Satisfaction-degree kernel (C3): the geometric weighted-signed-distance score of a state
//! against a [`DomainOfValidity`], normalised into `[-1, 1]`.
//!
//! Routed through two pure functions, [`weighted_signed_distance`] and [`find_extreme_state`], so
//! the kernel is unit-testable without a graph — exactly as required by the component design.

use crate::domain::DomainOfValidity;

/// The one configuration knob the spec leaves open: how much weight each axis' deviation carries
/// in the aggregated signed distance. The default reproduces `wᵢ = 1 / max_vᵢ` (or `1` when
/// `max_vᵢ = 0`), i.e. every axis contributes in proportion to its own range.
#[derive(Clone, Debug, Default)]
pub struct KernelConfig {
    weights: Option<Vec<f64>>,
}

impl KernelConfig {
    /// Use an explicit per-axis weight vector instead of the default `1/max_v` normalisation.
    pub fn with_weights(weights: Vec<f64>) -> Self {
        KernelConfig {
            weights: Some(weights),
        }
    }

    fn weight_for_axis(&self, axis: usize, max_values: &[u32]) -> f64 {
        if let Some(weights) = &self.weights {
            return weights[axis];
        }
        let max_v = max_values[axis];
        if max_v == 0 { 1.0 } else { 1.0 / max_v as f64 }
    }
}

/// Step 1-2 of the kernel: the weighted signed distance from `state` to `dov`.
///
/// Per axis, the deviation is `0` if the coordinate already lies inside the axis's valid set,
/// otherwise the negated distance to the nearest valid value on that axis. The per-axis
/// deviations are combined with [`KernelConfig`]'s weights into a single signed real.
pub fn weighted_signed_distance(
    dov: &DomainOfValidity,
    state: &[u32],
    max_values: &[u32],
    config: &KernelConfig,
) -> f64 {
    let mut total = 0.0;
    for axis in 0..dov.num_axes() {
        let coord = state[axis];
        let valid = dov.axis(axis);
        let deviation = axis_deviation(coord, valid);
        total += config.weight_for_axis(axis, max_values) * deviation;
    }
    total
}

/// The signed deviation of a single coordinate from a single axis's valid set: `0` when inside,
/// otherwise the negated distance to the closest valid value.
fn axis_deviation(coord: u32, valid: &[u32]) -> f64 {
    if valid.binary_search(&coord).is_ok() {
        return 0.0;
    }
    if valid.is_empty() {
        // No valid value on this axis at all; treat as maximally far within the representable
        // range, so callers still get a finite, strictly-negative deviation.
        return -(coord as f64);
    }
    let nearest = valid
        .iter()
        .map(|&v| (v as i64 - coord as i64).abs())
        .min()
        .unwrap();
    -(nearest as f64)
}

/// Step 3 of the kernel: the extreme (best or worst) corner of the ambient box with respect to
/// `dov`, and the weighted signed distance attained there.
///
/// `positive_side` selects which extreme to compute: `true` looks for the *best* achievable value
/// (the corner deepest inside `dov`), `false` for the *worst* (the corner furthest outside it).
/// Per axis this reduces to picking, independently, whichever endpoint of `0..=max_v` is furthest
/// from / closest to the axis's valid set, so the search is linear in the number of axes rather
/// than exponential in the number of states.
pub fn find_extreme_state(
    dov: &DomainOfValidity,
    max_values: &[u32],
    positive_side: bool,
    config: &KernelConfig,
) -> (Vec<u32>, f64) {
    let mut extreme_state = Vec::with_capacity(dov.num_axes());
    for axis in 0..dov.num_axes() {
        let max_v = max_values[axis];
        let valid = dov.axis(axis);
        let candidates: [u32; 2] = [0, max_v];
        let chosen = candidates
            .into_iter()
            .max_by(|&a, &b| {
                let da = axis_deviation(a, valid);
                let db = axis_deviation(b, valid);
                let key_a = if positive_side { da } else { -da };
                let key_b = if positive_side { db } else { -db };
                key_a.partial_cmp(&key_b).unwrap()
            })
            .unwrap();
        extreme_state.push(chosen);
    }
    let value = weighted_signed_distance(dov, &extreme_state, max_values, config);
    (extreme_state, value)
}

/// The full kernel: score a single state against an atomic proposition's domain of validity,
/// normalised to `[-1, 1]` (steps 1-4 of the component design).
pub fn score_against_domain(
    dov: &DomainOfValidity,
    state: &[u32],
    max_values: &[u32],
    config: &KernelConfig,
) -> f64 {
    let wsd = weighted_signed_distance(dov, state, max_values, config);
    let (_, ext_wsd) = find_extreme_state(dov, max_values, wsd >= 0.0, config);
    let score = if ext_wsd != 0.0 {
        wsd / ext_wsd.abs()
    } else {
        1.0
    };
    score.clamp(-1.0, 1.0)
}
