//! The worklist-based fixed-point engine shared by AG/EG/AF/EF/AU/EU (C5).
//!
//! AG/EG are the greatest fixed point of `φ(s) ∧ ⊙_{t∈succ(s)} T(t)` (⊙ = min for AG, max for EG);
//! AF/EF are the least fixed point of `φ(s) ∨ ⊙_{t∈succ(s)} T(t)` (⊙ = min for AF, max for EF).
//! Both families are iterated from their respective lattice extreme (+1 for the descending GFP
//! operators, -1 for the ascending LFP ones) via a FIFO worklist + membership bitset, which by the
//! Tarski/Knaster argument converges to the same fixed point regardless of pop order.
//!
//! AU/EU fold the same loop over a different recurrence (`ψ(s) ∨ (φ(s) ∧ ⊙_succ T(t))`), seeded
//! directly from `ψ` rather than from a lattice extreme, since that recurrence already has a
//! concrete value at every state before the loop starts.

use std::collections::VecDeque;

use log::trace;

/// Which operator family a worklist run realises.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GlobalFutureKind {
    Ag,
    Eg,
    Af,
    Ef,
}

impl GlobalFutureKind {
    fn is_descending(self) -> bool {
        matches!(self, GlobalFutureKind::Ag | GlobalFutureKind::Eg)
    }

    fn neutral(self) -> f64 {
        if self.is_descending() { 1.0 } else { -1.0 }
    }

    fn successor_fold(self, values: impl Iterator<Item = f64>) -> f64 {
        match self {
            GlobalFutureKind::Ag | GlobalFutureKind::Af => {
                values.fold(f64::INFINITY, f64::min)
            }
            GlobalFutureKind::Eg | GlobalFutureKind::Ef => {
                values.fold(f64::NEG_INFINITY, f64::max)
            }
        }
    }

    fn combine(self, phi_s: f64, successor_aggregate: f64) -> f64 {
        match self {
            GlobalFutureKind::Ag | GlobalFutureKind::Eg => phi_s.min(successor_aggregate),
            GlobalFutureKind::Af | GlobalFutureKind::Ef => phi_s.max(successor_aggregate),
        }
    }

    fn improves(self, new: f64, current: f64) -> bool {
        if self.is_descending() { new < current } else { new > current }
    }
}

/// Run the AG/EG/AF/EF fixed point. `phi` is the already-finalised score of the operand at every
/// state (indexed by dense state id); `successors`/`predecessors` are adjacency lists over the
/// same dense ids. Returns the final score at every state id.
pub fn run_global_future(
    kind: GlobalFutureKind,
    successors: &[Vec<usize>],
    predecessors: &[Vec<usize>],
    phi: &[f64],
) -> Vec<f64> {
    let num_states = phi.len();
    let neutral = kind.neutral();
    let mut current: Vec<Option<f64>> = vec![None; num_states];
    let mut in_queue = vec![true; num_states];
    let mut queue: VecDeque<usize> = (0..num_states).collect();
    let mut updates = 0u64;

    while let Some(s) = queue.pop_front() {
        in_queue[s] = false;
        let successor_aggregate =
            kind.successor_fold(successors[s].iter().map(|&t| current[t].unwrap_or(neutral)));
        let new = kind.combine(phi[s], successor_aggregate);
        let should_update = match current[s] {
            None => true,
            Some(existing) => kind.improves(new, existing),
        };
        if should_update {
            current[s] = Some(new);
            updates += 1;
            for &p in &predecessors[s] {
                if !in_queue[p] {
                    in_queue[p] = true;
                    queue.push_back(p);
                }
            }
        }
    }

    trace!("worklist {kind:?} converged after {updates} updates over {num_states} states");
    current.into_iter().map(|v| v.unwrap_or(neutral)).collect()
}

/// Which until variant a worklist run realises.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UntilKind {
    Au,
    Eu,
}

impl UntilKind {
    fn successor_fold(self, values: impl Iterator<Item = f64>) -> f64 {
        match self {
            UntilKind::Au => values.fold(f64::INFINITY, f64::min),
            UntilKind::Eu => values.fold(f64::NEG_INFINITY, f64::max),
        }
    }
}

/// Run the AU/EU fixed point. `phi`/`psi` are the already-finalised scores of the left/right
/// operands at every state. Returns the final score at every state id.
pub fn run_until(
    kind: UntilKind,
    successors: &[Vec<usize>],
    predecessors: &[Vec<usize>],
    phi: &[f64],
    psi: &[f64],
) -> Vec<f64> {
    let num_states = phi.len();
    let mut current: Vec<f64> = psi.to_vec();
    let mut in_queue = vec![true; num_states];
    let mut queue: VecDeque<usize> = (0..num_states).collect();
    let mut updates = 0u64;

    while let Some(s) = queue.pop_front() {
        in_queue[s] = false;
        let successor_aggregate =
            kind.successor_fold(successors[s].iter().map(|&t| current[t]));
        let extend = phi[s].min(successor_aggregate);
        if extend > current[s] {
            current[s] = extend;
            updates += 1;
            for &p in &predecessors[s] {
                if !in_queue[p] {
                    in_queue[p] = true;
                    queue.push_back(p);
                }
            }
        }
    }

    trace!("worklist {kind:?} converged after {updates} updates over {num_states} states");
    current
}
