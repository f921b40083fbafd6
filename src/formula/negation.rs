//! The single entry point the driver calls before subformula enumeration: push every transient
//! `Negation` node down to the atomic leaves and eliminate it.

use crate::formula::tree::Formula;

/// Rewrite `root` into an equivalent tree with no `Negation` node anywhere. Pure: returns a new
/// tree rather than mutating `root` in place, so callers can keep treating formulae as immutable
/// and share subtrees across calls.
pub fn eliminate_negation(root: &Formula) -> Formula {
    match root {
        Formula::Atomic(inner) => Formula::Atomic(inner.eliminate_negation()),
        Formula::Boolean(_) => root.clone(),
        Formula::Ag(phi) => Formula::ag(eliminate_negation(phi)),
        Formula::Eg(phi) => Formula::eg(eliminate_negation(phi)),
        Formula::Af(phi) => Formula::af(eliminate_negation(phi)),
        Formula::Ef(phi) => Formula::ef(eliminate_negation(phi)),
        Formula::Ax(phi) => Formula::ax(eliminate_negation(phi)),
        Formula::Ex(phi) => Formula::ex(eliminate_negation(phi)),
        Formula::Conjunction(l, r) => {
            Formula::conjunction(eliminate_negation(l), eliminate_negation(r))
        }
        Formula::Disjunction(l, r) => {
            Formula::disjunction(eliminate_negation(l), eliminate_negation(r))
        }
        Formula::Au(l, r) => Formula::au(eliminate_negation(l), eliminate_negation(r)),
        Formula::Eu(l, r) => Formula::eu(eliminate_negation(l), eliminate_negation(r)),
        Formula::Aw(l, r) => Formula::aw(eliminate_negation(l), eliminate_negation(r)),
        Formula::Ew(l, r) => Formula::ew(eliminate_negation(l), eliminate_negation(r)),
    }
}
