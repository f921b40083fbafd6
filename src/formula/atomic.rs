//! The DoV-level atomic sub-language: `AtomicProp`, transient `Negation`, `Union`, `Intersection`.
//!
//! These are kept as their own small recursive enum, nested inside [`crate::formula::tree::Formula`],
//! rather than flattened into the state-level formula tree — they are the only nodes that ever
//! `yield_dov`, and the recursion here is strictly shallower than the full tree's.

use std::fmt;

use crate::domain::DomainOfValidity;
use crate::error::ModelCheckingError;
use crate::formula::operators::ComparisonOp;
use crate::kripke::Variable;

/// A constraint tree that bottoms out in `(variable OP value)` propositions and combines them with
/// DoV-level union/intersection. `Negation` is only ever present transiently, before
/// [`eliminate_negation`](crate::formula::negation::eliminate_negation) runs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AtomicFormula {
    Prop {
        variable: String,
        op: ComparisonOp,
        value: i64,
    },
    Negation(Box<AtomicFormula>),
    Union(Box<AtomicFormula>, Box<AtomicFormula>),
    Intersection(Box<AtomicFormula>, Box<AtomicFormula>),
}

impl AtomicFormula {
    pub fn prop(variable: impl Into<String>, op: ComparisonOp, value: i64) -> Self {
        AtomicFormula::Prop {
            variable: variable.into(),
            op,
            value,
        }
    }

    pub fn negation(operand: AtomicFormula) -> Self {
        AtomicFormula::Negation(Box::new(operand))
    }

    pub fn union(left: AtomicFormula, right: AtomicFormula) -> Self {
        AtomicFormula::Union(Box::new(left), Box::new(right))
    }

    pub fn intersection(left: AtomicFormula, right: AtomicFormula) -> Self {
        AtomicFormula::Intersection(Box::new(left), Box::new(right))
    }

    /// Push negation down to the `Prop` leaves and eliminate it, per the `negate()` rules of the
    /// component design: `x >= k -> x <= k-1`, `x <= k -> x >= k+1`, De Morgan across
    /// `Union`/`Intersection`, and double-negation cancellation.
    pub fn negate(&self) -> AtomicFormula {
        match self {
            AtomicFormula::Prop { variable, op, value } => {
                let (flipped_op, flipped_value) = match op {
                    ComparisonOp::Ge => (ComparisonOp::Le, value - 1),
                    ComparisonOp::Le => (ComparisonOp::Ge, value + 1),
                };
                AtomicFormula::Prop {
                    variable: variable.clone(),
                    op: flipped_op,
                    value: flipped_value,
                }
            }
            AtomicFormula::Negation(inner) => inner.eliminate_negation(),
            AtomicFormula::Union(l, r) => {
                AtomicFormula::intersection(l.negate(), r.negate())
            }
            AtomicFormula::Intersection(l, r) => {
                AtomicFormula::union(l.negate(), r.negate())
            }
        }
    }

    /// Rewrite `self` into an equivalent, negation-free tree: `Negation` nodes anywhere (not just
    /// at the root) are pushed to the `Prop` leaves and cancelled. Pure — returns a new tree.
    pub fn eliminate_negation(&self) -> AtomicFormula {
        match self {
            AtomicFormula::Prop { .. } => self.clone(),
            AtomicFormula::Negation(inner) => inner.negate(),
            AtomicFormula::Union(l, r) => {
                AtomicFormula::union(l.eliminate_negation(), r.eliminate_negation())
            }
            AtomicFormula::Intersection(l, r) => {
                AtomicFormula::intersection(l.eliminate_negation(), r.eliminate_negation())
            }
        }
    }

    /// The domain of validity of this atomic formula, restricting `ambient` axis by axis.
    /// Must only be called on a normalised (negation-free) tree.
    pub fn yield_dov(
        &self,
        ambient: &DomainOfValidity,
        variables: &[Variable],
    ) -> Result<DomainOfValidity, ModelCheckingError> {
        match self {
            AtomicFormula::Prop { variable, op, value } => {
                let index = variable_index(variable, variables);
                let max_v = variables[index].max_value as i64;
                let (lo, hi) = match op {
                    ComparisonOp::Ge => (value.max(0), max_v),
                    ComparisonOp::Le => (0, (*value).min(max_v)),
                };
                Ok(ambient.restrict_axis(index, lo, hi))
            }
            AtomicFormula::Negation(_) => Err(ModelCheckingError::NegationNotEliminated {
                subformula_key: self.to_string(),
            }),
            AtomicFormula::Union(l, r) => {
                Ok(l.yield_dov(ambient, variables)?.union(&r.yield_dov(ambient, variables)?))
            }
            AtomicFormula::Intersection(l, r) => Ok(l
                .yield_dov(ambient, variables)?
                .intersect(&r.yield_dov(ambient, variables)?)),
        }
    }
}

fn variable_index(name: &str, variables: &[Variable]) -> usize {
    variables
        .iter()
        .position(|v| v.name == name)
        .unwrap_or_else(|| panic!("atomic formula references unknown variable `{name}`"))
}

impl fmt::Display for AtomicFormula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AtomicFormula::Prop { variable, op, value } => {
                write!(f, "({variable} {op} {value})")
            }
            AtomicFormula::Negation(inner) => write!(f, "!{inner}"),
            AtomicFormula::Union(l, r) => write!(f, "({l} | {r})"),
            AtomicFormula::Intersection(l, r) => write!(f, "({l} & {r})"),
        }
    }
}
