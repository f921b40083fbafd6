//! Formula AST and normalisation (C4).

pub mod atomic;
pub mod negation;
pub mod operators;
pub mod tree;

pub use atomic::AtomicFormula;
pub use negation::eliminate_negation;
pub use operators::ComparisonOp;
pub use tree::{get_subformulae, Formula};
