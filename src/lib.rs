//! A small library for quantitative CTL model checking over finite Kripke structures whose states
//! are integer vectors.
//!
//! As of now, the library supports:
//!  - The full CTL operator set (`AG`/`EG`/`AF`/`EF`/`AX`/`EX`/`AU`/`EU`/`AW`/`EW`, conjunction,
//!    disjunction, negation) evaluated to a satisfaction *degree* in `[-1, 1]` rather than a
//!    Boolean truth value.
//!  - A domain-of-validity sub-language for atomic propositions (`x >= k`, `x <= k`, and their
//!    union/intersection), scored geometrically against the state space.
//!  - Worklist-based fixed-point evaluation shared across the monotone temporal operators.
//!  - A thin `KripkeStructure` trait for plugging in an externally-built transition graph, plus a
//!    ready-to-use explicit, adjacency-map-backed implementation.

pub mod domain;
pub mod error;
pub mod evaluation;
pub mod formula;
pub mod kernel;
pub mod kripke;
pub mod model_checking;

pub use error::ModelCheckingError;
pub use formula::{AtomicFormula, ComparisonOp, Formula};
pub use kernel::KernelConfig;
pub use kripke::{ExplicitKripkeStructure, KripkeStructure, State, Variable};
pub use model_checking::{evaluate, evaluate_with_config, EvaluationTable};
