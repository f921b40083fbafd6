//! Error taxonomy for the model-checking core (see the error-handling design section of the spec).
//!
//! Every fallible entry point of this crate returns [`ModelCheckingError`]. None of these errors
//! are meant to be recovered locally: they signal a violated contract between the evaluator and
//! its caller (an unsupported atomic operator, a formula that was not negation-normalised, a sink
//! state in the graph, …) and are expected to propagate to the top-level call.

/// A single state coordinate vector, used only for error reporting.
pub type StateVec = Vec<u32>;

/// Errors that can occur while evaluating a formula over a Kripke structure.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ModelCheckingError {
    /// An atomic proposition used an operator other than `>=` or `<=`.
    #[error("unsupported atomic operator `{operator}` (only `>=` and `<=` are defined)")]
    UnsupportedOperator {
        /// The offending operator token, as it would appear in a formula key.
        operator: String,
    },

    /// `yield_dov` or `get_subformulae` was invoked on a `Negation` node that survived
    /// normalisation. This is always a logic error in the driver, not in caller input.
    #[error("negation was not eliminated before evaluation (at subformula `{subformula_key}`)")]
    NegationNotEliminated {
        /// The canonical key of the node negation was found at.
        subformula_key: String,
    },

    /// A state had an empty successor set. The Kripke adaptor is required to add self-loops to
    /// sink states before handing the graph to the evaluator.
    #[error("state {state:?} has no successors; the Kripke adaptor must add self-loops to sinks")]
    SinkState {
        /// The sink state.
        state: StateVec,
    },

    /// A temporal operator needed the score of a child subformula that has not been finalised
    /// yet. Indicates the subformula enumeration order was violated.
    #[error("missing score for subformula `{subformula_key}` at state {state:?}")]
    MissingSubformulaScore {
        /// The subformula whose score was required.
        subformula_key: String,
        /// The state at which it was required.
        state: StateVec,
    },

    /// A state coordinate fell outside `0..=max_v` for its variable.
    #[error(
        "state coordinate {value} for variable `{variable}` is out of range 0..={max} (state {state:?})"
    )]
    OutOfRangeCoordinate {
        /// The variable whose bound was violated.
        variable: String,
        /// The offending value.
        value: i64,
        /// The variable's inclusive upper bound.
        max: u32,
        /// The full state vector the coordinate belongs to.
        state: StateVec,
    },
}
