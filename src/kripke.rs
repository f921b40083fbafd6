//! The Kripke graph adaptor (C1): the capability set `{states, variables, successors,
//! predecessors}` the evaluator is built against.
//!
//! Constructing the transition graph from a higher-level model (e.g. a gene-regulatory network)
//! is explicitly out of scope for this crate (see the purpose & scope section of the spec) — that
//! is the job of an external model compiler. What lives here is the thin trait the evaluator
//! actually consumes, plus an explicit, adjacency-map-backed implementation of it that is useful
//! both for tests and for small hand-built models.

use crate::error::ModelCheckingError;
use std::collections::{HashMap, HashSet};

/// A state is a fixed-length vector of small non-negative integers, one per [`Variable`], in
/// variable order.
pub type State = Vec<u32>;

/// A named discrete dimension with an inclusive upper bound.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Variable {
    pub name: String,
    pub max_value: u32,
}

impl Variable {
    pub fn new(name: impl Into<String>, max_value: u32) -> Self {
        Variable {
            name: name.into(),
            max_value,
        }
    }
}

/// The capability set the evaluator requires of a Kripke structure.
///
/// `successors`/`predecessors` must each return a non-empty slice — sink states are a structural
/// error (see [`ModelCheckingError::SinkState`]); an adaptor over a model with genuine sinks must
/// add self-loops to them before it is handed to the evaluator.
pub trait KripkeStructure {
    /// The ordered list of variables; their order defines state-vector indexing.
    fn variables(&self) -> &[Variable];

    /// All states of the structure, in no particular order.
    fn states(&self) -> &[State];

    /// The (non-empty) set of direct successors of `state`.
    fn successors(&self, state: &State) -> &[State];

    /// The (non-empty) set of direct predecessors of `state`.
    fn predecessors(&self, state: &State) -> &[State];

    /// The per-variable inclusive maximum, in variable order. Convenience derived from
    /// [`KripkeStructure::variables`].
    fn max_values(&self) -> Vec<u32> {
        self.variables().iter().map(|v| v.max_value).collect()
    }

    /// Validate that every state is well-formed (right arity, in-range coordinates) and sink-free.
    /// The evaluator calls this once before evaluating a formula; adaptors may call it eagerly too.
    fn validate(&self) -> Result<(), ModelCheckingError> {
        let maxes = self.max_values();
        for state in self.states() {
            if state.len() != maxes.len() {
                return Err(ModelCheckingError::OutOfRangeCoordinate {
                    variable: "<arity mismatch>".to_string(),
                    value: state.len() as i64,
                    max: maxes.len() as u32,
                    state: state.clone(),
                });
            }
            for (i, &coord) in state.iter().enumerate() {
                if coord > maxes[i] {
                    return Err(ModelCheckingError::OutOfRangeCoordinate {
                        variable: self.variables()[i].name.clone(),
                        value: coord as i64,
                        max: maxes[i],
                        state: state.clone(),
                    });
                }
            }
            if self.successors(state).is_empty() {
                return Err(ModelCheckingError::SinkState {
                    state: state.clone(),
                });
            }
        }
        Ok(())
    }
}

/// An explicit Kripke structure backed by adjacency maps. Useful for tests and for models small
/// enough to enumerate eagerly; larger or symbolic models should provide their own
/// [`KripkeStructure`] implementation instead of materialising this one.
#[derive(Clone, Debug)]
pub struct ExplicitKripkeStructure {
    variables: Vec<Variable>,
    states: Vec<State>,
    successors: HashMap<State, Vec<State>>,
    predecessors: HashMap<State, Vec<State>>,
}

impl ExplicitKripkeStructure {
    /// Build a structure from its variables, the full state set, and an edge list. Sink states
    /// (states with no outgoing edge in `edges`) automatically get a self-loop added, per the
    /// spec's requirement that the evaluator never sees sinks.
    pub fn new(variables: Vec<Variable>, states: Vec<State>, edges: Vec<(State, State)>) -> Self {
        let mut successors: HashMap<State, Vec<State>> = HashMap::new();
        let mut predecessors: HashMap<State, Vec<State>> = HashMap::new();
        for state in &states {
            successors.entry(state.clone()).or_default();
            predecessors.entry(state.clone()).or_default();
        }
        let mut seen_edges: HashSet<(State, State)> = HashSet::new();
        for (from, to) in edges {
            if seen_edges.insert((from.clone(), to.clone())) {
                successors.entry(from.clone()).or_default().push(to.clone());
                predecessors.entry(to).or_default().push(from);
            }
        }
        // Add self-loops to any sink left over, so the evaluator's no-sinks invariant holds.
        for state in &states {
            if successors[state].is_empty() {
                successors.get_mut(state).unwrap().push(state.clone());
                predecessors.get_mut(state).unwrap().push(state.clone());
            }
        }
        ExplicitKripkeStructure {
            variables,
            states,
            successors,
            predecessors,
        }
    }
}

impl KripkeStructure for ExplicitKripkeStructure {
    fn variables(&self) -> &[Variable] {
        &self.variables
    }

    fn states(&self) -> &[State] {
        &self.states
    }

    fn successors(&self, state: &State) -> &[State] {
        self.successors
            .get(state)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    fn predecessors(&self, state: &State) -> &[State] {
        self.predecessors
            .get(state)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}
