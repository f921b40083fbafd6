//! Dense-id bookkeeping (C6 support): assigns every state and every distinct subformula key a
//! small contiguous integer id, and pre-computes the successor/predecessor adjacency in that id
//! space, so the worklist loops never touch a hash map in their inner loop.

use std::collections::HashMap;

use crate::formula::Formula;
use crate::kripke::{KripkeStructure, State};

/// The id-assignment context for one top-level evaluation run.
pub struct EvaluationContext {
    states: Vec<State>,
    state_ids: HashMap<State, usize>,
    subformulae: Vec<Formula>,
    subformula_ids: HashMap<String, usize>,
    successors: Vec<Vec<usize>>,
    predecessors: Vec<Vec<usize>>,
}

impl EvaluationContext {
    /// Build a context from a Kripke structure and the post-order subformula list of the formula
    /// being evaluated. Structurally-equal subformulae (identical canonical key) collapse onto a
    /// single id.
    pub fn new(kripke: &impl KripkeStructure, subformula_list: &[Formula]) -> Self {
        let states: Vec<State> = kripke.states().to_vec();
        let state_ids: HashMap<State, usize> = states
            .iter()
            .cloned()
            .enumerate()
            .map(|(id, s)| (s, id))
            .collect();

        let mut subformulae = Vec::new();
        let mut subformula_ids = HashMap::new();
        for formula in subformula_list {
            subformula_ids
                .entry(formula.key())
                .or_insert_with(|| {
                    subformulae.push(formula.clone());
                    subformulae.len() - 1
                });
        }

        let successors: Vec<Vec<usize>> = states
            .iter()
            .map(|s| {
                kripke
                    .successors(s)
                    .iter()
                    .map(|t| state_ids[t])
                    .collect()
            })
            .collect();
        let predecessors: Vec<Vec<usize>> = states
            .iter()
            .map(|s| {
                kripke
                    .predecessors(s)
                    .iter()
                    .map(|t| state_ids[t])
                    .collect()
            })
            .collect();

        EvaluationContext {
            states,
            state_ids,
            subformulae,
            subformula_ids,
            successors,
            predecessors,
        }
    }

    pub fn num_states(&self) -> usize {
        self.states.len()
    }

    pub fn num_subformulae(&self) -> usize {
        self.subformulae.len()
    }

    pub fn states(&self) -> &[State] {
        &self.states
    }

    pub fn state_id(&self, state: &State) -> Option<usize> {
        self.state_ids.get(state).copied()
    }

    pub fn subformula_id(&self, key: &str) -> Option<usize> {
        self.subformula_ids.get(key).copied()
    }

    pub fn subformula(&self, id: usize) -> &Formula {
        &self.subformulae[id]
    }

    pub fn subformulae_in_order(&self) -> &[Formula] {
        &self.subformulae
    }

    pub fn successors(&self, state_id: usize) -> &[usize] {
        &self.successors[state_id]
    }

    pub fn predecessors(&self, state_id: usize) -> &[usize] {
        &self.predecessors[state_id]
    }
}
