//! The result table (C6): a dense `score[subformula_id][state_id]` array rather than a nested map
//! keyed by `(state, key-string)`, per the component design's storage recommendation.

/// `unset` entries are represented as `NaN`; every public accessor checks for it explicitly rather
/// than letting it leak into arithmetic.
#[derive(Clone, Debug)]
pub struct ResultTable {
    num_states: usize,
    scores: Vec<f64>,
}

impl ResultTable {
    /// A table with every `(subformula, state)` entry unset.
    pub fn new(num_subformulae: usize, num_states: usize) -> Self {
        ResultTable {
            num_states,
            scores: vec![f64::NAN; num_subformulae * num_states],
        }
    }

    fn index(&self, subformula_id: usize, state_id: usize) -> usize {
        subformula_id * self.num_states + state_id
    }

    pub fn get(&self, subformula_id: usize, state_id: usize) -> Option<f64> {
        let value = self.scores[self.index(subformula_id, state_id)];
        if value.is_nan() { None } else { Some(value) }
    }

    pub fn set(&mut self, subformula_id: usize, state_id: usize, value: f64) {
        let index = self.index(subformula_id, state_id);
        self.scores[index] = value;
    }

    /// Overwrite every state's score for `subformula_id` in one shot, e.g. with a worklist's
    /// fully-converged result vector.
    pub fn set_all(&mut self, subformula_id: usize, values: &[f64]) {
        debug_assert_eq!(values.len(), self.num_states);
        for (state_id, &value) in values.iter().enumerate() {
            self.set(subformula_id, state_id, value);
        }
    }

    /// Read every state's score for `subformula_id`, in dense state-id order. Panics if any entry
    /// is still unset — callers only call this once post-order enumeration guarantees the
    /// subformula has been fully evaluated.
    pub fn row(&self, subformula_id: usize) -> Vec<f64> {
        (0..self.num_states)
            .map(|state_id| {
                self.get(subformula_id, state_id)
                    .expect("row() called on a subformula with unset entries")
            })
            .collect()
    }
}
