use std::collections::HashMap;

use crate::engine::Action;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct StateActionPair {
    /// Pile sizes, in pile order.
    state: Vec<u8>,
    action: Action,
}

impl StateActionPair {
    fn new(state: &[u8], action: Action) -> Self {
        StateActionPair {
            state: state.to_vec(),
            action,
        }
    }
}

/// Learned value estimates keyed by (state, action).
///
/// A missing key reads as 0.0. Lookups never insert.
#[derive(Debug, Clone, Default)]
pub struct ActionValueTable {
    values: HashMap<StateActionPair, f64>,
}

impl ActionValueTable {
    pub fn new() -> Self {
        ActionValueTable {
            values: HashMap::new(),
        }
    }

    pub fn get(&self, state: &[u8], action: Action) -> f64 {
        self.try_get(state, action).unwrap_or(0.0)
    }

    /// Like `get`, but tells an unvisited pair apart from a stored 0.0.
    pub fn try_get(&self, state: &[u8], action: Action) -> Option<f64> {
        self.values
            .get(&StateActionPair::new(state, action))
            .copied()
    }

    pub fn set(&mut self, state: &[u8], action: Action, value: f64) {
        self.values.insert(StateActionPair::new(state, action), value);
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&[u8], Action, f64)> + '_ {
        self.values
            .iter()
            .map(|(key, &value)| (key.state.as_slice(), key.action, value))
    }
}
