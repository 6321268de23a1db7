use serde::{Deserialize, Serialize};

use crate::parser::CalorieDelta;

/// Per-client calorie balance. Owned by whoever hosts the interaction loop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    pub running_total: i64,
    pub history: Vec<i64>,
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            running_total: 0,
            history: vec![0],
        }
    }

    pub fn apply(&mut self, delta: &CalorieDelta) {
        self.running_total = self.running_total.saturating_add(delta.signed());
    }

    pub fn record_snapshot(&mut self) {
        self.history.push(self.running_total);
    }

    /// Submissions recorded so far; the first history entry is the starting snapshot.
    pub fn interactions(&self) -> usize {
        self.history.len().saturating_sub(1)
    }

    pub fn chart_points(&self) -> Vec<(usize, i64)> {
        self.history.iter().copied().enumerate().collect()
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}
