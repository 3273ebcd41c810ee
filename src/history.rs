use crate::roll::RollOutcome;
use std::collections::VecDeque;

pub const DEFAULT_CAPACITY: usize = 50;

/// A bounded log of past rolls, newest first.
#[derive(Debug, Clone)]
pub struct History {
    entries: VecDeque<RollOutcome>,
    capacity: usize,
    enabled: bool,
}

impl History {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
            enabled: true,
        }
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Turning history off keeps what is already recorded.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn record(&mut self, outcome: RollOutcome) {
        if !self.enabled || self.capacity == 0 {
            return;
        }
        self.entries.push_front(outcome);
        self.entries.truncate(self.capacity);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn latest(&self) -> Option<&RollOutcome> {
        self.entries.front()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RollOutcome> + '_ {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}
