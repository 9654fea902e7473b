use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryItem {
    pub city: String,
    pub day: String,
}

/// Recent-query log: most-recent-first, capped at 5 entries, unique on the
/// (city, day) pair. A repeated query neither duplicates nor reorders its
/// existing entry.
#[derive(Debug, Default)]
pub struct SearchHistory {
    items: VecDeque<HistoryItem>,
}

impl SearchHistory {
    const CAPACITY: usize = 5;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, item: HistoryItem) {
        if self.items.contains(&item) {
            return;
        }
        self.items.push_front(item);
        self.items.truncate(Self::CAPACITY);
    }

    pub fn snapshot(&self) -> Vec<HistoryItem> {
        self.items.iter().cloned().collect()
    }
}
