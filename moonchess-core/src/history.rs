//! Oldest-first placement histories
//!
//! Both aging rules evict from the front of an ordered history: the
//! per-player rule from that player's own history, the global rule
//! from the shared one. Entries can also be pulled out of the middle
//! when a piece is removed for another reason, so this is an explicit
//! ordered sequence rather than a plain queue.

use serde::{Deserialize, Serialize};

/// Ordered record of live placements, oldest first
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PlacementLog<T> {
    entries: Vec<T>,
}

impl<T: PartialEq> PlacementLog<T> {
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Oldest entry
    pub fn front(&self) -> Option<&T> {
        self.entries.first()
    }

    /// Append as the newest entry
    pub fn push(&mut self, entry: T) {
        self.entries.push(entry);
    }

    /// Remove and return the oldest entry
    pub fn pop_front(&mut self) -> Option<T> {
        if self.entries.is_empty() {
            None
        } else {
            Some(self.entries.remove(0))
        }
    }

    /// Remove the first entry equal to `entry`, true if one was found
    pub fn remove(&mut self, entry: &T) -> bool {
        match self.entries.iter().position(|e| e == entry) {
            Some(pos) => {
                self.entries.remove(pos);
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, entry: &T) -> bool {
        self.entries.contains(entry)
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.entries.iter()
    }
}

impl<T: PartialEq> Default for PlacementLog<T> {
    fn default() -> Self {
        Self::new()
    }
}
