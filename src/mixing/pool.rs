//! Category-keyed event pools for building mixed pairs
//!
//! Each category keeps a bounded FIFO of the most recent events. A new event
//! is mixed with everything currently stored in its category, then stored
//! itself, evicting the oldest entry once the pool is full.

use std::collections::{BTreeMap, VecDeque};

use super::error::MixingError;

/// Bounded per-category event pools.
#[derive(Debug, Clone)]
pub struct EventPools<T> {
    depth: usize,
    pools: BTreeMap<usize, VecDeque<T>>,
}

impl<T: Clone> EventPools<T> {
    /// Create pools keeping at most `depth` events per category.
    pub fn new(depth: usize) -> Result<Self, MixingError> {
        if depth == 0 {
            return Err(MixingError::ZeroPoolDepth);
        }
        Ok(Self {
            depth,
            pools: BTreeMap::new(),
        })
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Add `event` to `category` and return the events it is mixed with.
    ///
    /// The returned partners are the pool content before insertion, oldest
    /// first; an event is never mixed with itself.
    pub fn insert(&mut self, category: usize, event: T) -> Vec<T> {
        let pool = self.pools.entry(category).or_default();
        let partners: Vec<T> = pool.iter().cloned().collect();
        if pool.len() == self.depth {
            pool.pop_front();
        }
        pool.push_back(event);
        partners
    }

    /// Events currently held for `category`.
    pub fn len(&self, category: usize) -> usize {
        self.pools.get(&category).map_or(0, VecDeque::len)
    }

    /// Categories that hold at least one event, ascending.
    pub fn categories(&self) -> impl Iterator<Item = usize> + '_ {
        self.pools.keys().copied()
    }

    pub fn total_events(&self) -> usize {
        self.pools.values().map(VecDeque::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.pools.is_empty()
    }

    pub fn clear(&mut self) {
        self.pools.clear();
    }
}
