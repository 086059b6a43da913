// src/pool.rs
//! Word pools drawn without replacement, plus the cross-category adjective selector.
//!
//! A `Pool` starts from a fixed list, loses one word per draw and refills to the
//! full list the moment a draw would otherwise hit an empty pool. Draws are total.
//!
//! `AdjectiveSelector` shares one global pool across all categories, so the same
//! intensifier rarely shows up twice in a row even when the category changes.
//! Once a category has used up every word still left in the global pool, it
//! falls back to a plain random pick from its own pool without touching the global one.

use rand::seq::IndexedRandom;
use rand::Rng;
use std::collections::HashMap;
use tracing::trace;

use crate::category::Category;
use crate::vocab::{candidates, ADJECTIVES};

/// Multiset of words drawn without replacement.
#[derive(Debug, Clone)]
pub struct Pool {
    full: &'static [&'static str],
    items: Vec<&'static str>,
}

impl Pool {
    /// Full pool. `full` must not be empty.
    pub fn new(full: &'static [&'static str]) -> Self {
        assert!(!full.is_empty(), "pool vocabulary must not be empty");
        Self {
            full,
            items: full.to_vec(),
        }
    }

    /// Empty pool that fills on first use.
    pub fn lazy(full: &'static [&'static str]) -> Self {
        assert!(!full.is_empty(), "pool vocabulary must not be empty");
        Self {
            full,
            items: Vec::new(),
        }
    }

    pub fn remaining(&self) -> &[&'static str] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.items.iter().any(|w| *w == word)
    }

    /// Restore the full contents if empty. Returns true if it refilled.
    pub fn refill_if_empty(&mut self) -> bool {
        if self.items.is_empty() {
            self.items.extend_from_slice(self.full);
            true
        } else {
            false
        }
    }

    /// Remove every occurrence of `word`. Returns false if it wasn't there.
    pub fn remove(&mut self, word: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|w| *w != word);
        self.items.len() != before
    }

    /// Refill if needed, then take one word at random.
    pub fn draw<R: Rng + ?Sized>(&mut self, rng: &mut R) -> &'static str {
        self.refill_if_empty();
        let idx = rng.random_range(0..self.items.len());
        self.items.swap_remove(idx)
    }

    /// Random pick without removing. Refills first if empty.
    pub fn peek_random<R: Rng + ?Sized>(&mut self, rng: &mut R) -> &'static str {
        self.refill_if_empty();
        self.items[rng.random_range(0..self.items.len())]
    }
}

/// Stateful intensifier picker: one global pool + lazily created per-category pools.
#[derive(Debug, Clone)]
pub struct AdjectiveSelector {
    global: Pool,
    by_category: HashMap<Category, Pool>,
}

impl Default for AdjectiveSelector {
    fn default() -> Self {
        Self::new()
    }
}

impl AdjectiveSelector {
    pub fn new() -> Self {
        Self {
            global: Pool::new(&ADJECTIVES),
            by_category: HashMap::new(),
        }
    }

    /// Words still available in the shared pool.
    pub fn global_remaining(&self) -> &[&'static str] {
        self.global.remaining()
    }

    /// Words still available for `category` (empty if never used).
    pub fn category_remaining(&self, category: Category) -> &[&'static str] {
        self.by_category
            .get(&category)
            .map(Pool::remaining)
            .unwrap_or(&[])
    }

    /// Pick an intensifier for `category`.
    pub fn select<R: Rng + ?Sized>(&mut self, category: Category, rng: &mut R) -> &'static str {
        self.global.refill_if_empty();
        let pool = self
            .by_category
            .entry(category)
            .or_insert_with(|| Pool::lazy(candidates(category)));
        pool.refill_if_empty();

        let mut excluded: Vec<&'static str> = Vec::new();
        // Each failed removal excludes one candidate, so this can't run past the pool size.
        for _ in 0..=pool.remaining().len() {
            let shared: Vec<&'static str> = pool
                .remaining()
                .iter()
                .copied()
                .filter(|w| self.global.contains(w) && !excluded.contains(w))
                .collect();
            let Some(&pick) = shared.choose(rng) else {
                break;
            };
            if self.global.remove(pick) {
                pool.remove(pick);
                return pick;
            }
            excluded.push(pick);
        }

        debug_assert!(
            excluded.is_empty(),
            "global pool bookkeeping broken: {excluded:?} listed as shared but not removable"
        );
        let pick = pool.peek_random(rng);
        trace!(target: "dogeify", ?category, pick, "category exhausted shared words, reusing");
        pick
    }
}
