//! Constrained line-up search
//!
//! Enumerates every ordering of a set of items in which no two adjacent
//! items form an incompatible pair. The search backtracks over partial
//! lines; because the constraint only concerns neighbours, a candidate is
//! checked against the item right before it and nothing else.

mod pairs;

use std::collections::BTreeSet;

pub use pairs::{parse_pair, IncompatiblePairs};

/// An item to place in line
pub type Item = i64;

/// One complete ordering of the items
pub type Line = Vec<Item>;

/// Search state shared by the recursive placement steps
struct LineupState<'a> {
    items: &'a [Item],
    pairs: &'a IncompatiblePairs,
    used: Vec<bool>,
    line: Line,
    found: BTreeSet<Line>,
    explored: usize,
}

impl LineupState<'_> {
    fn can_place(&self, candidate: Item) -> bool {
        self.line
            .last()
            .is_none_or(|&previous| !self.pairs.contains(previous, candidate))
    }

    fn place_next(&mut self) {
        if self.line.len() == self.items.len() {
            self.found.insert(self.line.clone());
            return;
        }

        for index in 0..self.items.len() {
            if self.used[index] {
                continue;
            }
            let candidate = self.items[index];
            if !self.can_place(candidate) {
                continue;
            }

            self.explored += 1;
            self.used[index] = true;
            self.line.push(candidate);

            self.place_next();

            self.line.pop();
            self.used[index] = false;
        }
    }
}

/// Every ordering of `items` with no incompatible pair side by side.
///
/// An empty `items` gives an empty set, not a set holding one empty line.
/// The set's iteration order is incidental; treat it as unordered.
#[tracing::instrument(skip(items, pairs), fields(items = items.len(), pairs = pairs.len()))]
pub fn put_in_line(items: &[Item], pairs: &IncompatiblePairs) -> BTreeSet<Line> {
    if items.is_empty() {
        return BTreeSet::new();
    }

    let mut state = LineupState {
        items,
        pairs,
        used: vec![false; items.len()],
        line: Vec::with_capacity(items.len()),
        found: BTreeSet::new(),
        explored: 0,
    };
    state.place_next();

    tracing::debug!(
        explored = state.explored,
        lines = state.found.len(),
        "line-up search complete"
    );
    state.found
}

/// True when `line` uses every item of `items` exactly once and no two
/// neighbours are incompatible
pub fn is_valid_line(line: &[Item], items: &[Item], pairs: &IncompatiblePairs) -> bool {
    let mut expected = items.to_vec();
    let mut actual = line.to_vec();
    expected.sort_unstable();
    actual.sort_unstable();

    expected == actual
        && line
            .windows(2)
            .all(|neighbours| !pairs.contains(neighbours[0], neighbours[1]))
}
