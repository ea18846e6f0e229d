use std::collections::BTreeSet;

use super::Item;
use crate::error::{PathlineError, Result};

/// Unordered pairs of items that may never stand next to each other.
///
/// Pairs are stored low-first, so `(a, b)` and `(b, a)` are the same entry
/// and repeats collapse.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IncompatiblePairs {
    pairs: BTreeSet<(Item, Item)>,
}

impl IncompatiblePairs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, a: Item, b: Item) -> bool {
        self.pairs.insert(normalize(a, b))
    }

    pub fn contains(&self, a: Item, b: Item) -> bool {
        self.pairs.contains(&normalize(a, b))
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Item, Item)> + '_ {
        self.pairs.iter().copied()
    }
}

impl FromIterator<(Item, Item)> for IncompatiblePairs {
    fn from_iter<I: IntoIterator<Item = (Item, Item)>>(iter: I) -> Self {
        let mut pairs = Self::new();
        for (a, b) in iter {
            pairs.insert(a, b);
        }
        pairs
    }
}

fn normalize(a: Item, b: Item) -> (Item, Item) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

/// Parse an `a,b` pair as given on the command line
pub fn parse_pair(s: &str) -> Result<(Item, Item)> {
    let invalid = || PathlineError::invalid_value("incompatible pair (expected A,B)", s);

    let (a, b) = s.split_once(',').ok_or_else(invalid)?;
    let a = a.trim().parse::<Item>().map_err(|_| invalid())?;
    let b = b.trim().parse::<Item>().map_err(|_| invalid())?;
    Ok((a, b))
}
