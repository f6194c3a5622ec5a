use itertools::{EitherOrBoth, Itertools};
use serde::Serialize;
use std::collections::BTreeMap;

/// Symbol reported by [`mode_symbol`] for an empty sequence
pub const NO_DATA_SYMBOL: char = '?';

/// Most frequent symbol of a sequence and how often it occurs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct SymbolCount {
    pub symbol: char,
    pub count: usize,
}

impl SymbolCount {
    pub const NO_DATA: Self = Self {
        symbol: NO_DATA_SYMBOL,
        count: 0,
    };

    pub fn is_no_data(&self) -> bool {
        self.count == 0
    }
}

/// Number of positions at which `a` and `b` differ. Positions past the end of the shorter
/// sequence always count as differences.
pub fn positional_difference(a: &str, b: &str) -> usize {
    a.chars()
        .zip_longest(b.chars())
        .filter(|pair| match pair {
            EitherOrBoth::Both(x, y) => x != y,
            EitherOrBoth::Left(_) | EitherOrBoth::Right(_) => true,
        })
        .count()
}

/// Most frequent symbol in `s`. Ties go to the smallest symbol; an empty `s` yields
/// [`SymbolCount::NO_DATA`].
pub fn mode_symbol(s: &str) -> SymbolCount {
    let mut counts: BTreeMap<char, usize> = BTreeMap::new();
    for c in s.chars() {
        *counts.entry(c).or_default() += 1;
    }
    // Ascending key order plus a strict comparison keeps the smallest symbol on ties.
    counts
        .into_iter()
        .fold(SymbolCount::NO_DATA, |best, (symbol, count)| {
            if count > best.count {
                SymbolCount { symbol, count }
            } else {
                best
            }
        })
}
