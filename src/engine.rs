//! Combination generation.
//!
//! [`generate`] computes the Cartesian product of a list of [`Set`]s in
//! mixed-radix order: the last set changes on every row, the first set only
//! every `stride_0` rows. That is the order of nested loops with the first set
//! as the outermost loop.
//!
//! Rows are not materialized up front. [`Combinations`] keeps the sets and
//! their strides and builds row `k` on demand, so it can be iterated any
//! number of times, indexed directly, or streamed to a writer.
//!
//! ```rust
//! use combination::{generate, Set};
//!
//! let combos = generate(vec![
//!     Set::new("card", ["Heart", "Tile"]),
//!     Set::new("figure", ["Jack", "Queen", "King"]),
//! ])
//! .unwrap();
//!
//! assert_eq!(combos.len(), 6);
//! let second = combos.get(1).unwrap();
//! assert_eq!(second.get("card"), Some("Heart"));
//! assert_eq!(second.get("figure"), Some("Queen"));
//! ```

use crate::{Combination, Element, Error, Result, Set};
use std::iter::FusedIterator;

/// The full, ordered Cartesian product of a list of sets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Combinations {
    sets: Vec<Set>,
    strides: Vec<usize>,
    total: usize,
}

/// Computes every combination of one value from each set.
///
/// With no sets at all the result holds a single empty combination.
///
/// # Errors
///
/// - [`Error::NoValues`] if any set has no values; nothing is generated
/// - [`Error::TooManyCombinations`] if the row count does not fit in `usize`
pub fn generate<I>(sets: I) -> Result<Combinations>
where
    I: IntoIterator<Item = Set>,
{
    let sets: Vec<Set> = sets.into_iter().collect();

    if let Some(empty) = sets.iter().find(|s| s.values.is_empty()) {
        return Err(Error::no_values(&empty.name));
    }

    // stride_i = L_{i+1} * ... * L_{n-1}, filled from the back.
    let mut strides = vec![1usize; sets.len()];
    let mut total = 1usize;
    for (i, set) in sets.iter().enumerate().rev() {
        strides[i] = total;
        total = total
            .checked_mul(set.values.len())
            .ok_or(Error::TooManyCombinations)?;
    }

    log::debug!("generating {} combinations from {} sets", total, sets.len());

    Ok(Combinations {
        sets,
        strides,
        total,
    })
}

impl Combinations {
    /// Number of combinations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.total
    }

    /// Always `false`: empty sets are rejected and no sets yield one row.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// The input sets, in input order.
    #[must_use]
    pub fn sets(&self) -> &[Set] {
        &self.sets
    }

    /// Number of consecutive rows during which each set keeps its value.
    #[must_use]
    pub fn strides(&self) -> &[usize] {
        &self.strides
    }

    /// Value index chosen from set `set` on row `row`.
    fn pick(&self, row: usize, set: usize) -> usize {
        (row / self.strides[set]) % self.sets[set].values.len()
    }

    /// Builds row `row`, or `None` past the end.
    #[must_use]
    pub fn get(&self, row: usize) -> Option<Combination> {
        if row >= self.total {
            return None;
        }
        let elements = self
            .sets
            .iter()
            .enumerate()
            .map(|(i, set)| Element {
                name: set.name.clone(),
                value: set.values[self.pick(row, i)].clone(),
            })
            .collect();
        Some(Combination::new(elements))
    }

    /// Iterates over all rows in order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            combos: self,
            front: 0,
            back: self.total,
        }
    }

    /// Builds every row at once.
    #[must_use]
    pub fn to_vec(&self) -> Vec<Combination> {
        self.iter().collect()
    }
}

impl<'a> IntoIterator for &'a Combinations {
    type Item = Combination;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

/// Iterator over the rows of a [`Combinations`].
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    combos: &'a Combinations,
    front: usize,
    back: usize,
}

impl Iterator for Iter<'_> {
    type Item = Combination;

    fn next(&mut self) -> Option<Combination> {
        if self.front >= self.back {
            return None;
        }
        let row = self.combos.get(self.front);
        self.front += 1;
        row
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.back - self.front;
        (n, Some(n))
    }

    fn nth(&mut self, n: usize) -> Option<Combination> {
        self.front = self.front.saturating_add(n).min(self.back);
        self.next()
    }
}

impl DoubleEndedIterator for Iter<'_> {
    fn next_back(&mut self) -> Option<Combination> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        self.combos.get(self.back)
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}
