//! Matrix expansion and branch matching.

use depgen_core::{Combination, MatrixSpec};

/// Expand a matrix into every combination of its dimension values.
///
/// Dimensions are iterated in declared order with the last dimension varying
/// fastest. An empty matrix yields a single empty combination; a dimension
/// without values yields nothing.
pub fn expand(matrix: &MatrixSpec) -> Combinations<'_> {
    let exhausted = matrix.values().any(Vec::is_empty);
    Combinations {
        matrix,
        indices: vec![0; matrix.len()],
        done: exhausted,
    }
}

/// Lazy iterator over the Cartesian product of a [`MatrixSpec`].
///
/// Cloning the iterator restarts from the same position.
#[derive(Debug, Clone)]
pub struct Combinations<'a> {
    matrix: &'a MatrixSpec,
    indices: Vec<usize>,
    done: bool,
}

impl Combinations<'_> {
    fn current(&self) -> Combination {
        self.matrix
            .iter()
            .zip(&self.indices)
            .map(|((dim, values), &i)| (dim.clone(), values[i].clone()))
            .collect()
    }

    fn advance(&mut self) {
        for (pos, values) in self.matrix.values().enumerate().rev() {
            self.indices[pos] += 1;
            if self.indices[pos] < values.len() {
                return;
            }
            self.indices[pos] = 0;
        }
        self.done = true;
    }
}

impl Iterator for Combinations<'_> {
    type Item = Combination;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let combination = self.current();
        self.advance();
        Some(combination)
    }
}

/// Check whether a branch filter selects `combination`.
///
/// Every key of the filter must be present in the combination with the same
/// value; keys of the combination the filter does not mention are ignored.
/// An empty filter matches everything.
pub fn matches(combination: &Combination, filter: &Combination) -> bool {
    filter
        .iter()
        .all(|(key, value)| combination.get(key) == Some(value))
}
