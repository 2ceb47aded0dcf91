//! Iterative r-combination generator over index positions.
//!
//! Produces all r-element subsets of `0..n` in lexicographic order,
//! without recursion. The optimizer relies on this order: enumerating
//! sizes 1..=n and, within a size, lexicographic index order defines
//! which of several equal-value subsets is found first.

/// Iterator over all r-combinations of `0..n` in lexicographic order.
///
/// Each item is a sorted `Vec<usize>` of length `r`. Yields nothing when
/// `r == 0` or `r > n`; the optimizer never asks for the empty subset.
#[derive(Debug, Clone)]
pub struct Combinations {
    n: usize,
    r: usize,
    indices: Vec<usize>,
    done: bool,
}

impl Combinations {
    /// Create a generator for r-combinations of `0..n`.
    pub fn new(n: usize, r: usize) -> Self {
        Self {
            n,
            r,
            indices: (0..r).collect(),
            done: r == 0 || r > n,
        }
    }

    /// Advance `indices` to the next combination, odometer-style:
    /// bump the rightmost index that can still move, reset everything
    /// to its right.
    fn advance(&mut self) {
        let mut i = self.r;
        loop {
            if i == 0 {
                self.done = true;
                return;
            }
            i -= 1;
            if self.indices[i] != i + self.n - self.r {
                break;
            }
        }
        self.indices[i] += 1;
        for j in i + 1..self.r {
            self.indices[j] = self.indices[j - 1] + 1;
        }
    }
}

impl Iterator for Combinations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let current = self.indices.clone();
        self.advance();
        Some(current)
    }
}
