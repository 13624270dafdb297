//! Combinations-with-replacement over pool indices.
//!
//! Yields every non-decreasing tuple `(i1 <= i2 <= ... <= ik)` with entries in
//! `0..pool`, in lexicographic order:
//!
//! ```text
//! pool = 2, size = 3:  000  001  011  111
//! ```
//!
//! The order is part of the menu search contract (ties go to the tuple
//! generated first), so it is produced here explicitly instead of borrowed
//! from an iterator library.

pub struct IndexTuples {
    indices: Vec<usize>,
    pool: usize,
    started: bool,
    exhausted: bool,
}

impl IndexTuples {
    pub fn new(pool: usize, size: usize) -> Self {
        Self {
            indices: vec![0; size],
            pool,
            started: false,
            exhausted: pool == 0 && size > 0,
        }
    }

    /// Moves to the next tuple and returns it, or `None` once every tuple was seen.
    pub fn advance(&mut self) -> Option<&[usize]> {
        if self.exhausted {
            return None;
        }

        if !self.started {
            self.started = true;
            return Some(&self.indices);
        }

        let last = self.pool - 1;
        let Some(pivot) = self.indices.iter().rposition(|&index| index != last) else {
            self.exhausted = true;
            return None;
        };

        let next = self.indices[pivot] + 1;
        self.indices[pivot..].fill(next);
        Some(&self.indices)
    }

    /// Appends up to `max` tuples back to back onto `buffer`; returns how many.
    pub fn fill(&mut self, buffer: &mut Vec<usize>, max: usize) -> usize {
        let mut filled = 0;
        while filled < max {
            match self.advance() {
                Some(tuple) => buffer.extend_from_slice(tuple),
                None => break,
            }
            filled += 1;
        }
        filled
    }
}

/// Number of tuples [`IndexTuples`] yields: `C(pool + size - 1, size)`.
///
/// `None` if the count (or an intermediate product) overflows a `u128`.
pub fn candidate_count(pool: usize, size: usize) -> Option<u128> {
    if size == 0 {
        return Some(1);
    }
    if pool == 0 {
        return Some(0);
    }

    let base = pool as u128 - 1;
    (1..=size as u128).try_fold(1u128, |count, step| {
        count.checked_mul(base + step).map(|product| product / step)
    })
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(pool: usize, size: usize) -> Vec<Vec<usize>> {
        let mut tuples = IndexTuples::new(pool, size);
        let mut out = Vec::new();
        while let Some(tuple) = tuples.advance() {
            out.push(tuple.to_vec());
        }
        out
    }

    #[test]
    fn test_two_by_three_order() {
        assert_eq!(
            collect(2, 3),
            vec![vec![0, 0, 0], vec![0, 0, 1], vec![0, 1, 1], vec![1, 1, 1]]
        );
    }

    #[test]
    fn test_three_by_two_order() {
        assert_eq!(
            collect(3, 2),
            vec![
                vec![0, 0],
                vec![0, 1],
                vec![0, 2],
                vec![1, 1],
                vec![1, 2],
                vec![2, 2]
            ]
        );
    }

    #[test]
    fn test_single_recipe_pool() {
        assert_eq!(collect(1, 3), vec![vec![0, 0, 0]]);
    }

    #[test]
    fn test_empty_pool_yields_nothing() {
        assert!(collect(0, 2).is_empty());
    }

    #[test]
    fn test_counts_match_formula() {
        for pool in 1..=6 {
            for size in 1..=5 {
                let expected = candidate_count(pool, size).unwrap();
                assert_eq!(collect(pool, size).len() as u128, expected, "pool={pool} size={size}");
            }
        }
    }

    #[test]
    fn test_tuples_are_non_decreasing() {
        for tuple in collect(4, 4) {
            assert!(tuple.windows(2).all(|pair| pair[0] <= pair[1]));
        }
    }

    #[test]
    fn test_fill_in_chunks_matches_advance() {
        let mut tuples = IndexTuples::new(3, 2);
        let mut buffer = Vec::new();

        assert_eq!(tuples.fill(&mut buffer, 4), 4);
        assert_eq!(tuples.fill(&mut buffer, 4), 2);
        assert_eq!(tuples.fill(&mut buffer, 4), 0);

        let flat: Vec<usize> = collect(3, 2).into_iter().flatten().collect();
        assert_eq!(buffer, flat);
    }

    #[test]
    fn test_candidate_count() {
        assert_eq!(candidate_count(3, 7), Some(36));
        assert_eq!(candidate_count(2, 3), Some(4));
        assert_eq!(candidate_count(1, 10), Some(1));
        assert_eq!(candidate_count(0, 1), Some(0));
        assert_eq!(candidate_count(usize::MAX, 64), None);
    }
}
