//! Rayon-backed scoring.
//!
//! The enumeration itself stays sequential: tuples are generated in order
//! into a flat buffer of `chunk_size` candidates, the chunk is scored on the
//! rayon pool, and its winner is merged into the running best. Within a chunk
//! the reduction key is `(cost, position)`; across chunks an earlier winner
//! is only displaced by a strictly lower cost. Together this reproduces the
//! sequential first-seen tie-break no matter how rayon splits the work.

use std::sync::Arc;

use mealplan_common::error::Result;
use mealplan_common::nutrition::Recipe;
use rayon::prelude::*;

use super::tuples::IndexTuples;
use super::{Best, CancelGuard, materialize};
use crate::preferences::Preference;

pub(super) fn search(
    recipes: &[Arc<Recipe>],
    size: usize,
    preference: &dyn Preference,
    guard: &CancelGuard,
    chunk_size: usize,
) -> Result<Best> {
    let mut tuples = IndexTuples::new(recipes.len(), size);
    let mut buffer: Vec<usize> = Vec::with_capacity(chunk_size * size);
    let mut best: Option<(f64, Vec<usize>)> = None;
    let mut examined: u64 = 0;

    loop {
        guard.check()?;

        buffer.clear();
        let filled = tuples.fill(&mut buffer, chunk_size);
        if filled == 0 {
            break;
        }
        examined += filled as u64;

        let Some((cost, position)) = score_chunk(recipes, size, preference, &buffer) else {
            break;
        };

        if best.as_ref().is_none_or(|(best_cost, _)| cost < *best_cost) {
            let winner = &buffer[position * size..(position + 1) * size];
            best = Some((cost, winner.to_vec()));
        }
    }

    let (cost, indices) = best.unwrap_or_else(|| (0.0, Vec::new()));
    Ok(Best {
        indices,
        cost,
        examined,
    })
}

/// Cheapest candidate of a chunk as `(cost, position in chunk)`.
fn score_chunk(
    recipes: &[Arc<Recipe>],
    size: usize,
    preference: &dyn Preference,
    buffer: &[usize],
) -> Option<(f64, usize)> {
    buffer
        .par_chunks(size)
        .enumerate()
        .map_init(
            || Vec::with_capacity(size),
            |candidate, (position, tuple)| {
                materialize(recipes, tuple, candidate);
                (preference.cost(candidate), position)
            },
        )
        .reduce_with(|left, right| {
            let right_wins = right.0 < left.0 || (right.0 == left.0 && right.1 < left.1);
            if right_wins { right } else { left }
        })
}
