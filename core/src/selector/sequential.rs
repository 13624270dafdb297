use std::sync::Arc;

use mealplan_common::error::Result;
use mealplan_common::nutrition::Recipe;

use super::tuples::IndexTuples;
use super::{Best, CANCEL_CHECK_INTERVAL, CancelGuard, materialize};
use crate::preferences::Preference;

pub(super) fn search(
    recipes: &[Arc<Recipe>],
    size: usize,
    preference: &dyn Preference,
    guard: &CancelGuard,
) -> Result<Best> {
    let mut tuples = IndexTuples::new(recipes.len(), size);
    let mut candidate: Vec<&Recipe> = Vec::with_capacity(size);
    let mut best: Option<(f64, Vec<usize>)> = None;
    let mut examined: u64 = 0;

    while let Some(tuple) = tuples.advance() {
        if examined % CANCEL_CHECK_INTERVAL == 0 {
            guard.check()?;
        }

        materialize(recipes, tuple, &mut candidate);
        let cost = preference.cost(&candidate);
        examined += 1;

        // Strictly lower only: the earlier candidate keeps a tie.
        if best.as_ref().is_none_or(|(best_cost, _)| cost < *best_cost) {
            best = Some((cost, tuple.to_vec()));
        }
    }

    // The pool and size were validated, so at least one tuple was scored.
    let (cost, indices) = best.unwrap_or_else(|| (0.0, Vec::new()));
    Ok(Best {
        indices,
        cost,
        examined,
    })
}
