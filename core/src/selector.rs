//! # Menu Selector
//!
//! Exhaustive search for the cheapest menu.
//!
//! Every multiset of `size` recipes drawn from the pool is scored with the
//! caller's [`Preference`], in combinations-with-replacement order (see
//! [`tuples`]). The lowest cost wins; on a tie the candidate generated first
//! wins. Nothing is pruned, so the result is the exact optimum.
//!
//! Two strategies compute the same answer:
//! * [`Strategy::Sequential`]: scores candidates one by one on the calling thread.
//! * [`Strategy::Parallel`]: scores generation-ordered chunks on the rayon
//!   pool and reduces on `(cost, generation index)`.
//!
//! A search can be stopped through a shared flag or a timeout, in which case
//! it fails with [`MenuError::SearchCancelled`] rather than returning the best
//! candidate seen so far.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use mealplan_common::error::{MenuError, Result};
use mealplan_common::nutrition::Recipe;

use crate::preferences::{Preference, ZeroCost};

mod parallel;
mod sequential;
pub mod tuples;

pub use tuples::candidate_count;

/// How often (in candidates) the stop flag and the deadline are polled.
pub const CANCEL_CHECK_INTERVAL: u64 = 1024;

pub const DEFAULT_CHUNK_SIZE: usize = 4096;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    #[default]
    Sequential,
    Parallel { chunk_size: usize },
}

impl Strategy {
    pub fn parallel() -> Self {
        Self::Parallel {
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SearchOptions {
    pub strategy: Strategy,
    /// Raised from another thread to abandon a running search.
    pub stop: Option<Arc<AtomicBool>>,
    /// Upper bound on the wall time of a single search.
    pub timeout: Option<Duration>,
}

/// Outcome of a completed search.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    pub meals: Vec<Arc<Recipe>>,
    pub cost: f64,
    pub candidates_examined: u64,
}

impl Selection {
    /// Whether the winner breaks a hard constraint, i.e. no admissible menu exists.
    pub fn is_inadmissible(&self) -> bool {
        self.cost.is_infinite()
    }
}

#[derive(Debug, Clone, Default)]
pub struct MenuSelector {
    options: SearchOptions,
}

impl MenuSelector {
    pub fn new(options: SearchOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &SearchOptions {
        &self.options
    }

    /// Picks the cheapest menu of `size` meals from `recipes`.
    ///
    /// Without a preference every candidate costs zero and the first one
    /// generated (the first recipe repeated `size` times) is returned.
    pub fn search(
        &self,
        recipes: &[Arc<Recipe>],
        size: usize,
        preference: Option<&dyn Preference>,
    ) -> Result<Selection> {
        validate(recipes.len(), size)?;

        let preference: &dyn Preference = preference.unwrap_or(&ZeroCost);
        let guard = CancelGuard::new(&self.options);

        let best = match self.options.strategy {
            Strategy::Sequential => sequential::search(recipes, size, preference, &guard)?,
            Strategy::Parallel { chunk_size } => {
                parallel::search(recipes, size, preference, &guard, chunk_size.max(1))?
            }
        };

        Ok(Selection {
            meals: best.indices.iter().map(|&i| Arc::clone(&recipes[i])).collect(),
            cost: best.cost,
            candidates_examined: best.examined,
        })
    }

    pub fn select(
        &self,
        recipes: &[Arc<Recipe>],
        size: usize,
        preference: Option<&dyn Preference>,
    ) -> Result<Vec<Arc<Recipe>>> {
        self.search(recipes, size, preference)
            .map(|selection| selection.meals)
    }
}

/// Sequential exhaustive search with default options.
pub fn select(
    recipes: &[Arc<Recipe>],
    size: usize,
    preference: Option<&dyn Preference>,
) -> Result<Vec<Arc<Recipe>>> {
    MenuSelector::default().select(recipes, size, preference)
}

/// Checks a search request before any candidate is generated.
///
/// The size is checked before the pool, so an empty pool with a zero size
/// reports [`MenuError::InvalidMenuSize`].
pub fn validate(pool: usize, size: usize) -> Result<()> {
    if size < 1 {
        return Err(MenuError::InvalidMenuSize(size));
    }
    if pool == 0 {
        return Err(MenuError::EmptyRecipePool);
    }
    Ok(())
}

/// Winning index tuple of a finished search.
struct Best {
    indices: Vec<usize>,
    cost: f64,
    examined: u64,
}

struct CancelGuard {
    stop: Option<Arc<AtomicBool>>,
    deadline: Option<Instant>,
}

impl CancelGuard {
    fn new(options: &SearchOptions) -> Self {
        Self {
            stop: options.stop.clone(),
            // A timeout past the representable range means no deadline.
            deadline: options
                .timeout
                .and_then(|timeout| Instant::now().checked_add(timeout)),
        }
    }

    fn check(&self) -> Result<()> {
        let stopped = self
            .stop
            .as_ref()
            .is_some_and(|stop| stop.load(Ordering::Relaxed));
        let expired = self
            .deadline
            .is_some_and(|deadline| Instant::now() >= deadline);

        if stopped || expired {
            Err(MenuError::SearchCancelled)
        } else {
            Ok(())
        }
    }
}

/// Borrows the recipes an index tuple points at into `candidate`.
fn materialize<'a>(recipes: &'a [Arc<Recipe>], tuple: &[usize], candidate: &mut Vec<&'a Recipe>) {
    candidate.clear();
    candidate.extend(tuple.iter().map(|&i| recipes[i].as_ref()));
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
