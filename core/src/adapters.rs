//! # Repository Adapters
//!
//! Concrete implementations of the ports in [`mealplan_common::repository`].
//!
//! * [`memory`]: map-backed repositories, safe to share between services.
//! * [`catalog`]: the JSON catalog format the ingredient and recipe
//!   repositories are seeded from.

pub mod catalog;
pub mod memory;

pub use memory::{InMemoryIngredientRepository, InMemoryMenuRepository, InMemoryRecipeRepository};
