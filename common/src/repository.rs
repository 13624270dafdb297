//! # Repository Ports
//!
//! Storage contracts the use cases depend on. Implementations live in
//! `mealplan_core::adapters`; services receive them as `Arc<dyn ...>`.
//!
//! Lookups return `None` on a miss. Turning a miss into a
//! [`MenuError`](crate::MenuError) is the caller's decision.

use std::sync::Arc;

use crate::nutrition::{Ingredient, IngredientId, Menu, MenuId, Recipe, RecipeId};

/// Read access to the ingredient catalog.
pub trait IngredientRepository: Send + Sync {
    fn find(&self, ingredient_id: &IngredientId) -> Option<Arc<Ingredient>>;

    fn all(&self) -> Vec<Arc<Ingredient>>;
}

pub trait RecipeRepository: Send + Sync {
    fn find(&self, recipe_id: &RecipeId) -> Option<Arc<Recipe>>;

    /// Every stored recipe, in insertion order.
    ///
    /// This order is the pool order seen by the menu search, so it decides
    /// which menu wins a tie.
    fn all(&self) -> Vec<Arc<Recipe>>;

    /// Stores `recipe`, replacing any recipe with the same id.
    fn add(&self, recipe: Recipe) -> Arc<Recipe>;
}

pub trait MenuRepository: Send + Sync {
    fn find(&self, menu_id: &MenuId) -> Option<Arc<Menu>>;

    fn add(&self, menu: Menu) -> Arc<Menu>;
}
