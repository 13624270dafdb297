use std::sync::Arc;

use super::{MacroNutrients, MenuId, Recipe};

/// A stored menu: the selected meals under a [`MenuId`].
#[derive(Debug, Clone, PartialEq)]
pub struct Menu {
    pub id: MenuId,
    pub meals: Vec<Arc<Recipe>>,
}

impl Menu {
    pub fn new(id: MenuId, meals: Vec<Arc<Recipe>>) -> Self {
        Self { id, meals }
    }

    pub fn len(&self) -> usize {
        self.meals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.meals.is_empty()
    }

    /// Per-serving macros summed over every meal.
    pub fn total_macros(&self) -> MacroNutrients {
        self.meals.iter().map(|recipe| recipe.macros_per_serving()).sum()
    }

    pub fn total_kilocalories(&self) -> f64 {
        self.meals
            .iter()
            .fold(0.0, |total, recipe| total + recipe.kilocalories_per_serving())
    }
}
