use mealplan_common::nutrition::{IngredientId, Recipe};

use super::{INADMISSIBLE, Preference};

/// Forbids every candidate containing an ingredient (allergies, dislikes).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestrictIngredient {
    pub ingredient_id: IngredientId,
}

impl RestrictIngredient {
    pub fn new(ingredient_id: impl Into<IngredientId>) -> Self {
        Self {
            ingredient_id: ingredient_id.into(),
        }
    }
}

impl Preference for RestrictIngredient {
    fn cost(&self, candidate: &[&Recipe]) -> f64 {
        if candidate
            .iter()
            .any(|recipe| recipe.contains(&self.ingredient_id))
        {
            INADMISSIBLE
        } else {
            0.0
        }
    }
}
