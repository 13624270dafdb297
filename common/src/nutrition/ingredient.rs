use serde::{Deserialize, Serialize};

use super::{IngredientId, MacroNutrients};

/// A catalog item. Nutrient values are per 100 grams.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub id: IngredientId,
    pub macronutrients: MacroNutrients,
    pub kilocalories: f64,
}

impl Ingredient {
    pub fn new(id: impl Into<IngredientId>, macronutrients: MacroNutrients, kilocalories: f64) -> Self {
        Self {
            id: id.into(),
            macronutrients,
            kilocalories,
        }
    }
}

impl AsRef<IngredientId> for Ingredient {
    fn as_ref(&self) -> &IngredientId {
        &self.id
    }
}
