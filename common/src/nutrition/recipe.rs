//! # Recipe Model
//!
//! A recipe lists ingredient portions in grams and how many servings the
//! whole batch yields. All nutrient figures a recipe reports are per serving,
//! which keeps recipes of different batch sizes comparable.

use std::sync::Arc;

use super::{Ingredient, IngredientId, MacroNutrients, RecipeId};
use crate::error::{MenuError, Result};

/// `grams` of a shared catalog [`Ingredient`].
#[derive(Debug, Clone, PartialEq)]
pub struct Portion {
    pub grams: f64,
    pub ingredient: Arc<Ingredient>,
}

impl Portion {
    pub fn new(grams: f64, ingredient: Arc<Ingredient>) -> Self {
        Self { grams, ingredient }
    }
}

/// An immutable recipe.
///
/// Portions keep their order and are never merged, so the same ingredient
/// may show up in several entries.
#[derive(Debug, Clone, PartialEq)]
pub struct Recipe {
    id: RecipeId,
    name: String,
    ingredients: Vec<Portion>,
    yield_: u32,
}

impl Recipe {
    /// Builds a recipe, refusing a zero yield and negative or non-finite quantities.
    pub fn new(
        id: RecipeId,
        name: impl Into<String>,
        ingredients: Vec<Portion>,
        yield_: u32,
    ) -> Result<Self> {
        if yield_ < 1 {
            return Err(MenuError::InvalidRecipe(
                "a recipe must yield at least one serving".to_string(),
            ));
        }

        if let Some(portion) = ingredients
            .iter()
            .find(|portion| !portion.grams.is_finite() || portion.grams < 0.0)
        {
            return Err(MenuError::InvalidRecipe(format!(
                "invalid quantity {} for ingredient '{}'",
                portion.grams, portion.ingredient.id
            )));
        }

        Ok(Self {
            id,
            name: name.into(),
            ingredients,
            yield_,
        })
    }

    pub fn id(&self) -> RecipeId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ingredients(&self) -> &[Portion] {
        &self.ingredients
    }

    pub fn yield_(&self) -> u32 {
        self.yield_
    }

    /// Ids of every portion, in recipe order (duplicates kept).
    pub fn ingredient_ids(&self) -> impl Iterator<Item = &IngredientId> {
        self.ingredients.iter().map(|portion| &portion.ingredient.id)
    }

    /// Whether any portion uses the given ingredient.
    ///
    /// Accepts an [`IngredientId`] or an [`Ingredient`]; only ids are compared.
    pub fn contains(&self, ingredient: impl AsRef<IngredientId>) -> bool {
        let id: &IngredientId = ingredient.as_ref();
        self.ingredient_ids().any(|candidate| candidate == id)
    }

    pub fn macros_per_serving(&self) -> MacroNutrients {
        let batch: MacroNutrients = self
            .ingredients
            .iter()
            .map(|portion| portion.ingredient.macronutrients.for_grams(portion.grams))
            .sum();
        batch / f64::from(self.yield_)
    }

    pub fn kilocalories_per_serving(&self) -> f64 {
        let batch: f64 = self
            .ingredients
            .iter()
            .fold(0.0, |total, portion| {
                total + portion.grams * portion.ingredient.kilocalories / 100.0
            });
        batch / f64::from(self.yield_)
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
