use mealplan_common::nutrition::{MacroNutrients, Recipe};

use super::Preference;

/// Pulls the menu towards target carbohydrate, protein and fat totals.
///
/// The targets apply to the whole candidate: per-serving macros of every
/// recipe are summed, not averaged over the number of meals.
#[derive(Debug, Clone, PartialEq)]
pub struct MacroPreferences {
    pub target: MacroNutrients,
}

impl MacroPreferences {
    pub fn new(carbohydrates: f64, proteins: f64, fats: f64) -> Self {
        Self {
            target: MacroNutrients::new(carbohydrates, proteins, fats),
        }
    }
}

impl Preference for MacroPreferences {
    fn cost(&self, candidate: &[&Recipe]) -> f64 {
        let total: MacroNutrients = candidate
            .iter()
            .map(|recipe| recipe.macros_per_serving())
            .sum();
        self.target.distance(&total)
    }
}
