use mealplan_common::nutrition::Recipe;

use super::Preference;

/// Pulls the menu towards a kilocalorie total for the whole candidate.
#[derive(Debug, Clone, PartialEq)]
pub struct KilocaloriesPreferences {
    pub kilocalories: f64,
}

impl KilocaloriesPreferences {
    pub fn new(kilocalories: f64) -> Self {
        Self { kilocalories }
    }
}

impl Preference for KilocaloriesPreferences {
    fn cost(&self, candidate: &[&Recipe]) -> f64 {
        let total: f64 = candidate
            .iter()
            .fold(0.0, |total, recipe| total + recipe.kilocalories_per_serving());
        (self.kilocalories - total).abs()
    }
}
