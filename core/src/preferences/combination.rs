use mealplan_common::nutrition::Recipe;

use super::{DietaryPreference, Preference};

/// Sums the costs of its members.
///
/// An empty combination costs nothing; a single inadmissible member makes the
/// whole candidate inadmissible.
#[derive(Debug, Clone, PartialEq)]
pub struct Combination<P = DietaryPreference> {
    preferences: Vec<P>,
}

impl<P> Combination<P> {
    pub fn new(preferences: Vec<P>) -> Self {
        Self { preferences }
    }

    pub fn preferences(&self) -> &[P] {
        &self.preferences
    }

    pub fn len(&self) -> usize {
        self.preferences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.preferences.is_empty()
    }
}

impl<P> Default for Combination<P> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<P: Preference> Preference for Combination<P> {
    fn cost(&self, candidate: &[&Recipe]) -> f64 {
        self.preferences
            .iter()
            .fold(0.0, |total, preference| total + preference.cost(candidate))
    }
}
