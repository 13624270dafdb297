//! # Preference Engine
//!
//! A preference is a **cost function** over a candidate menu: it returns `0.0`
//! for a perfect fit, a growing value the further the candidate strays, and
//! [`f64::INFINITY`] for a candidate that must not be served at all.
//!
//! Every preference kind implements the single-method [`Preference`] trait.
//! The closed set of kinds a caller can ask for is the [`DietaryPreference`]
//! enum, built from declarative records by [`factory::create_preferences`].
//!
//! Costs must be pure: evaluating the same candidate twice yields the same
//! value. The menu search relies on this to break ties reproducibly.

use mealplan_common::nutrition::Recipe;

pub mod combination;
pub mod factory;
pub mod kilocalories;
pub mod macros;
pub mod restrict;

pub use combination::Combination;
pub use factory::create_preferences;
pub use kilocalories::KilocaloriesPreferences;
pub use macros::MacroPreferences;
pub use restrict::RestrictIngredient;

/// Cost assigned to a candidate that breaks a hard constraint.
pub const INADMISSIBLE: f64 = f64::INFINITY;

pub trait Preference: Send + Sync {
    /// Scores `candidate`; lower is better.
    fn cost(&self, candidate: &[&Recipe]) -> f64;
}

impl<P: Preference + ?Sized> Preference for &P {
    fn cost(&self, candidate: &[&Recipe]) -> f64 {
        (**self).cost(candidate)
    }
}

impl<P: Preference + ?Sized> Preference for Box<P> {
    fn cost(&self, candidate: &[&Recipe]) -> f64 {
        (**self).cost(candidate)
    }
}

/// Rates every candidate equally.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ZeroCost;

impl Preference for ZeroCost {
    fn cost(&self, _candidate: &[&Recipe]) -> f64 {
        0.0
    }
}

/// The preference kinds a caller can request.
#[derive(Debug, Clone, PartialEq)]
pub enum DietaryPreference {
    RestrictIngredient(RestrictIngredient),
    Macros(MacroPreferences),
    Kilocalories(KilocaloriesPreferences),
    Combination(Combination),
}

impl Preference for DietaryPreference {
    fn cost(&self, candidate: &[&Recipe]) -> f64 {
        match self {
            Self::RestrictIngredient(restrict) => restrict.cost(candidate),
            Self::Macros(macros) => macros.cost(candidate),
            Self::Kilocalories(kilocalories) => kilocalories.cost(candidate),
            Self::Combination(combination) => combination.cost(candidate),
        }
    }
}

impl From<RestrictIngredient> for DietaryPreference {
    fn from(preference: RestrictIngredient) -> Self {
        Self::RestrictIngredient(preference)
    }
}

impl From<MacroPreferences> for DietaryPreference {
    fn from(preference: MacroPreferences) -> Self {
        Self::Macros(preference)
    }
}

impl From<KilocaloriesPreferences> for DietaryPreference {
    fn from(preference: KilocaloriesPreferences) -> Self {
        Self::Kilocalories(preference)
    }
}

impl From<Combination> for DietaryPreference {
    fn from(preference: Combination) -> Self {
        Self::Combination(preference)
    }
}
