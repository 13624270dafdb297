//! # Nutrient Data Model
//!
//! Immutable value types describing what a menu is made of.
//!
//! ## Entities
//! * [`recipe::Recipe`]: a named list of ingredient portions yielding a number of servings.
//! * [`menu::Menu`]: a persisted selection of recipes.
//!
//! ## Value Objects
//! * [`macros::MacroNutrients`]: carbohydrates, proteins and fats per 100 grams.
//! * [`ingredient::Ingredient`]: macros and kilocalories of a single catalog item.
//!
//! Nutrient values are stored per 100 grams and only ever combined with
//! plain `f64` arithmetic. Rounding is left to whoever prints them.

pub mod ids;
pub mod ingredient;
pub mod macros;
pub mod menu;
pub mod recipe;

pub use ids::{IngredientId, MenuId, RecipeId};
pub use ingredient::Ingredient;
pub use macros::MacroNutrients;
pub use menu::Menu;
pub use recipe::{Portion, Recipe};
