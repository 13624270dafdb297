//! # Application Services
//!
//! The use cases of the application. Each service receives the repositories
//! it needs at construction and never reaches for global state.
//!
//! * [`recipes::RecipeService`]: look up, list and create recipes.
//! * [`menus::MenuService`]: compose a menu from the recipe pool and look it up again.

pub mod menus;
pub mod recipes;

pub use menus::{CreatedMenu, DEFAULT_MENU_SIZE, MenuRequest, MenuService};
pub use recipes::{RecipeDraft, RecipeService};
