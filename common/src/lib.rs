//! # Mealplan Common
//!
//! Shared vocabulary of the workspace: the nutrient data model, the error
//! taxonomy, the repository ports and the declarative preference records.
//!
//! Nothing in this crate performs IO. Adapters live in `mealplan-core`.

pub mod config;
pub mod error;
pub mod nutrition;
pub mod preference;
pub mod repository;

pub use error::{MenuError, Result};
