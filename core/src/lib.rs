//! # Core
//!
//! Menu planning logic on top of the domain types in `mealplan-common`.
//!
//! ## Contents
//! * **[`preferences`]**: Cost functions that rank candidate menus.
//! * **[`selector`]**: Exhaustive search for the cheapest menu.
//! * **[`services`]**: Use cases (recipes, menus) over injected repositories.
//! * **[`adapters`]**: In-memory repositories loaded from JSON catalogs.
//! * **[`context`]**: Wires repositories and services together for a front end.

pub mod adapters;
pub mod context;
pub mod preferences;
pub mod selector;
pub mod services;
