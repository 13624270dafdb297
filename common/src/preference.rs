//! # Preference Records
//!
//! The declarative form of a dietary preference, as it arrives from a caller:
//!
//! ```json
//! { "type": "macro-preferences", "parameters": { "carbohydrates": 250, "proteins": 120, "fats": 70 } }
//! ```
//!
//! A list of these records is turned into cost functions by the factory in
//! `mealplan-core`. This module only knows the record shape and how to pull
//! typed parameters out of it.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{MenuError, Result};

pub const RESTRICT_INGREDIENT: &str = "restrict-ingredient";
pub const MACRO_PREFERENCES: &str = "macro-preferences";
pub const KILOCALORIES_PREFERENCES: &str = "kilocalories-preferences";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreferenceSpec {
    /// Discriminator naming the preference kind.
    #[serde(rename = "type", alias = "type_")]
    pub kind: String,
    #[serde(default)]
    pub parameters: Map<String, Value>,
}

impl PreferenceSpec {
    pub fn new(kind: impl Into<String>, parameters: Map<String, Value>) -> Self {
        Self {
            kind: kind.into(),
            parameters,
        }
    }

    pub fn restrict_ingredient(ingredient_id: impl Into<String>) -> Self {
        let mut parameters = Map::new();
        parameters.insert("ingredient_id".to_string(), Value::String(ingredient_id.into()));
        Self::new(RESTRICT_INGREDIENT, parameters)
    }

    pub fn macros(carbohydrates: f64, proteins: f64, fats: f64) -> Self {
        let mut parameters = Map::new();
        parameters.insert("carbohydrates".to_string(), Value::from(carbohydrates));
        parameters.insert("proteins".to_string(), Value::from(proteins));
        parameters.insert("fats".to_string(), Value::from(fats));
        Self::new(MACRO_PREFERENCES, parameters)
    }

    pub fn kilocalories(kilocalories: f64) -> Self {
        let mut parameters = Map::new();
        parameters.insert("kilocalories".to_string(), Value::from(kilocalories));
        Self::new(KILOCALORIES_PREFERENCES, parameters)
    }

    /// Fails if any parameter outside `allowed` was supplied.
    pub fn expect_only(&self, allowed: &[&str]) -> Result<()> {
        match self
            .parameters
            .keys()
            .find(|key| !allowed.contains(&key.as_str()))
        {
            Some(unexpected) => Err(MenuError::invalid_parameters(
                &self.kind,
                format!("unexpected parameter '{unexpected}'"),
            )),
            None => Ok(()),
        }
    }

    pub fn string(&self, name: &str) -> Result<String> {
        match self.parameters.get(name) {
            Some(Value::String(value)) => Ok(value.clone()),
            Some(other) => Err(MenuError::invalid_parameters(
                &self.kind,
                format!("'{name}' must be a string, got {other}"),
            )),
            None => Err(self.missing(name)),
        }
    }

    pub fn number(&self, name: &str) -> Result<f64> {
        match self.parameters.get(name) {
            Some(Value::Number(value)) => value.as_f64().ok_or_else(|| {
                MenuError::invalid_parameters(&self.kind, format!("'{name}' is out of range"))
            }),
            Some(other) => Err(MenuError::invalid_parameters(
                &self.kind,
                format!("'{name}' must be a number, got {other}"),
            )),
            None => Err(self.missing(name)),
        }
    }

    fn missing(&self, name: &str) -> MenuError {
        MenuError::invalid_parameters(&self.kind, format!("missing parameter '{name}'"))
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
