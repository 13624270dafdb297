//! Turns declarative [`PreferenceSpec`] records into cost functions.
//!
//! Unknown discriminators and bad parameters are reported as distinct
//! error kinds so callers can tell a typo in `type` from a typo in a value.

use mealplan_common::error::{MenuError, Result};
use mealplan_common::preference::{
    KILOCALORIES_PREFERENCES, MACRO_PREFERENCES, PreferenceSpec, RESTRICT_INGREDIENT,
};

use super::{
    Combination, DietaryPreference, KilocaloriesPreferences, MacroPreferences, RestrictIngredient,
};

/// Builds one combined preference out of `specs`, keeping their order.
///
/// Fails on the first invalid record; no recipe or ingredient is looked up.
pub fn create_preferences(specs: &[PreferenceSpec]) -> Result<Combination> {
    specs
        .iter()
        .map(DietaryPreference::try_from)
        .collect::<Result<Vec<_>>>()
        .map(Combination::new)
}

impl TryFrom<&PreferenceSpec> for DietaryPreference {
    type Error = MenuError;

    fn try_from(spec: &PreferenceSpec) -> Result<Self> {
        match spec.kind.as_str() {
            RESTRICT_INGREDIENT => {
                spec.expect_only(&["ingredient_id"])?;
                let ingredient_id = spec.string("ingredient_id")?;
                Ok(RestrictIngredient::new(ingredient_id).into())
            }
            MACRO_PREFERENCES => {
                spec.expect_only(&["carbohydrates", "proteins", "fats"])?;
                Ok(MacroPreferences::new(
                    spec.number("carbohydrates")?,
                    spec.number("proteins")?,
                    spec.number("fats")?,
                )
                .into())
            }
            KILOCALORIES_PREFERENCES => {
                spec.expect_only(&["kilocalories"])?;
                Ok(KilocaloriesPreferences::new(spec.number("kilocalories")?).into())
            }
            other => Err(MenuError::UnsupportedPreferenceType(other.to_string())),
        }
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
