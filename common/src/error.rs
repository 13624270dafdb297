use thiserror::Error;

use crate::nutrition::{IngredientId, MenuId, RecipeId};

pub type Result<T> = std::result::Result<T, MenuError>;

/// Every way a menu or recipe operation can be refused.
///
/// Variants are raised at the point where the violated precondition is
/// detected and returned unchanged to the caller.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MenuError {
    #[error("invalid menu size: {0} (a menu needs at least one meal)")]
    InvalidMenuSize(usize),

    #[error("no candidate recipes to build a menu from")]
    EmptyRecipePool,

    #[error("unsupported preference type: {0}")]
    UnsupportedPreferenceType(String),

    #[error("invalid parameters for preference '{kind}': {reason}")]
    InvalidPreferenceParameters { kind: String, reason: String },

    #[error("ingredient not found: {0}")]
    IngredientNotFound(IngredientId),

    #[error("recipe not found: {0}")]
    RecipeNotFound(RecipeId),

    #[error("menu not found: {0}")]
    MenuNotFound(MenuId),

    #[error("menu search was cancelled before completion")]
    SearchCancelled,

    #[error("invalid recipe: {0}")]
    InvalidRecipe(String),
}

impl MenuError {
    pub(crate) fn invalid_parameters(kind: &str, reason: impl Into<String>) -> Self {
        Self::InvalidPreferenceParameters {
            kind: kind.to_string(),
            reason: reason.into(),
        }
    }
}
