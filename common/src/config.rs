use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_INGREDIENTS_PATH: &str = "data/ingredients.json";
pub const DEFAULT_RECIPES_PATH: &str = "data/recipes.json";

pub struct Config {
    /// JSON catalog the ingredient repository is loaded from.
    pub ingredients_path: PathBuf,
    /// JSON catalog the recipe repository is loaded from.
    pub recipes_path: PathBuf,
    /// Scores candidates on the rayon pool instead of the calling thread.
    ///
    /// Does not change which menu is selected.
    pub parallel: bool,
    /// Gives up on a menu search once this much time has passed.
    pub timeout: Option<Duration>,
    pub quiet: u8,
    pub no_banner: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ingredients_path: PathBuf::from(DEFAULT_INGREDIENTS_PATH),
            recipes_path: PathBuf::from(DEFAULT_RECIPES_PATH),
            parallel: false,
            timeout: None,
            quiet: 0,
            no_banner: false,
        }
    }
}
