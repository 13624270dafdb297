use std::sync::Arc;

use mealplan_common::error::{MenuError, Result};
use mealplan_common::nutrition::{Menu, MenuId};
use mealplan_common::preference::PreferenceSpec;
use mealplan_common::repository::{MenuRepository, RecipeRepository};
use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::preferences::create_preferences;
use crate::selector::{MenuSelector, candidate_count, validate};

/// Number of meals in a menu when the request does not say.
pub const DEFAULT_MENU_SIZE: usize = 7;

fn default_size() -> usize {
    DEFAULT_MENU_SIZE
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MenuRequest {
    #[serde(default = "default_size")]
    pub size: usize,
    #[serde(default)]
    pub preferences: Vec<PreferenceSpec>,
}

impl MenuRequest {
    pub fn new(size: usize, preferences: Vec<PreferenceSpec>) -> Self {
        Self { size, preferences }
    }
}

impl Default for MenuRequest {
    fn default() -> Self {
        Self::new(DEFAULT_MENU_SIZE, Vec::new())
    }
}

/// A stored menu together with how the search arrived at it.
#[derive(Debug, Clone, PartialEq)]
pub struct CreatedMenu {
    pub menu: Arc<Menu>,
    pub cost: f64,
    pub candidates_examined: u64,
}

pub struct MenuService {
    recipe_repo: Arc<dyn RecipeRepository>,
    menu_repo: Arc<dyn MenuRepository>,
    selector: MenuSelector,
}

impl MenuService {
    pub fn new(recipe_repo: Arc<dyn RecipeRepository>, menu_repo: Arc<dyn MenuRepository>) -> Self {
        Self::with_selector(recipe_repo, menu_repo, MenuSelector::default())
    }

    pub fn with_selector(
        recipe_repo: Arc<dyn RecipeRepository>,
        menu_repo: Arc<dyn MenuRepository>,
        selector: MenuSelector,
    ) -> Self {
        Self {
            recipe_repo,
            menu_repo,
            selector,
        }
    }

    pub fn get(&self, menu_id: &MenuId) -> Result<Arc<Menu>> {
        self.menu_repo
            .find(menu_id)
            .ok_or(MenuError::MenuNotFound(*menu_id))
    }

    /// Picks the best menu for `request` out of every stored recipe and stores it.
    ///
    /// Preference records are validated before the recipe pool is read.
    pub fn create(&self, request: &MenuRequest) -> Result<CreatedMenu> {
        let preferences = create_preferences(&request.preferences)?;
        let pool = self.recipe_repo.all();
        validate(pool.len(), request.size)?;

        match candidate_count(pool.len(), request.size) {
            Some(count) => debug!(
                "Searching {count} candidate menus ({} recipes, {} meals, {} preferences)",
                pool.len(),
                request.size,
                preferences.len()
            ),
            None => warn!(
                "Candidate space for {} recipes and {} meals overflows; the search may not finish",
                pool.len(),
                request.size
            ),
        }

        let selection = self
            .selector
            .search(&pool, request.size, Some(&preferences))?;

        if selection.is_inadmissible() {
            warn!("Every candidate menu violates a restriction; returning the first one");
        }

        let menu = self.menu_repo.add(Menu::new(MenuId::new(), selection.meals));
        info!(
            "Selected menu {} with cost {:.2} after {} candidates",
            menu.id, selection.cost, selection.candidates_examined
        );

        Ok(CreatedMenu {
            menu,
            cost: selection.cost,
            candidates_examined: selection.candidates_examined,
        })
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
