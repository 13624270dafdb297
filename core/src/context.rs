use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use mealplan_common::config::Config;
use mealplan_common::repository::{IngredientRepository, MenuRepository, RecipeRepository};
use tracing::debug;

use crate::adapters::{InMemoryIngredientRepository, InMemoryMenuRepository, InMemoryRecipeRepository};
use crate::selector::{MenuSelector, SearchOptions, Strategy};
use crate::services::{MenuService, RecipeService};

/// Repositories and services shared by one front end.
pub struct AppContext {
    pub ingredients: Arc<dyn IngredientRepository>,
    pub recipes: Arc<dyn RecipeRepository>,
    pub menus: Arc<dyn MenuRepository>,
    pub recipe_service: RecipeService,
    pub menu_service: MenuService,
    stop: Arc<AtomicBool>,
}

impl AppContext {
    /// Any `stop` flag in `options` is replaced by the context's own.
    pub fn new(
        ingredients: Arc<dyn IngredientRepository>,
        recipes: Arc<dyn RecipeRepository>,
        menus: Arc<dyn MenuRepository>,
        mut options: SearchOptions,
    ) -> Self {
        let stop = Arc::new(AtomicBool::new(false));
        options.stop = Some(Arc::clone(&stop));

        let recipe_service = RecipeService::new(Arc::clone(&recipes), Arc::clone(&ingredients));
        let menu_service = MenuService::with_selector(
            Arc::clone(&recipes),
            Arc::clone(&menus),
            MenuSelector::new(options),
        );

        Self {
            ingredients,
            recipes,
            menus,
            recipe_service,
            menu_service,
            stop,
        }
    }

    pub fn from_config(cfg: &Config) -> anyhow::Result<Self> {
        let ingredients = InMemoryIngredientRepository::from_file(&cfg.ingredients_path)?;
        let recipes = InMemoryRecipeRepository::from_file(&cfg.recipes_path)?;

        let strategy = if cfg.parallel {
            Strategy::parallel()
        } else {
            Strategy::Sequential
        };
        debug!("Search strategy: {strategy:?}, timeout: {:?}", cfg.timeout);

        Ok(Self::new(
            Arc::new(ingredients),
            Arc::new(recipes),
            Arc::new(InMemoryMenuRepository::new()),
            SearchOptions {
                strategy,
                stop: None,
                timeout: cfg.timeout,
            },
        ))
    }

    /// Flag that abandons a running menu search once raised.
    pub fn stop_flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.stop)
    }

    pub fn cancel(&self) {
        self.stop.store(true, Ordering::Relaxed);
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
