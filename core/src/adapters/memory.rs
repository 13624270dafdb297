use std::collections::{BTreeMap, HashMap};
use std::path::Path;
use std::sync::{Arc, PoisonError, RwLock};

use anyhow::Context;
use mealplan_common::nutrition::{Ingredient, IngredientId, Menu, MenuId, Recipe, RecipeId};
use mealplan_common::repository::{IngredientRepository, MenuRepository, RecipeRepository};
use tracing::debug;

use super::catalog;

/// Read-only ingredient catalog, listed in id order.
#[derive(Debug, Default)]
pub struct InMemoryIngredientRepository {
    ingredients: BTreeMap<IngredientId, Arc<Ingredient>>,
}

impl InMemoryIngredientRepository {
    pub fn new(ingredients: impl IntoIterator<Item = Ingredient>) -> Self {
        let ingredients = ingredients
            .into_iter()
            .map(|ingredient| (ingredient.id.clone(), Arc::new(ingredient)))
            .collect();
        Self { ingredients }
    }

    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        Ok(Self::new(catalog::parse_ingredients(json)?))
    }

    pub fn from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("reading ingredient catalog {}", path.display()))?;
        let repo = Self::from_json(&json)
            .with_context(|| format!("loading ingredient catalog {}", path.display()))?;
        debug!("Loaded {} ingredients from {}", repo.ingredients.len(), path.display());
        Ok(repo)
    }
}

impl IngredientRepository for InMemoryIngredientRepository {
    fn find(&self, ingredient_id: &IngredientId) -> Option<Arc<Ingredient>> {
        self.ingredients.get(ingredient_id).cloned()
    }

    fn all(&self) -> Vec<Arc<Ingredient>> {
        self.ingredients.values().cloned().collect()
    }
}

#[derive(Debug, Default)]
struct RecipeStore {
    order: Vec<RecipeId>,
    by_id: HashMap<RecipeId, Arc<Recipe>>,
}

/// Recipe storage that remembers insertion order.
#[derive(Debug, Default)]
pub struct InMemoryRecipeRepository {
    store: RwLock<RecipeStore>,
}

impl InMemoryRecipeRepository {
    pub fn new(recipes: impl IntoIterator<Item = Recipe>) -> Self {
        let repo = Self::default();
        for recipe in recipes {
            repo.add(recipe);
        }
        repo
    }

    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        Ok(Self::new(catalog::parse_recipes(json)?))
    }

    pub fn from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("reading recipe catalog {}", path.display()))?;
        let repo = Self::from_json(&json)
            .with_context(|| format!("loading recipe catalog {}", path.display()))?;
        debug!("Loaded {} recipes from {}", repo.len(), path.display());
        Ok(repo)
    }

    pub fn len(&self) -> usize {
        self.store.read().unwrap_or_else(PoisonError::into_inner).order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl RecipeRepository for InMemoryRecipeRepository {
    fn find(&self, recipe_id: &RecipeId) -> Option<Arc<Recipe>> {
        let store = self.store.read().unwrap_or_else(PoisonError::into_inner);
        store.by_id.get(recipe_id).cloned()
    }

    fn all(&self) -> Vec<Arc<Recipe>> {
        let store = self.store.read().unwrap_or_else(PoisonError::into_inner);
        store
            .order
            .iter()
            .filter_map(|id| store.by_id.get(id).cloned())
            .collect()
    }

    fn add(&self, recipe: Recipe) -> Arc<Recipe> {
        let recipe = Arc::new(recipe);
        let mut store = self.store.write().unwrap_or_else(PoisonError::into_inner);
        if store.by_id.insert(recipe.id(), Arc::clone(&recipe)).is_none() {
            store.order.push(recipe.id());
        }
        recipe
    }
}

#[derive(Debug, Default)]
pub struct InMemoryMenuRepository {
    menus: RwLock<HashMap<MenuId, Arc<Menu>>>,
}

impl InMemoryMenuRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl MenuRepository for InMemoryMenuRepository {
    fn find(&self, menu_id: &MenuId) -> Option<Arc<Menu>> {
        let menus = self.menus.read().unwrap_or_else(PoisonError::into_inner);
        menus.get(menu_id).cloned()
    }

    fn add(&self, menu: Menu) -> Arc<Menu> {
        let menu = Arc::new(menu);
        let mut menus = self.menus.write().unwrap_or_else(PoisonError::into_inner);
        menus.insert(menu.id, Arc::clone(&menu));
        menu
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
