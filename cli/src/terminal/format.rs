use colored::*;
use mealplan_common::nutrition::{MacroNutrients, Portion, Recipe};

use crate::terminal::colors;

pub type Detail = (String, ColoredString);

pub fn kcal(value: f64) -> ColoredString {
    format!("{value:.0} kcal").color(colors::KILOCALORIES)
}

pub fn grams(value: f64) -> String {
    format!("{value:.1} g")
}

pub fn macros_to_details(macros: &MacroNutrients) -> Vec<Detail> {
    vec![
        (
            String::from("Carbs"),
            grams(macros.carbohydrates).color(colors::CARBOHYDRATES),
        ),
        (
            String::from("Protein"),
            grams(macros.proteins).color(colors::PROTEINS),
        ),
        (String::from("Fat"), grams(macros.fats).color(colors::FATS)),
    ]
}

/// Per-serving summary used in recipe listings and menus.
pub fn recipe_to_details(recipe: &Recipe) -> Vec<Detail> {
    let mut details: Vec<Detail> = vec![(
        String::from("Energy"),
        kcal(recipe.kilocalories_per_serving()),
    )];
    details.extend(macros_to_details(&recipe.macros_per_serving()));
    details.push((
        String::from("Id"),
        recipe.id().to_string().color(colors::SEPARATOR),
    ));
    details
}

pub fn portion_to_detail(portion: &Portion) -> Detail {
    (
        portion.ingredient.id.to_string(),
        grams(portion.grams).color(colors::TEXT_DEFAULT),
    )
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use super::*;
    use mealplan_common::nutrition::{Ingredient, RecipeId};
    use std::sync::Arc;

    #[test]
    fn test_recipe_details() {
        colored::control::set_override(false);

        let rice = Arc::new(Ingredient::new(
            "rice",
            MacroNutrients::new(80.0, 7.0, 1.0),
            360.0,
        ));
        let recipe = Recipe::new(
            RecipeId::new(),
            "Rice bowl",
            vec![Portion::new(200.0, rice)],
            2,
        )
        .unwrap();

        let details = recipe_to_details(&recipe);
        let keys: Vec<&str> = details.iter().map(|(key, _)| key.as_str()).collect();
        assert_eq!(keys, vec!["Energy", "Carbs", "Protein", "Fat", "Id"]);
        assert_eq!(details[0].1.to_string(), "360 kcal");
        assert_eq!(details[1].1.to_string(), "80.0 g");

        let (key, value) = portion_to_detail(&recipe.ingredients()[0]);
        assert_eq!(key, "rice");
        assert_eq!(value.to_string(), "200.0 g");
    }
}
