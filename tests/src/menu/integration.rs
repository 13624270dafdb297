#![cfg(test)]
use std::sync::Arc;
use std::sync::atomic::AtomicBool;
use std::time::Duration;

use mealplan_common::error::MenuError;
use mealplan_common::nutrition::Recipe;
use mealplan_common::preference::PreferenceSpec;
use mealplan_core::selector::{SearchOptions, Strategy};
use mealplan_core::services::MenuRequest;

use crate::fixtures::{Kitchen, kitchen};

fn contains(meals: &[Arc<Recipe>], recipe: &Arc<Recipe>) -> bool {
    meals.iter().any(|meal| meal.id() == recipe.id())
}

#[test]
fn allergen_is_never_served() {
    let Kitchen {
        menu_service,
        burger,
        ..
    } = kitchen(SearchOptions::default());

    let request = MenuRequest::new(7, vec![PreferenceSpec::restrict_ingredient("ground_beef")]);
    let created = menu_service.create(&request).unwrap();

    assert_eq!(created.menu.len(), 7);
    assert_eq!(created.cost, 0.0);
    assert!(!contains(&created.menu.meals, &burger));
}

#[test]
fn kilocalorie_diet_picks_the_lightest_meal() {
    let Kitchen {
        menu_service,
        salad,
        ..
    } = kitchen(SearchOptions::default());

    let request = MenuRequest::new(1, vec![PreferenceSpec::kilocalories(100.0)]);
    let created = menu_service.create(&request).unwrap();

    assert_eq!(created.menu.meals, vec![salad]);
    assert_eq!(created.cost, 75.0);
}

#[test]
fn macro_target_prefers_sandwiches() {
    let Kitchen {
        menu_service,
        sandwich,
        burger,
        ..
    } = kitchen(SearchOptions::default());

    let request = MenuRequest::new(7, vec![PreferenceSpec::macros(1000.0, 2000.0, 100.0)]);
    let created = menu_service.create(&request).unwrap();

    assert!(contains(&created.menu.meals, &sandwich));
    assert!(!contains(&created.menu.meals, &burger));
    assert_eq!(created.candidates_examined, 36);
}

#[test]
fn preferences_combine() {
    let Kitchen {
        menu_service,
        salad,
        sandwich,
        ..
    } = kitchen(SearchOptions::default());

    let request = MenuRequest::new(
        2,
        vec![
            PreferenceSpec::restrict_ingredient("chicken"),
            PreferenceSpec::kilocalories(600.0),
        ],
    );
    let created = menu_service.create(&request).unwrap();

    // Only the two-burger menu is free of chicken.
    assert!(!contains(&created.menu.meals, &salad));
    assert!(!contains(&created.menu.meals, &sandwich));
    assert_eq!(created.cost, 506.0);
}

#[test]
fn parallel_and_sequential_agree() {
    let request = MenuRequest::new(6, vec![PreferenceSpec::kilocalories(2000.0)]);

    let sequential = kitchen(SearchOptions::default())
        .menu_service
        .create(&request)
        .unwrap();
    let parallel = kitchen(SearchOptions {
        strategy: Strategy::Parallel { chunk_size: 5 },
        ..SearchOptions::default()
    })
    .menu_service
    .create(&request)
    .unwrap();

    let names = |meals: &[Arc<Recipe>]| -> Vec<String> {
        meals.iter().map(|meal| meal.name().to_string()).collect()
    };
    assert_eq!(names(&sequential.menu.meals), names(&parallel.menu.meals));
    assert_eq!(sequential.cost, parallel.cost);
    assert_eq!(sequential.candidates_examined, parallel.candidates_examined);
}

#[test]
fn stored_menu_can_be_fetched() {
    let Kitchen {
        recipe_service,
        menu_service,
        burger,
        ..
    } = kitchen(SearchOptions::default());

    let created = menu_service.create(&MenuRequest::new(2, vec![])).unwrap();
    let fetched = menu_service.get(&created.menu.id).unwrap();

    assert_eq!(fetched, created.menu);
    // No preferences: the first recipe in the pool, repeated.
    assert_eq!(recipe_service.list()[0], burger);
    assert_eq!(fetched.meals, vec![burger.clone(), burger]);
}

#[test]
fn invalid_preference_is_reported() {
    let Kitchen { menu_service, .. } = kitchen(SearchOptions::default());

    let request: MenuRequest = serde_json::from_str(
        r#"{"preferences": [{"type": "kilocalories-preferences", "parameters": {"kcal": 2000}}]}"#,
    )
    .unwrap();

    assert!(matches!(
        menu_service.create(&request),
        Err(MenuError::InvalidPreferenceParameters { .. })
    ));
}

#[tokio::test]
async fn search_can_be_cancelled_from_another_task() {
    let stop = Arc::new(AtomicBool::new(true));
    let Kitchen { menu_service, .. } = kitchen(SearchOptions {
        stop: Some(stop),
        ..SearchOptions::default()
    });

    let result = tokio::task::spawn_blocking(move || menu_service.create(&MenuRequest::default()))
        .await
        .unwrap();

    assert_eq!(result, Err(MenuError::SearchCancelled));
}

#[test]
fn expired_deadline_cancels_search() {
    let Kitchen { menu_service, .. } = kitchen(SearchOptions {
        timeout: Some(Duration::ZERO),
        ..SearchOptions::default()
    });

    assert_eq!(
        menu_service.create(&MenuRequest::default()),
        Err(MenuError::SearchCancelled)
    );
}
