use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::Ordering;
use std::time::{Duration, Instant};

use anyhow::Context;
use colored::*;
use mealplan_common::config::Config;
use mealplan_common::error::MenuError;
use mealplan_common::preference::PreferenceSpec;
use mealplan_core::context::AppContext;
use mealplan_core::selector::{self, candidate_count};
use mealplan_core::services::{CreatedMenu, MenuRequest};
use tracing::warn;

use crate::commands::MenuArgs;
use crate::mprint;
use crate::terminal::{colors, format, print, spinner};

pub async fn menu(ctx: AppContext, args: MenuArgs, cfg: &Config) -> anyhow::Result<()> {
    let request = MenuRequest::new(args.size, preference_specs(&args)?);
    let pool = ctx.recipe_service.list().len();
    selector::validate(pool, args.size)?;
    let candidates = candidate_count(pool, args.size);

    print::header("searching for a menu", cfg.quiet);
    let span = spinner::search_span(candidates)?;
    let stop = ctx.stop_flag();
    let ctx = Arc::new(ctx);

    let start_time: Instant = Instant::now();
    let mut search = {
        let ctx = Arc::clone(&ctx);
        let span = span.clone();
        tokio::task::spawn_blocking(move || span.in_scope(|| ctx.menu_service.create(&request)))
    };

    let result = tokio::select! {
        joined = &mut search => joined?,
        _ = tokio::signal::ctrl_c() => {
            warn!("Interrupted, stopping the search...");
            stop.store(true, Ordering::Relaxed);
            search.await?
        }
    };
    drop(span);

    match result {
        Ok(created) => {
            print_menu(&created, start_time.elapsed(), cfg);
            Ok(())
        }
        Err(MenuError::SearchCancelled) => {
            print::header("search cancelled", cfg.quiet);
            print::no_results();
            Err(MenuError::SearchCancelled.into())
        }
        Err(err) => Err(err.into()),
    }
}

/// Preference records from `--preferences`, followed by the ones built from flags.
fn preference_specs(args: &MenuArgs) -> anyhow::Result<Vec<PreferenceSpec>> {
    let mut specs = match &args.preferences {
        Some(path) => read_preferences(path)?,
        None => Vec::new(),
    };

    specs.extend(args.restrict.iter().map(PreferenceSpec::restrict_ingredient));
    if let Some(kcal) = args.kcal {
        specs.push(PreferenceSpec::kilocalories(kcal));
    }
    if let Some(macros) = args.macros {
        specs.push(PreferenceSpec::macros(
            macros.carbohydrates,
            macros.proteins,
            macros.fats,
        ));
    }
    Ok(specs)
}

fn read_preferences(path: &Path) -> anyhow::Result<Vec<PreferenceSpec>> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("reading preferences {}", path.display()))?;
    serde_json::from_str(&json).with_context(|| format!("parsing preferences {}", path.display()))
}

fn print_menu(created: &CreatedMenu, total_time: Duration, cfg: &Config) {
    let menu = &created.menu;

    if cfg.quiet > 0 {
        mprint!();
    }

    print::header("selected menu", cfg.quiet);
    for (idx, meal) in menu.meals.iter().enumerate() {
        match cfg.quiet {
            2 => print::print(meal.name()),
            _ => {
                print::tree_head(idx + 1, meal.name());
                print::as_tree_one_level(format::recipe_to_details(meal));
            }
        }
    }

    if cfg.quiet < 2 {
        mprint!();
        print::tree_head(0, "Menu totals");
        let mut totals = vec![(String::from("Energy"), format::kcal(menu.total_kilocalories()))];
        totals.extend(format::macros_to_details(&menu.total_macros()));
        totals.push((String::from("Cost"), cost(created.cost)));
        print::as_tree_one_level(totals);
    }

    let meals: ColoredString = format!("{} meals", menu.len()).bold().green();
    let examined: ColoredString = created.candidates_examined.to_string().bold().yellow();
    let total_time: ColoredString = format!("{:.2}s", total_time.as_secs_f64()).bold().yellow();
    let output: String = format!("Menu {}: {meals} picked from {examined} candidates in {total_time}", menu.id)
        .color(colors::TEXT_DEFAULT)
        .to_string();

    match cfg.quiet {
        0 => {
            print::fat_separator();
            print::centerln(&output);
        }
        _ => print::print(&output),
    }
}

fn cost(value: f64) -> ColoredString {
    if value.is_infinite() {
        "inadmissible".red().bold()
    } else {
        format!("{value:.2}").color(colors::ACCENT)
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
