use colored::*;
use indicatif::ProgressStyle;
use tracing::{Span, info_span};
use tracing_indicatif::span_ext::IndicatifSpanExt;

use crate::terminal::colors;

fn search_style() -> anyhow::Result<ProgressStyle> {
    Ok(ProgressStyle::with_template("{spinner:.blue} {msg} {elapsed:.dim}")?.tick_strings(&[
        "▁▁▁▁▁",
        "▁▂▂▂▁",
        "▁▄▂▄▁",
        "▂▄▆▄▂",
        "▄▆█▆▄",
        "▂▄▆▄▂",
        "▁▄▂▄▁",
        "▁▂▂▂▁",
    ]))
}

/// Span whose progress bar spins for as long as the menu search runs.
pub fn search_span(candidates: Option<u128>) -> anyhow::Result<Span> {
    let span = info_span!("menu_search", indicatif.pb_show = true);
    span.pb_set_style(&search_style()?);

    let count = match candidates {
        Some(count) => count.to_string().green().bold(),
        None => "too many".red().bold(),
    };
    span.pb_set_message(
        &format!("Scoring {} candidate menus...", count)
            .color(colors::TEXT_DEFAULT)
            .to_string(),
    );
    Ok(span)
}
