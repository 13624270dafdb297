use colored::*;
use tracing::info;
use unicode_width::UnicodeWidthStr;

use crate::terminal::colors;
use crate::terminal::format::Detail;
use crate::terminal::logging::PRINT_TARGET;

pub const TOTAL_WIDTH: usize = 64;

#[macro_export]
macro_rules! mprint {
    () => {
        $crate::terminal::print::print("");
    };
    ($msg:expr) => {
        $crate::terminal::print::print($msg);
    };
}

pub fn print(msg: &str) {
    info!(target: PRINT_TARGET, raw_msg = msg);
}

const BANNER: &str = r#"
                            _       _
      _ __ ___   ___  __ _| |_ __ | | __ _ _ __
     | '_ ` _ \ / _ \/ _` | | '_ \| |/ _` | '_ \
     | | | | | |  __/ (_| | | |_) | | (_| | | | |
     |_| |_| |_|\___|\__,_|_| .__/|_|\__,_|_| |_|
                            |_|
"#;

pub fn banner(no_banner: bool, q_level: u8) {
    if no_banner || q_level > 0 {
        return;
    }

    let version = format!("v{}", env!("CARGO_PKG_VERSION"));
    print(&format!("{}", BANNER.bright_green()));
    print(&centered(&version.bright_black().to_string()));
}

/// `──── ⟦ TITLE ⟧ ────` spanning the full width; silent when quiet.
pub fn header(title: &str, q_level: u8) {
    if q_level > 0 {
        return;
    }

    let label = format!("⟦ {} ⟧", title.to_uppercase());
    let fill = TOTAL_WIDTH.saturating_sub(label.width());
    let (left, right) = (fill / 2, fill - fill / 2);

    print(&format!(
        "{}{}{}",
        "─".repeat(left).bright_black(),
        label.bright_green(),
        "─".repeat(right).bright_black()
    ));
}

pub fn fat_separator() {
    print(&"═".repeat(TOTAL_WIDTH).color(colors::SEPARATOR).to_string());
}

/// `[n] name`, the head of a detail tree.
pub fn tree_head(idx: usize, name: &str) {
    print(&format!(
        "{}{}{} {}",
        "[".color(colors::SEPARATOR),
        idx.to_string().color(colors::ACCENT),
        "]".color(colors::SEPARATOR),
        name.color(colors::PRIMARY)
    ));
}

/// One branch per detail, keys dot-padded to a common width.
pub fn as_tree_one_level(details: Vec<Detail>) {
    let key_width = details.iter().map(|(key, _)| key.width()).max().unwrap_or(0);

    for (i, (key, value)) in details.iter().enumerate() {
        let branch = if i + 1 == details.len() { "└─" } else { "├─" };
        print(&format!(
            " {} {}{}{} {}",
            branch.bright_black(),
            key.color(colors::TEXT_DEFAULT),
            ".".repeat(key_width + 1 - key.width()).color(colors::SEPARATOR),
            ":".color(colors::SEPARATOR),
            value
        ));
    }
}

fn centered(msg: &str) -> String {
    let pad = TOTAL_WIDTH.saturating_sub(console::measure_text_width(msg)) / 2;
    format!("{}{}", " ".repeat(pad), msg)
}

pub fn centerln(msg: &str) {
    print(&centered(msg));
}

const NO_RESULTS: &str = r#"
         _   _  ___    __  __ _____ _   _ _   _
        | \ | |/ _ \  |  \/  | ____| \ | | | | |
        |  \| | | | | | |\/| |  _| |  \| | | | |
        | |\  | |_| | | |  | | |___| |\  | |_| |
        |_| \_|\___/  |_|  |_|_____|_| \_|\___/
"#;

pub fn no_results() {
    print(&format!("{}", NO_RESULTS.red().bold()));
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
