//! Output formatting utilities.

use colored::Colorize;
use demanda::primitives::{Tower, TowerVector};

/// Print a section header
pub(crate) fn section(title: &str) {
    println!("\n{}", format!("=== {title} ===").cyan().bold());
}

/// Print a key-value pair
pub(crate) fn kv(key: &str, value: impl std::fmt::Display) {
    println!("  {}: {}", key.white().bold(), value);
}

/// Print a success message
pub(crate) fn success(msg: &str) {
    println!("{} {}", "[OK]".green().bold(), msg);
}

/// Print a warning message (stderr, so `--json` output stays clean)
pub(crate) fn warning(msg: &str) {
    eprintln!("{} {}", "[WARN]".yellow().bold(), msg);
}

/// One line per tower, labeled A/B/C
pub(crate) fn tower_lines(vector: &TowerVector) {
    for tower in Tower::ALL {
        println!("    Tower {}: {:.6}", tower.label(), vector[tower]);
    }
}
