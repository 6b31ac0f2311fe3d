use std::fmt;

use colored::Colorize;

const RULE_WIDTH: usize = 70;

/// Plain informational line.
pub fn info(message: impl fmt::Display) {
    println!("{message}");
}

pub fn success(message: impl fmt::Display) {
    println!("{}", format!("✓ {message}").green());
}

pub fn warning(message: impl fmt::Display) {
    println!("{}", format!("! {message}").yellow());
}

pub fn error(message: impl fmt::Display) {
    println!("{}", format!("✗ {message}").red());
}

/// Title between full-width rules, used for the menu and report headers.
pub fn section(title: &str) {
    println!("{}", "=".repeat(RULE_WIDTH));
    println!("{}", title.bold());
    println!("{}", "=".repeat(RULE_WIDTH));
}

pub fn separator() {
    println!("{}", "-".repeat(RULE_WIDTH));
}
