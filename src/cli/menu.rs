use std::{
    env,
    io::{self, BufRead},
};

use chrono::Local;
use dialoguer::{theme::ColorfulTheme, Input};

use crate::cli::output;
use crate::config;
use crate::errors::{CliError, ExpenseError};
use crate::expense::{Expense, ExpenseStore, TIMESTAMP_FORMAT};
use crate::report;

/// When set, prompts read plain lines from stdin instead of going through
/// dialoguer, so the binary can be driven by a script or a test.
pub const SCRIPT_ENV_VAR: &str = "EXPENSE_CORE_CLI_SCRIPT";

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

enum LoopControl {
    Continue,
    Exit,
}

/// Runs the interactive menu loop against the configured expense file.
pub fn run_cli() -> Result<(), CliError> {
    let mode = if env::var_os(SCRIPT_ENV_VAR).is_some() {
        CliMode::Script
    } else {
        CliMode::Interactive
    };

    let path = config::resolve_data_file(None);
    tracing::debug!("expense log at {}", path.display());
    let mut store = ExpenseStore::open(path);
    let prompter = Prompter::new(mode);

    loop {
        print_menu();
        let Some(choice) = prompter.read("Enter your choice (1-5)")? else {
            break;
        };

        let control = match choice.trim() {
            "1" => handle_add(&mut store, &prompter)?,
            "2" => {
                render_list(store.expenses());
                LoopControl::Continue
            }
            "3" => {
                render_summary(store.expenses());
                LoopControl::Continue
            }
            "4" => handle_delete(&mut store, &prompter)?,
            "5" => {
                output::info("Thank you for using Expense Tracker!");
                LoopControl::Exit
            }
            _ => {
                output::warning("Invalid choice. Please enter 1-5.");
                LoopControl::Continue
            }
        };

        if matches!(control, LoopControl::Exit) {
            break;
        }
    }

    Ok(())
}

fn print_menu() {
    output::section("EXPENSE TRACKER");
    output::info("1. Add Expense");
    output::info("2. View All Expenses");
    output::info("3. Generate Summary Report");
    output::info("4. Delete Expense");
    output::info("5. Exit");
}

/// Collects an expense from the user. A non-numeric amount is reported at
/// this boundary and never reaches the store; a failed save is reported and
/// the loop continues.
fn handle_add(store: &mut ExpenseStore, prompter: &Prompter) -> Result<LoopControl, CliError> {
    let Some(raw_amount) = prompter.read("Enter amount: $")? else {
        return Ok(LoopControl::Exit);
    };
    let amount: f64 = match raw_amount.trim().parse() {
        Ok(value) => value,
        Err(_) => {
            output::error("Invalid amount. Please enter a number.");
            return Ok(LoopControl::Continue);
        }
    };

    let Some(category) = prompter.read("Enter category (e.g., food, transport)")? else {
        return Ok(LoopControl::Exit);
    };
    let Some(description) = prompter.read("Enter description (optional)")? else {
        return Ok(LoopControl::Exit);
    };

    match store.add(amount, &category, description.trim()) {
        Ok(_) => output::success(format!(
            "Expense added: ${} for {}",
            raw_amount.trim(),
            category.trim()
        )),
        Err(err) => output::error(format!("Failed to save expense: {err}")),
    }
    Ok(LoopControl::Continue)
}

/// Shows the current list, then deletes the chosen 1-based position.
fn handle_delete(store: &mut ExpenseStore, prompter: &Prompter) -> Result<LoopControl, CliError> {
    render_list(store.expenses());

    let Some(raw) = prompter.read("Enter expense number to delete")? else {
        return Ok(LoopControl::Exit);
    };
    let position: usize = match raw.trim().parse() {
        Ok(value) => value,
        Err(_) => {
            output::error("Invalid input.");
            return Ok(LoopControl::Continue);
        }
    };
    if position == 0 {
        output::error("Invalid expense number.");
        return Ok(LoopControl::Continue);
    }

    match store.delete(position - 1) {
        Ok(removed) => output::success(format!(
            "Deleted expense: ${} for {}",
            removed.amount, removed.category
        )),
        Err(ExpenseError::InvalidIndex(_)) => output::error("Invalid expense number."),
        Err(err) => output::error(format!("Failed to save expense log: {err}")),
    }
    Ok(LoopControl::Continue)
}

fn render_list(expenses: &[Expense]) {
    let lines = report::list_expenses(expenses);
    if lines.is_empty() {
        output::info("No expenses recorded yet.");
        return;
    }

    output::section("ALL EXPENSES");
    for line in &lines {
        output::info(format!(
            "{}. Date: {}",
            line.position,
            line.date.format(TIMESTAMP_FORMAT)
        ));
        output::info(format!("   Amount: ${:.2}", line.amount));
        output::info(format!("   Category: {}", line.category));
        if !line.description.is_empty() {
            output::info(format!("   Description: {}", line.description));
        }
    }
    output::separator();
}

fn render_summary(expenses: &[Expense]) {
    let Some(summary) = report::summarize(expenses, Local::now().naive_local()) else {
        output::info("No expenses to summarize.");
        return;
    };

    output::section("EXPENSE SUMMARY REPORT");
    output::info(format!(
        "Report generated: {}",
        summary.generated_at.format(TIMESTAMP_FORMAT)
    ));
    output::info(format!(
        "Total expenses recorded: {}",
        summary.record_count
    ));
    output::info(format!(
        "{:<20} {:<15} {:<15}",
        "CATEGORY", "AMOUNT", "PERCENTAGE"
    ));
    output::separator();
    for category in &summary.categories {
        output::info(format!(
            "{:<20} ${:<14.2} {:.1}%",
            category.category, category.total, category.percentage
        ));
    }
    output::separator();
    output::info(format!(
        "{:<20} ${:<14.2} 100.0%",
        "TOTAL", summary.total_spent
    ));
}

/// Reads user input either through dialoguer (interactive) or as plain
/// stdin lines (script mode). `None` means end of input in script mode.
struct Prompter {
    mode: CliMode,
    theme: ColorfulTheme,
}

impl Prompter {
    fn new(mode: CliMode) -> Self {
        Self {
            mode,
            theme: ColorfulTheme::default(),
        }
    }

    fn read(&self, prompt: &str) -> Result<Option<String>, CliError> {
        match self.mode {
            CliMode::Interactive => {
                let value = Input::<String>::with_theme(&self.theme)
                    .with_prompt(prompt)
                    .allow_empty(true)
                    .interact_text()?;
                Ok(Some(value))
            }
            CliMode::Script => {
                let mut line = String::new();
                if io::stdin().lock().read_line(&mut line)? == 0 {
                    return Ok(None);
                }
                Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
            }
        }
    }
}
