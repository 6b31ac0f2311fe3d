//! Read-only views over the expense log. Everything here is pure
//! computation; rendering lives in the CLI layer.

use std::cmp::Ordering;

use chrono::NaiveDateTime;

use crate::expense::{title_case, Expense};

/// One row of the full listing, positioned 1-based for display.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseLine {
    pub position: usize,
    pub date: NaiveDateTime,
    pub amount: f64,
    pub category: String,
    pub description: String,
}

/// Per-category aggregate with its share of the grand total.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryBreakdown {
    pub category: String,
    pub total: f64,
    pub percentage: f64,
}

/// Summary over the whole log, categories sorted by total descending.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryReport {
    pub generated_at: NaiveDateTime,
    pub record_count: usize,
    pub total_spent: f64,
    pub categories: Vec<CategoryBreakdown>,
}

/// Produces one line per record in insertion order. Categories are
/// title-cased for display; an empty log yields an empty listing.
pub fn list_expenses(expenses: &[Expense]) -> Vec<ExpenseLine> {
    expenses
        .iter()
        .enumerate()
        .map(|(i, expense)| ExpenseLine {
            position: i + 1,
            date: expense.date,
            amount: expense.amount,
            category: title_case(&expense.category),
            description: expense.description.clone(),
        })
        .collect()
}

/// Groups the log by stored category, sums per group and overall, and sorts
/// groups by total descending (stable, so ties keep first-encountered
/// order). Returns `None` for an empty log. When the grand total is zero
/// every category reports 0.0%.
pub fn summarize(expenses: &[Expense], generated_at: NaiveDateTime) -> Option<SummaryReport> {
    if expenses.is_empty() {
        return None;
    }

    let mut groups: Vec<(String, f64)> = Vec::new();
    let mut total_spent = 0.0;
    for expense in expenses {
        total_spent += expense.amount;
        match groups.iter_mut().find(|(name, _)| *name == expense.category) {
            Some((_, total)) => *total += expense.amount,
            None => groups.push((expense.category.clone(), expense.amount)),
        }
    }

    groups.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));

    let categories = groups
        .into_iter()
        .map(|(category, total)| CategoryBreakdown {
            category: title_case(&category),
            percentage: if total_spent == 0.0 {
                0.0
            } else {
                total / total_spent * 100.0
            },
            total,
        })
        .collect();

    Some(SummaryReport {
        generated_at,
        record_count: expenses.len(),
        total_spent,
        categories,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Local;

    const TOLERANCE: f64 = 1e-9;

    fn now() -> NaiveDateTime {
        Local::now().naive_local()
    }

    fn sample_log() -> Vec<Expense> {
        vec![
            Expense::new(12.50, "Food", "lunch"),
            Expense::new(40.0, "Transport", ""),
        ]
    }

    #[test]
    fn listing_preserves_insertion_order_with_1_based_positions() {
        let log = sample_log();
        let lines = list_expenses(&log);

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].position, 1);
        assert_eq!(lines[0].category, "Food");
        assert_eq!(lines[1].position, 2);
        assert_eq!(lines[1].category, "Transport");
    }

    #[test]
    fn listing_empty_log_is_empty() {
        assert!(list_expenses(&[]).is_empty());
    }

    #[test]
    fn summarize_empty_log_is_none() {
        assert!(summarize(&[], now()).is_none());
    }

    #[test]
    fn summarize_worked_example() {
        let report = summarize(&sample_log(), now()).expect("non-empty summary");

        assert_eq!(report.record_count, 2);
        assert!((report.total_spent - 52.50).abs() < TOLERANCE);

        // Sorted by total descending: transport first.
        assert_eq!(report.categories[0].category, "Transport");
        assert!((report.categories[0].total - 40.0).abs() < TOLERANCE);
        assert!((report.categories[0].percentage - 76.19047619047619).abs() < 1e-6);
        assert_eq!(report.categories[1].category, "Food");
        assert!((report.categories[1].percentage - 23.80952380952381).abs() < 1e-6);
    }

    #[test]
    fn category_totals_sum_to_total_spent() {
        let mut log = sample_log();
        log.push(Expense::new(7.25, "food", "dinner"));
        let report = summarize(&log, now()).expect("summary");

        let sum: f64 = report.categories.iter().map(|c| c.total).sum();
        assert!((sum - report.total_spent).abs() < TOLERANCE);
    }

    #[test]
    fn percentages_sum_to_one_hundred() {
        let log = vec![
            Expense::new(3.0, "a", ""),
            Expense::new(5.0, "b", ""),
            Expense::new(2.0, "c", ""),
            Expense::new(1.0, "a", ""),
        ];
        let report = summarize(&log, now()).expect("summary");
        let sum: f64 = report.categories.iter().map(|c| c.percentage).sum();
        assert!((sum - 100.0).abs() < 1e-6);
    }

    #[test]
    fn case_variants_of_a_category_share_one_group() {
        // Store normalization already lower-cases, so "Food" and "fOOd"
        // collapse into a single bucket.
        let log = vec![
            Expense::new(1.0, "Food", ""),
            Expense::new(2.0, "fOOd", ""),
        ];
        let report = summarize(&log, now()).expect("summary");
        assert_eq!(report.categories.len(), 1);
        assert_eq!(report.categories[0].category, "Food");
        assert!((report.categories[0].total - 3.0).abs() < TOLERANCE);
    }

    #[test]
    fn ties_keep_first_encountered_order() {
        let log = vec![
            Expense::new(5.0, "beta", ""),
            Expense::new(5.0, "alpha", ""),
        ];
        let report = summarize(&log, now()).expect("summary");
        assert_eq!(report.categories[0].category, "Beta");
        assert_eq!(report.categories[1].category, "Alpha");
    }

    #[test]
    fn zero_total_reports_zero_percent_per_category() {
        let log = vec![Expense::new(0.0, "a", ""), Expense::new(0.0, "b", "")];
        let report = summarize(&log, now()).expect("summary");
        assert_eq!(report.total_spent, 0.0);
        for category in &report.categories {
            assert_eq!(category.percentage, 0.0);
        }
    }
}
