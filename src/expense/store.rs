use std::path::{Path, PathBuf};

use crate::errors::{ExpenseError, Result};
use crate::storage;

use super::Expense;

/// Owns the in-memory expense log and the file backing it. Every mutation
/// rewrites the whole file before returning, so the file mirrors memory at
/// all times.
pub struct ExpenseStore {
    path: PathBuf,
    expenses: Vec<Expense>,
}

impl ExpenseStore {
    /// Opens the store backed by `path`. A missing or unparseable file
    /// yields an empty log; no error is surfaced to the caller.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let expenses = storage::load_expenses(&path);
        Self { path, expenses }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    /// Appends a new record stamped with the current local time and persists
    /// the log. Returns the created record. On a failed save the append is
    /// rolled back so memory still mirrors the file.
    pub fn add(
        &mut self,
        amount: f64,
        category: impl AsRef<str>,
        description: impl Into<String>,
    ) -> Result<Expense> {
        let expense = Expense::new(amount, category, description);
        self.expenses.push(expense.clone());
        if let Err(err) = self.save() {
            self.expenses.pop();
            return Err(err);
        }
        Ok(expense)
    }

    /// Removes the record at the 0-based `index` and persists the log.
    /// Returns the removed record. Out-of-range indices leave the log
    /// untouched; a failed save restores the removed record in place.
    pub fn delete(&mut self, index: usize) -> Result<Expense> {
        if index >= self.expenses.len() {
            return Err(ExpenseError::InvalidIndex(index));
        }
        let removed = self.expenses.remove(index);
        match self.save() {
            Ok(()) => Ok(removed),
            Err(err) => {
                self.expenses.insert(index, removed);
                Err(err)
            }
        }
    }

    /// Rewrites the backing file with the full in-memory log.
    pub fn save(&self) -> Result<()> {
        storage::save_expenses(&self.path, &self.expenses)
    }
}
