pub mod record;
pub mod store;

pub use record::{title_case, Expense, TIMESTAMP_FORMAT};
pub use store::ExpenseStore;
