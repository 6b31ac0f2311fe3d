#![doc(test(attr(deny(warnings))))]

//! Expense Core records personal expenses to a JSON-backed store and derives
//! listing and per-category summary views from them.

pub mod cli;
pub mod config;
pub mod errors;
pub mod expense;
pub mod report;
pub mod storage;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes the global tracing subscriber and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter =
            EnvFilter::from_default_env().add_directive("expense_core=info".parse().unwrap());

        fmt().with_env_filter(filter).init();
        tracing::info!("Expense Core tracing initialized.");
    });
}
