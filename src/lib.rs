#![doc(test(attr(deny(warnings))))]

//! FinanceFlow Core keeps a personal ledger of transactions, categories and
//! savings goals, persists it through a key-value store, and derives the
//! balances, breakdowns and series a dashboard displays.

pub mod config;
pub mod core;
pub mod currency;
pub mod domain;
pub mod errors;
pub mod storage;
pub mod utils;

use std::sync::Once;

pub use crate::core::services::{ServiceError, ServiceResult, SummaryService};
pub use crate::core::time::{Clock, FixedClock, SystemClock};
pub use crate::core::LedgerStore;
pub use crate::domain::{Category, EntityId, Goal, Ledger, Theme, Transaction, TransactionKind};
pub use crate::errors::LedgerError;
pub use crate::storage::{FileStore, KeyValueStore, MemoryStore};

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("FinanceFlow core tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
        super::init();
    }
}
