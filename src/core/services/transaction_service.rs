//! Business logic helpers for managing transactions.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;

use crate::core::services::{ServiceError, ServiceResult};
use crate::domain::{EntityId, Ledger, Transaction, TransactionFilter, TransactionKind};

/// Number of entries in the dashboard's recent-activity list.
pub const RECENT_LIMIT: usize = 5;

/// Caller-supplied fields of a transaction; id and creation time are assigned on insert.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTransaction {
    pub kind: TransactionKind,
    pub description: String,
    pub amount: Decimal,
    pub category_id: Option<EntityId>,
    pub date: NaiveDate,
}

impl NewTransaction {
    pub fn new(
        kind: TransactionKind,
        description: impl Into<String>,
        amount: Decimal,
        category_id: Option<EntityId>,
        date: NaiveDate,
    ) -> Self {
        Self {
            kind,
            description: description.into(),
            amount,
            category_id,
            date,
        }
    }
}

/// Validated insert/delete helpers and listings for ledger transactions.
pub struct TransactionService;

impl TransactionService {
    /// Appends a new transaction stamped with `created_at`.
    ///
    /// Negative amounts are refused; the sign is carried by the kind. The
    /// category reference is not checked.
    pub fn add(
        ledger: &mut Ledger,
        input: NewTransaction,
        created_at: DateTime<Utc>,
    ) -> ServiceResult<Transaction> {
        if input.amount < Decimal::ZERO {
            return Err(ServiceError::Invalid(format!(
                "transaction amount must not be negative (got {})",
                input.amount
            )));
        }
        let transaction = Transaction::new(
            input.kind,
            input.description,
            input.amount,
            input.category_id,
            input.date,
            created_at,
        );
        ledger.add_transaction(transaction.clone());
        Ok(transaction)
    }

    /// Removes the transaction identified by `id`; absent ids are ignored.
    pub fn remove(ledger: &mut Ledger, id: &EntityId) -> Option<Transaction> {
        ledger.remove_transaction(id)
    }

    /// Transactions matching `filter`, newest date first. Equal dates keep insertion order.
    pub fn list<'a>(ledger: &'a Ledger, filter: &TransactionFilter) -> Vec<&'a Transaction> {
        let mut matches: Vec<&Transaction> = ledger
            .transactions
            .iter()
            .filter(|txn| filter.kind.map_or(true, |kind| txn.kind == kind))
            .filter(|txn| {
                filter
                    .category_id
                    .as_ref()
                    .map_or(true, |id| txn.category_id.as_ref() == Some(id))
            })
            .collect();
        matches.sort_by(|a, b| b.date.cmp(&a.date));
        matches
    }

    /// The most recent transactions by date.
    pub fn recent(ledger: &Ledger) -> Vec<&Transaction> {
        let mut all = Self::list(ledger, &TransactionFilter::default());
        all.truncate(RECENT_LIMIT);
        all
    }
}
