pub mod category_service;
pub mod goal_service;
pub mod summary_service;
pub mod transaction_service;

pub use category_service::CategoryService;
pub use goal_service::{GoalService, NewGoal};
pub use summary_service::{SummaryService, MONTHLY_SERIES_LEN, TOP_CATEGORY_LIMIT};
pub use transaction_service::{NewTransaction, TransactionService, RECENT_LIMIT};

use crate::{domain::EntityId, errors::LedgerError};

pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Ledger(#[from] LedgerError),
    #[error("category {id} is used by {transactions} transaction(s)")]
    CategoryInUse { id: EntityId, transactions: usize },
    #[error("{0}")]
    Invalid(String),
}
