//! Pure domain models: transactions, categories, goals, the in-memory ledger
//! and the report views derived from it. No I/O.

pub mod category;
pub mod common;
pub mod goal;
pub mod ledger;
pub mod report;
pub mod theme;
pub mod transaction;

pub use category::{default_categories, Category};
pub use common::{
    count_in_category, find_by_id, total_amount, Amounted, BelongsToCategory, Displayable,
    EntityId, Identifiable,
};
pub use goal::Goal;
pub use ledger::Ledger;
pub use report::{
    CategoryTotal, DashboardTotals, FinancialSummary, GoalProgress, MonthlyPoint, PeriodTotals,
    TransactionFilter,
};
pub use theme::Theme;
pub use transaction::{Transaction, TransactionKind};
