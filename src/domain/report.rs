//! Derived, read-only views produced by the summary service.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{common::EntityId, transaction::TransactionKind};

/// Headline figures shown on the dashboard cards.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DashboardTotals {
    pub balance: Decimal,
    pub month_income: Decimal,
    pub month_expenses: Decimal,
    pub total_savings: Decimal,
}

/// All-time totals shown on the reports page.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct FinancialSummary {
    pub total_income: Decimal,
    pub total_expenses: Decimal,
    pub balance: Decimal,
}

/// Income and expense totals for one calendar month.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct PeriodTotals {
    pub income: Decimal,
    pub expenses: Decimal,
}

impl PeriodTotals {
    pub fn net(&self) -> Decimal {
        self.income - self.expenses
    }

    pub(crate) fn record(&mut self, kind: TransactionKind, amount: Decimal) {
        match kind {
            TransactionKind::Income => self.income += amount,
            TransactionKind::Expense => self.expenses += amount,
        }
    }
}

/// One point of the monthly income/expense series.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MonthlyPoint {
    pub year: i32,
    pub month: u32,
    pub totals: PeriodTotals,
}

impl MonthlyPoint {
    /// `YYYY-MM` key for the month.
    pub fn key(&self) -> String {
        format!("{}-{:02}", self.year, self.month)
    }
}

/// Summed expenses for one resolved category, or for the uncategorized bucket.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CategoryTotal {
    /// `None` for the uncategorized bucket.
    pub category_id: Option<EntityId>,
    pub label: String,
    pub icon: String,
    pub color: String,
    pub amount: Decimal,
    pub count: usize,
}

impl CategoryTotal {
    pub fn is_uncategorized(&self) -> bool {
        self.category_id.is_none()
    }
}

/// Progress view for a single goal.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GoalProgress {
    pub goal_id: EntityId,
    pub name: String,
    pub current_amount: Decimal,
    pub target_amount: Decimal,
    pub percent: Decimal,
    pub completed: bool,
    /// `None` when the goal has no deadline.
    pub days_remaining: Option<i64>,
}

impl GoalProgress {
    pub fn is_overdue(&self) -> bool {
        matches!(self.days_remaining, Some(days) if days <= 0)
    }

    /// Percentage capped at 100, for drawing progress bars.
    pub fn bar_width(&self) -> Decimal {
        self.percent.min(Decimal::ONE_HUNDRED).max(Decimal::ZERO)
    }
}

/// Optional filters for transaction listings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionFilter {
    pub kind: Option<TransactionKind>,
    pub category_id: Option<EntityId>,
}

impl TransactionFilter {
    pub fn kind(kind: TransactionKind) -> Self {
        Self {
            kind: Some(kind),
            ..Self::default()
        }
    }

    pub fn category(category_id: EntityId) -> Self {
        Self {
            category_id: Some(category_id),
            ..Self::default()
        }
    }
}
