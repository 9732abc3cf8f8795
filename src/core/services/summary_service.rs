//! Derived views over the ledger: balances, monthly series, category
//! breakdowns and goal progress.
//!
//! Every function recomputes from the live collections; nothing is cached.
//! Callers pass "now" explicitly so results are reproducible.

use std::collections::HashMap;

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use rust_decimal::Decimal;

use crate::domain::{
    category::{UNCATEGORIZED_COLOR, UNCATEGORIZED_ICON, UNCATEGORIZED_LABEL},
    total_amount, CategoryTotal, DashboardTotals, EntityId, FinancialSummary, Goal, GoalProgress,
    Ledger, MonthlyPoint, PeriodTotals, Transaction,
};

/// Number of entries in the top-categories report.
pub const TOP_CATEGORY_LIMIT: usize = 5;
/// Number of months covered by the monthly series, ending with the current month.
pub const MONTHLY_SERIES_LEN: usize = 6;

pub struct SummaryService;

impl SummaryService {
    /// Income minus expenses over every transaction.
    pub fn net_balance(ledger: &Ledger) -> Decimal {
        ledger.transactions.iter().map(Transaction::signed_amount).sum()
    }

    /// All-time income and expense totals.
    pub fn totals(ledger: &Ledger) -> PeriodTotals {
        accumulate(ledger.transactions.iter())
    }

    /// Totals for transactions dated in the same calendar month as `today`.
    pub fn month_totals(ledger: &Ledger, today: NaiveDate) -> PeriodTotals {
        let current = month_index(today);
        accumulate(
            ledger
                .transactions
                .iter()
                .filter(|txn| month_index(txn.date) == current),
        )
    }

    /// Sum of every goal's current amount.
    pub fn total_savings(ledger: &Ledger) -> Decimal {
        total_amount(&ledger.goals)
    }

    pub fn dashboard(ledger: &Ledger, today: NaiveDate) -> DashboardTotals {
        let month = Self::month_totals(ledger, today);
        DashboardTotals {
            balance: Self::net_balance(ledger),
            month_income: month.income,
            month_expenses: month.expenses,
            total_savings: Self::total_savings(ledger),
        }
    }

    pub fn financial_summary(ledger: &Ledger) -> FinancialSummary {
        let totals = Self::totals(ledger);
        FinancialSummary {
            total_income: totals.income,
            total_expenses: totals.expenses,
            balance: totals.net(),
        }
    }

    /// Expenses grouped by category in order of first appearance.
    ///
    /// Transactions without a resolvable category share one uncategorized
    /// bucket. Returns `None` when there are no expenses at all.
    pub fn expenses_by_category(ledger: &Ledger) -> Option<Vec<CategoryTotal>> {
        let groups = group_expenses(ledger);
        if groups.is_empty() {
            None
        } else {
            Some(groups)
        }
    }

    /// Income and expenses for the six calendar months ending with `today`'s month,
    /// oldest first. Months without activity are present with zero totals.
    pub fn monthly_series(ledger: &Ledger, today: NaiveDate) -> Vec<MonthlyPoint> {
        let current = month_index(today);
        let first = current - (MONTHLY_SERIES_LEN as i32 - 1);
        let mut series: Vec<MonthlyPoint> = (first..=current)
            .map(|index| MonthlyPoint {
                year: index.div_euclid(12),
                month: index.rem_euclid(12) as u32 + 1,
                totals: PeriodTotals::default(),
            })
            .collect();

        for txn in &ledger.transactions {
            let index = month_index(txn.date);
            if (first..=current).contains(&index) {
                series[(index - first) as usize]
                    .totals
                    .record(txn.kind, txn.amount);
            }
        }
        series
    }

    /// The largest expense categories, at most [`TOP_CATEGORY_LIMIT`].
    pub fn top_categories(ledger: &Ledger) -> Vec<CategoryTotal> {
        Self::top_categories_limited(ledger, TOP_CATEGORY_LIMIT)
    }

    /// Expense categories sorted by amount, descending. Ties keep first-appearance order.
    pub fn top_categories_limited(ledger: &Ledger, limit: usize) -> Vec<CategoryTotal> {
        let mut groups = group_expenses(ledger);
        groups.sort_by(|a, b| b.amount.cmp(&a.amount));
        groups.truncate(limit);
        groups
    }

    pub fn goal_progress(goal: &Goal, now: DateTime<Utc>) -> GoalProgress {
        let percent = goal.progress_percent();
        GoalProgress {
            goal_id: goal.id.clone(),
            name: goal.name.clone(),
            current_amount: goal.current_amount,
            target_amount: goal.target_amount,
            percent,
            completed: percent >= Decimal::ONE_HUNDRED,
            days_remaining: goal.days_remaining(now),
        }
    }

    pub fn goals_progress(ledger: &Ledger, now: DateTime<Utc>) -> Vec<GoalProgress> {
        ledger
            .goals
            .iter()
            .map(|goal| Self::goal_progress(goal, now))
            .collect()
    }
}

fn month_index(date: NaiveDate) -> i32 {
    date.year() * 12 + date.month0() as i32
}

fn accumulate<'a>(transactions: impl Iterator<Item = &'a Transaction>) -> PeriodTotals {
    transactions.fold(PeriodTotals::default(), |mut totals, txn| {
        totals.record(txn.kind, txn.amount);
        totals
    })
}

fn group_expenses(ledger: &Ledger) -> Vec<CategoryTotal> {
    let mut positions: HashMap<Option<EntityId>, usize> = HashMap::new();
    let mut groups: Vec<CategoryTotal> = Vec::new();

    for txn in ledger.transactions.iter().filter(|txn| txn.is_expense()) {
        let category = ledger.category_of(txn);
        let key = category.map(|c| c.id.clone());
        let index = *positions.entry(key.clone()).or_insert_with(|| {
            groups.push(match category {
                Some(c) => CategoryTotal {
                    category_id: key,
                    label: c.name.clone(),
                    icon: c.icon.clone(),
                    color: c.color.clone(),
                    amount: Decimal::ZERO,
                    count: 0,
                },
                None => CategoryTotal {
                    category_id: None,
                    label: UNCATEGORIZED_LABEL.to_string(),
                    icon: UNCATEGORIZED_ICON.to_string(),
                    color: UNCATEGORIZED_COLOR.to_string(),
                    amount: Decimal::ZERO,
                    count: 0,
                },
            });
            groups.len() - 1
        });
        let group = &mut groups[index];
        group.amount += txn.amount;
        group.count += 1;
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Category, TransactionKind};
    use chrono::TimeZone;
    use rust_decimal_macros::dec;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    fn push(ledger: &mut Ledger, kind: TransactionKind, amount: Decimal, category: Option<&str>, date: NaiveDate) {
        ledger.add_transaction(Transaction::new(
            kind,
            "t",
            amount,
            category.map(EntityId::from),
            date,
            Utc::now(),
        ));
    }

    #[test]
    fn empty_ledger_has_no_breakdown() {
        let ledger = Ledger::new();
        assert_eq!(SummaryService::net_balance(&ledger), Decimal::ZERO);
        assert!(SummaryService::expenses_by_category(&ledger).is_none());
        assert!(SummaryService::top_categories(&ledger).is_empty());
    }

    #[test]
    fn month_totals_ignore_same_month_of_other_years() {
        let mut ledger = Ledger::new();
        push(&mut ledger, TransactionKind::Income, dec!(100), None, today());
        push(&mut ledger, TransactionKind::Income, dec!(999), None, NaiveDate::from_ymd_opt(2025, 10, 19).unwrap());
        push(&mut ledger, TransactionKind::Expense, dec!(40), None, NaiveDate::from_ymd_opt(2026, 10, 1).unwrap());

        let month = SummaryService::month_totals(&ledger, today());
        assert_eq!(month.income, dec!(100));
        assert_eq!(month.expenses, dec!(40));
        assert_eq!(SummaryService::net_balance(&ledger), dec!(1059));
    }

    #[test]
    fn dangling_and_missing_categories_share_one_bucket() {
        let mut ledger = Ledger::new();
        push(&mut ledger, TransactionKind::Expense, dec!(5), Some("ghost"), today());
        push(&mut ledger, TransactionKind::Expense, dec!(7), None, today());
        push(&mut ledger, TransactionKind::Expense, dec!(3), Some("2"), today());
        push(&mut ledger, TransactionKind::Income, dec!(50), Some("2"), today());

        let breakdown = SummaryService::expenses_by_category(&ledger).unwrap();
        assert_eq!(breakdown.len(), 2);
        assert!(breakdown[0].is_uncategorized());
        assert_eq!(breakdown[0].label, UNCATEGORIZED_LABEL);
        assert_eq!(breakdown[0].color, UNCATEGORIZED_COLOR);
        assert_eq!(breakdown[0].amount, dec!(12));
        assert_eq!(breakdown[0].count, 2);
        assert_eq!(breakdown[1].label, "Transporte");
        assert_eq!(breakdown[1].amount, dec!(3));
    }

    #[test]
    fn monthly_series_spans_year_boundary() {
        let mut ledger = Ledger::new();
        let february = NaiveDate::from_ymd_opt(2027, 2, 10).unwrap();
        push(&mut ledger, TransactionKind::Expense, dec!(20), None, NaiveDate::from_ymd_opt(2026, 9, 30).unwrap());
        push(&mut ledger, TransactionKind::Income, dec!(80), None, NaiveDate::from_ymd_opt(2026, 12, 31).unwrap());
        push(&mut ledger, TransactionKind::Expense, dec!(15), None, NaiveDate::from_ymd_opt(2027, 2, 1).unwrap());
        push(&mut ledger, TransactionKind::Expense, dec!(99), None, NaiveDate::from_ymd_opt(2027, 3, 1).unwrap());

        let series = SummaryService::monthly_series(&ledger, february);
        let keys: Vec<String> = series.iter().map(MonthlyPoint::key).collect();
        assert_eq!(
            keys,
            vec!["2026-09", "2026-10", "2026-11", "2026-12", "2027-01", "2027-02"]
        );
        assert_eq!(series[0].totals.expenses, dec!(20));
        assert_eq!(series[1].totals, PeriodTotals::default());
        assert_eq!(series[3].totals.income, dec!(80));
        assert_eq!(series[5].totals.expenses, dec!(15));
    }

    #[test]
    fn top_categories_truncates_to_limit() {
        let mut ledger = Ledger::new();
        for i in 0..7 {
            let category = Category::new(format!("c{i}"), "•", "#000000");
            let id = ledger.add_category(category);
            push(&mut ledger, TransactionKind::Expense, Decimal::from(i + 1), Some(id.as_str()), today());
        }
        let top = SummaryService::top_categories(&ledger);
        assert_eq!(top.len(), TOP_CATEGORY_LIMIT);
        assert_eq!(top[0].label, "c6");
        assert_eq!(top[4].label, "c2");
    }

    #[test]
    fn goal_progress_reports_deadline_state() {
        let now = Utc.with_ymd_and_hms(2026, 10, 19, 9, 30, 0).unwrap();
        let mut goal = Goal::new("Notebook", dec!(4000), Some(dec!(1000)), None, now);
        let view = SummaryService::goal_progress(&goal, now);
        assert_eq!(view.percent, dec!(25));
        assert!(!view.completed);
        assert_eq!(view.days_remaining, None);
        assert!(!view.is_overdue());

        goal.deadline = NaiveDate::from_ymd_opt(2026, 10, 1);
        let view = SummaryService::goal_progress(&goal, now);
        assert!(view.is_overdue());
    }
}
