use std::path::PathBuf;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::{debug, info, warn};

use crate::core::services::{
    CategoryService, GoalService, NewGoal, NewTransaction, ServiceError, ServiceResult,
    SummaryService, TransactionService,
};
use crate::core::time::{Clock, SystemClock};
use crate::domain::{
    Category, CategoryTotal, DashboardTotals, EntityId, FinancialSummary, Goal, GoalProgress,
    Ledger, MonthlyPoint, Theme, Transaction, TransactionFilter, TransactionKind,
};
use crate::storage::{self, FileStore, KeyValueStore, MemoryStore};

/// Facade that owns the ledger and writes the full snapshot after every mutation.
pub struct LedgerStore {
    ledger: Ledger,
    theme: Theme,
    storage: Box<dyn KeyValueStore>,
    clock: Box<dyn Clock>,
}

impl LedgerStore {
    /// Loads the persisted collections and theme from `storage`.
    ///
    /// Missing keys fall back to defaults; malformed values are errors.
    pub fn open(storage: Box<dyn KeyValueStore>, clock: Box<dyn Clock>) -> ServiceResult<Self> {
        let ledger = storage::load_ledger(storage.as_ref())?;
        let theme = storage::load_theme(storage.as_ref())?;
        for warning in ledger.warnings() {
            warn!(%warning, "ledger warning");
        }
        info!(
            transactions = ledger.transactions.len(),
            categories = ledger.categories.len(),
            goals = ledger.goals.len(),
            %theme,
            "ledger opened"
        );
        Ok(Self {
            ledger,
            theme,
            storage,
            clock,
        })
    }

    /// Opens a file-backed store rooted at `dir` using the system clock.
    pub fn open_dir(dir: impl Into<PathBuf>) -> ServiceResult<Self> {
        let store = FileStore::new(dir.into())?;
        Self::open(Box::new(store), Box::new(SystemClock))
    }

    /// A fresh store backed by memory; nothing survives the process.
    pub fn in_memory(clock: Box<dyn Clock>) -> Self {
        Self {
            ledger: Ledger::new(),
            theme: Theme::default(),
            storage: Box::new(MemoryStore::new()),
            clock,
        }
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn storage(&self) -> &dyn KeyValueStore {
        self.storage.as_ref()
    }

    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.ledger.transactions
    }

    pub fn categories(&self) -> &[Category] {
        &self.ledger.categories
    }

    pub fn goals(&self) -> &[Goal] {
        &self.ledger.goals
    }

    pub fn category(&self, id: &EntityId) -> Option<&Category> {
        self.ledger.category(id)
    }

    pub fn goal(&self, id: &EntityId) -> Option<&Goal> {
        self.ledger.goal(id)
    }

    pub fn category_usage(&self, id: &EntityId) -> usize {
        self.ledger.category_usage(id)
    }

    pub fn add_transaction(
        &mut self,
        kind: TransactionKind,
        description: impl Into<String>,
        amount: Decimal,
        category_id: Option<EntityId>,
        date: NaiveDate,
    ) -> ServiceResult<Transaction> {
        let input = NewTransaction::new(kind, description, amount, category_id, date);
        let transaction = TransactionService::add(&mut self.ledger, input, self.clock.now())?;
        debug!(id = %transaction.id, %kind, %amount, "transaction added");
        self.persist()?;
        Ok(transaction)
    }

    /// Removes a transaction; an unknown id still rewrites the snapshot.
    pub fn delete_transaction(&mut self, id: &EntityId) -> ServiceResult<Option<Transaction>> {
        let removed = TransactionService::remove(&mut self.ledger, id);
        debug!(%id, found = removed.is_some(), "transaction delete");
        self.persist()?;
        Ok(removed)
    }

    pub fn add_category(
        &mut self,
        name: impl Into<String>,
        icon: impl Into<String>,
        color: impl Into<String>,
    ) -> ServiceResult<Category> {
        let category = CategoryService::add(&mut self.ledger, name, icon, color);
        debug!(id = %category.id, name = %category.name, "category added");
        self.persist()?;
        Ok(category)
    }

    /// Deletes a category. Refused with [`ServiceError::CategoryInUse`] while
    /// transactions reference it; nothing is written in that case.
    pub fn delete_category(&mut self, id: &EntityId) -> ServiceResult<Option<Category>> {
        let removed = match CategoryService::remove(&mut self.ledger, id) {
            Ok(removed) => removed,
            Err(err) => {
                warn!(%id, %err, "category delete refused");
                return Err(err);
            }
        };
        debug!(%id, found = removed.is_some(), "category delete");
        self.persist()?;
        Ok(removed)
    }

    pub fn add_goal(
        &mut self,
        name: impl Into<String>,
        target_amount: Decimal,
        current_amount: Option<Decimal>,
        deadline: Option<NaiveDate>,
    ) -> ServiceResult<Goal> {
        let input = NewGoal {
            name: name.into(),
            target_amount,
            current_amount,
            deadline,
        };
        let goal = GoalService::add(&mut self.ledger, input, self.clock.now())?;
        debug!(id = %goal.id, target = %goal.target_amount, "goal added");
        self.persist()?;
        Ok(goal)
    }

    pub fn delete_goal(&mut self, id: &EntityId) -> ServiceResult<Option<Goal>> {
        let removed = GoalService::remove(&mut self.ledger, id);
        debug!(%id, found = removed.is_some(), "goal delete");
        self.persist()?;
        Ok(removed)
    }

    pub fn set_goal_progress(
        &mut self,
        id: &EntityId,
        amount: Decimal,
    ) -> ServiceResult<Option<Goal>> {
        let updated = GoalService::set_progress(&mut self.ledger, id, amount);
        debug!(%id, %amount, found = updated.is_some(), "goal progress set");
        self.persist()?;
        Ok(updated)
    }

    pub fn add_to_goal_progress(
        &mut self,
        id: &EntityId,
        delta: Decimal,
    ) -> ServiceResult<Option<Goal>> {
        let updated = GoalService::add_progress(&mut self.ledger, id, delta);
        debug!(%id, %delta, found = updated.is_some(), "goal progress added");
        self.persist()?;
        Ok(updated)
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Stores the theme under its own key; the ledger snapshot is untouched.
    pub fn set_theme(&mut self, theme: Theme) -> ServiceResult<()> {
        storage::save_theme(self.storage.as_ref(), theme)?;
        self.theme = theme;
        debug!(%theme, "theme saved");
        Ok(())
    }

    pub fn toggle_theme(&mut self) -> ServiceResult<Theme> {
        let next = self.theme.toggled();
        self.set_theme(next)?;
        Ok(next)
    }

    pub fn net_balance(&self) -> Decimal {
        SummaryService::net_balance(&self.ledger)
    }

    pub fn dashboard(&self) -> DashboardTotals {
        SummaryService::dashboard(&self.ledger, self.clock.today())
    }

    pub fn financial_summary(&self) -> FinancialSummary {
        SummaryService::financial_summary(&self.ledger)
    }

    pub fn expenses_by_category(&self) -> Option<Vec<CategoryTotal>> {
        SummaryService::expenses_by_category(&self.ledger)
    }

    pub fn monthly_series(&self) -> Vec<MonthlyPoint> {
        SummaryService::monthly_series(&self.ledger, self.clock.today())
    }

    pub fn top_categories(&self) -> Vec<CategoryTotal> {
        SummaryService::top_categories(&self.ledger)
    }

    pub fn goals_progress(&self) -> Vec<GoalProgress> {
        SummaryService::goals_progress(&self.ledger, self.clock.now())
    }

    pub fn list_transactions(&self, filter: &TransactionFilter) -> Vec<&Transaction> {
        TransactionService::list(&self.ledger, filter)
    }

    pub fn recent_transactions(&self) -> Vec<&Transaction> {
        TransactionService::recent(&self.ledger)
    }

    pub fn warnings(&self) -> Vec<String> {
        self.ledger.warnings()
    }

    fn persist(&self) -> ServiceResult<()> {
        storage::save_ledger(self.storage.as_ref(), &self.ledger).map_err(ServiceError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::time::FixedClock;
    use crate::storage::{CATEGORIES_KEY, GOALS_KEY, THEME_KEY, TRANSACTIONS_KEY};
    use chrono::{TimeZone, Utc};
    use rust_decimal_macros::dec;
    use std::sync::Arc;

    /// Shares one memory store between the facade and the test body.
    struct Shared(Arc<MemoryStore>);

    impl KeyValueStore for Shared {
        fn get(&self, key: &str) -> storage::Result<Option<String>> {
            self.0.get(key)
        }
        fn set(&self, key: &str, value: &str) -> storage::Result<()> {
            self.0.set(key, value)
        }
        fn remove(&self, key: &str) -> storage::Result<()> {
            self.0.remove(key)
        }
    }

    fn clock() -> Box<dyn Clock> {
        Box::new(FixedClock(Utc.with_ymd_and_hms(2026, 10, 19, 12, 0, 0).unwrap()))
    }

    fn open_shared() -> (LedgerStore, Arc<MemoryStore>) {
        let backing = Arc::new(MemoryStore::new());
        let store = LedgerStore::open(Box::new(Shared(Arc::clone(&backing))), clock()).unwrap();
        (store, backing)
    }

    #[test]
    fn open_on_empty_storage_seeds_categories_without_writing() {
        let (store, backing) = open_shared();
        assert_eq!(store.categories().len(), 5);
        assert_eq!(store.theme(), Theme::Light);
        assert!(backing.is_empty().unwrap());
    }

    #[test]
    fn every_mutation_writes_the_whole_snapshot() {
        let (mut store, backing) = open_shared();
        let today = store.clock().today();
        store
            .add_transaction(TransactionKind::Income, "Salário", dec!(3000), None, today)
            .unwrap();
        for key in [TRANSACTIONS_KEY, CATEGORIES_KEY, GOALS_KEY] {
            assert!(backing.contains(key).unwrap(), "{key} missing");
        }
        assert!(!backing.contains(THEME_KEY).unwrap());

        let reopened = LedgerStore::open(Box::new(Shared(Arc::clone(&backing))), clock()).unwrap();
        assert_eq!(reopened.ledger(), store.ledger());
    }

    #[test]
    fn transaction_is_stamped_by_the_clock() {
        let (mut store, _) = open_shared();
        let now = store.clock().now();
        let txn = store
            .add_transaction(
                TransactionKind::Expense,
                "Uber",
                dec!(23.40),
                Some(EntityId::from("2")),
                now.date_naive(),
            )
            .unwrap();
        assert_eq!(txn.created_at, now);
    }

    #[test]
    fn refused_category_delete_leaves_storage_untouched() {
        let (mut store, backing) = open_shared();
        let today = store.clock().today();
        store
            .add_transaction(TransactionKind::Expense, "Mercado", dec!(80), Some(EntityId::from("1")), today)
            .unwrap();
        let before = backing.get(CATEGORIES_KEY).unwrap();

        let err = store.delete_category(&EntityId::from("1")).unwrap_err();
        assert!(matches!(err, ServiceError::CategoryInUse { transactions: 1, .. }));
        assert_eq!(backing.get(CATEGORIES_KEY).unwrap(), before);
        assert_eq!(store.categories().len(), 5);
    }

    #[test]
    fn goal_progress_scenario() {
        let (mut store, _) = open_shared();
        let goal = store.add_goal("Reserva", dec!(1000), None, None).unwrap();
        assert_eq!(goal.current_amount, dec!(0));

        let updated = store.add_to_goal_progress(&goal.id, dec!(1500)).unwrap().unwrap();
        assert_eq!(updated.current_amount, dec!(1000));
        assert_eq!(store.goals_progress()[0].percent, dec!(100));
        assert!(store.goals_progress()[0].completed);
    }

    #[test]
    fn toggle_theme_persists_only_the_theme_key() {
        let (mut store, backing) = open_shared();
        assert_eq!(store.toggle_theme().unwrap(), Theme::Dark);
        assert_eq!(backing.get(THEME_KEY).unwrap().as_deref(), Some("dark"));
        assert!(!backing.contains(TRANSACTIONS_KEY).unwrap());
    }

    #[test]
    fn in_memory_store_starts_seeded() {
        let store = LedgerStore::in_memory(clock());
        assert_eq!(store.categories().len(), 5);
        assert!(store.expenses_by_category().is_none());
    }
}
