use std::collections::HashSet;

use rust_decimal::Decimal;

use super::{
    category::{default_categories, Category},
    common::{count_in_category, find_by_id, Displayable, EntityId},
    goal::Goal,
    transaction::Transaction,
};

/// In-memory state of the tracker: three insertion-ordered, id-unique collections.
#[derive(Debug, Clone, PartialEq)]
pub struct Ledger {
    pub transactions: Vec<Transaction>,
    pub categories: Vec<Category>,
    pub goals: Vec<Goal>,
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}

impl Ledger {
    /// Creates a ledger with the seed categories and no transactions or goals.
    pub fn new() -> Self {
        Self::from_parts(Vec::new(), default_categories(), Vec::new())
    }

    pub fn from_parts(
        transactions: Vec<Transaction>,
        categories: Vec<Category>,
        goals: Vec<Goal>,
    ) -> Self {
        Self {
            transactions,
            categories,
            goals,
        }
    }

    pub fn add_transaction(&mut self, transaction: Transaction) -> EntityId {
        let id = transaction.id.clone();
        self.transactions.push(transaction);
        id
    }

    pub fn remove_transaction(&mut self, id: &EntityId) -> Option<Transaction> {
        let index = self.transactions.iter().position(|txn| &txn.id == id)?;
        Some(self.transactions.remove(index))
    }

    pub fn transaction(&self, id: &EntityId) -> Option<&Transaction> {
        find_by_id(&self.transactions, id)
    }

    pub fn add_category(&mut self, category: Category) -> EntityId {
        let id = category.id.clone();
        self.categories.push(category);
        id
    }

    pub fn remove_category(&mut self, id: &EntityId) -> Option<Category> {
        let index = self.categories.iter().position(|cat| &cat.id == id)?;
        Some(self.categories.remove(index))
    }

    pub fn category(&self, id: &EntityId) -> Option<&Category> {
        find_by_id(&self.categories, id)
    }

    /// Resolves a transaction's weak category reference.
    pub fn category_of(&self, transaction: &Transaction) -> Option<&Category> {
        transaction
            .category_id
            .as_ref()
            .and_then(|id| self.category(id))
    }

    /// Number of transactions pointing at `id`.
    pub fn category_usage(&self, id: &EntityId) -> usize {
        count_in_category(&self.transactions, id)
    }

    pub fn add_goal(&mut self, goal: Goal) -> EntityId {
        let id = goal.id.clone();
        self.goals.push(goal);
        id
    }

    pub fn remove_goal(&mut self, id: &EntityId) -> Option<Goal> {
        let index = self.goals.iter().position(|goal| &goal.id == id)?;
        Some(self.goals.remove(index))
    }

    pub fn goal(&self, id: &EntityId) -> Option<&Goal> {
        find_by_id(&self.goals, id)
    }

    pub fn goal_mut(&mut self, id: &EntityId) -> Option<&mut Goal> {
        self.goals.iter_mut().find(|goal| &goal.id == id)
    }

    pub fn transaction_count(&self) -> usize {
        self.transactions.len()
    }

    /// Detects dangling references and out-of-range goals in a loaded snapshot.
    pub fn warnings(&self) -> Vec<String> {
        let category_ids: HashSet<_> = self.categories.iter().map(|c| &c.id).collect();
        let mut warnings = Vec::new();

        for txn in &self.transactions {
            if let Some(category) = txn.category_id.as_ref() {
                if !category_ids.contains(&category) {
                    warnings.push(format!(
                        "transaction {} `{}` references missing category {}",
                        txn.id,
                        txn.display_label(),
                        category
                    ));
                }
            }
        }
        for goal in &self.goals {
            if goal.current_amount < Decimal::ZERO
                || goal.current_amount > goal.target_amount
            {
                warnings.push(format!(
                    "goal {} `{}` progress outside [0, target]",
                    goal.id,
                    goal.display_label()
                ));
            }
        }
        warnings
    }
}
