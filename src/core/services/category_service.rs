use crate::domain::{Category, EntityId, Ledger};

use super::{ServiceError, ServiceResult};

pub struct CategoryService;

impl CategoryService {
    pub fn add(
        ledger: &mut Ledger,
        name: impl Into<String>,
        icon: impl Into<String>,
        color: impl Into<String>,
    ) -> Category {
        let category = Category::new(name, icon, color);
        ledger.add_category(category.clone());
        category
    }

    /// Deletes a category unless a transaction still references it.
    ///
    /// Returns the removed category, or `None` when the id was unknown.
    pub fn remove(ledger: &mut Ledger, id: &EntityId) -> ServiceResult<Option<Category>> {
        let usage = ledger.category_usage(id);
        if usage > 0 {
            return Err(ServiceError::CategoryInUse {
                id: id.clone(),
                transactions: usage,
            });
        }
        Ok(ledger.remove_category(id))
    }

    pub fn list(ledger: &Ledger) -> Vec<&Category> {
        ledger.categories.iter().collect()
    }

    /// Categories paired with the number of transactions that use them.
    pub fn with_usage(ledger: &Ledger) -> Vec<(&Category, usize)> {
        ledger
            .categories
            .iter()
            .map(|category| (category, ledger.category_usage(&category.id)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Transaction, TransactionKind};
    use chrono::{NaiveDate, Utc};
    use rust_decimal_macros::dec;

    fn ledger_with_food_expense() -> Ledger {
        let mut ledger = Ledger::new();
        ledger.add_transaction(Transaction::new(
            TransactionKind::Expense,
            "Almoço",
            dec!(32.90),
            Some(EntityId::from("1")),
            NaiveDate::from_ymd_opt(2026, 10, 1).unwrap(),
            Utc::now(),
        ));
        ledger
    }

    #[test]
    fn remove_refuses_referenced_category() {
        let mut ledger = ledger_with_food_expense();
        let err = CategoryService::remove(&mut ledger, &EntityId::from("1"))
            .expect_err("referenced category must not be deleted");
        match err {
            ServiceError::CategoryInUse { id, transactions } => {
                assert_eq!(id.as_str(), "1");
                assert_eq!(transactions, 1);
            }
            other => panic!("expected CategoryInUse, got {other:?}"),
        }
        assert_eq!(ledger.categories.len(), 5);
    }

    #[test]
    fn remove_deletes_unreferenced_category() {
        let mut ledger = ledger_with_food_expense();
        let removed = CategoryService::remove(&mut ledger, &EntityId::from("3")).unwrap();
        assert_eq!(removed.map(|c| c.name), Some("Lazer".to_string()));
        assert_eq!(ledger.categories.len(), 4);
        assert!(ledger.category(&EntityId::from("1")).is_some());
    }

    #[test]
    fn remove_unknown_category_is_noop() {
        let mut ledger = Ledger::new();
        let removed = CategoryService::remove(&mut ledger, &EntityId::from("missing")).unwrap();
        assert!(removed.is_none());
        assert_eq!(ledger.categories.len(), 5);
    }

    #[test]
    fn with_usage_counts_per_category() {
        let ledger = ledger_with_food_expense();
        let usage = CategoryService::with_usage(&ledger);
        assert_eq!(usage[0].1, 1);
        assert!(usage[1..].iter().all(|(_, count)| *count == 0));
    }
}
