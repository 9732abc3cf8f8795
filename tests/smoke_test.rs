use financeflow_core::{init, EntityId, LedgerStore, TransactionKind};
use rust_decimal_macros::dec;

mod common;

#[test]
fn ledger_store_smoke() {
    init();

    let mut store = LedgerStore::in_memory(common::fixed_clock());
    let today = store.clock().today();
    let txn = store
        .add_transaction(
            TransactionKind::Expense,
            "Padaria",
            dec!(12.50),
            Some(EntityId::from("1")),
            today,
        )
        .unwrap();

    assert_eq!(store.transactions().len(), 1);
    assert_eq!(store.net_balance(), dec!(-12.50));
    assert!(store.delete_transaction(&txn.id).unwrap().is_some());
    assert!(store.transactions().is_empty());
}
