use chrono::{Duration, NaiveDate, TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use financeflow_core::{
    core::services::SummaryService,
    storage::{load_ledger, save_ledger, FileStore},
    EntityId, Ledger, Transaction, TransactionKind,
};
use rust_decimal::Decimal;
use tempfile::tempdir;

fn build_sample_ledger(txn_count: usize) -> Ledger {
    let mut ledger = Ledger::new();
    let start_date = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
    let created_at = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();

    for idx in 0..txn_count {
        let kind = if idx % 5 == 0 {
            TransactionKind::Income
        } else {
            TransactionKind::Expense
        };
        let category = (idx % 7 != 6).then(|| EntityId::from(((idx % 5) + 1).to_string()));
        ledger.add_transaction(Transaction::new(
            kind,
            format!("txn-{idx}"),
            Decimal::new(5_000 + (idx % 100) as i64, 2),
            category,
            start_date + Duration::days((idx % 300) as i64),
            created_at,
        ));
    }
    ledger
}

fn bench_aggregates(c: &mut Criterion) {
    let ledger = build_sample_ledger(black_box(10_000));
    let today = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();

    c.bench_function("dashboard_10k", |b| {
        b.iter(|| black_box(SummaryService::dashboard(&ledger, today)))
    });
    c.bench_function("monthly_series_10k", |b| {
        b.iter(|| black_box(SummaryService::monthly_series(&ledger, today)))
    });
    c.bench_function("top_categories_10k", |b| {
        b.iter(|| black_box(SummaryService::top_categories(&ledger)))
    });
}

fn bench_snapshot_io(c: &mut Criterion) {
    let ledger = build_sample_ledger(black_box(10_000));
    let dir = tempdir().expect("tempdir");
    let store = FileStore::new(dir.path().join("data")).expect("file store");

    c.bench_function("snapshot_save_10k", |b| {
        b.iter(|| save_ledger(&store, &ledger).expect("save ledger"))
    });

    save_ledger(&store, &ledger).expect("seed");

    c.bench_function("snapshot_load_10k", |b| {
        b.iter(|| black_box(load_ledger(&store).expect("load ledger")))
    });
}

criterion_group!(benches, bench_aggregates, bench_snapshot_io);
criterion_main!(benches);
