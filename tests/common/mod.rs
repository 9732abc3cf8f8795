#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Mutex;

use chrono::{DateTime, TimeZone, Utc};
use financeflow_core::{
    core::time::FixedClock, storage::FileStore, LedgerStore, MemoryStore,
};
use once_cell::sync::Lazy;
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// Reference instant used across the suites: 2026-10-19 12:00 UTC.
pub fn reference_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 19, 12, 0, 0).unwrap()
}

pub fn fixed_clock() -> Box<FixedClock> {
    Box::new(FixedClock(reference_now()))
}

/// Creates a unique data directory that outlives the calling test.
pub fn temp_data_dir() -> PathBuf {
    let temp = TempDir::new().expect("create temp dir");
    let base = temp.path().join("data");
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);
    base
}

/// Opens a file-backed store in `dir` with the fixed clock.
pub fn open_file_store(dir: &PathBuf) -> LedgerStore {
    let storage = FileStore::new(dir.clone()).expect("create file store");
    LedgerStore::open(Box::new(storage), fixed_clock()).expect("open ledger store")
}

pub fn open_memory_store() -> LedgerStore {
    LedgerStore::open(Box::new(MemoryStore::new()), fixed_clock()).expect("open ledger store")
}
