//! Maps the in-memory [`Ledger`] onto its persisted keys.
//!
//! Each collection lives under its own key as a JSON array; the theme is a
//! bare string. A missing key (or a stored `null`) falls back to the default
//! collection.

use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, warn};

use crate::domain::{default_categories, Ledger, Theme};

use super::{KeyValueStore, Result};

pub const TRANSACTIONS_KEY: &str = "financeflow_transactions";
pub const CATEGORIES_KEY: &str = "financeflow_categories";
pub const GOALS_KEY: &str = "financeflow_goals";
pub const THEME_KEY: &str = "financeflow_theme";

/// Reads all three collections, seeding defaults for absent keys.
pub fn load_ledger<S: KeyValueStore + ?Sized>(store: &S) -> Result<Ledger> {
    let transactions = load_collection(store, TRANSACTIONS_KEY)?.unwrap_or_default();
    let categories = load_collection(store, CATEGORIES_KEY)?.unwrap_or_else(default_categories);
    let goals = load_collection(store, GOALS_KEY)?.unwrap_or_default();
    Ok(Ledger::from_parts(transactions, categories, goals))
}

/// Rewrites the full snapshot: every collection, every time.
pub fn save_ledger<S: KeyValueStore + ?Sized>(store: &S, ledger: &Ledger) -> Result<()> {
    save_collection(store, TRANSACTIONS_KEY, &ledger.transactions)?;
    save_collection(store, CATEGORIES_KEY, &ledger.categories)?;
    save_collection(store, GOALS_KEY, &ledger.goals)?;
    debug!(
        transactions = ledger.transactions.len(),
        categories = ledger.categories.len(),
        goals = ledger.goals.len(),
        "ledger snapshot persisted"
    );
    Ok(())
}

/// Reads the theme preference; unknown values fall back to the default theme.
pub fn load_theme<S: KeyValueStore + ?Sized>(store: &S) -> Result<Theme> {
    let Some(raw) = store.get(THEME_KEY)? else {
        return Ok(Theme::default());
    };
    Ok(raw.parse().unwrap_or_else(|err: String| {
        warn!(%err, "ignoring stored theme");
        Theme::default()
    }))
}

pub fn save_theme<S: KeyValueStore + ?Sized>(store: &S, theme: Theme) -> Result<()> {
    store.set(THEME_KEY, theme.as_str())
}

fn load_collection<S, T>(store: &S, key: &str) -> Result<Option<Vec<T>>>
where
    S: KeyValueStore + ?Sized,
    T: DeserializeOwned,
{
    match store.get(key)? {
        Some(raw) => Ok(serde_json::from_str::<Option<Vec<T>>>(&raw)?),
        None => Ok(None),
    }
}

fn save_collection<S, T>(store: &S, key: &str, items: &[T]) -> Result<()>
where
    S: KeyValueStore + ?Sized,
    T: Serialize,
{
    let json = serde_json::to_string(items)?;
    store.set(key, &json)
}
