pub mod file_backend;
pub mod memory;
pub mod snapshot;

use crate::errors::LedgerError;

pub type Result<T> = std::result::Result<T, LedgerError>;

/// String key/value persistence, the only thing the ledger needs from a backend.
///
/// Implementations use interior mutability so a store can be shared behind `&self`.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;

    fn contains(&self, key: &str) -> Result<bool> {
        Ok(self.get(key)?.is_some())
    }
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Box<T> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}

pub use file_backend::FileStore;
pub use memory::MemoryStore;
pub use snapshot::{
    load_ledger, load_theme, save_ledger, save_theme, CATEGORIES_KEY, GOALS_KEY, THEME_KEY,
    TRANSACTIONS_KEY,
};
