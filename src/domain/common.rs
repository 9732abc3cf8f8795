//! Shared traits and identifiers for ledger entities.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque, string-backed identifier shared by transactions, categories and goals.
///
/// Freshly generated ids are UUID v4 strings, but any string is accepted so
/// snapshots written by other tools (and the seed categories `"1"`..`"5"`)
/// load unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(String);

impl EntityId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Generates a new unique identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EntityId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for EntityId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Exposes a stable identifier for entities stored in the ledger.
pub trait Identifiable {
    fn id(&self) -> &EntityId;
}

/// Associates entities with optional category ownership.
pub trait BelongsToCategory {
    fn category_id(&self) -> Option<&EntityId>;
}

/// Supplies a common contract for retrieving monetary amounts.
pub trait Amounted {
    fn amount(&self) -> Decimal;
}

/// Converts an entity into a user-facing display label.
pub trait Displayable {
    fn display_label(&self) -> String;
}

/// Looks up an entity by id within an insertion-ordered collection.
pub fn find_by_id<'a, T: Identifiable>(items: &'a [T], id: &EntityId) -> Option<&'a T> {
    items.iter().find(|item| item.id() == id)
}

pub fn total_amount<T: Amounted>(items: &[T]) -> Decimal {
    items.iter().map(Amounted::amount).sum()
}

/// Number of entities assigned to `category`.
pub fn count_in_category<T: BelongsToCategory>(items: &[T], category: &EntityId) -> usize {
    items
        .iter()
        .filter(|item| item.category_id() == Some(category))
        .count()
}
