//! Domain types representing spending categories.

use serde::{Deserialize, Serialize};

use crate::domain::common::*;

/// Label used for expenses whose category is missing or was never set.
pub const UNCATEGORIZED_LABEL: &str = "Sem categoria";
/// Chart colour for the uncategorized bucket.
pub const UNCATEGORIZED_COLOR: &str = "#64748b";
/// Icon for the uncategorized bucket.
pub const UNCATEGORIZED_ICON: &str = "❓";

/// Groups transactions for reporting. Referenced weakly by id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    pub id: EntityId,
    pub name: String,
    pub icon: String,
    pub color: String,
}

impl Category {
    pub fn new(name: impl Into<String>, icon: impl Into<String>, color: impl Into<String>) -> Self {
        Self::with_id(EntityId::generate(), name, icon, color)
    }

    pub fn with_id(
        id: EntityId,
        name: impl Into<String>,
        icon: impl Into<String>,
        color: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            icon: icon.into(),
            color: color.into(),
        }
    }
}

impl Identifiable for Category {
    fn id(&self) -> &EntityId {
        &self.id
    }
}

impl Displayable for Category {
    fn display_label(&self) -> String {
        format!("{} {}", self.icon, self.name)
    }
}

/// Categories installed when no category snapshot exists yet.
pub fn default_categories() -> Vec<Category> {
    [
        ("1", "Alimentação", "🍔", "#ef4444"),
        ("2", "Transporte", "🚗", "#3b82f6"),
        ("3", "Lazer", "🎬", "#8b5cf6"),
        ("4", "Saúde", "💊", "#22c55e"),
        ("5", "Educação", "🎓", "#f59e0b"),
    ]
    .into_iter()
    .map(|(id, name, icon, color)| Category::with_id(EntityId::from(id), name, icon, color))
    .collect()
}
