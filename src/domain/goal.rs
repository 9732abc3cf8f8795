//! Savings goals and their clamped progress.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::common::*;

const MILLIS_PER_DAY: i64 = 86_400_000;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: EntityId,
    pub name: String,
    pub target_amount: Decimal,
    #[serde(default)]
    pub current_amount: Decimal,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub deadline: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
}

impl Goal {
    /// Builds a goal whose current amount is already clamped into `[0, target]`.
    pub fn new(
        name: impl Into<String>,
        target_amount: Decimal,
        current_amount: Option<Decimal>,
        deadline: Option<NaiveDate>,
        created_at: DateTime<Utc>,
    ) -> Self {
        let mut goal = Self {
            id: EntityId::generate(),
            name: name.into(),
            target_amount,
            current_amount: Decimal::ZERO,
            deadline,
            created_at,
        };
        goal.set_progress(current_amount.unwrap_or(Decimal::ZERO));
        goal
    }

    /// Replaces the current amount, clamped into `[0, target]`.
    pub fn set_progress(&mut self, amount: Decimal) {
        self.current_amount = self.clamp(amount);
    }

    /// Adds `delta` (which may be negative) to the current amount, clamped into `[0, target]`.
    pub fn add_progress(&mut self, delta: Decimal) {
        let next = self.current_amount.saturating_add(delta);
        self.current_amount = self.clamp(next);
    }

    /// `current / target * 100`, or zero for a degenerate target.
    pub fn progress_percent(&self) -> Decimal {
        self.current_amount
            .checked_div(self.target_amount)
            .map(|ratio| ratio * Decimal::ONE_HUNDRED)
            .unwrap_or(Decimal::ZERO)
    }

    pub fn is_completed(&self) -> bool {
        self.progress_percent() >= Decimal::ONE_HUNDRED
    }

    /// Whole days until the deadline, rounded up; `None` when no deadline is set.
    ///
    /// The deadline is taken as midnight UTC of that date. Zero or negative
    /// values mean the goal is overdue.
    pub fn days_remaining(&self, now: DateTime<Utc>) -> Option<i64> {
        let deadline = self.deadline?;
        let due = deadline.and_hms_opt(0, 0, 0)?.and_utc();
        let millis = (due - now).num_milliseconds();
        Some(-(-millis).div_euclid(MILLIS_PER_DAY))
    }

    fn clamp(&self, amount: Decimal) -> Decimal {
        let upper = self.target_amount.max(Decimal::ZERO);
        amount.max(Decimal::ZERO).min(upper)
    }
}

/// Reads an optional date, treating `null` and blank strings as no deadline.
fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse::<NaiveDate>()
            .map(Some)
            .map_err(serde::de::Error::custom),
        _ => Ok(None),
    }
}

impl Identifiable for Goal {
    fn id(&self) -> &EntityId {
        &self.id
    }
}

impl Amounted for Goal {
    fn amount(&self) -> Decimal {
        self.current_amount
    }
}

impl Displayable for Goal {
    fn display_label(&self) -> String {
        format!("{} ({}/{})", self.name, self.current_amount, self.target_amount)
    }
}
