//! Savings goal creation and clamped progress updates.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;

use crate::domain::{EntityId, Goal, Ledger};

use super::{ServiceError, ServiceResult};

/// Caller-supplied fields of a goal.
#[derive(Debug, Clone, PartialEq)]
pub struct NewGoal {
    pub name: String,
    pub target_amount: Decimal,
    pub current_amount: Option<Decimal>,
    pub deadline: Option<NaiveDate>,
}

impl NewGoal {
    pub fn new(name: impl Into<String>, target_amount: Decimal) -> Self {
        Self {
            name: name.into(),
            target_amount,
            current_amount: None,
            deadline: None,
        }
    }

    pub fn with_current(mut self, current_amount: Decimal) -> Self {
        self.current_amount = Some(current_amount);
        self
    }

    pub fn with_deadline(mut self, deadline: NaiveDate) -> Self {
        self.deadline = Some(deadline);
        self
    }
}

pub struct GoalService;

impl GoalService {
    /// Creates a goal; the starting amount defaults to zero and is clamped to the target.
    pub fn add(ledger: &mut Ledger, input: NewGoal, created_at: DateTime<Utc>) -> ServiceResult<Goal> {
        if input.target_amount <= Decimal::ZERO {
            return Err(ServiceError::Invalid(format!(
                "goal target must be positive (got {})",
                input.target_amount
            )));
        }
        let goal = Goal::new(
            input.name,
            input.target_amount,
            input.current_amount,
            input.deadline,
            created_at,
        );
        ledger.add_goal(goal.clone());
        Ok(goal)
    }

    pub fn remove(ledger: &mut Ledger, id: &EntityId) -> Option<Goal> {
        ledger.remove_goal(id)
    }

    /// Sets the current amount; returns the updated goal or `None` for an unknown id.
    pub fn set_progress(ledger: &mut Ledger, id: &EntityId, amount: Decimal) -> Option<Goal> {
        let goal = ledger.goal_mut(id)?;
        goal.set_progress(amount);
        Some(goal.clone())
    }

    /// Adds `delta` to the current amount; returns the updated goal or `None` for an unknown id.
    pub fn add_progress(ledger: &mut Ledger, id: &EntityId, delta: Decimal) -> Option<Goal> {
        let goal = ledger.goal_mut(id)?;
        goal.add_progress(delta);
        Some(goal.clone())
    }
}
