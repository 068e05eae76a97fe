//! Monthly budget store and derived totals.
//!
//! DESIGN
//! ======
//! The only mutable state is the amount on each line item; everything the
//! budget screen displays above the list (income, expenses, savings,
//! remaining, per-category shares) is recomputed from the items on every
//! read. Remaining may go negative, which the UI renders as an over-budget
//! state rather than an error.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::seed;
use crate::slot::Slot;
use crate::storage::StorageBackend;

pub(crate) const BUDGET_KEY: &str = "murge.budget";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetCategory {
    Income,
    Housing,
    Transportation,
    Food,
    Utilities,
    Lifestyle,
    Savings,
}

impl BudgetCategory {
    /// Income and savings sit outside the expense total.
    #[must_use]
    pub fn is_expense(self) -> bool {
        !matches!(self, Self::Income | Self::Savings)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetItem {
    pub id: String,
    pub label: String,
    pub category: BudgetCategory,
    pub amount: f64,
    /// Fixed items render without the adjustment slider.
    pub is_fixed: bool,
}

/// Derived monthly totals. Never persisted.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BudgetSummary {
    pub income: f64,
    pub expenses: f64,
    pub savings: f64,
    pub remaining: f64,
}

/// Totals over a set of line items. `remaining` may be negative.
#[must_use]
pub fn summarize(items: &[BudgetItem]) -> BudgetSummary {
    let total_of = |pred: fn(BudgetCategory) -> bool| {
        items
            .iter()
            .filter(|item| pred(item.category))
            .map(|item| item.amount)
            .sum::<f64>()
    };
    let income = total_of(|c| c == BudgetCategory::Income);
    let expenses = total_of(BudgetCategory::is_expense);
    let savings = total_of(|c| c == BudgetCategory::Savings);
    BudgetSummary { income, expenses, savings, remaining: income - expenses - savings }
}

#[derive(Clone)]
pub struct BudgetStore {
    slot: Slot<Vec<BudgetItem>>,
}

impl BudgetStore {
    pub(crate) fn new(backend: Arc<dyn StorageBackend>) -> Self {
        Self { slot: Slot::new(backend, BUDGET_KEY, seed::default_budget) }
    }

    #[must_use]
    pub fn list(&self) -> Vec<BudgetItem> {
        self.slot.read()
    }

    /// Set one item's amount, clamped to zero at the boundary. Returns the
    /// updated item, or `None` when the id is unknown.
    pub fn set_amount(&self, id: &str, amount: f64) -> Option<BudgetItem> {
        self.slot.update(|items| {
            let item = items.iter_mut().find(|item| item.id == id)?;
            item.amount = amount.max(0.0);
            Some(item.clone())
        })
    }

    /// Current derived totals.
    #[must_use]
    pub fn summary(&self) -> BudgetSummary {
        summarize(&self.slot.read())
    }

    /// One category's share of the expense total, in `0.0..=1.0`. Returns
    /// 0.0 when there are no expenses or the category is not an expense.
    #[must_use]
    pub fn expense_share(&self, category: BudgetCategory) -> f64 {
        if !category.is_expense() {
            return 0.0;
        }
        let items = self.slot.read();
        let expenses = summarize(&items).expenses;
        if expenses == 0.0 {
            return 0.0;
        }
        let category_total: f64 = items
            .iter()
            .filter(|item| item.category == category)
            .map(|item| item.amount)
            .sum();
        category_total / expenses
    }

    /// Back to the seeded line items.
    pub fn reset(&self) {
        self.slot.clear();
    }
}

#[cfg(test)]
#[path = "budget_test.rs"]
mod tests;
