//! Budget overview over a whole catalog

use serde::{Deserialize, Serialize};

use crate::{Item, capacity};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetStatus {
    WithinBudget,
    OverBudget,
}

impl BudgetStatus {
    pub fn label(&self) -> &'static str {
        match self {
            BudgetStatus::WithinBudget => "Within Budget",
            BudgetStatus::OverBudget => "Over Budget",
        }
    }
}

/// Totals for every item in the catalog, regardless of what an allocation
/// would pick. Unset budget or transport count as zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetOverview {
    pub budget: u64,
    pub transport: u64,
    /// `budget - transport`, negative when transport exceeds the budget
    pub available: i64,
    pub total_food_cost: u64,
    pub item_count: usize,
    pub total_rating: u32,
    pub average_rating: Option<f64>,
    pub status: BudgetStatus,
}

impl BudgetOverview {
    pub fn new(budget: Option<u64>, transport: Option<u64>, items: &[Item]) -> Self {
        let budget = budget.unwrap_or(0);
        let transport = transport.unwrap_or(0);
        let available = capacity(budget, transport);

        // Saturates, and a saturated cost is always over any available amount.
        let total_food_cost = items
            .iter()
            .fold(0u64, |total, item| total.saturating_add(item.price));
        let total_rating: u32 = items
            .iter()
            .map(|item| u32::from(item.rating.value()))
            .sum();
        let average_rating = if items.is_empty() {
            None
        } else {
            Some(f64::from(total_rating) / items.len() as f64)
        };

        let status = if i128::from(total_food_cost) <= i128::from(available) {
            BudgetStatus::WithinBudget
        } else {
            BudgetStatus::OverBudget
        };

        Self {
            budget,
            transport,
            available,
            total_food_cost,
            item_count: items.len(),
            total_rating,
            average_rating,
            status,
        }
    }
}
