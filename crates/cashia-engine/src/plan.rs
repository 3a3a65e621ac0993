//! Planner - turns a session snapshot into a plan
//!
//! CRITICAL: planning must be deterministic:
//! - Same snapshot → same selection
//! - Same snapshot → same plan_hash

use cashia_core::{Allocation, Item, allocate, capacity, table_cells};
use cashia_session::SessionSnapshot;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{PlanError, Result};

/// Largest capacity tabulated unless configured otherwise
pub const DEFAULT_MAX_CAPACITY: usize = 1_000_000;

/// Largest allocator table (items + 1) x (capacity + 1), about 200 MB of cells
pub const DEFAULT_MAX_TABLE_CELLS: usize = 50_000_000;

/// Allocation together with the inputs that produced it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plan {
    pub budget: u64,
    pub transport: u64,
    pub capacity: i64,
    pub allocation: Allocation,
    pub plan_hash: String,
}

#[derive(Serialize)]
struct HashInput<'a> {
    budget: u64,
    transport: u64,
    capacity: i64,
    items: &'a [Item],
    selected: &'a [usize],
}

pub struct Planner {
    max_capacity: usize,
    max_table_cells: usize,
}

impl Planner {
    pub fn new() -> Self {
        Self::with_max_capacity(DEFAULT_MAX_CAPACITY)
    }

    pub fn with_max_capacity(max_capacity: usize) -> Self {
        Self {
            max_capacity,
            max_table_cells: DEFAULT_MAX_TABLE_CELLS,
        }
    }

    pub fn with_max_table_cells(mut self, max_table_cells: usize) -> Self {
        self.max_table_cells = max_table_cells;
        self
    }

    /// Compute the recommended purchases for a snapshot
    ///
    /// Fails without running the allocator when there is nothing to plan,
    /// no budget, or no money left after transport.
    pub fn plan(&self, snapshot: &SessionSnapshot) -> Result<Plan> {
        // 1. Caller-side preconditions
        if snapshot.is_empty() {
            return Err(PlanError::NoData);
        }
        let budget = snapshot.budget.ok_or(PlanError::MissingBudget)?;
        let transport = snapshot.transport.unwrap_or(0);

        // 2. Capacity
        let capacity = capacity(budget, transport);
        if capacity <= 0 {
            debug!(budget, transport, "transport cost leaves no budget for food");
            return Err(PlanError::InsufficientBudget { budget, transport });
        }
        if capacity as u64 > self.max_capacity as u64 {
            return Err(PlanError::CapacityTooLarge {
                capacity,
                max: self.max_capacity,
            });
        }
        let cells = table_cells(snapshot.items.len(), capacity as usize)
            .filter(|&cells| cells <= self.max_table_cells);
        if cells.is_none() {
            return Err(PlanError::TableTooLarge {
                items: snapshot.items.len(),
                capacity,
                max: self.max_table_cells,
            });
        }

        // 3. Allocate
        debug!(
            items = snapshot.items.len(),
            capacity, "allocating budget over catalog"
        );
        let allocation = allocate(&snapshot.items, capacity);

        // 4. Hash
        let plan_hash = plan_hash(&HashInput {
            budget,
            transport,
            capacity,
            items: &snapshot.items,
            selected: &allocation.indices,
        })?;

        info!(
            selected = allocation.selection.len(),
            total_price = allocation.total_price,
            total_rating = allocation.total_rating,
            plan_hash = %&plan_hash[..12],
            "plan computed"
        );

        Ok(Plan {
            budget,
            transport,
            capacity,
            allocation,
            plan_hash,
        })
    }
}

impl Default for Planner {
    fn default() -> Self {
        Self::new()
    }
}

fn plan_hash(input: &HashInput<'_>) -> Result<String> {
    let canonical = serde_json::to_vec(input)?;
    Ok(blake3::hash(&canonical).to_hex().to_string())
}
