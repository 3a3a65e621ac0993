//! Session store
//!
//! One owned value holds everything the user has entered. Views read and
//! update it through the methods below; the planner only ever sees a
//! [`SessionSnapshot`].

use cashia_core::{BudgetOverview, Item};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::input::{parse_amount, parse_rating, required};
use crate::{Result, SessionError};

/// An item in the catalog together with its session-local id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub id: String,
    pub item: Item,
}

/// Owned copy of the session inputs at one point in time
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub budget: Option<u64>,
    pub transport: Option<u64>,
    pub items: Vec<Item>,
}

impl SessionSnapshot {
    /// True when budget, transport and catalog are all unset
    pub fn is_empty(&self) -> bool {
        self.budget.is_none() && self.transport.is_none() && self.items.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct Session {
    id: String,
    budget: Option<u64>,
    transport: Option<u64>,
    entries: Vec<CatalogEntry>,
}

impl Session {
    pub fn new() -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            budget: None,
            transport: None,
            entries: Vec::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Record the budget, replacing any previous value
    pub fn submit_budget(&mut self, raw: &str) -> Result<u64> {
        let budget = parse_amount("budget", raw)?;
        self.set_budget(budget);
        Ok(budget)
    }

    /// Record the transport cost, replacing any previous value
    pub fn submit_transport(&mut self, raw: &str) -> Result<u64> {
        let transport = parse_amount("transport cost", raw)?;
        self.set_transport(transport);
        Ok(transport)
    }

    /// Validate and append a food item. Returns the new entry.
    pub fn submit_item(&mut self, name: &str, rating: &str, price: &str) -> Result<&CatalogEntry> {
        let name = required("food name", name)?;
        required("rating", rating)?;
        required("price", price)?;

        let item = Item::new(name, parse_rating(rating)?, parse_amount("price", price)?)?;
        Ok(self.add_item(item))
    }

    pub fn set_budget(&mut self, budget: u64) {
        debug!(session = %self.id, budget, "budget set");
        self.budget = Some(budget);
    }

    pub fn set_transport(&mut self, transport: u64) {
        debug!(session = %self.id, transport, "transport cost set");
        self.transport = Some(transport);
    }

    pub fn add_item(&mut self, item: Item) -> &CatalogEntry {
        let entry = CatalogEntry {
            id: uuid::Uuid::new_v4().to_string(),
            item,
        };
        debug!(
            session = %self.id,
            entry = %entry.id,
            name = %entry.item.name,
            "item added"
        );
        self.entries.push(entry);
        &self.entries[self.entries.len() - 1]
    }

    /// Remove one entry by id, keeping the order of the rest
    pub fn remove_item(&mut self, id: &str) -> Result<CatalogEntry> {
        let position = self
            .entries
            .iter()
            .position(|entry| entry.id == id)
            .ok_or_else(|| SessionError::ItemNotFound(id.to_string()))?;

        debug!(session = %self.id, entry = %id, "item removed");
        Ok(self.entries.remove(position))
    }

    pub fn clear(&mut self) {
        debug!(session = %self.id, "session cleared");
        self.budget = None;
        self.transport = None;
        self.entries.clear();
    }

    pub fn budget(&self) -> Option<u64> {
        self.budget
    }

    pub fn transport(&self) -> Option<u64> {
        self.transport
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn items(&self) -> impl Iterator<Item = &Item> {
        self.entries.iter().map(|entry| &entry.item)
    }

    pub fn is_empty(&self) -> bool {
        self.budget.is_none() && self.transport.is_none() && self.entries.is_empty()
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            budget: self.budget,
            transport: self.transport,
            items: self.items().cloned().collect(),
        }
    }

    pub fn overview(&self) -> BudgetOverview {
        let items: Vec<Item> = self.items().cloned().collect();
        BudgetOverview::new(self.budget, self.transport, &items)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
