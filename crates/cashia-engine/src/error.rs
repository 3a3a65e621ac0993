use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlanError {
    #[error("No data: enter food, transport and budget before viewing output")]
    NoData,

    #[error("No budget: enter a budget before viewing output")]
    MissingBudget,

    #[error("Insufficient budget: transport cost {transport} is equal to or exceeds the budget {budget}")]
    InsufficientBudget { budget: u64, transport: u64 },

    #[error("Capacity {capacity} exceeds the configured maximum of {max}")]
    CapacityTooLarge { capacity: i64, max: usize },

    #[error("{items} items at capacity {capacity} need a larger table than the configured maximum of {max} cells")]
    TableTooLarge { items: usize, capacity: i64, max: usize },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PlanError>;
