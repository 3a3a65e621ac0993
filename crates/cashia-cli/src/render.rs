//! Text rendering of plans and overviews

use std::io::{self, Write};

use cashia_core::{BudgetOverview, Rating};
use cashia_engine::{Plan, PlanError};
use cashia_session::CatalogEntry;

pub fn write_plan(out: &mut impl Write, plan: &Plan, currency: &str) -> io::Result<()> {
    let allocation = &plan.allocation;

    writeln!(out, "Recommended Purchases:")?;
    if allocation.is_empty() {
        writeln!(out, "  No combination found.")?;
    } else {
        for item in &allocation.selection {
            writeln!(
                out,
                "  {} - Rating: {}, Price: {}{}",
                item.name, item.rating, currency, item.price
            )?;
        }
        writeln!(out)?;
        writeln!(out, "Total Price: {}{}", currency, allocation.total_price)?;
        writeln!(out, "Total Rating: {}", allocation.total_rating)?;
    }

    writeln!(out)?;
    writeln!(
        out,
        "Budget for food: {}{} ({}{} budget - {}{} transport)",
        currency, plan.capacity, currency, plan.budget, currency, plan.transport
    )?;
    writeln!(out, "plan_hash: {}", plan.plan_hash)?;
    Ok(())
}

pub fn write_overview(
    out: &mut impl Write,
    overview: &BudgetOverview,
    entries: &[CatalogEntry],
    currency: &str,
) -> io::Result<()> {
    writeln!(out, "Budget Overview")?;
    writeln!(out, "  Budget:                    {}{}", currency, overview.budget)?;
    writeln!(out, "  Transport Cost:            {}{}", currency, overview.transport)?;
    writeln!(out, "  Budget Available for Food: {}{}", currency, overview.available)?;
    writeln!(
        out,
        "  Total Food Cost:           {}{}",
        currency, overview.total_food_cost
    )?;

    writeln!(out)?;
    writeln!(out, "Food Items ({}):", overview.item_count)?;
    for (i, entry) in entries.iter().enumerate() {
        let item = &entry.item;
        writeln!(
            out,
            "  {}. {} {} ({}/{}) {}{}",
            i + 1,
            item.name,
            stars(item.rating),
            item.rating,
            Rating::MAX,
            currency,
            item.price
        )?;
    }

    let average = overview
        .average_rating
        .map(|avg| format!("{:.1}", avg))
        .unwrap_or_else(|| "0".to_string());

    writeln!(out)?;
    writeln!(out, "Summary")?;
    writeln!(out, "  Total Items:         {}", overview.item_count)?;
    writeln!(out, "  Average Rating:      {}/{}", average, Rating::MAX)?;
    writeln!(out, "  Total Rating Points: {}", overview.total_rating)?;
    writeln!(out, "  Budget Status:       {}", overview.status.label())?;
    Ok(())
}

/// Title and message for planner outcomes that are shown to the user as a
/// notice rather than reported as a failure
pub fn notice(error: &PlanError) -> Option<(&'static str, &'static str)> {
    match error {
        PlanError::NoData => Some((
            "No Data",
            "Please enter food, transport, and budget data before viewing output!",
        )),
        PlanError::InsufficientBudget { .. } => Some((
            "Insufficient Budget",
            "Transport cost is equal or exceeds the budget",
        )),
        _ => None,
    }
}

pub fn write_notice(out: &mut impl Write, title: &str, message: &str) -> io::Result<()> {
    writeln!(out, "{}: {}", title, message)
}

/// Ten-star bar, one filled star per rating point
pub fn stars(rating: Rating) -> String {
    let filled = usize::from(rating.value());
    let empty = usize::from(Rating::MAX) - filled;
    format!("{}{}", "★".repeat(filled), "☆".repeat(empty))
}
