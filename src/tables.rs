use average::Mean;
use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};
use itertools::Itertools;

use crate::{
    quantity::{cost::Euros, energy::KilowattHours},
    reconcile::CostReport,
};

/// Monthly roll-up of the report for a quick look in the terminal.
///
/// Months costlier than the yearly average are highlighted.
#[must_use]
pub fn build_monthly_table(report: &CostReport) -> Table {
    let chunks = report.iter().chunk_by(|(date, _)| date.format("%B").to_string());
    let mut rows: Vec<(String, usize, KilowattHours, Euros)> = Vec::new();
    for (month, days) in &chunks {
        let mut n_days = 0;
        let mut consumption = KilowattHours::ZERO;
        let mut cost = Euros::ZERO;
        for (_, day) in days {
            n_days += 1;
            consumption += day.total_consumption;
            cost += day.total_cost;
        }
        rows.push((month, n_days, consumption, cost));
    }

    let mean_cost: Euros = {
        let estimate: Mean = rows.iter().map(|(_, _, _, cost)| cost.0).collect();
        if estimate.is_empty() { Euros::ZERO } else { Euros(estimate.mean()) }
    };

    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .apply_modifier(modifiers::UTF8_ROUND_CORNERS)
        .enforce_styling();
    table.set_header(vec!["Month", "Days", "Consumption", "Cost"]);
    for (month, n_days, consumption, cost) in rows {
        table.add_row(vec![
            Cell::new(month),
            Cell::new(n_days).set_alignment(CellAlignment::Right).add_attribute(Attribute::Dim),
            Cell::new(consumption).set_alignment(CellAlignment::Right),
            Cell::new(cost)
                .set_alignment(CellAlignment::Right)
                .fg(if cost >= mean_cost { Color::Red } else { Color::Green }),
        ]);
    }
    table
}
