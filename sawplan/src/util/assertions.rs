use crate::entities::{CutPlan, Part};
use float_cmp::approx_eq;
use itertools::Itertools;
//Various checks to verify correctness of computed plans
//Used in debug_assert!() blocks

/// Returns true when every input part appears in the plan exactly once, with its
/// dimensions at most swapped and its thickness untouched.
pub fn plan_conserves_parts(plan: &CutPlan, input: &[Part]) -> bool {
    let placed = plan
        .parts()
        .sorted_by_key(|p| p.id)
        .collect_vec();
    let requested = input.iter().sorted_by_key(|p| p.id).collect_vec();

    placed.len() == requested.len()
        && placed.iter().zip(requested).all(|(placed, requested)| {
            placed.id == requested.id
                && placed.thickness == requested.thickness
                && dims_are_swap_of(placed, requested)
        })
}

/// Returns true when every row's effective length equals the maximum length among its items.
pub fn row_lengths_consistent(plan: &CutPlan) -> bool {
    plan.rows.iter().all(|row| {
        let max_length = row.items.iter().map(|p| p.length).fold(0.0, f32::max);
        approx_eq!(f32, row.effective_length, max_length)
    })
}

/// Returns true when no row consumes more width than the stock offers.
/// Does not hold for plans containing oversized parts.
pub fn rows_within_stock_width(plan: &CutPlan) -> bool {
    plan.rows
        .iter()
        .all(|row| row.used_width(plan.stock.blade_kerf) <= plan.stock.width)
}

fn dims_are_swap_of(a: &Part, b: &Part) -> bool {
    (a.width == b.width && a.length == b.length)
        || (a.width == b.length && a.length == b.width)
}
