use crate::entities::{CutPlan, Part, Row, Stock};
use crate::pack::Strategy;
use crate::util::assertions;
use log::warn;
use ordered_float::NotNan;
use std::cmp::Reverse;

/// Packs `parts` into cut rows across the stock width under the given orientation strategy.
///
/// Rows are filled greedily: parts are normalized, sorted by length (longest first) and
/// appended to the open row while they fit next to its parts, a kerf gap in between.
/// A part that no longer fits seals the row and opens the next one. The sort is stable,
/// so equally long parts keep their id order and the result is fully deterministic.
///
/// A part wider than the stock in its only permitted orientation is placed anyway,
/// alone in a row that overflows the width. Such rows surface through
/// [`Row::lateral_waste`] going negative; a warning is logged but no error is raised.
pub fn pack(parts: &[Part], stock: Stock, strategy: Strategy) -> CutPlan {
    // Work on a copy, the caller's parts keep their orientation.
    let mut queue = parts.to_vec();

    for part in &mut queue {
        apply_strategy(part, strategy);
    }

    // Longest first: the first part of a row anchors its effective length and all
    // shorter parts fill the remaining width without raising it.
    queue.sort_by_key(|p| Reverse(NotNan::new(p.length).expect("part length is NaN")));

    let mut rows: Vec<Row> = vec![];
    let mut open_row: Vec<Part> = vec![];
    let mut row_width = 0.0_f32;
    let mut row_max_length = 0.0_f32;

    for mut part in queue {
        let gap = match open_row.is_empty() {
            true => 0.0,
            false => stock.blade_kerf,
        };

        if strategy == Strategy::Mixed && !open_row.is_empty() {
            orient_for_row(&mut part, row_width + gap, row_max_length, stock.width);
        }

        if row_width + gap + part.width <= stock.width {
            row_width += gap + part.width;
            row_max_length = row_max_length.max(part.length);
            open_row.push(part);
        } else {
            if !open_row.is_empty() {
                rows.push(Row {
                    items: std::mem::take(&mut open_row),
                    effective_length: row_max_length,
                });
            }
            if part.width > stock.width {
                warn!(
                    "[PACK] part {} exceeds the stock width ({} > {}), row will overflow",
                    part.id, part.width, stock.width
                );
            }
            row_width = part.width;
            row_max_length = part.length;
            open_row.push(part);
        }
    }
    if !open_row.is_empty() {
        rows.push(Row {
            items: open_row,
            effective_length: row_max_length,
        });
    }

    let plan = CutPlan {
        strategy,
        stock,
        rows,
    };

    debug_assert!(assertions::plan_conserves_parts(&plan, parts));
    debug_assert!(assertions::row_lengths_consistent(&plan));

    plan
}

/// Runs the packer once per strategy against the same input,
/// in the order of [`Strategy::ALL`].
pub fn pack_all(parts: &[Part], stock: Stock) -> [CutPlan; 3] {
    Strategy::ALL.map(|strategy| pack(parts, stock, strategy))
}

/// The plan consuming the least stock length. Ties resolve to the earliest plan,
/// `None` for an empty slice.
pub fn best_plan(plans: &[CutPlan]) -> Option<&CutPlan> {
    plans
        .iter()
        .min_by_key(|p| NotNan::new(p.consumed_length()).expect("consumed length is NaN"))
}

/// Puts a part in the orientation its strategy dictates at the start of a packing run.
fn apply_strategy(part: &mut Part, strategy: Strategy) {
    let (small, big) = part.dims_sorted();
    match strategy {
        Strategy::ForceVertical | Strategy::Mixed => {
            (part.width, part.length) = (small, big);
            part.rotated = false;
        }
        Strategy::ForceHorizontal => {
            (part.width, part.length) = (big, small);
            part.rotated = true;
        }
    }
}

/// Mixed-strategy orientation choice against a non-empty row: rotate when the rotated
/// length lands strictly closer to the row's established length, or when only the
/// rotated orientation still fits the remaining width. Ties keep the part unrotated.
fn orient_for_row(part: &mut Part, occupied_width: f32, row_max_length: f32, stock_width: f32) {
    let fits_normal = occupied_width + part.width <= stock_width;
    let fits_rotated = occupied_width + part.length <= stock_width;
    let diff_normal = (row_max_length - part.length).abs();
    let diff_rotated = (row_max_length - part.width).abs();

    if (fits_rotated && diff_rotated < diff_normal) || (!fits_normal && fits_rotated) {
        part.rotate();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stock() -> Stock {
        Stock::new(300.0, 1000.0, 300.0, 2.0).unwrap()
    }

    #[test]
    fn apply_strategy_normalizes_per_policy() {
        let part = Part::new(1, 200.0, 100.0, 40.0);

        let mut p = part;
        apply_strategy(&mut p, Strategy::ForceVertical);
        assert_eq!((p.width, p.length, p.rotated), (100.0, 200.0, false));

        let mut p = part;
        apply_strategy(&mut p, Strategy::ForceHorizontal);
        assert_eq!((p.width, p.length, p.rotated), (200.0, 100.0, true));

        let mut p = part;
        apply_strategy(&mut p, Strategy::Mixed);
        assert_eq!((p.width, p.length, p.rotated), (100.0, 200.0, false));
    }

    #[test]
    fn orient_for_row_prefers_closer_length() {
        // row length 120: rotated length 100 (diff 20) beats normal 200 (diff 80)
        let mut part = Part::new(1, 100.0, 200.0, 40.0);
        orient_for_row(&mut part, 90.0, 120.0, 300.0);
        assert!(part.rotated);
        assert_eq!((part.width, part.length), (200.0, 100.0));
    }

    #[test]
    fn orient_for_row_keeps_unrotated_on_tie() {
        // row length 150, candidate 100x200: both orientations land 50 away and
        // both fit, the strict comparison keeps the part unrotated
        let mut part = Part::new(1, 100.0, 200.0, 40.0);
        orient_for_row(&mut part, 90.0, 150.0, 300.0);
        assert!(!part.rotated);
    }

    #[test]
    fn orient_for_row_rotates_as_fallback_fit() {
        // normal width 250 does not fit next to 102 occupied, rotated width 40 does,
        // even though the unrotated length matches the row exactly
        let mut part = Part::new(1, 250.0, 40.0, 40.0);
        orient_for_row(&mut part, 102.0, 40.0, 300.0);
        assert!(part.rotated);
        assert_eq!((part.width, part.length), (40.0, 250.0));
    }

    #[test]
    fn orient_for_row_keeps_orientation_when_neither_fits() {
        let mut part = Part::new(1, 250.0, 260.0, 40.0);
        orient_for_row(&mut part, 102.0, 245.0, 300.0);
        assert!(!part.rotated);
    }

    #[test]
    fn longest_part_opens_the_first_row() {
        let parts = [
            Part::new(1, 50.0, 100.0, 40.0),
            Part::new(2, 50.0, 900.0, 40.0),
        ];
        let plan = pack(&parts, stock(), Strategy::ForceVertical);
        assert_eq!(plan.rows[0].items[0].id, 2);
    }

    #[test]
    fn equal_lengths_keep_id_order() {
        let parts = [
            Part::new(1, 50.0, 100.0, 40.0),
            Part::new(2, 60.0, 100.0, 40.0),
            Part::new(3, 40.0, 100.0, 40.0),
        ];
        let plan = pack(&parts, stock(), Strategy::ForceVertical);
        let ids: Vec<u64> = plan.parts().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }
}
