use crate::entities::CutPlan;

/// Renders a plan as a plain-text work order: one block per cross-cut listing the
/// parts to saw off, the face-off cut each part needs and the offcuts left behind.
pub fn work_order(plan: &CutPlan) -> String {
    let stock = plan.stock;
    let mut out = String::new();

    out.push_str(&format!(
        "work order [{}] | stock {:.0} x {:.0} x {:.0} | kerf {:.1}\n",
        plan.strategy, stock.width, stock.length, stock.height, stock.blade_kerf
    ));
    out.push_str(&format!(
        "{} parts in {} rows | consumed: {:.1} | remainder: {:.1}\n",
        plan.part_count(),
        plan.rows.len(),
        plan.consumed_length(),
        plan.remainder()
    ));
    if !plan.is_feasible() {
        out.push_str(&format!(
            "DOES NOT FIT: {:.1} over the stock length\n",
            -plan.remainder()
        ));
    }

    let mut cursor = 0.0;
    for (row_idx, row) in plan.rows.iter().enumerate() {
        let cut_position = cursor + row.effective_length;
        cursor += row.effective_length + stock.blade_kerf;

        out.push_str(&format!("\ncut #{} at {:.1}\n", row_idx + 1, cut_position));
        for part in &row.items {
            out.push_str(&format!(
                "  ID{}: {:.0} x {:.0} x {:.0}{}\n",
                part.id,
                part.width,
                part.length,
                part.thickness,
                if part.rotated { " (rotated)" } else { "" }
            ));
            let face_waste = part.face_waste(stock.height);
            if face_waste > 0.0 {
                out.push_str(&format!(
                    "    face-off: {:.0} x {:.0} x {:.0}\n",
                    part.width, part.length, face_waste
                ));
            }
        }

        let lateral_waste = row.lateral_waste(stock.width, stock.blade_kerf);
        if lateral_waste > 0.0 {
            out.push_str(&format!(
                "  side offcut: {:.1} x {:.1} x {:.0}\n",
                lateral_waste, row.effective_length, stock.height
            ));
        } else if lateral_waste < 0.0 {
            out.push_str(&format!(
                "  OVERFLOW: row is {:.1} wider than the stock\n",
                -lateral_waste
            ));
        } else {
            out.push_str("  no side offcut\n");
        }
    }

    let remainder = plan.remainder();
    if remainder > 0.0 {
        out.push_str(&format!(
            "\nremnant: {:.0} x {:.1} x {:.0}\n",
            stock.width, remainder, stock.height
        ));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{Part, Stock};
    use crate::pack::{Strategy, pack};

    #[test]
    fn lists_every_cut_with_its_parts_and_offcuts() {
        let parts = [
            Part::new(1, 100.0, 250.0, 40.0),
            Part::new(2, 100.0, 150.0, 40.0),
        ];
        let stock = Stock::new(120.0, 1000.0, 300.0, 2.0).unwrap();
        let order = work_order(&pack(&parts, stock, Strategy::ForceVertical));

        assert!(order.contains("cut #1 at 250.0"));
        assert!(order.contains("cut #2 at 402.0"));
        assert!(order.contains("ID1: 100 x 250 x 40"));
        assert!(order.contains("face-off: 100 x 250 x 260"));
        assert!(order.contains("side offcut: 20.0 x 250.0 x 300"));
        assert!(order.contains("remnant: 120 x 596.0 x 300"));
    }

    #[test]
    fn flags_infeasible_plans_and_overflowing_rows() {
        let parts = [Part::new(1, 500.0, 500.0, 300.0)];
        let stock = Stock::new(400.0, 400.0, 300.0, 2.0).unwrap();
        let order = work_order(&pack(&parts, stock, Strategy::ForceVertical));

        assert!(order.contains("DOES NOT FIT: 102.0 over the stock length"));
        assert!(order.contains("OVERFLOW: row is 100.0 wider than the stock"));
    }
}
