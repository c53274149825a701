use crate::entities::CutPlan;
use crate::io::ext_repr::{ExtPlacedPart, ExtPlan, ExtRow};
use itertools::Itertools;

/// Exports a computed plan out of the library.
pub fn export(plan: &CutPlan) -> ExtPlan {
    let stock = plan.stock;
    let mut cursor = 0.0;
    let rows = plan
        .rows
        .iter()
        .map(|row| {
            let cut_position = cursor + row.effective_length;
            cursor += row.effective_length + stock.blade_kerf;
            ExtRow {
                cut_position,
                effective_length: row.effective_length,
                lateral_waste: row.lateral_waste(stock.width, stock.blade_kerf),
                items: row
                    .items
                    .iter()
                    .map(|part| ExtPlacedPart {
                        id: part.id,
                        width: part.width,
                        length: part.length,
                        thickness: part.thickness,
                        rotated: part.rotated,
                        face_waste: part.face_waste(stock.height),
                    })
                    .collect_vec(),
            }
        })
        .collect_vec();

    ExtPlan {
        strategy: plan.strategy,
        rows,
        consumed_length: plan.consumed_length(),
        remainder: plan.remainder(),
        feasible: plan.is_feasible(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{Part, Stock};
    use crate::pack::{Strategy, pack};
    use float_cmp::approx_eq;

    #[test]
    fn cut_positions_advance_by_row_length_plus_kerf() {
        let parts = [
            Part::new(1, 100.0, 250.0, 40.0),
            Part::new(2, 100.0, 150.0, 40.0),
        ];
        let stock = Stock::new(120.0, 1000.0, 300.0, 2.0).unwrap();
        let ext_plan = export(&pack(&parts, stock, Strategy::ForceVertical));

        assert_eq!(ext_plan.rows.len(), 2);
        assert!(approx_eq!(f32, ext_plan.rows[0].cut_position, 250.0));
        // second row starts past the first cross-cut: 250 + 2 + 150
        assert!(approx_eq!(f32, ext_plan.rows[1].cut_position, 402.0));
        assert!(approx_eq!(f32, ext_plan.consumed_length, 404.0));
        assert!(ext_plan.feasible);
    }

    #[test]
    fn face_waste_is_measured_against_stock_height() {
        let parts = [Part::new(1, 100.0, 250.0, 40.0)];
        let stock = Stock::new(400.0, 500.0, 300.0, 2.0).unwrap();
        let ext_plan = export(&pack(&parts, stock, Strategy::ForceVertical));
        assert_eq!(ext_plan.rows[0].items[0].face_waste, 260.0);
    }
}
