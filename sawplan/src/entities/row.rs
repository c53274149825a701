use crate::entities::Part;

/// One cross-cut slice of the stock: parts placed side by side along the width axis,
/// sawn off together by a single cut across the full width.
#[derive(Clone, Debug, PartialEq)]
pub struct Row {
    /// Parts in placement order, left to right across the stock width
    pub items: Vec<Part>,
    /// Governing length of the row: the maximum length among its items
    pub effective_length: f32,
}

impl Row {
    /// Width consumed by the row's parts including the kerf gap between each adjacent pair.
    pub fn used_width(&self, blade_kerf: f32) -> f32 {
        let part_width: f32 = self.items.iter().map(|p| p.width).sum();
        let n_gaps = self.items.len().saturating_sub(1);
        part_width + n_gaps as f32 * blade_kerf
    }

    /// Width left over at the open side of the row.
    /// Negative when the row overflows the stock width.
    pub fn lateral_waste(&self, stock_width: f32, blade_kerf: f32) -> f32 {
        stock_width - self.used_width(blade_kerf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(dims: &[(f32, f32)]) -> Row {
        let items = dims
            .iter()
            .enumerate()
            .map(|(i, &(w, l))| Part::new(i as u64 + 1, w, l, 40.0))
            .collect::<Vec<_>>();
        let effective_length = items.iter().map(|p| p.length).fold(0.0, f32::max);
        Row {
            items,
            effective_length,
        }
    }

    #[test]
    fn used_width_counts_gaps_between_parts_only() {
        let row = row(&[(100.0, 200.0), (150.0, 150.0), (50.0, 80.0)]);
        // 3 parts, 2 gaps
        assert_eq!(row.used_width(2.0), 100.0 + 150.0 + 50.0 + 2.0 * 2.0);
    }

    #[test]
    fn single_part_row_has_no_gap() {
        let row = row(&[(100.0, 200.0)]);
        assert_eq!(row.used_width(2.0), 100.0);
        assert_eq!(row.lateral_waste(400.0, 2.0), 300.0);
    }

    #[test]
    fn lateral_waste_goes_negative_on_overflow() {
        let row = row(&[(500.0, 500.0)]);
        assert_eq!(row.lateral_waste(400.0, 2.0), -100.0);
    }
}
