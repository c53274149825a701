use crate::entities::{Part, Row, Stock};
use crate::pack::Strategy;

/// Result of a packing run: the cut rows computed for one stock block under one strategy,
/// in sawing order along the stock length.
#[derive(Clone, Debug, PartialEq)]
pub struct CutPlan {
    pub strategy: Strategy,
    pub stock: Stock,
    pub rows: Vec<Row>,
}

impl CutPlan {
    /// Stock length consumed by the plan: the sum of all row lengths,
    /// plus one kerf-wide cross-cut per row.
    pub fn consumed_length(&self) -> f32 {
        let row_lengths: f32 = self.rows.iter().map(|r| r.effective_length).sum();
        row_lengths + self.rows.len() as f32 * self.stock.blade_kerf
    }

    /// Stock length remaining past the final cross-cut.
    /// Negative when the parts do not fit the block.
    pub fn remainder(&self) -> f32 {
        self.stock.length - self.consumed_length()
    }

    pub fn is_feasible(&self) -> bool {
        self.remainder() >= 0.0
    }

    pub fn part_count(&self) -> usize {
        self.rows.iter().map(|r| r.items.len()).sum()
    }

    /// All placed parts in sawing order: row by row, left to right.
    pub fn parts(&self) -> impl Iterator<Item = &Part> {
        self.rows.iter().flat_map(|r| r.items.iter())
    }
}
