use crate::pack::Strategy;
use serde::{Deserialize, Serialize};

/// External representation of a cutting job: one stock block and the parts wanted from it.
#[derive(Serialize, Deserialize, Clone)]
pub struct ExtInstance {
    /// The name of the instance
    pub name: String,
    /// The stock block the parts are sawn from
    pub stock: ExtStock,
    /// Material destroyed by every pass of the saw blade
    pub blade_kerf: f32,
    /// The cut requests; part ids are assigned in order of appearance, starting at 1
    pub parts: Vec<ExtCutRequest>,
}

/// External representation of a [`Stock`](crate::entities::Stock) block envelope.
#[derive(Serialize, Deserialize, Clone, Copy)]
pub struct ExtStock {
    pub width: f32,
    pub length: f32,
    pub height: f32,
}

/// A rectangular part requested a number of times.
#[derive(Serialize, Deserialize, Clone, Copy)]
pub struct ExtCutRequest {
    pub width: f32,
    pub length: f32,
    pub thickness: f32,
    /// Amount of times this part has to be produced
    pub demand: u64,
}

/// External representation of a computed [`CutPlan`](crate::entities::CutPlan).
#[derive(Serialize, Deserialize, Clone)]
pub struct ExtPlan {
    /// Orientation strategy the plan was computed under
    pub strategy: Strategy,
    /// The cut rows, in sawing order along the stock length
    pub rows: Vec<ExtRow>,
    /// Stock length consumed by all rows and their cross-cuts
    pub consumed_length: f32,
    /// Stock length left past the final cross-cut, negative when the parts do not fit
    pub remainder: f32,
    /// Whether the plan fits within the stock length
    pub feasible: bool,
}

/// One cut row of an [`ExtPlan`].
#[derive(Serialize, Deserialize, Clone)]
pub struct ExtRow {
    /// Position of this row's cross-cut along the stock length
    pub cut_position: f32,
    /// Governing length of the row
    pub effective_length: f32,
    /// Stock width not covered by parts or kerf gaps, negative when the row overflows
    pub lateral_waste: f32,
    /// The parts of the row, left to right
    pub items: Vec<ExtPlacedPart>,
}

/// A part as placed within a row.
#[derive(Serialize, Deserialize, Clone, Copy)]
pub struct ExtPlacedPart {
    /// Unique identifier of the part
    pub id: u64,
    pub width: f32,
    pub length: f32,
    pub thickness: f32,
    /// Whether the packer swapped the part's requested width and length
    pub rotated: bool,
    /// Slab to skim off the part's face: stock height minus part thickness
    pub face_waste: f32,
}
