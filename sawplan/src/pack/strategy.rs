use serde::{Deserialize, Serialize};
use std::fmt;

/// Orientation policy the packer applies to parts before and during row filling.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Every part stands in its narrow orientation: width = smaller dimension, length = larger.
    ForceVertical,
    /// Every part lies in its wide orientation: width = larger dimension, length = smaller.
    ForceHorizontal,
    /// Narrow orientation up front, but parts may be rotated per row to close the gap
    /// between their length and the row's established length.
    Mixed,
}

impl Strategy {
    /// All strategies, in the order plans are computed and compared.
    pub const ALL: [Strategy; 3] = [
        Strategy::ForceVertical,
        Strategy::ForceHorizontal,
        Strategy::Mixed,
    ];
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::ForceVertical => write!(f, "force_vertical"),
            Strategy::ForceHorizontal => write!(f, "force_horizontal"),
            Strategy::Mixed => write!(f, "mixed"),
        }
    }
}
