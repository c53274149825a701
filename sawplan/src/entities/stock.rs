use anyhow::{Result, ensure};

/// The stock block to cut from, together with the blade parameters that apply to it.
/// Width is the axis rows are filled along, length the axis rows advance along.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stock {
    pub width: f32,
    pub length: f32,
    pub height: f32,
    /// Material destroyed by every pass of the saw blade
    pub blade_kerf: f32,
}

impl Stock {
    pub fn new(width: f32, length: f32, height: f32, blade_kerf: f32) -> Result<Self> {
        ensure!(width > 0.0, "stock width must be positive");
        ensure!(length > 0.0, "stock length must be positive");
        ensure!(height > 0.0, "stock height must be positive");
        ensure!(blade_kerf >= 0.0, "blade kerf cannot be negative");
        Ok(Stock {
            width,
            length,
            height,
            blade_kerf,
        })
    }
}
