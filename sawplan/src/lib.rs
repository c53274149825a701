//! Deterministic planning of saw cuts: packs rectangular parts into cross-cut rows
//! of a single stock block, row by row along the block's length.

/// Entities to model cutting jobs and their resulting plans
pub mod entities;

/// Importing cutting jobs into and exporting plans out of this library
pub mod io;

/// The row packer and its orientation strategies
pub mod pack;

/// Rendering of plans as plain-text work orders
pub mod report;

/// Assorted helpers that don't belong to any other module
pub mod util;
