//! Cell addressing.
//!
//! The board is an N×N grid addressed by a single flat index in
//! `[0, N²)`, row-major. The engine doesn't interpret positions -
//! geometry is a renderer concern.

use serde::{Deserialize, Serialize};

/// Flat index of a board cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellIndex(pub u16);

impl CellIndex {
    /// Create a new cell index.
    #[must_use]
    pub const fn new(index: u16) -> Self {
        Self(index)
    }

    /// Get the raw index value.
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }
}

impl std::fmt::Display for CellIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Cell({})", self.0)
    }
}
