//! Board rendering seam.
//!
//! The engine never touches presentation state directly; it drives a
//! `BoardRenderer` that owns the grid's visual representation. The
//! crate ships `GridModel`, a headless in-memory board used for
//! simulation and tests; GUI layers implement the trait over real
//! widgets.

use std::cell::RefCell;
use std::rc::Rc;

use crate::core::{CellIndex, ColorId};

/// Presentation-side view of the board.
///
/// Implementations must tolerate out-of-range indices: the engine
/// forwards whatever the host delivered, and a stale index is a
/// normal occurrence, not an error.
pub trait BoardRenderer {
    /// Rebuild the board as a `grid_size` × `grid_size` grid with no
    /// cell lit.
    fn build(&mut self, grid_size: u8);

    /// Mark a cell lit with the given color and point value.
    fn set_lit(&mut self, cell: CellIndex, color: ColorId, points: u32);

    /// Clear one cell's lit flag.
    fn clear_lit(&mut self, cell: CellIndex);

    /// Clear every lit flag.
    fn clear_all_lit(&mut self);
}

#[derive(Debug, Default)]
struct GridState {
    grid_size: u8,
    /// Lit payload per cell, `None` when unlit.
    cells: Vec<Option<(ColorId, u32)>>,
}

/// Headless in-memory board.
///
/// A cheap-clone shared handle: the engine holds one clone and the
/// host holds another to query what is lit. Single-threaded by
/// design, matching the engine's cooperative execution model.
#[derive(Clone, Debug, Default)]
pub struct GridModel {
    inner: Rc<RefCell<GridState>>,
}

impl GridModel {
    /// Create an empty board. The engine builds it to the profile's
    /// grid size on construction.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current edge length.
    #[must_use]
    pub fn grid_size(&self) -> u8 {
        self.inner.borrow().grid_size
    }

    /// Total number of cells.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.inner.borrow().cells.len()
    }

    /// The lit payload of a cell, if that cell is lit.
    #[must_use]
    pub fn lit(&self, cell: CellIndex) -> Option<(ColorId, u32)> {
        self.inner
            .borrow()
            .cells
            .get(usize::from(cell.raw()))
            .copied()
            .flatten()
    }

    /// All currently lit cells.
    #[must_use]
    pub fn lit_cells(&self) -> Vec<CellIndex> {
        self.inner
            .borrow()
            .cells
            .iter()
            .enumerate()
            .filter(|(_, payload)| payload.is_some())
            .map(|(index, _)| CellIndex::new(index as u16))
            .collect()
    }
}

impl BoardRenderer for GridModel {
    fn build(&mut self, grid_size: u8) {
        let mut state = self.inner.borrow_mut();
        state.grid_size = grid_size;
        state.cells = vec![None; usize::from(grid_size) * usize::from(grid_size)];
    }

    fn set_lit(&mut self, cell: CellIndex, color: ColorId, points: u32) {
        let mut state = self.inner.borrow_mut();
        if let Some(slot) = state.cells.get_mut(usize::from(cell.raw())) {
            *slot = Some((color, points));
        }
    }

    fn clear_lit(&mut self, cell: CellIndex) {
        let mut state = self.inner.borrow_mut();
        if let Some(slot) = state.cells.get_mut(usize::from(cell.raw())) {
            *slot = None;
        }
    }

    fn clear_all_lit(&mut self) {
        for slot in self.inner.borrow_mut().cells.iter_mut() {
            *slot = None;
        }
    }
}
