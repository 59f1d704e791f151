//! First-fit row-major placement of the item catalog onto the cell grid.
//!
//! The scan order is policy, not a promise: tests pin the resulting
//! coordinates for the authored catalog, but callers must not read any
//! deeper intent into where an item lands.

use smallvec::SmallVec;
use thiserror::Error;

use crate::catalog::{Footprint, Item};

/// Cell coordinates as `(col, row)`, zero-based from the top-left.
pub type Cell = (u8, u8);

/// Dimensions of the inventory grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridShape {
    pub cols: u8,
    pub rows: u8,
}

impl GridShape {
    /// The fixed 4x4 grid every scene renders.
    pub const STANDARD: Self = Self { cols: 4, rows: 4 };

    #[must_use]
    pub const fn capacity(self) -> u16 {
        self.cols as u16 * self.rows as u16
    }

    const fn index(self, col: u8, row: u8) -> usize {
        row as usize * self.cols as usize + col as usize
    }
}

impl Default for GridShape {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// A committed position: top-left anchor plus the footprint it spans.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub col: u8,
    pub row: u8,
    pub footprint: Footprint,
}

impl Placement {
    /// Every cell this placement occupies.
    #[must_use]
    pub fn cells(&self) -> SmallVec<[Cell; 16]> {
        let mut cells = SmallVec::new();
        for row in self.row..self.row + self.footprint.h {
            for col in self.col..self.col + self.footprint.w {
                cells.push((col, row));
            }
        }
        cells
    }
}

/// One placed item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    pub item: Item,
    pub placement: Placement,
}

/// The computed layout, in catalog order. Recomputed per render pass,
/// never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Layout {
    slots: Vec<Slot>,
}

impl Layout {
    #[must_use]
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    #[must_use]
    pub fn placement_of(&self, id: &str) -> Option<Placement> {
        self.slots
            .iter()
            .find(|slot| slot.item.id == id)
            .map(|slot| slot.placement)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    /// The catalog does not fit the grid. Carries the feasible prefix so
    /// callers can render what did fit and surface the defect.
    #[error("no feasible cell for item '{item_id}' on a {cols}x{rows} grid")]
    Overflow {
        item_id: &'static str,
        cols: u8,
        rows: u8,
        placed: Layout,
    },
}

/// Place every item onto the grid, first-fit, scanning cells in row-major
/// order and taking items in the order given. Deterministic: the same
/// ordered catalog always yields the same layout, and no state survives
/// between calls.
///
/// # Errors
///
/// Returns [`LayoutError::Overflow`] naming the first item with no feasible
/// anchor; the error carries the layout of every item placed before it.
pub fn place(items: &[Item], grid: GridShape) -> Result<Layout, LayoutError> {
    let mut occupied = vec![false; grid.capacity() as usize];
    let mut slots = Vec::with_capacity(items.len());

    for item in items {
        let Some(placement) = first_fit(item.footprint, grid, &occupied) else {
            return Err(LayoutError::Overflow {
                item_id: item.id,
                cols: grid.cols,
                rows: grid.rows,
                placed: Layout { slots },
            });
        };
        for (col, row) in placement.cells() {
            occupied[grid.index(col, row)] = true;
        }
        slots.push(Slot {
            item: *item,
            placement,
        });
    }

    Ok(Layout { slots })
}

fn first_fit(footprint: Footprint, grid: GridShape, occupied: &[bool]) -> Option<Placement> {
    for row in 0..grid.rows {
        for col in 0..grid.cols {
            if fits_at(col, row, footprint, grid, occupied) {
                return Some(Placement {
                    col,
                    row,
                    footprint,
                });
            }
        }
    }
    None
}

fn fits_at(col: u8, row: u8, footprint: Footprint, grid: GridShape, occupied: &[bool]) -> bool {
    if u16::from(col) + u16::from(footprint.w) > u16::from(grid.cols)
        || u16::from(row) + u16::from(footprint.h) > u16::from(grid.rows)
    {
        return false;
    }
    (row..row + footprint.h).all(|r| (col..col + footprint.w).all(|c| !occupied[grid.index(c, r)]))
}
