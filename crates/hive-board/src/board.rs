//! Sparse stacked board built from a placement list.
//!
//! The board is a snapshot: it is rebuilt wholesale from each new state
//! string and never mutated afterwards, so a renderer and a hit-tester can
//! share one without coordination.

use crate::codec::{self, CodecError, Placement};
use crate::hex::DoubledCoord;
use crate::piece::Piece;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The pieces occupying one cell, bottom-to-top.
///
/// Always non-empty: an unoccupied cell simply has no entry in the grid.
/// Order is placement order, which is the only place stack order is encoded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stack(Vec<Piece>);

impl Stack {
    fn new(bottom: Piece) -> Self {
        Self(vec![bottom])
    }

    fn push(&mut self, piece: Piece) {
        self.0.push(piece);
    }

    /// The piece at the bottom of the stack
    pub fn bottom(&self) -> Piece {
        self.0[0]
    }

    /// The piece currently on top
    pub fn top(&self) -> Piece {
        self.0[self.0.len() - 1]
    }

    /// All pieces, bottom-to-top (render order)
    pub fn pieces(&self) -> &[Piece] {
        &self.0
    }

    /// How many pieces are stacked here
    pub fn height(&self) -> usize {
        self.0.len()
    }
}

/// Inclusive min/max over the occupied doubled-height cells.
///
/// Both bounds are inclusive; a single-cell board has `min == max` on both
/// axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min_x: i32,
    pub max_x: i32,
    pub min_y: i32,
    pub max_y: i32,
}

impl BoundingBox {
    /// A box covering exactly one cell
    pub const fn singleton(cell: DoubledCoord) -> Self {
        Self {
            min_x: cell.x,
            max_x: cell.x,
            min_y: cell.y,
            max_y: cell.y,
        }
    }

    /// Build a box over an iterator of cells. `None` for an empty iterator:
    /// an empty board has no bounding box, and callers must treat it as
    /// zero-size.
    pub fn from_cells(mut cells: impl Iterator<Item = DoubledCoord>) -> Option<Self> {
        let mut bbox = Self::singleton(cells.next()?);
        for cell in cells {
            bbox.update(cell);
        }
        Some(bbox)
    }

    /// Expand the box to cover `cell`
    pub fn update(&mut self, cell: DoubledCoord) {
        self.min_x = self.min_x.min(cell.x);
        self.max_x = self.max_x.max(cell.x);
        self.min_y = self.min_y.min(cell.y);
        self.max_y = self.max_y.max(cell.y);
    }

    /// Whether `cell` lies inside the box
    pub fn contains(&self, cell: DoubledCoord) -> bool {
        cell.x >= self.min_x && cell.x <= self.max_x && cell.y >= self.min_y && cell.y <= self.max_y
    }

    /// Number of columns covered
    pub const fn width(&self) -> i32 {
        self.max_x - self.min_x + 1
    }

    /// Number of doubled rows covered
    pub const fn height(&self) -> i32 {
        self.max_y - self.min_y + 1
    }
}

/// The sparse stacked grid for one board state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: HashMap<DoubledCoord, Stack>,
    bbox: Option<BoundingBox>,
}

impl Board {
    /// Assemble the grid from placements in one linear pass.
    ///
    /// Each placement's axial coordinate is converted to doubled-height; the
    /// first piece at a cell starts its stack and every later one is
    /// appended on top. The input order must be state-string order, since it
    /// is the only carrier of stack order.
    pub fn from_placements(placements: &[Placement]) -> Self {
        let mut cells: HashMap<DoubledCoord, Stack> = HashMap::new();
        let mut bbox: Option<BoundingBox> = None;

        for placement in placements {
            let cell = DoubledCoord::from_axial(placement.hex);

            match cells.get_mut(&cell) {
                Some(stack) => stack.push(placement.piece),
                None => {
                    cells.insert(cell, Stack::new(placement.piece));
                }
            }

            match &mut bbox {
                Some(bbox) => bbox.update(cell),
                None => bbox = Some(BoundingBox::singleton(cell)),
            }
        }

        Self { cells, bbox }
    }

    /// Decode a state string and assemble its board
    pub fn from_state(state: &str) -> Result<Self, CodecError> {
        Ok(Self::from_placements(&codec::decode(state)?))
    }

    /// The stack at a cell, if occupied
    pub fn stack_at(&self, cell: DoubledCoord) -> Option<&Stack> {
        self.cells.get(&cell)
    }

    /// Iterate over all occupied cells and their stacks
    pub fn cells(&self) -> impl Iterator<Item = (DoubledCoord, &Stack)> {
        self.cells.iter().map(|(cell, stack)| (*cell, stack))
    }

    /// The bounding box over occupied cells, `None` for an empty board
    pub fn bounding_box(&self) -> Option<BoundingBox> {
        self.bbox
    }

    /// Whether the board has no pieces at all
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Number of occupied cells (not pieces; a stack counts once)
    pub fn occupied_cells(&self) -> usize {
        self.cells.len()
    }
}
