//! Pixel layout of the board and the inverse hit-test.
//!
//! Hexes are flat-topped. Column spacing is `1.5 * hex_size` and each
//! doubled row advances by half a hex height (`0.5 * hex_size * √3`), so the
//! grid is drawn in pairs: an even cell and its southeast neighbor. The same
//! [`Layout`] must be shared by whatever draws the board and whatever
//! hit-tests it; if the two disagree on hex size or margin, every coordinate
//! they exchange is wrong.

use crate::board::BoundingBox;
use crate::hex::{DoubledCoord, HexCoord};
use serde::{Deserialize, Serialize};

/// Default hex radius in pixels
pub const HEX_SIZE: f64 = 50.0;

/// Default border reserved around the board for off-board affordances
pub const MARGIN: f64 = 0.0;

pub(crate) const SQRT_3: f64 = 1.732_050_807_568_877_2;

/// A point on the rendering surface, in pixels from its top-left corner.
///
/// Kept distinct from the grid coordinate types so that pixel-space and
/// grid-space values can never be added together by accident.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PixelPoint {
    pub x: f64,
    pub y: f64,
}

impl PixelPoint {
    /// Create a new pixel point
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// The two constants that parameterize every pixel transform.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    /// Hex radius (center to corner), in pixels
    pub hex_size: f64,
    /// Border around the board, in pixels
    pub margin: f64,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            hex_size: HEX_SIZE,
            margin: MARGIN,
        }
    }
}

impl Layout {
    /// A layout with the default hex size and the given margin
    pub fn with_margin(margin: f64) -> Self {
        Self {
            margin,
            ..Self::default()
        }
    }

    /// Half a hex height, which is also the spacing of one doubled row
    fn row_spacing(&self) -> f64 {
        0.5 * self.hex_size * SQRT_3
    }

    /// Required surface size `(width, height)` for a board with this
    /// bounding box.
    pub fn surface_size(&self, bbox: &BoundingBox) -> (f64, f64) {
        let width = 2.0 * self.hex_size
            + 1.5 * self.hex_size * (bbox.width() - 1) as f64
            + 2.0 * self.margin;
        let height = self.hex_size * SQRT_3
            + self.row_spacing() * (bbox.height() - 1) as f64
            + 2.0 * self.margin;
        (width, height)
    }

    /// Pixel center of a cell on a surface sized for `bbox`.
    pub fn cell_center(&self, bbox: &BoundingBox, cell: DoubledCoord) -> PixelPoint {
        PixelPoint::new(
            self.margin + self.hex_size + 1.5 * self.hex_size * (cell.x - bbox.min_x) as f64,
            self.margin + self.row_spacing() + self.row_spacing() * (cell.y - bbox.min_y) as f64,
        )
    }

    /// Invert a surface point to the axial coordinate of the hex under it,
    /// relative to the hex drawn in the surface's top-left position.
    ///
    /// The inversion's origin is the center of that top-left hex, not the
    /// surface corner, so the margin and the first hex's half-extents are
    /// subtracted before applying the flat-top inverse transform.
    pub fn pixel_to_axial(&self, point: PixelPoint) -> HexCoord {
        let x = point.x - self.margin - self.hex_size;
        let y = point.y - self.margin - self.row_spacing();

        let q = (2.0 / 3.0) * x / self.hex_size;
        let r = (-1.0 / 3.0 * x + SQRT_3 / 3.0 * y) / self.hex_size;
        HexCoord::round(q, r)
    }

    /// Map a click on the surface back to the true axial coordinate it
    /// lands on, matching the coordinates of the original state encoding.
    ///
    /// Two corrections on top of [`Self::pixel_to_axial`]:
    /// - when `min_y - min_x` is odd, the top-left grid position is a cell
    ///   the doubled-height parity can never populate, and the actual
    ///   topmost hex of the leftmost column sits half a row lower than the
    ///   box's nominal top. The click's y is shifted by half a hex height
    ///   before inversion, otherwise every row hit-tests one row short.
    /// - the relative result is translated by the board's occupied minimum.
    ///   The q offset is `min_x` and the r offset falls out of
    ///   `r = (y - x) / 2` applied to the box minimum, not the independent
    ///   minimum of r over placements, so the translation stays the exact
    ///   inverse of [`Self::cell_center`].
    ///
    /// A click outside the populated region still yields a syntactically
    /// valid coordinate; deciding what an empty destination means is the
    /// caller's business.
    pub fn hit_test(&self, click: PixelPoint, bbox: &BoundingBox) -> HexCoord {
        let dy = bbox.min_y - bbox.min_x;

        let mut point = click;
        if dy.rem_euclid(2) == 1 {
            point.y += self.row_spacing();
        }

        let relative = self.pixel_to_axial(point);
        HexCoord::new(relative.q + bbox.min_x, relative.r + dy.div_euclid(2))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use pretty_assertions::assert_eq;

    fn assert_hit_inverse(state: &str, layout: Layout) {
        let board = Board::from_state(state).unwrap();
        let bbox = board.bounding_box().unwrap();

        for (cell, _) in board.cells() {
            let center = layout.cell_center(&bbox, cell);
            let hit = layout.hit_test(center, &bbox);
            assert_eq!(Some(hit), cell.to_axial(), "cell {:?} in {:?}", cell, state);
        }
    }

    #[test]
    fn test_surface_size_single_hex() {
        let layout = Layout::default();
        let board = Board::from_state("Qaa").unwrap();
        let (w, h) = layout.surface_size(&board.bounding_box().unwrap());
        assert_eq!(w, 2.0 * HEX_SIZE);
        assert_eq!(h, HEX_SIZE * SQRT_3);
    }

    #[test]
    fn test_surface_size_grows_with_margin() {
        let layout = Layout::with_margin(12.0);
        let board = Board::from_state("Qaa").unwrap();
        let (w, h) = layout.surface_size(&board.bounding_box().unwrap());
        assert_eq!(w, 2.0 * HEX_SIZE + 24.0);
        assert_eq!(h, HEX_SIZE * SQRT_3 + 24.0);
    }

    #[test]
    fn test_cell_center_origin_cell() {
        let layout = Layout::default();
        let board = Board::from_state("Qaa").unwrap();
        let bbox = board.bounding_box().unwrap();

        let center = layout.cell_center(&bbox, DoubledCoord::new(0, 0));
        assert_eq!(center, PixelPoint::new(HEX_SIZE, 0.5 * HEX_SIZE * SQRT_3));
    }

    #[test]
    fn test_hit_test_inverts_cell_center() {
        assert_hit_inverse("GbaqcaQbb", Layout::default());
    }

    #[test]
    fn test_hit_test_with_margin() {
        assert_hit_inverse("GbaqcaQbb", Layout::with_margin(16.0));
    }

    #[test]
    fn test_hit_test_offset_board() {
        // Board nowhere near the aa origin; offsets must be added back
        assert_hit_inverse("QeeafeGef", Layout::default());
    }

    #[test]
    fn test_hit_test_half_row_board() {
        // min over doubled y comes from a different placement than min over
        // x, and their difference is odd: the top-left grid position is
        // unpopulatable and the half-row correction has to kick in.
        // Placements: (0,5) -> doubled (0,10), (3,0) -> doubled (3,3).
        assert_hit_inverse("AafSda", Layout::default());
    }

    #[test]
    fn test_hit_test_neighbor_cells_distinct() {
        let layout = Layout::default();
        let board = Board::from_state("Qaaqab").unwrap();
        let bbox = board.bounding_box().unwrap();

        let a = layout.hit_test(layout.cell_center(&bbox, DoubledCoord::new(0, 0)), &bbox);
        let b = layout.hit_test(layout.cell_center(&bbox, DoubledCoord::new(0, 2)), &bbox);
        assert_eq!(a, HexCoord::new(0, 0));
        assert_eq!(b, HexCoord::new(0, 1));
    }

    #[test]
    fn test_hit_test_outside_board_still_valid() {
        let layout = Layout::default();
        let board = Board::from_state("Qcc").unwrap();
        let bbox = board.bounding_box().unwrap();

        // Center of the hex one column west of the only piece: off-surface
        // and unoccupied, but still a well-formed coordinate
        let west = layout.hit_test(PixelPoint::new(-0.5 * HEX_SIZE, 0.0), &bbox);
        assert_eq!(west, HexCoord::new(1, 2));
    }
}
