//! Hex coordinate systems used by the board.
//!
//! Three representations of "where" exist in this crate, each with its own
//! type so they can never be mixed without an explicit conversion:
//! - [`HexCoord`]: axial `(q, r)` coordinates, the form used by the state
//!   string and by action tokens
//! - [`DoubledCoord`]: doubled-height `(x, y)` coordinates, the form used to
//!   lay the sparse grid out on a rectangular surface
//! - `PixelPoint` (in [`crate::layout`]): points on the rendering surface
//!
//! We use axial coordinates as the primary form because the wire encoding is
//! axial, and doubled-height only for layout, where it makes the row/column
//! iteration rectangular.

use serde::{Deserialize, Serialize};

/// Number of letters available for a coordinate token (`'a'..='z'`).
const ALPHABET_SIZE: i32 = 26;

/// Axial coordinate for the hex grid.
///
/// In axial coordinates:
/// - `q` increases going east (right)
/// - `r` increases going southeast
/// - The third coordinate `s` (not stored) satisfies: q + r + s = 0
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct HexCoord {
    /// Column (increases going east)
    pub q: i32,
    /// Row (increases going southeast)
    pub r: i32,
}

impl HexCoord {
    /// Create a new hex coordinate
    pub const fn new(q: i32, r: i32) -> Self {
        Self { q, r }
    }

    /// The implicit third cube coordinate (s = -q - r)
    pub const fn s(&self) -> i32 {
        -self.q - self.r
    }

    /// Round fractional axial coordinates to the nearest hex.
    ///
    /// Computes the implied third cube coordinate, rounds all three
    /// independently, then reconstructs whichever axis accumulated the
    /// largest rounding error from the other two so that `q + r + s == 0`
    /// still holds. Rounding `q` and `r` independently can pick a
    /// non-adjacent hex near cell boundaries; this never does.
    pub fn round(q: f64, r: f64) -> Self {
        let s = -q - r;

        let mut rq = q.round();
        let mut rr = r.round();
        let rs = s.round();

        let q_diff = (rq - q).abs();
        let r_diff = (rr - r).abs();
        let s_diff = (rs - s).abs();

        if q_diff > r_diff && q_diff > s_diff {
            rq = -rr - rs;
        } else if r_diff > s_diff {
            rr = -rq - rs;
        }

        Self::new(rq as i32, rr as i32)
    }

    /// The two-character state-string token for this coordinate, or `None`
    /// if either component falls outside the single-letter range `0..=25`.
    pub fn token(&self) -> Option<[char; 2]> {
        Some([coord_to_char(self.q)?, coord_to_char(self.r)?])
    }

    /// Parse a coordinate from its two token characters.
    ///
    /// No range validation beyond the character arithmetic itself: state
    /// strings are assumed well-formed by the time they reach coordinate
    /// decoding.
    pub fn from_token(col: char, row: char) -> Self {
        Self::new(char_to_coord(col), char_to_coord(row))
    }
}

/// Doubled-height coordinate for rectangular layout of the hex grid.
///
/// Derived from axial via `x = q`, `y = 2r + q`, which means only cells with
/// `x ≡ y (mod 2)` are ever populated. The grid is drawn in pairs: a cell at
/// even `(x, y)` and its southeast neighbor at `(x + 1, y + 1)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DoubledCoord {
    /// Column, equal to axial `q`
    pub x: i32,
    /// Doubled row, equal to `2r + q`
    pub y: i32,
}

impl DoubledCoord {
    /// Create a new doubled-height coordinate
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Convert an axial coordinate to doubled-height
    pub const fn from_axial(hex: HexCoord) -> Self {
        Self::new(hex.q, 2 * hex.r + hex.q)
    }

    /// Convert back to axial. `None` when `y - x` is odd, i.e. the cell is
    /// one that the doubled-height mapping can never populate.
    pub const fn to_axial(self) -> Option<HexCoord> {
        if (self.y - self.x) % 2 != 0 {
            return None;
        }
        Some(HexCoord::new(self.x, (self.y - self.x) / 2))
    }

    /// The southeast pair partner `(x + 1, y + 1)` used by row-pair iteration
    pub const fn southeast(self) -> Self {
        Self::new(self.x + 1, self.y + 1)
    }

    /// Whether this cell satisfies the populated-parity invariant
    pub const fn same_parity(self) -> bool {
        (self.y - self.x) % 2 == 0
    }
}

/// Map a coordinate component to its token letter (`'a' + v`).
///
/// Valid only for `0..=25`; anything else cannot round-trip through the
/// state string and is reported as `None` for the codec to turn into an
/// error.
pub fn coord_to_char(v: i32) -> Option<char> {
    if !(0..ALPHABET_SIZE).contains(&v) {
        return None;
    }
    Some((b'a' + v as u8) as char)
}

/// Map a token letter back to its coordinate component (`c - 'a'`)
pub fn char_to_coord(c: char) -> i32 {
    c as i32 - 'a' as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_doubled_round_trip() {
        for q in -5..=5 {
            for r in -5..=5 {
                let hex = HexCoord::new(q, r);
                let doubled = DoubledCoord::from_axial(hex);
                assert!(doubled.same_parity());
                assert_eq!(doubled.to_axial(), Some(hex));
            }
        }
    }

    #[test]
    fn test_doubled_parity_mismatch() {
        assert_eq!(DoubledCoord::new(0, 1).to_axial(), None);
        assert_eq!(DoubledCoord::new(2, 5).to_axial(), None);
    }

    #[test]
    fn test_round_preserves_cube_sum() {
        let cases = [
            (0.4, 0.4),
            (2.6, -1.2),
            (-0.5, 0.49),
            (3.0, -2.0),
            (10.7, 4.3),
        ];
        for (q, r) in cases {
            let rounded = HexCoord::round(q, r);
            assert_eq!(rounded.q + rounded.r + rounded.s(), 0);
        }
    }

    #[test]
    fn test_round_exact_integers() {
        assert_eq!(HexCoord::round(3.0, -2.0), HexCoord::new(3, -2));
        assert_eq!(HexCoord::round(0.0, 0.0), HexCoord::new(0, 0));
    }

    #[test]
    fn test_round_boundary_picks_adjacent_hex() {
        // A point halfway between (0,0) and (1,0) must resolve to one of
        // those two, never a third hex.
        let rounded = HexCoord::round(0.5, 0.0);
        assert!(rounded == HexCoord::new(0, 0) || rounded == HexCoord::new(1, 0));
    }

    #[test]
    fn test_token_round_trip() {
        let hex = HexCoord::new(0, 25);
        let [col, row] = hex.token().unwrap();
        assert_eq!((col, row), ('a', 'z'));
        assert_eq!(HexCoord::from_token(col, row), hex);
    }

    #[test]
    fn test_token_out_of_alphabet() {
        assert_eq!(HexCoord::new(26, 0).token(), None);
        assert_eq!(HexCoord::new(0, -1).token(), None);
    }

    #[test]
    fn test_southeast_pairing() {
        let cell = DoubledCoord::new(2, 4);
        assert_eq!(cell.southeast(), DoubledCoord::new(3, 5));
        assert!(cell.southeast().same_parity());
    }
}
