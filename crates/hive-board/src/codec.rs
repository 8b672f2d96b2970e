//! The compact textual board encoding.
//!
//! A board state is a run of 3-character chunks `[pieceChar][colChar][rowChar]`,
//! optionally followed by a short non-chunk suffix (the turn marker) that the
//! placement codec skips. Chunk order is insertion order, and insertion order
//! is stack order: a later chunk at the same coordinate sits on top of an
//! earlier one. Nothing in the format stores an explicit layer index.

use crate::hex::{coord_to_char, HexCoord};
use crate::piece::{Piece, Player};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One decoded chunk: a piece at an axial coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Placement {
    /// The piece being placed
    pub piece: Piece,
    /// Where it sits, in the axial coordinates of the state string
    pub hex: HexCoord,
}

impl Placement {
    /// Create a new placement
    pub const fn new(piece: Piece, hex: HexCoord) -> Self {
        Self { piece, hex }
    }
}

/// Errors from encoding or decoding a board state string
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// A chunk's piece character is not in the piece alphabet. Fatal to the
    /// whole decode: silently dropping the placement would desynchronize
    /// stack order.
    #[error("unrecognized piece character {0:?} at chunk {1}")]
    UnknownPiece(char, usize),

    /// An axial component falls outside `0..=25` and has no token letter,
    /// which would break the encode/decode round trip.
    #[error("coordinate ({}, {}) is outside the token alphabet", .0.q, .0.r)]
    CoordOutOfAlphabet(HexCoord),
}

/// Decode a state string into its placements, in string order.
///
/// A trailing partial chunk (fewer than 3 characters) is ignored rather than
/// rejected; that is where the turn marker lives. Unknown piece letters are
/// an error.
pub fn decode(state: &str) -> Result<Vec<Placement>, CodecError> {
    let chars: Vec<char> = state.chars().collect();
    let mut placements = Vec::with_capacity(chars.len() / 3);

    for (chunk_index, chunk) in chars.chunks_exact(3).enumerate() {
        let piece = Piece::from_char(chunk[0])
            .ok_or(CodecError::UnknownPiece(chunk[0], chunk_index))?;
        let hex = HexCoord::from_token(chunk[1], chunk[2]);
        placements.push(Placement::new(piece, hex));
    }

    Ok(placements)
}

/// Encode placements back into a state string, the exact inverse of
/// [`decode`] for inputs without a trailing suffix.
pub fn encode(placements: &[Placement]) -> Result<String, CodecError> {
    let mut state = String::with_capacity(placements.len() * 3);

    for placement in placements {
        let [col, row] = coord_to_token(placement.hex)?;
        state.push(placement.piece.to_char());
        state.push(col);
        state.push(row);
    }

    Ok(state)
}

/// The trailing turn marker, if the state string carries one.
///
/// The surrounding protocol appends `'1'` or `'2'` after the placement
/// chunks to say whose turn it is; the marker is exactly the character that
/// [`decode`] skips as a partial chunk.
pub fn turn_marker(state: &str) -> Option<Player> {
    if state.chars().count() % 3 != 1 {
        return None;
    }
    match state.chars().last() {
        Some('1') => Some(Player::P1),
        Some('2') => Some(Player::P2),
        _ => None,
    }
}

fn coord_to_token(hex: HexCoord) -> Result<[char; 2], CodecError> {
    let col = coord_to_char(hex.q).ok_or(CodecError::CoordOutOfAlphabet(hex))?;
    let row = coord_to_char(hex.r).ok_or(CodecError::CoordOutOfAlphabet(hex))?;
    Ok([col, row])
}
