//! Off-board piece reserves and the hand-slot hit test.
//!
//! Each player starts with a fixed set of pieces in hand; whatever the state
//! string has not placed yet is still in reserve. The reserve renders as one
//! column of stacks, one row per kind with pieces remaining, and a click on
//! a row selects that kind for placement.

use crate::codec::Placement;
use crate::hex::HexCoord;
use crate::layout::{Layout, SQRT_3};
use crate::piece::{PieceKind, Player};
use serde::{Deserialize, Serialize};

/// One player's unplaced pieces, counted per kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    player: Player,
    counts: [u8; PieceKind::ALL.len()],
}

impl Hand {
    /// The full starting reserve for a player
    pub fn full(player: Player) -> Self {
        Self {
            player,
            counts: PieceKind::ALL.map(|kind| kind.starting_count()),
        }
    }

    /// The reserve left after the given placements.
    ///
    /// Only this player's placements are subtracted. Counts saturate at
    /// zero: a state string that places more of a kind than exists is the
    /// rules service's bug, not a panic here.
    pub fn from_placements(player: Player, placements: &[Placement]) -> Self {
        let mut hand = Self::full(player);
        for placement in placements {
            if placement.piece.player != player {
                continue;
            }
            let slot = kind_slot(placement.piece.kind);
            hand.counts[slot] = hand.counts[slot].saturating_sub(1);
        }
        hand
    }

    /// Whose reserve this is
    pub fn player(&self) -> Player {
        self.player
    }

    /// Pieces of one kind still in hand
    pub fn count(&self, kind: PieceKind) -> u8 {
        self.counts[kind_slot(kind)]
    }

    /// Kinds with at least one piece left, in display order
    pub fn remaining_kinds(&self) -> impl Iterator<Item = PieceKind> + '_ {
        PieceKind::ALL
            .into_iter()
            .filter(move |kind| self.count(*kind) > 0)
    }

    /// Number of rows the reserve occupies when rendered
    pub fn rows(&self) -> usize {
        self.remaining_kinds().count()
    }

    /// Required surface size `(width, height)` for this reserve
    pub fn surface_size(&self, layout: &Layout) -> (f64, f64) {
        let row_height = layout.hex_size * SQRT_3;
        (2.0 * layout.hex_size, row_height * self.rows() as f64)
    }

    /// The kind under a click at vertical offset `y` on the reserve's own
    /// surface. Each remaining kind takes one full-hex-height row; `None`
    /// when the click falls below the last row.
    pub fn slot_at(&self, y: f64, layout: &Layout) -> Option<PieceKind> {
        if y < 0.0 {
            return None;
        }
        let row = (y / (layout.hex_size * SQRT_3)).floor() as usize;
        self.remaining_kinds().nth(row)
    }
}

/// Both players' reserves for one board state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hands {
    pub p1: Hand,
    pub p2: Hand,
}

impl Hands {
    /// Compute both reserves from a placement list
    pub fn from_placements(placements: &[Placement]) -> Self {
        Self {
            p1: Hand::from_placements(Player::P1, placements),
            p2: Hand::from_placements(Player::P2, placements),
        }
    }

    /// One player's reserve
    pub fn hand(&self, player: Player) -> &Hand {
        match player {
            Player::P1 => &self.p1,
            Player::P2 => &self.p2,
        }
    }
}

/// The action token for placing a piece of `kind` from hand.
///
/// A `+` marker followed by the kind's letter. On the opening state the
/// destination is forced, so the origin coordinate token is appended
/// immediately and the result is already a complete action.
pub fn place_token(kind: PieceKind, opening: bool) -> String {
    let mut token = String::from("+");
    token.push(kind.letter());
    if opening {
        let [col, row] = HexCoord::new(0, 0)
            .token()
            .unwrap_or(['a', 'a']);
        token.push(col);
        token.push(row);
    }
    token
}

fn kind_slot(kind: PieceKind) -> usize {
    PieceKind::ALL
        .iter()
        .position(|k| *k == kind)
        .unwrap_or(0)
}
