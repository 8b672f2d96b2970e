//! Piece identity: who owns a piece and what kind it is.
//!
//! A piece's single-character wire form carries both facts: the letter
//! selects the kind and the letter's case selects the owner (uppercase for
//! player one, lowercase for player two).

use serde::{Deserialize, Serialize};

/// One of the two players
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// First player (uppercase pieces)
    P1,
    /// Second player (lowercase pieces)
    P2,
}

impl Player {
    /// Both players, in turn order
    pub const ALL: [Player; 2] = [Player::P1, Player::P2];

    /// The other player
    pub const fn opponent(&self) -> Player {
        match self {
            Player::P1 => Player::P2,
            Player::P2 => Player::P1,
        }
    }
}

/// The kind of a piece.
///
/// A closed enumeration so that char and count lookups are exhaustive
/// matches: adding or removing a kind is a compile-time-checked change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    QueenBee,
    Ant,
    Beetle,
    Grasshopper,
    Spider,
}

impl PieceKind {
    /// All piece kinds, in the order hand reserves are displayed
    pub const ALL: [PieceKind; 5] = [
        PieceKind::QueenBee,
        PieceKind::Ant,
        PieceKind::Beetle,
        PieceKind::Grasshopper,
        PieceKind::Spider,
    ];

    /// The lowercase wire letter for this kind
    pub const fn letter(&self) -> char {
        match self {
            PieceKind::QueenBee => 'q',
            PieceKind::Ant => 'a',
            PieceKind::Beetle => 'b',
            PieceKind::Grasshopper => 'g',
            PieceKind::Spider => 's',
        }
    }

    /// Look up a kind by its wire letter, case-insensitively
    pub fn from_letter(c: char) -> Option<PieceKind> {
        match c.to_ascii_lowercase() {
            'q' => Some(PieceKind::QueenBee),
            'a' => Some(PieceKind::Ant),
            'b' => Some(PieceKind::Beetle),
            'g' => Some(PieceKind::Grasshopper),
            's' => Some(PieceKind::Spider),
            _ => None,
        }
    }

    /// How many of this kind each player starts with in hand
    pub const fn starting_count(&self) -> u8 {
        match self {
            PieceKind::QueenBee => 1,
            PieceKind::Ant => 3,
            PieceKind::Beetle => 2,
            PieceKind::Grasshopper => 3,
            PieceKind::Spider => 2,
        }
    }
}

/// A piece: an owner plus a kind. Immutable value, equality by fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    /// Which player this piece belongs to
    pub player: Player,
    /// What kind of piece it is
    pub kind: PieceKind,
}

impl Piece {
    /// Create a new piece
    pub const fn new(player: Player, kind: PieceKind) -> Self {
        Self { player, kind }
    }

    /// Parse a piece from its wire character. `None` for letters outside
    /// the piece alphabet.
    pub fn from_char(c: char) -> Option<Piece> {
        let player = if c.is_ascii_uppercase() {
            Player::P1
        } else {
            Player::P2
        };
        Some(Piece::new(player, PieceKind::from_letter(c)?))
    }

    /// The wire character for this piece, cased by owner
    pub fn to_char(&self) -> char {
        match self.player {
            Player::P1 => self.kind.letter().to_ascii_uppercase(),
            Player::P2 => self.kind.letter(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_round_trip() {
        for player in Player::ALL {
            for kind in PieceKind::ALL {
                let piece = Piece::new(player, kind);
                assert_eq!(Piece::from_char(piece.to_char()), Some(piece));
            }
        }
    }

    #[test]
    fn test_case_selects_owner() {
        assert_eq!(
            Piece::from_char('Q'),
            Some(Piece::new(Player::P1, PieceKind::QueenBee))
        );
        assert_eq!(
            Piece::from_char('q'),
            Some(Piece::new(Player::P2, PieceKind::QueenBee))
        );
    }

    #[test]
    fn test_unknown_letter_rejected() {
        assert_eq!(Piece::from_char('x'), None);
        assert_eq!(Piece::from_char('Z'), None);
        assert_eq!(Piece::from_char('1'), None);
    }

    #[test]
    fn test_starting_counts_total() {
        let total: u8 = PieceKind::ALL.iter().map(|k| k.starting_count()).sum();
        // 11 per player, 22 on a full board
        assert_eq!(total, 11);
    }

    #[test]
    fn test_opponent() {
        assert_eq!(Player::P1.opponent(), Player::P2);
        assert_eq!(Player::P2.opponent(), Player::P1);
    }
}
