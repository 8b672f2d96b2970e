//! Board core for a Hive-like stacking hex game UI.
//!
//! This crate provides the algorithmic core behind the game's presentation
//! layer:
//! - Decoding and encoding the compact textual board state
//! - Hex coordinate math (axial, doubled-height, and pixel space)
//! - Assembling the sparse stacked grid and its bounding box
//! - Hit-testing clicks back to logical hex coordinates
//! - Incrementally matching input tokens against the legal action list
//!
//! Game rules, legality, and move search live behind a remote rules
//! service; this crate only consumes its opaque string protocol (an action
//! list keyed by action string, a next-state string per action). Drawing is
//! likewise out of scope: the crate computes where and what to draw, never
//! how.
//!
//! # Architecture
//!
//! Everything here is synchronous and pure. A board and its bounding box
//! are derived fresh from each state string and never mutated afterwards,
//! so they are safe to share between a renderer and a hit-tester. The one
//! piece of state with multi-event lifetime is [`ActionInput`], which
//! accumulates the user's in-progress action.
//!
//! # Modules
//!
//! - [`hex`]: Axial and doubled-height coordinates plus cube rounding
//! - [`piece`]: Players, piece kinds, and the piece wire characters
//! - [`codec`]: The 3-character-chunk state string format
//! - [`board`]: Sparse stacked grid assembly and bounding boxes
//! - [`layout`]: Pixel layout constants, forward transforms, hit-testing
//! - [`input`]: The incremental-prefix action matcher
//! - [`hand`]: Off-board reserves and hand-slot selection

pub mod board;
pub mod codec;
pub mod hand;
pub mod hex;
pub mod input;
pub mod layout;
pub mod piece;
#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export commonly used types
pub use board::{Board, BoundingBox, Stack};
pub use codec::{decode, encode, turn_marker, CodecError, Placement};
pub use hand::{place_token, Hand, Hands};
pub use hex::{DoubledCoord, HexCoord};
pub use input::{ActionInput, ActionSet, MatchOutcome};
pub use layout::{Layout, PixelPoint, HEX_SIZE, MARGIN};
pub use piece::{Piece, PieceKind, Player};
