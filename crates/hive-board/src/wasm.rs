//! WebAssembly bindings for the board core.
//!
//! This module exposes the codec, layout, and action matcher to a browser
//! presentation layer through wasm-bindgen. The JavaScript side owns the
//! canvas, the fetch calls to the rules service, and the hash routing; it
//! hands raw inputs (a state string, a click position, a service payload)
//! across this boundary and gets structured results back as JSON.

#[cfg(feature = "wasm")]
use wasm_bindgen::prelude::*;

#[cfg(feature = "wasm")]
use serde::Serialize;

#[cfg(feature = "wasm")]
use crate::board::Board;
#[cfg(feature = "wasm")]
use crate::codec::{self, CodecError};
#[cfg(feature = "wasm")]
use crate::hand::{self, Hands};
#[cfg(feature = "wasm")]
use crate::input::{ActionInput, ActionSet, MatchOutcome};
#[cfg(feature = "wasm")]
use crate::layout::{Layout, PixelPoint};
#[cfg(feature = "wasm")]
use crate::piece::Player;

/// Initialize panic hook for better error messages in browser console
#[cfg(feature = "wasm")]
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// One cell of the render model: a pixel center plus the stack's wire
/// characters, bottom-to-top.
#[cfg(feature = "wasm")]
#[derive(Serialize)]
struct RenderCell {
    x: f64,
    y: f64,
    pieces: Vec<char>,
}

/// WASM-exposed view of one board state.
#[cfg(feature = "wasm")]
#[wasm_bindgen]
pub struct WasmBoardView {
    state: String,
    board: Board,
    layout: Layout,
    actions: ActionSet,
    input: ActionInput,
}

#[cfg(feature = "wasm")]
#[wasm_bindgen]
impl WasmBoardView {
    /// Build a view of the given state string
    #[wasm_bindgen(constructor)]
    pub fn new(state: &str) -> Result<WasmBoardView, JsValue> {
        let board = Board::from_state(state).map_err(codec_error)?;
        Ok(WasmBoardView {
            state: state.to_owned(),
            board,
            layout: Layout::default(),
            actions: ActionSet::new(),
            input: ActionInput::new(),
        })
    }

    /// Replace the state string. Invalidates the action set and any
    /// in-progress input: a stale action set must never be matched against
    /// the new state's clicks.
    #[wasm_bindgen(js_name = setState)]
    pub fn set_state(&mut self, state: &str) -> Result<(), JsValue> {
        self.board = Board::from_state(state).map_err(codec_error)?;
        self.state = state.to_owned();
        self.actions = ActionSet::new();
        self.input.reset();
        Ok(())
    }

    /// The current state string
    #[wasm_bindgen(js_name = getState)]
    pub fn get_state(&self) -> String {
        self.state.clone()
    }

    /// Install the legal actions fetched for the current state.
    /// Expects the service payload: a JSON array of `[action, nextState]`
    /// pairs.
    #[wasm_bindgen(js_name = setActions)]
    pub fn set_actions(&mut self, actions_json: &str) -> Result<(), JsValue> {
        self.actions = serde_json::from_str(actions_json)
            .map_err(|e| JsValue::from_str(&format!("Invalid actions payload: {}", e)))?;
        self.input.reset();
        Ok(())
    }

    /// Required drawing surface size as `[width, height]`, or `[0, 0]` for
    /// an empty board
    #[wasm_bindgen(js_name = getSurfaceSize)]
    pub fn get_surface_size(&self) -> Vec<f64> {
        match self.board.bounding_box() {
            Some(bbox) => {
                let (w, h) = self.layout.surface_size(&bbox);
                vec![w, h]
            }
            None => vec![0.0, 0.0],
        }
    }

    /// The cells to draw, as JSON (pixel centers plus stacked piece chars)
    #[wasm_bindgen(js_name = getRenderModel)]
    pub fn get_render_model(&self) -> String {
        let Some(bbox) = self.board.bounding_box() else {
            return "[]".to_string();
        };

        let cells: Vec<RenderCell> = self
            .board
            .cells()
            .map(|(cell, stack)| {
                let center = self.layout.cell_center(&bbox, cell);
                RenderCell {
                    x: center.x,
                    y: center.y,
                    pieces: stack.pieces().iter().map(|p| p.to_char()).collect(),
                }
            })
            .collect();
        serde_json::to_string(&cells).unwrap_or_else(|_| "[]".to_string())
    }

    /// Both players' reserves as JSON
    #[wasm_bindgen(js_name = getHands)]
    pub fn get_hands(&self) -> String {
        let placements = codec::decode(&self.state).unwrap_or_default();
        let hands = Hands::from_placements(&placements);
        serde_json::to_string(&hands).unwrap_or_else(|_| "{}".to_string())
    }

    /// Feed a click on the board surface into the action matcher; returns
    /// the outcome as JSON. `null` when the board is empty and there is
    /// nothing to hit-test against.
    #[wasm_bindgen(js_name = clickBoard)]
    pub fn click_board(&mut self, x: f64, y: f64) -> String {
        let Some(bbox) = self.board.bounding_box() else {
            return "null".to_string();
        };

        let hex = self.layout.hit_test(PixelPoint::new(x, y), &bbox);
        let Some(token) = hex.token() else {
            // Click resolved outside the encodable grid; ignore it
            return "null".to_string();
        };
        let token: String = token.iter().collect();
        outcome_json(self.input.push(&token, &self.actions))
    }

    /// Feed a click on a player's hand surface into the action matcher
    #[wasm_bindgen(js_name = clickHand)]
    pub fn click_hand(&mut self, player_is_p1: bool, y: f64) -> String {
        let player = if player_is_p1 { Player::P1 } else { Player::P2 };
        let placements = codec::decode(&self.state).unwrap_or_default();
        let hand = hand::Hand::from_placements(player, &placements);

        let Some(kind) = hand.slot_at(y, &self.layout) else {
            return "null".to_string();
        };
        let token = hand::place_token(kind, self.board.is_empty());
        outcome_json(self.input.push(&token, &self.actions))
    }

    /// Push an already-built token (for keyboard entry)
    #[wasm_bindgen(js_name = pushToken)]
    pub fn push_token(&mut self, token: &str) -> String {
        outcome_json(self.input.push(token, &self.actions))
    }

    /// The in-progress action input, for echoing back to the user
    #[wasm_bindgen(js_name = getActionInput)]
    pub fn get_action_input(&self) -> String {
        self.input.buffer().to_string()
    }
}

#[cfg(feature = "wasm")]
fn outcome_json(outcome: MatchOutcome) -> String {
    serde_json::to_string(&outcome).unwrap_or_else(|_| "null".to_string())
}

#[cfg(feature = "wasm")]
fn codec_error(err: CodecError) -> JsValue {
    JsValue::from_str(&format!("Malformed state: {}", err))
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_wasm_module_compiles() {
        // This test just verifies the module compiles
        assert!(true);
    }
}
