use serde::Serialize;
use wasm_bindgen::prelude::*;
use weiqi_engine::{Engine, GameConfig, GoError, Point, Stone};

/// JSON envelope for every action: `{ "accepted": bool, "reason"?: "...", ...outcome }`.
#[derive(Serialize)]
struct Response<T: Serialize> {
    accepted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<GoError>,
    #[serde(flatten)]
    outcome: Option<T>,
}

fn respond<T: Serialize>(result: Result<T, GoError>) -> String {
    let response = match result {
        Ok(outcome) => Response {
            accepted: true,
            reason: None,
            outcome: Some(outcome),
        },
        Err(e) => Response {
            accepted: false,
            reason: Some(e),
            outcome: None,
        },
    };
    serde_json::to_string(&response)
        .unwrap_or_else(|e| format!(r#"{{"accepted":false,"error":"{e}"}}"#))
}

fn point_or(point: Option<Point>, pick: fn(Point) -> u8) -> i8 {
    point.map(|p| pick(p) as i8).unwrap_or(-1)
}

/// Browser-facing handle on one game.
///
/// Human actions are refused with `out_of_turn` while the automated opponent
/// is to move; the page calls `ai_move` after `ai_delay_ms`.
#[wasm_bindgen]
pub struct WasmGame {
    inner: Engine,
    /// Side handed back to the automated opponent when it is re-enabled.
    ai_side: Stone,
}

#[wasm_bindgen]
impl WasmGame {
    /// `config_json` holds `GameConfig` fields; missing ones take defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: &str) -> Self {
        let config = if config_json.trim().is_empty() {
            GameConfig::default()
        } else {
            GameConfig::from_json(config_json)
        };
        Self {
            ai_side: config.ai.unwrap_or(Stone::White),
            inner: Engine::new(config),
        }
    }

    // -- Game actions --

    pub fn try_play(&mut self, row: u8, col: u8) -> String {
        if self.inner.awaiting_ai() {
            return respond::<()>(Err(GoError::OutOfTurn));
        }
        respond(self.inner.place_stone((row, col)))
    }

    pub fn pass(&mut self) -> String {
        if self.inner.awaiting_ai() {
            return respond::<()>(Err(GoError::OutOfTurn));
        }
        respond(self.inner.pass())
    }

    pub fn ai_move(&mut self) -> String {
        respond(self.inner.ai_turn())
    }

    pub fn undo(&mut self) -> String {
        serde_json::to_string(&self.inner.undo())
            .unwrap_or_else(|_| r#"{"restored":false,"board":null}"#.to_string())
    }

    pub fn reset(&mut self) {
        self.inner.reset();
    }

    // -- Automated opponent --

    pub fn awaiting_ai(&self) -> bool {
        self.inner.awaiting_ai()
    }

    pub fn ai_delay_ms(&self) -> u32 {
        self.inner.config().ai_delay_ms
    }

    /// Toggle the automated opponent on its configured side (White when none was set).
    pub fn set_ai_enabled(&mut self, enabled: bool) {
        self.inner.set_ai(enabled.then_some(self.ai_side));
    }

    // -- Engine accessors (WASM-friendly types) --

    pub fn board(&self) -> js_sys::Int8Array {
        js_sys::Int8Array::from(self.inner.board().board())
    }

    pub fn size(&self) -> u8 {
        self.inner.size()
    }

    pub fn komi(&self) -> f64 {
        self.inner.komi()
    }

    pub fn current_turn_stone(&self) -> i8 {
        self.inner.turn().to_cell()
    }

    pub fn captures_black(&self) -> u32 {
        self.inner.captures().get(Stone::Black)
    }

    pub fn captures_white(&self) -> u32 {
        self.inner.captures().get(Stone::White)
    }

    pub fn is_legal(&self, row: u8, col: u8) -> bool {
        self.inner.is_legal((row, col))
    }

    pub fn has_ko(&self) -> bool {
        self.inner.ko().is_some()
    }

    pub fn ko_row(&self) -> i8 {
        point_or(self.inner.ko(), |(row, _)| row)
    }

    pub fn ko_col(&self) -> i8 {
        point_or(self.inner.ko(), |(_, col)| col)
    }

    pub fn has_last_move(&self) -> bool {
        self.inner.last_move().is_some()
    }

    pub fn last_move_row(&self) -> i8 {
        point_or(self.inner.last_move(), |(row, _)| row)
    }

    pub fn last_move_col(&self) -> i8 {
        point_or(self.inner.last_move(), |(_, col)| col)
    }

    pub fn move_count(&self) -> usize {
        self.inner.move_count()
    }

    pub fn stage(&self) -> String {
        self.inner.stage().to_string()
    }

    pub fn state_json(&self) -> String {
        serde_json::to_string(self.inner.state()).unwrap_or_else(|_| "{}".to_string())
    }
}
