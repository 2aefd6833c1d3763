use serde::{Deserialize, Serialize};

use crate::stone::Stone;

pub const DEFAULT_SIZE: u8 = 9;
pub const DEFAULT_KOMI: f64 = 7.5;
pub const DEFAULT_AI_DELAY_MS: u32 = 600;
pub const MIN_SIZE: u8 = 1;
pub const MAX_SIZE: u8 = 25;

/// Construction-time settings for a game. Missing JSON fields take their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub size: u8,
    /// Informational; legality never looks at it.
    pub komi: f64,
    /// Color played by the automated opponent, if any.
    pub ai: Option<Stone>,
    /// Pause the UI inserts before asking for the automated move.
    pub ai_delay_ms: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            size: DEFAULT_SIZE,
            komi: DEFAULT_KOMI,
            ai: Some(Stone::White),
            ai_delay_ms: DEFAULT_AI_DELAY_MS,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Parse a JSON config, falling back to defaults when it is malformed.
    pub fn from_json(json: &str) -> Self {
        serde_json::from_str::<GameConfig>(json)
            .unwrap_or_else(|e| {
                tracing::warn!("Ignoring malformed game config: {e}");
                GameConfig::default()
            })
            .validated()
    }

    /// Replace a board size outside `MIN_SIZE..=MAX_SIZE` with the default.
    pub fn validated(mut self) -> Self {
        if !(MIN_SIZE..=MAX_SIZE).contains(&self.size) {
            tracing::warn!(
                "Board size {} outside {MIN_SIZE}..={MAX_SIZE}, using {DEFAULT_SIZE}",
                self.size
            );
            self.size = DEFAULT_SIZE;
        }
        self
    }

    pub fn two_player(mut self) -> Self {
        self.ai = None;
        self
    }
}
