use std::fmt;

use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::Point;
use crate::ai;
use crate::config::GameConfig;
use crate::error::GoError;
use crate::goban::Goban;
use crate::history::History;
use crate::rules;
use crate::state::{Captures, GameState};
use crate::stone::Stone;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    BlackToPlay,
    WhiteToPlay,
    Over,
}

impl Stage {
    pub fn is_play(&self) -> bool {
        matches!(self, Stage::BlackToPlay | Stage::WhiteToPlay)
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::BlackToPlay => write!(f, "black_to_play"),
            Stage::WhiteToPlay => write!(f, "white_to_play"),
            Stage::Over => write!(f, "over"),
        }
    }
}

/// Result of an accepted placement, with everything a UI needs to redraw.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayOutcome {
    pub point: Point,
    pub stone: Stone,
    pub captured: Vec<Point>,
    pub ko: Option<Point>,
    pub next_turn: Stone,
    pub board: Goban,
    /// Whether the side now to move has any legal placement. When false the
    /// caller should pass for it.
    pub opponent_can_move: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PassOutcome {
    pub stone: Stone,
    pub game_over: bool,
    pub next_turn: Stone,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UndoOutcome {
    pub restored: bool,
    pub board: Option<Goban>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum AiOutcome {
    Play(PlayOutcome),
    Pass(PassOutcome),
}

/// Owns one game: the authoritative state, its undo history and the
/// automated opponent's random source.
///
/// Every operation runs to completion synchronously. Callers serialize their
/// calls and hold human input while [`Engine::awaiting_ai`] is true.
#[derive(Debug)]
pub struct Engine {
    config: GameConfig,
    state: GameState,
    history: History,
    rng: StdRng,
}

impl Engine {
    pub fn new(config: GameConfig) -> Self {
        let config = config.validated();
        let state = GameState::new(config.size);
        Self::from_state(config, state)
    }

    /// Continue from an arbitrary position, with an empty undo history.
    /// `reset` returns to an empty board of the configured size.
    pub fn from_state(config: GameConfig, state: GameState) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        };
        tracing::info!(
            "New {size}x{size} game, komi {komi}",
            size = state.size(),
            komi = config.komi
        );
        Engine {
            config,
            state,
            history: History::new(),
            rng,
        }
    }

    // -- Accessors --

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn board(&self) -> &Goban {
        &self.state.board
    }

    pub fn size(&self) -> u8 {
        self.state.size()
    }

    pub fn komi(&self) -> f64 {
        self.config.komi
    }

    pub fn captures(&self) -> &Captures {
        &self.state.captures
    }

    pub fn ko(&self) -> Option<Point> {
        self.state.ko
    }

    pub fn last_move(&self) -> Option<Point> {
        self.state.last_move
    }

    pub fn turn(&self) -> Stone {
        self.state.turn
    }

    pub fn is_over(&self) -> bool {
        self.state.game_over
    }

    /// Number of placements that can still be undone.
    pub fn move_count(&self) -> usize {
        self.history.len()
    }

    pub fn stage(&self) -> Stage {
        if self.state.game_over {
            Stage::Over
        } else {
            match self.state.turn {
                Stone::Black => Stage::BlackToPlay,
                Stone::White => Stage::WhiteToPlay,
            }
        }
    }

    pub fn is_legal(&self, point: Point) -> bool {
        !self.state.game_over && rules::check_move(&self.state, point, self.state.turn).is_ok()
    }

    pub fn legal_moves(&self, stone: Stone) -> Vec<Point> {
        self.state
            .board
            .points()
            .filter(|&p| rules::check_move(&self.state, p, stone).is_ok())
            .collect()
    }

    // -- Automated opponent --

    pub fn ai(&self) -> Option<Stone> {
        self.config.ai
    }

    pub fn set_ai(&mut self, ai: Option<Stone>) {
        self.config.ai = ai;
    }

    /// True while the game is running and the automated opponent is to move.
    pub fn awaiting_ai(&self) -> bool {
        !self.state.game_over && self.config.ai == Some(self.state.turn)
    }

    /// Let the automated opponent choose and play its move.
    pub fn ai_turn(&mut self) -> Result<AiOutcome, GoError> {
        if self.state.game_over {
            return Err(GoError::GameOver);
        }
        if !self.awaiting_ai() {
            return Err(GoError::OutOfTurn);
        }

        let turn = ai::choose_move(&self.state, self.state.turn, &mut self.rng);
        tracing::debug!("AI chose {turn}");
        match turn.pos {
            Some(point) => self.place_stone(point).map(AiOutcome::Play),
            None => self.pass().map(AiOutcome::Pass),
        }
    }

    // -- Game actions --

    /// Place a stone for the side to move.
    pub fn place_stone(&mut self, point: Point) -> Result<PlayOutcome, GoError> {
        if self.state.game_over {
            return Err(GoError::GameOver);
        }

        let stone = self.state.turn;
        let mv = rules::check_move(&self.state, point, stone).inspect_err(|e| match e {
            GoError::NotOnBoard => tracing::error!("{stone} tried to play off the board at {point:?}"),
            _ => tracing::debug!("{stone} at {point:?} rejected: {e}"),
        })?;

        self.history.snapshot(&self.state);
        self.state.apply(&mv);

        if mv.captured().is_empty() {
            tracing::debug!("{stone} plays {point:?}");
        } else {
            tracing::debug!(
                "{stone} plays {point:?}, capturing {n} stone(s)",
                n = mv.captured().len()
            );
        }

        let next_turn = self.state.turn;
        Ok(PlayOutcome {
            point: mv.point(),
            stone: mv.stone(),
            captured: mv.captured().to_vec(),
            ko: self.state.ko,
            next_turn,
            board: self.state.board.clone(),
            opponent_can_move: rules::has_legal_move(&self.state, next_turn),
        })
    }

    /// Pass for the side to move. The second consecutive pass ends the game.
    pub fn pass(&mut self) -> Result<PassOutcome, GoError> {
        if self.state.game_over {
            return Err(GoError::GameOver);
        }

        let stone = self.state.turn;
        let game_over = self.state.pass();
        if game_over {
            tracing::info!("{stone} passes, game over");
        } else {
            tracing::debug!("{stone} passes");
        }

        Ok(PassOutcome {
            stone,
            game_over,
            next_turn: self.state.turn,
        })
    }

    /// Step back over the most recent placement.
    pub fn undo(&mut self) -> UndoOutcome {
        if self.state.game_over {
            return UndoOutcome {
                restored: false,
                board: None,
            };
        }

        match self.history.undo() {
            Some(prev) => {
                self.state = prev;
                self.state.game_over = false;
                tracing::info!("Undo, {} to play", self.state.turn);
                UndoOutcome {
                    restored: true,
                    board: Some(self.state.board.clone()),
                }
            }
            None => UndoOutcome {
                restored: false,
                board: None,
            },
        }
    }

    /// Start over on an empty board with the same configuration.
    pub fn reset(&mut self) {
        self.state = GameState::new(self.config.size);
        self.history.clear();
        tracing::info!("Game reset");
    }
}
