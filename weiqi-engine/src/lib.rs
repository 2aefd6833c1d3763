pub mod ai;
pub mod config;
pub mod engine;
pub mod error;
pub mod goban;
pub mod group;
pub mod history;
pub mod rules;
pub mod state;
pub mod stone;
pub mod turn;

/// A board coordinate as `(row, col)`.
pub type Point = (u8, u8);

pub use config::GameConfig;
pub use engine::{AiOutcome, Engine, PassOutcome, PlayOutcome, Stage, UndoOutcome};
pub use error::GoError;
pub use goban::Goban;
pub use group::Group;
pub use history::History;
pub use rules::LegalMove;
pub use state::{Captures, GameState};
pub use stone::Stone;
pub use turn::{Move, Turn};
