use crate::state::GameState;

/// Undo stack of full game-state snapshots, one per placement.
///
/// Snapshots are deep copies, so a restored state never shares storage with
/// the live one.
#[derive(Debug, Clone, Default)]
pub struct History {
    snapshots: Vec<GameState>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `state` as it is before a placement is applied.
    pub fn snapshot(&mut self, state: &GameState) {
        self.snapshots.push(state.clone());
    }

    /// Remove and return the most recent snapshot.
    pub fn undo(&mut self) -> Option<GameState> {
        self.snapshots.pop()
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn clear(&mut self) {
        self.snapshots.clear();
    }
}
