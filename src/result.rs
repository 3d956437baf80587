//! Guess result types.

use alloc::string::String;

use crate::game::GameState;

/// Result of a single guess.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessOutcome {
    /// Whether the player found the right flag.
    pub correct: bool,
    /// Index the player chose.
    pub chosen_index: usize,
    /// Country shown at the chosen index.
    pub chosen: String,
    /// Country the player was asked to find.
    pub correct_answer: String,
    /// Score after this guess.
    pub state: GameState,
}

impl GuessOutcome {
    /// Returns whether this guess ended the game.
    #[must_use]
    pub const fn ends_game(&self) -> bool {
        self.state.is_game_over
    }
}
