//! Game state types.

#[cfg(feature = "std")]
fn round_percent(value: f64) -> u8 {
    value.round() as u8
}

#[cfg(all(not(feature = "std"), feature = "alloc"))]
fn round_percent(value: f64) -> u8 {
    libm::round(value) as u8
}

/// Controller phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// No game has been started.
    #[default]
    NotStarted,
    /// Waiting for the player to pick a flag.
    RoundActive,
    /// The guess was scored, waiting to advance.
    RoundAnswered,
    /// The round limit was reached.
    GameOver,
}

/// Running score of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GameState {
    /// Number of guesses made.
    pub rounds_played: u32,
    /// Number of guesses that found the right flag.
    pub correct_guesses: u32,
    /// Whether the round limit was reached.
    pub is_game_over: bool,
}

impl GameState {
    /// Returns the share of correct guesses as a whole percentage.
    ///
    /// Returns 0 before the first guess.
    #[must_use]
    pub fn percent_correct(&self) -> u8 {
        if self.rounds_played == 0 {
            return 0;
        }

        let ratio = f64::from(self.correct_guesses) / f64::from(self.rounds_played);
        round_percent(ratio * 100.0)
    }
}
