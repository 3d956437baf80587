//! Quiz engine and state management.

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::country::CountryPool;
use crate::options::QuizOptions;
use crate::round::Round;

mod events;
mod flow;
mod guess;
pub mod state;

pub use events::{QuizEvent, SubscriptionId};
pub use state::{GameState, Phase};

type Listener = Box<dyn FnMut(&QuizEvent)>;

/// A flag quiz controller that manages the pool, rounds, and score.
///
/// The quiz owns the country pool, the current round, and the running
/// score. Use [`QuizOptions`] to configure the round limit and how the pool
/// changes between rounds.
pub struct Quiz {
    /// Quiz options.
    pub options: QuizOptions,
    /// Pool the current game was started with.
    pool: CountryPool,
    /// Countries still eligible this game.
    working: Vec<String>,
    /// Round on display.
    round: Option<Round>,
    /// Running score.
    state: GameState,
    /// Controller phase.
    phase: Phase,
    /// Registered event listeners.
    listeners: Vec<(SubscriptionId, Listener)>,
    /// Next subscription ID to assign.
    next_subscription: u32,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Quiz {
    /// Creates a new quiz with the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use flagquiz::{Phase, Quiz, QuizOptions};
    ///
    /// let quiz = Quiz::new(QuizOptions::default(), 42);
    /// assert_eq!(quiz.phase(), Phase::NotStarted);
    /// ```
    #[must_use]
    pub fn new(options: QuizOptions, seed: u64) -> Self {
        Self {
            options,
            pool: CountryPool::default(),
            working: Vec::new(),
            round: None,
            state: GameState::default(),
            phase: Phase::NotStarted,
            listeners: Vec::new(),
            next_subscription: 0,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Returns the current phase.
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns the running score.
    pub const fn game_state(&self) -> GameState {
        self.state
    }

    /// Returns the round on display.
    ///
    /// Returns `None` before the first game is started.
    pub const fn round(&self) -> Option<&Round> {
        self.round.as_ref()
    }

    /// Returns the pool the current game was started with.
    pub const fn pool(&self) -> &CountryPool {
        &self.pool
    }

    /// Returns the countries still eligible this game.
    pub fn remaining_countries(&self) -> &[String] {
        &self.working
    }

    /// Returns whether the game has ended.
    pub const fn is_game_over(&self) -> bool {
        self.state.is_game_over
    }
}
