//! A guess-the-flag quiz engine with optional `no_std` support.
//!
//! The crate provides a [`Quiz`] type that manages the round flow of a
//! flag quiz: dealing three candidate countries, scoring guesses, and
//! ending the game after a configurable number of rounds.
//!
//! # Example
//!
//! ```
//! use flagquiz::{CountryPool, Quiz, QuizOptions};
//!
//! let mut quiz = Quiz::new(QuizOptions::default(), 42);
//! let round = quiz.start_game(CountryPool::flags()).unwrap();
//! let outcome = quiz.submit_guess(round.correct_index()).unwrap();
//! assert!(outcome.correct);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod country;
pub mod error;
pub mod game;
pub mod options;
pub mod result;
pub mod round;

// Re-export main types
pub use country::{CountryPool, DEFAULT_COUNTRIES, OPTIONS_PER_ROUND};
pub use error::{AdvanceError, GuessError, PoolError, RoundError};
pub use game::{GameState, Phase, Quiz, QuizEvent, SubscriptionId};
pub use options::{PoolPolicy, QuizOptions};
pub use result::GuessOutcome;
pub use round::Round;
