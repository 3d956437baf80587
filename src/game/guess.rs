use alloc::string::String;

use crate::country::OPTIONS_PER_ROUND;
use crate::error::{GuessError, RoundError};
use crate::result::GuessOutcome;
use crate::round::Round;

use super::{Phase, Quiz, QuizEvent};

impl Quiz {
    fn limit_reached(&self) -> bool {
        self.options
            .round_limit
            .is_some_and(|limit| self.state.rounds_played >= limit)
    }

    /// Scores the player's pick for the current round.
    ///
    /// Reaching the round limit ends the game; otherwise the quiz waits for
    /// [`advance_round`](Self::advance_round).
    ///
    /// # Errors
    ///
    /// Returns an error if the index is not one of the three options or no
    /// round is awaiting a guess. The score is unchanged in both cases.
    pub fn submit_guess(&mut self, chosen_index: usize) -> Result<GuessOutcome, GuessError> {
        if chosen_index >= OPTIONS_PER_ROUND {
            return Err(GuessError::InvalidIndex(chosen_index));
        }

        if self.phase != Phase::RoundActive {
            return Err(GuessError::InvalidState);
        }

        let round = self.round.as_ref().ok_or(GuessError::InvalidState)?;
        let correct = round.is_correct(chosen_index);
        let chosen = round.options()[chosen_index].clone();
        let correct_answer = String::from(round.correct_answer());

        self.state.rounds_played = self.state.rounds_played.saturating_add(1);
        if correct {
            self.state.correct_guesses = self.state.correct_guesses.saturating_add(1);
        }

        if self.limit_reached() {
            self.state.is_game_over = true;
            self.phase = Phase::GameOver;
        } else {
            self.phase = Phase::RoundAnswered;
        }

        log::debug!(
            "guessed {chosen} for {correct_answer}: {} ({}/{})",
            if correct { "correct" } else { "wrong" },
            self.state.correct_guesses,
            self.state.rounds_played
        );

        let outcome = GuessOutcome {
            correct,
            chosen_index,
            chosen,
            correct_answer,
            state: self.state,
        };
        self.emit(&QuizEvent::GuessRecorded(outcome.clone()));

        if self.state.is_game_over {
            log::info!(
                "game over, final score {}/{}",
                self.state.correct_guesses,
                self.state.rounds_played
            );
            self.emit(&QuizEvent::GameOver(self.state));
        }

        Ok(outcome)
    }

    /// Replaces the round on display with a known one.
    ///
    /// Useful to replay a recorded round. The options must come from the
    /// countries still eligible this game.
    ///
    /// # Errors
    ///
    /// Returns an error if no round is awaiting a guess or an option is not
    /// in the working pool.
    pub fn set_round(&mut self, round: Round) -> Result<(), RoundError> {
        if self.phase != Phase::RoundActive {
            return Err(RoundError::InvalidState);
        }

        if round
            .options()
            .iter()
            .any(|country| !self.working.contains(country))
        {
            return Err(RoundError::UnknownCountry);
        }

        self.round = Some(round.clone());
        let number = self.state.rounds_played + 1;
        self.emit(&QuizEvent::RoundStarted { round, number });

        Ok(())
    }
}
