use rand::Rng;
use rand::seq::SliceRandom;

use crate::country::{CountryPool, OPTIONS_PER_ROUND};
use crate::error::{AdvanceError, PoolError};
use crate::options::PoolPolicy;
use crate::round::Round;

use super::{GameState, Phase, Quiz, QuizEvent};

impl Quiz {
    /// Shuffles the working pool and deals its first countries.
    fn deal_round(&mut self) -> Round {
        self.working.shuffle(&mut self.rng);
        let correct_index = self.rng.random_range(0..OPTIONS_PER_ROUND);
        let options = core::array::from_fn(|index| self.working[index].clone());
        let round = Round::from_parts(options, correct_index);

        log::debug!(
            "dealt {:?}, looking for {} ({} countries left)",
            round.options(),
            round.correct_answer(),
            self.working.len()
        );

        round
    }

    /// Deals a round and puts it on display.
    fn begin_round(&mut self) -> Round {
        let round = self.deal_round();
        self.round = Some(round.clone());
        self.phase = Phase::RoundActive;

        let number = self.state.rounds_played + 1;
        self.emit(&QuizEvent::RoundStarted {
            round: round.clone(),
            number,
        });

        round
    }

    /// Drops the last correct answer from the working pool.
    ///
    /// The working pool is restored once it can no longer fill a round.
    fn remove_answered(&mut self) {
        if let Some(round) = &self.round {
            let answer = round.correct_answer();
            self.working.retain(|country| country != answer);
            log::trace!("removed {answer} from the working pool");
        }

        if self.working.len() < OPTIONS_PER_ROUND {
            log::debug!("working pool exhausted, restoring {} countries", self.pool.len());
            self.working = self.pool.countries().to_vec();
        }
    }

    /// Starts a new game with the given pool and deals the first round.
    ///
    /// Any game in progress is discarded.
    ///
    /// # Errors
    ///
    /// Returns an error if the pool has fewer than three countries or lists
    /// a country twice. The quiz is left untouched in that case.
    pub fn start_game(&mut self, pool: CountryPool) -> Result<Round, PoolError> {
        pool.validate()?;

        self.working = pool.countries().to_vec();
        self.pool = pool;
        self.state = GameState::default();

        log::info!(
            "game started with {} countries, limit {:?}",
            self.pool.len(),
            self.options.round_limit
        );

        Ok(self.begin_round())
    }

    /// Deals the next round after a scored guess.
    ///
    /// # Errors
    ///
    /// Returns [`AdvanceError::GameOver`] once the round limit was reached and
    /// [`AdvanceError::InvalidState`] if the current round is still awaiting
    /// a guess or no game was started.
    pub fn advance_round(&mut self) -> Result<Round, AdvanceError> {
        match self.phase {
            Phase::RoundAnswered => {}
            Phase::GameOver => return Err(AdvanceError::GameOver),
            Phase::NotStarted | Phase::RoundActive => return Err(AdvanceError::InvalidState),
        }

        if self.options.pool_policy == PoolPolicy::RemoveAnswered {
            self.remove_answered();
        }

        Ok(self.begin_round())
    }

    /// Clears the score, restores the pool, and deals a fresh round.
    ///
    /// Before the first game there is no pool to deal from, so only the
    /// score is returned.
    pub fn reset_game(&mut self) -> GameState {
        self.state = GameState::default();
        self.working = self.pool.countries().to_vec();
        self.emit(&QuizEvent::Reset(self.state));

        if self.phase != Phase::NotStarted {
            log::info!("game reset");
            self.begin_round();
        }

        self.state
    }
}
