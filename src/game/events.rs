use alloc::boxed::Box;

use crate::result::GuessOutcome;
use crate::round::Round;

use super::{GameState, Quiz};

/// Identifies a registered listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(pub(super) u32);

/// State changes reported to listeners.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizEvent {
    /// A new round is on display.
    RoundStarted {
        /// The dealt round.
        round: Round,
        /// 1-based number of the round within the game.
        number: u32,
    },
    /// A guess was scored.
    GuessRecorded(GuessOutcome),
    /// The round limit was reached.
    GameOver(GameState),
    /// The score was cleared.
    Reset(GameState),
}

impl Quiz {
    /// Registers a listener called after every state change.
    ///
    /// # Example
    ///
    /// ```
    /// use std::cell::Cell;
    /// use std::rc::Rc;
    ///
    /// use flagquiz::{CountryPool, Quiz, QuizEvent, QuizOptions};
    ///
    /// let rounds = Rc::new(Cell::new(0));
    /// let seen = Rc::clone(&rounds);
    ///
    /// let mut quiz = Quiz::new(QuizOptions::default(), 7);
    /// quiz.subscribe(move |event| {
    ///     if matches!(event, QuizEvent::RoundStarted { .. }) {
    ///         seen.set(seen.get() + 1);
    ///     }
    /// });
    /// quiz.start_game(CountryPool::flags()).unwrap();
    /// assert_eq!(rounds.get(), 1);
    /// ```
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&QuizEvent) + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription = self.next_subscription.wrapping_add(1);
        self.listeners.push((id, Box::new(listener)));
        log::trace!("listener {} subscribed", id.0);
        id
    }

    /// Removes a listener.
    ///
    /// Returns `false` if the ID is not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        before != self.listeners.len()
    }

    /// Returns the number of registered listeners.
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    pub(super) fn emit(&mut self, event: &QuizEvent) {
        for (_, listener) in &mut self.listeners {
            listener(event);
        }
    }
}
