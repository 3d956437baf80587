//! Quiz configuration options.

/// What happens to the answered country between rounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum PoolPolicy {
    /// The correct country of each answered round leaves the working pool.
    ///
    /// When fewer than three countries would remain, the working pool is
    /// restored from the original pool.
    #[default]
    RemoveAnswered,
    /// Every round draws from the full pool.
    Retain,
}

/// Configuration options for a quiz.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use flagquiz::{PoolPolicy, QuizOptions};
///
/// let options = QuizOptions::default()
///     .with_round_limit(5)
///     .with_pool_policy(PoolPolicy::Retain);
/// assert_eq!(options.round_limit, Some(5));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizOptions {
    /// Number of guesses before the game ends. `None` for endless play.
    pub round_limit: Option<u32>,
    /// Pool handling between rounds.
    pub pool_policy: PoolPolicy,
}

impl Default for QuizOptions {
    fn default() -> Self {
        Self {
            round_limit: Some(10),
            pool_policy: PoolPolicy::RemoveAnswered,
        }
    }
}

impl QuizOptions {
    /// Options for a game that never ends and always draws from the full pool.
    ///
    /// # Example
    ///
    /// ```
    /// use flagquiz::{PoolPolicy, QuizOptions};
    ///
    /// let options = QuizOptions::endless();
    /// assert_eq!(options.round_limit, None);
    /// assert_eq!(options.pool_policy, PoolPolicy::Retain);
    /// ```
    #[must_use]
    pub const fn endless() -> Self {
        Self {
            round_limit: None,
            pool_policy: PoolPolicy::Retain,
        }
    }

    /// Sets the number of rounds per game.
    /// 0 to disable the limit.
    ///
    /// # Example
    ///
    /// ```
    /// use flagquiz::QuizOptions;
    ///
    /// let options = QuizOptions::default().with_round_limit(0);
    /// assert_eq!(options.round_limit, None);
    /// ```
    #[must_use]
    pub const fn with_round_limit(mut self, limit: u32) -> Self {
        self.round_limit = if limit == 0 { None } else { Some(limit) };
        self
    }

    /// Sets the pool handling between rounds.
    ///
    /// # Example
    ///
    /// ```
    /// use flagquiz::{PoolPolicy, QuizOptions};
    ///
    /// let options = QuizOptions::default().with_pool_policy(PoolPolicy::Retain);
    /// assert_eq!(options.pool_policy, PoolPolicy::Retain);
    /// ```
    #[must_use]
    pub const fn with_pool_policy(mut self, policy: PoolPolicy) -> Self {
        self.pool_policy = policy;
        self
    }
}
