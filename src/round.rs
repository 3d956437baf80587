//! Round representation.

use alloc::string::String;

use crate::country::OPTIONS_PER_ROUND;
use crate::error::RoundError;

/// The flags shown in one round and which of them is asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    /// Countries in display order.
    options: [String; OPTIONS_PER_ROUND],
    /// Index of the country the player must find.
    correct_index: usize,
}

impl Round {
    /// Creates a round from display-ordered options.
    ///
    /// # Errors
    ///
    /// Returns an error if the correct index is out of range or the options
    /// are not distinct.
    pub fn new(
        options: [String; OPTIONS_PER_ROUND],
        correct_index: usize,
    ) -> Result<Self, RoundError> {
        if correct_index >= OPTIONS_PER_ROUND {
            return Err(RoundError::InvalidIndex(correct_index));
        }

        if options[0] == options[1] || options[0] == options[2] || options[1] == options[2] {
            return Err(RoundError::DuplicateOption);
        }

        Ok(Self {
            options,
            correct_index,
        })
    }

    /// Builds a round the engine already knows to be valid.
    pub(crate) const fn from_parts(
        options: [String; OPTIONS_PER_ROUND],
        correct_index: usize,
    ) -> Self {
        Self {
            options,
            correct_index,
        }
    }

    /// Returns the options in display order.
    #[must_use]
    pub const fn options(&self) -> &[String; OPTIONS_PER_ROUND] {
        &self.options
    }

    /// Returns the option at the given index.
    #[must_use]
    pub fn option(&self, index: usize) -> Option<&str> {
        self.options.get(index).map(String::as_str)
    }

    /// Returns the index of the correct option.
    #[must_use]
    pub const fn correct_index(&self) -> usize {
        self.correct_index
    }

    /// Returns the country the player is asked to find.
    #[must_use]
    pub fn correct_answer(&self) -> &str {
        &self.options[self.correct_index]
    }

    /// Returns whether the given index is the correct option.
    #[must_use]
    pub const fn is_correct(&self, index: usize) -> bool {
        index == self.correct_index
    }
}
