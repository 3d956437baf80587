//! Country pool types.

use alloc::string::String;
use alloc::vec::Vec;

use crate::error::PoolError;

/// Number of flags shown in each round.
pub const OPTIONS_PER_ROUND: usize = 3;

/// Countries of the built-in flag set.
pub const DEFAULT_COUNTRIES: [&str; 13] = [
    "Estonia",
    "France",
    "Germany",
    "Ireland",
    "Italy",
    "Nigeria",
    "Poland",
    "Russia",
    "Spain",
    "UK",
    "US",
    "Japan",
    "Switzerland",
];

/// The full set of countries eligible to appear as options.
///
/// A pool is plain reference data; it is validated when a game is started
/// with it, see [`Quiz::start_game`](crate::Quiz::start_game).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CountryPool {
    countries: Vec<String>,
}

impl CountryPool {
    /// Creates a pool from country identifiers, keeping their order.
    pub fn new<I, S>(countries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            countries: countries.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns the built-in flag set.
    ///
    /// # Example
    ///
    /// ```
    /// use flagquiz::CountryPool;
    ///
    /// let pool = CountryPool::flags();
    /// assert_eq!(pool.len(), 13);
    /// assert!(pool.contains("Japan"));
    /// ```
    #[must_use]
    pub fn flags() -> Self {
        Self::new(DEFAULT_COUNTRIES)
    }

    /// Checks that the pool can fill a round with distinct countries.
    ///
    /// # Errors
    ///
    /// Returns an error if the pool has fewer than [`OPTIONS_PER_ROUND`]
    /// countries or lists a country twice.
    pub fn validate(&self) -> Result<(), PoolError> {
        if self.countries.len() < OPTIONS_PER_ROUND {
            return Err(PoolError::TooFewCountries {
                found: self.countries.len(),
            });
        }

        let has_duplicate = self
            .countries
            .iter()
            .enumerate()
            .any(|(index, country)| self.countries[index + 1..].contains(country));
        if has_duplicate {
            return Err(PoolError::DuplicateCountry);
        }

        Ok(())
    }

    /// Returns the countries in pool order.
    #[must_use]
    pub fn countries(&self) -> &[String] {
        &self.countries
    }

    /// Returns whether the pool lists the given country.
    #[must_use]
    pub fn contains(&self, country: &str) -> bool {
        self.countries.iter().any(|c| c == country)
    }

    /// Returns the number of countries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.countries.len()
    }

    /// Returns whether the pool is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }
}

impl From<Vec<String>> for CountryPool {
    fn from(countries: Vec<String>) -> Self {
        Self { countries }
    }
}
