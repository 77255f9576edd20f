//! Fixtures
//!
//! Movie catalogues and screening schedules described in YAML.

use std::{fs, path::PathBuf};

use jiff::civil::DateTime;
use rustc_hash::FxHashMap;
use rusty_money::iso::Currency;
use slotmap::SlotMap;
use thiserror::Error;
use tracing::debug;

use crate::{
    fixtures::{movies::MoviesFixture, screenings::ScreeningsFixture},
    movies::{Movie, MovieError, MovieKey},
    policies::PolicyError,
    screenings::Screening,
};

pub mod conditions;
pub mod movies;
pub mod policies;
pub mod screenings;

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading fixture files
    #[error("Failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Invalid price format
    #[error("Invalid price format: {0}")]
    InvalidPrice(String),

    /// Invalid percentage format
    #[error("Invalid percentage format: {0}")]
    InvalidPercentage(String),

    /// Invalid time or datetime format
    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    /// Unknown currency code
    #[error("Unknown currency code: {0}")]
    UnknownCurrency(String),

    /// Currency mismatch between movies
    #[error("Currency mismatch: expected {0}, found {1}")]
    CurrencyMismatch(String, String),

    /// No movies loaded yet
    #[error("No movies loaded yet; currency unknown")]
    NoCurrency,

    /// Movie not found
    #[error("Movie not found: {0}")]
    MovieNotFound(String),

    /// Discount policy rejected its configuration
    #[error("Invalid discount policy: {0}")]
    Policy(#[from] PolicyError),

    /// Movie rejected its configuration
    #[error("Invalid movie: {0}")]
    Movie(#[from] MovieError),
}

/// A screening waiting to be built against a loaded movie
#[derive(Debug, Clone, Copy)]
struct ScheduledScreening {
    movie: MovieKey,
    sequence: i32,
    start_time: DateTime,
}

/// Fixture
#[derive(Debug)]
pub struct Fixture {
    /// Base path for fixture files
    base_path: PathBuf,

    /// Loaded movies
    movies: SlotMap<MovieKey, Movie<'static>>,

    /// String key -> `SlotMap` key mappings for lookups
    movie_keys: FxHashMap<String, MovieKey>,

    /// Screenings in the order they were listed
    schedule: Vec<ScheduledScreening>,

    /// Currency for the fixture set
    currency: Option<&'static Currency>,
}

impl Fixture {
    /// Create a new empty fixture with default base path
    pub fn new() -> Self {
        Self::with_base_path("./fixtures")
    }

    /// Create a new empty fixture with custom base path
    pub fn with_base_path(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
            movies: SlotMap::with_key(),
            movie_keys: FxHashMap::default(),
            schedule: Vec::new(),
            currency: None,
        }
    }

    /// Load movies from a YAML fixture file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, if a movie or its policy is
    /// invalid, or if movies are priced in different currencies.
    pub fn load_movies(&mut self, name: &str) -> Result<&mut Self, FixtureError> {
        let file_path = self.base_path.join("movies").join(format!("{name}.yml"));
        let contents = fs::read_to_string(&file_path)?;
        let fixture: MoviesFixture = serde_norway::from_str(&contents)?;

        for (key, movie_fixture) in fixture.movies {
            let movie = Movie::try_from(movie_fixture)?;
            let currency = movie.fee().currency();

            if let Some(existing_currency) = self.currency {
                if existing_currency != currency {
                    return Err(FixtureError::CurrencyMismatch(
                        existing_currency.iso_alpha_code.to_string(),
                        currency.iso_alpha_code.to_string(),
                    ));
                }
            } else {
                self.currency = Some(currency);
            }

            let movie_key = self.movies.insert(movie);

            self.movie_keys.insert(key, movie_key);
        }

        debug!(set = name, movies = self.movies.len(), "loaded movie fixtures");

        Ok(self)
    }

    /// Load a screening schedule from a YAML fixture file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, if a start time is malformed,
    /// or if a screening names a movie that has not been loaded.
    pub fn load_screenings(&mut self, name: &str) -> Result<&mut Self, FixtureError> {
        let file_path = self
            .base_path
            .join("screenings")
            .join(format!("{name}.yml"));

        let contents = fs::read_to_string(&file_path)?;
        let fixture: ScreeningsFixture = serde_norway::from_str(&contents)?;

        for screening_fixture in fixture.screenings {
            let movie = self.movie_key(&screening_fixture.movie)?;
            let start_time = screening_fixture.start_time()?;

            self.schedule.push(ScheduledScreening {
                movie,
                sequence: screening_fixture.sequence,
                start_time,
            });
        }

        debug!(
            set = name,
            screenings = self.schedule.len(),
            "loaded screening fixtures"
        );

        Ok(self)
    }

    /// Load a complete fixture set (movies and screenings with the same name)
    ///
    /// # Errors
    ///
    /// Returns an error if any of the fixture files cannot be loaded.
    pub fn from_set(name: &str) -> Result<Self, FixtureError> {
        let mut fixture = Self::new();

        fixture.load_movies(name)?.load_screenings(name)?;

        Ok(fixture)
    }

    /// Get a movie by its string key
    ///
    /// # Errors
    ///
    /// Returns an error if the movie is not found.
    pub fn movie(&self, key: &str) -> Result<&Movie<'static>, FixtureError> {
        let movie_key = self.movie_key(key)?;

        self.movies
            .get(movie_key)
            .ok_or_else(|| FixtureError::MovieNotFound(key.to_string()))
    }

    /// Get a movie key by its string key
    ///
    /// # Errors
    ///
    /// Returns an error if the movie is not found.
    pub fn movie_key(&self, key: &str) -> Result<MovieKey, FixtureError> {
        self.movie_keys
            .get(key)
            .copied()
            .ok_or_else(|| FixtureError::MovieNotFound(key.to_string()))
    }

    /// Get the loaded movies `SlotMap`
    pub fn movies(&self) -> &SlotMap<MovieKey, Movie<'static>> {
        &self.movies
    }

    /// Build the loaded schedule's screenings, in file order.
    ///
    /// # Errors
    ///
    /// Returns an error if a scheduled movie is no longer present.
    pub fn screenings(&self) -> Result<Vec<Screening<'_>>, FixtureError> {
        self.schedule
            .iter()
            .map(|scheduled| {
                let movie = self
                    .movies
                    .get(scheduled.movie)
                    .ok_or_else(|| FixtureError::MovieNotFound(format!("{:?}", scheduled.movie)))?;

                Ok(Screening::new(movie, scheduled.sequence, scheduled.start_time))
            })
            .collect()
    }

    /// Get the currency
    ///
    /// # Errors
    ///
    /// Returns an error if no movies have been loaded yet.
    pub fn currency(&self) -> Result<&'static Currency, FixtureError> {
        self.currency.ok_or(FixtureError::NoCurrency)
    }
}

impl Default for Fixture {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::{fs, path::Path};

    use rusty_money::{Money, iso::KRW};
    use testresult::TestResult;

    use crate::policies::DiscountPolicy;

    use super::*;

    fn write_fixture(base: &Path, category: &str, name: &str, contents: &str) -> TestResult {
        let dir = base.join(category);

        fs::create_dir_all(&dir)?;
        fs::write(dir.join(format!("{name}.yml")), contents)?;

        Ok(())
    }

    #[test]
    fn fixture_loads_movies_and_screenings() -> TestResult {
        let mut fixture = Fixture::new();

        fixture.load_movies("weekly")?.load_screenings("weekly")?;

        assert_eq!(fixture.movie_keys.len(), 3);
        assert_eq!(fixture.schedule.len(), 7);
        assert_eq!(fixture.currency()?, KRW);

        let avatar = fixture.movie("avatar")?;

        assert_eq!(avatar.title(), "Avatar");
        assert_eq!(avatar.fee(), Money::from_minor(10_000, KRW));
        assert!(matches!(avatar.policy(), DiscountPolicy::Amount(_)));

        Ok(())
    }

    #[test]
    fn fixture_from_set_loads_all_fixtures() -> TestResult {
        let fixture = Fixture::from_set("weekly")?;

        assert_eq!(fixture.movies().len(), 3);
        assert_eq!(fixture.screenings()?.len(), 7);

        Ok(())
    }

    #[test]
    fn screenings_keep_file_order_and_borrow_movies() -> TestResult {
        let fixture = Fixture::from_set("weekly")?;
        let screenings = fixture.screenings()?;

        let titles: Vec<_> = screenings
            .iter()
            .map(|screening| screening.movie().title())
            .collect();

        assert_eq!(
            titles,
            [
                "Avatar",
                "Avatar",
                "Avatar",
                "Titanic",
                "Titanic",
                "Titanic",
                "Star Wars"
            ]
        );

        let sequences: Vec<_> = screenings.iter().map(Screening::sequence).collect();

        assert_eq!(sequences, [1, 2, 3, 2, 4, 5, 1]);

        Ok(())
    }

    #[test]
    fn fixture_movie_not_found_returns_error() {
        let fixture = Fixture::new();

        assert!(matches!(
            fixture.movie("nonexistent"),
            Err(FixtureError::MovieNotFound(_))
        ));
        assert!(matches!(
            fixture.movie_key("nonexistent"),
            Err(FixtureError::MovieNotFound(_))
        ));
    }

    #[test]
    fn fixture_no_currency_returns_error() {
        let fixture = Fixture::new();

        assert!(matches!(fixture.currency(), Err(FixtureError::NoCurrency)));
    }

    #[test]
    fn fixture_missing_file_returns_io_error() {
        let mut fixture = Fixture::new();

        assert!(matches!(
            fixture.load_movies("does-not-exist"),
            Err(FixtureError::Io(_))
        ));
    }

    #[test]
    fn screenings_require_loaded_movies() -> TestResult {
        let mut fixture = Fixture::new();

        let result = fixture.load_screenings("weekly");

        assert!(matches!(result, Err(FixtureError::MovieNotFound(_))));

        Ok(())
    }

    #[test]
    fn fixture_load_movies_rejects_currency_mismatch() -> TestResult {
        let base_path = tempfile::tempdir()?;

        write_fixture(
            base_path.path(),
            "movies",
            "usd_set",
            "movies:\n  heat:\n    title: Heat\n    running_time: 170\n    fee: 12.50 USD\n",
        )?;

        write_fixture(
            base_path.path(),
            "movies",
            "krw_set",
            "movies:\n  mother:\n    title: Mother\n    running_time: 129\n    fee: 9000 KRW\n",
        )?;

        let mut fixture = Fixture::with_base_path(base_path.path());

        fixture.load_movies("usd_set")?;

        let result = fixture.load_movies("krw_set");

        assert!(matches!(result, Err(FixtureError::CurrencyMismatch(_, _))));

        Ok(())
    }

    #[test]
    fn fixture_load_movies_surfaces_movie_errors() -> TestResult {
        let base_path = tempfile::tempdir()?;

        write_fixture(
            base_path.path(),
            "movies",
            "generous",
            r"
movies:
  cheap:
    title: Cheap
    running_time: 90
    fee: 1000 KRW
    policy:
      type: amount
      value: 5000 KRW
      conditions:
        - type: sequence
          sequence: 1
",
        )?;

        let mut fixture = Fixture::with_base_path(base_path.path());

        let result = fixture.load_movies("generous");

        assert!(matches!(
            result,
            Err(FixtureError::Movie(MovieError::DiscountExceedsFee { .. }))
        ));

        Ok(())
    }

    #[test]
    fn fixture_load_movies_surfaces_policy_errors() -> TestResult {
        let base_path = tempfile::tempdir()?;

        write_fixture(
            base_path.path(),
            "movies",
            "unconditional",
            r"
movies:
  always:
    title: Always
    running_time: 90
    fee: 1000 KRW
    policy:
      type: percent
      value: 0.5
",
        )?;

        let mut fixture = Fixture::with_base_path(base_path.path());

        let result = fixture.load_movies("unconditional");

        assert!(matches!(
            result,
            Err(FixtureError::Policy(PolicyError::NoConditions))
        ));

        Ok(())
    }

    #[test]
    fn fixture_default_matches_new() {
        let fixture = Fixture::default();

        assert_eq!(fixture.base_path, PathBuf::from("./fixtures"));
        assert!(fixture.movies.is_empty());
        assert!(fixture.schedule.is_empty());
    }
}
