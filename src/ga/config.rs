//! GA configuration.
//!
//! [`GaConfig`] holds the parameters of a single selection pass.

use crate::error::{EvoError, EvoResult};

/// Configuration for one population → evaluation → selection pass.
///
/// # Defaults
///
/// ```
/// use tsp_tournament::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 100);
/// assert_eq!(config.tournament_size, 3);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use tsp_tournament::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(200)
///     .with_tournament_size(5)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GaConfig {
    /// Number of individuals in the population, and in the selected output.
    pub population_size: usize,

    /// Number of contenders drawn after the initial one in each tournament.
    ///
    /// Higher values mean stronger selection pressure.
    /// - 1: light pressure
    /// - 2-4: moderate pressure (typical)
    /// - larger: strong pressure
    pub tournament_size: usize,

    /// Whether to evaluate individuals in parallel using rayon.
    ///
    /// Only takes effect with the `parallel` cargo feature. Results are
    /// identical either way.
    pub parallel: bool,

    /// Random seed for reproducibility.
    ///
    /// `None` draws a fresh seed, which is reported in the result.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            tournament_size: 3,
            parallel: false,
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the tournament size.
    pub fn with_tournament_size(mut self, k: usize) -> Self {
        self.tournament_size = k;
        self
    }

    /// Enables or disables parallel evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// A `tournament_size` larger than `population_size` is accepted
    /// (draws are with replacement) but logged.
    ///
    /// # Errors
    ///
    /// Returns [`EvoError::InvalidArgument`] if either size is zero.
    pub fn validate(&self) -> EvoResult<()> {
        if self.population_size == 0 {
            return Err(EvoError::invalid_argument(
                "population_size must be at least 1",
            ));
        }
        if self.tournament_size == 0 {
            return Err(EvoError::invalid_argument(
                "tournament_size must be at least 1",
            ));
        }
        if self.tournament_size > self.population_size {
            log::warn!(
                "tournament_size {} exceeds population_size {}",
                self.tournament_size,
                self.population_size
            );
        }
        Ok(())
    }
}
