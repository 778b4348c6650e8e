//! Single-pass GA execution.
//!
//! [`GaRunner`] performs one evolutionary pass:
//! initialization → evaluation → tournament selection.

use super::config::GaConfig;
use super::selection::tournament_select;
use super::types::{Fitness, GaProblem};
use crate::error::EvoResult;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Summary statistics over one score vector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PopulationStats<F: Fitness> {
    /// Lowest (best) score.
    pub best: F,
    /// Highest (worst) score.
    pub worst: F,
    /// Arithmetic mean of all scores.
    pub mean: f64,
}

impl<F: Fitness> PopulationStats<F> {
    /// Computes statistics for `scores`, or `None` if it is empty.
    pub fn from_scores(scores: &[F]) -> Option<Self> {
        let (&first, rest) = scores.split_first()?;
        let (mut best, mut worst, mut total) = (first, first, first.to_f64());
        for &s in rest {
            if s < best {
                best = s;
            }
            if s > worst {
                worst = s;
            }
            total += s.to_f64();
        }
        Some(Self {
            best,
            worst,
            mean: total / scores.len() as f64,
        })
    }
}

/// Result of a GA pass.
///
/// Holds both the initial population and the selected one, each with its
/// index-aligned scores, plus the seed that reproduces the run.
#[derive(Debug, Clone)]
pub struct GaResult<I, F: Fitness> {
    /// Seed the run's RNG was created from.
    ///
    /// `None` when the caller supplied the RNG through
    /// [`GaRunner::run_with_rng`].
    pub seed: Option<u64>,

    /// Initial random population.
    pub population: Vec<I>,

    /// Fitness of each individual in `population`.
    pub scores: Vec<F>,

    /// Population produced by tournament selection.
    pub selected: Vec<I>,

    /// Fitness of each individual in `selected`.
    pub selected_scores: Vec<F>,
}

impl<I, F: Fitness> GaResult<I, F> {
    /// Lowest score in the initial population.
    pub fn initial_best(&self) -> Option<F> {
        self.initial_stats().map(|s| s.best)
    }

    /// Lowest score in the selected population.
    pub fn selected_best(&self) -> Option<F> {
        self.selected_stats().map(|s| s.best)
    }

    /// Sum of the initial scores.
    pub fn initial_sum(&self) -> F
    where
        F: std::iter::Sum<F>,
    {
        self.scores.iter().copied().sum()
    }

    /// Sum of the selected scores.
    pub fn selected_sum(&self) -> F
    where
        F: std::iter::Sum<F>,
    {
        self.selected_scores.iter().copied().sum()
    }

    /// Mean of the initial scores.
    pub fn initial_mean(&self) -> Option<f64> {
        self.initial_stats().map(|s| s.mean)
    }

    /// Mean of the selected scores.
    pub fn selected_mean(&self) -> Option<f64> {
        self.selected_stats().map(|s| s.mean)
    }

    /// Statistics of the initial population.
    pub fn initial_stats(&self) -> Option<PopulationStats<F>> {
        PopulationStats::from_scores(&self.scores)
    }

    /// Statistics of the selected population.
    pub fn selected_stats(&self) -> Option<PopulationStats<F>> {
        PopulationStats::from_scores(&self.selected_scores)
    }

    /// Best selected individual and its fitness.
    pub fn best(&self) -> Option<(&I, F)> {
        let mut best: Option<(&I, F)> = None;
        for (ind, &score) in self.selected.iter().zip(&self.selected_scores) {
            if best.map_or(true, |(_, b)| score < b) {
                best = Some((ind, score));
            }
        }
        best
    }
}

/// Executes a GA pass.
///
/// # Usage
///
/// ```ignore
/// let problem = MyProblem::new();
/// let config = GaConfig::default().with_seed(42);
/// let result = GaRunner::run(&problem, &config)?;
/// println!("Best selected: {:?}", result.selected_stats());
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs one pass with an RNG seeded from `config.seed`.
    ///
    /// A missing seed is drawn from the thread RNG and recorded in
    /// [`GaResult::seed`].
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn run<P: GaProblem>(
        problem: &P,
        config: &GaConfig,
    ) -> EvoResult<GaResult<P::Individual, P::Fitness>> {
        let seed = config.seed.unwrap_or_else(rand::random::<u64>);
        let mut rng = create_rng(seed);
        log::info!(
            "GA pass: population_size={}, tournament_size={}, seed={}",
            config.population_size,
            config.tournament_size,
            seed
        );

        let mut result = Self::run_with_rng(problem, config, &mut rng)?;
        result.seed = Some(seed);
        Ok(result)
    }

    /// Runs one pass drawing from a caller-supplied RNG.
    ///
    /// The RNG is used strictly sequentially: first for population
    /// creation, then for selection. Evaluation consumes no randomness.
    /// [`GaResult::seed`] is `None`.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn run_with_rng<P: GaProblem, R: Rng>(
        problem: &P,
        config: &GaConfig,
        rng: &mut R,
    ) -> EvoResult<GaResult<P::Individual, P::Fitness>> {
        config.validate()?;

        // 1. Initialize population
        let population: Vec<P::Individual> = (0..config.population_size)
            .map(|_| problem.create_individual(rng))
            .collect();

        // 2. Evaluate
        let scores = evaluate_population(problem, &population, config.parallel);
        if let Some(stats) = PopulationStats::from_scores(&scores) {
            log::info!(
                "initial population: best={:?}, worst={:?}, mean={:.2}",
                stats.best,
                stats.worst,
                stats.mean
            );
        }

        // 3. Select
        let (selected, selected_scores) = tournament_select(
            &population,
            &scores,
            config.population_size,
            config.tournament_size,
            rng,
        )?;
        if let Some(stats) = PopulationStats::from_scores(&selected_scores) {
            log::info!(
                "selected population: best={:?}, worst={:?}, mean={:.2}",
                stats.best,
                stats.worst,
                stats.mean
            );
        }

        Ok(GaResult {
            seed: None,
            population,
            scores,
            selected,
            selected_scores,
        })
    }
}

/// Creates the run's RNG from a seed.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Evaluates every individual, returning scores in population order.
///
/// With the `parallel` feature and `parallel == true`, evaluation is
/// spread over the rayon thread pool; otherwise it runs sequentially.
pub fn evaluate_population<P: GaProblem>(
    problem: &P,
    population: &[P::Individual],
    parallel: bool,
) -> Vec<P::Fitness> {
    #[cfg(feature = "parallel")]
    if parallel {
        return population.par_iter().map(|ind| problem.evaluate(ind)).collect();
    }
    #[cfg(not(feature = "parallel"))]
    if parallel {
        log::debug!("parallel evaluation requested without the `parallel` feature");
    }

    population.iter().map(|ind| problem.evaluate(ind)).collect()
}

// ============================================================================
// Tests
// ============================================================================
