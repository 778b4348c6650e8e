//! Core trait definitions for the GA framework.
//!
//! [`GaProblem`] is the contract between the generic single-pass engine and
//! a domain-specific problem. Fitness values are kept in a separate `Vec`
//! that stays index-aligned with the population, so individuals themselves
//! carry no score.

use rand::Rng;

/// Marker trait for fitness values.
///
/// Fitness must support comparison and be cheaply copyable.
/// Lower fitness is considered better (minimization).
///
/// Built-in implementations exist for `u64`, `u32` and `f64`.
pub trait Fitness: PartialOrd + Copy + Send + Sync + std::fmt::Debug + 'static {
    /// Converts the fitness to `f64` for logging and statistics.
    fn to_f64(self) -> f64;
}

impl Fitness for u64 {
    fn to_f64(self) -> f64 {
        self as f64
    }
}

impl Fitness for u32 {
    fn to_f64(self) -> f64 {
        self as f64
    }
}

impl Fitness for f64 {
    fn to_f64(self) -> f64 {
        self
    }
}

/// Defines a GA optimization problem.
///
/// Implementors supply:
///
/// 1. **Initialization**: how to create a random individual
/// 2. **Evaluation**: how to compute its fitness
///
/// # Thread Safety
///
/// `GaProblem` must be `Send + Sync` because the runner may evaluate
/// individuals in parallel using rayon (feature `parallel`).
///
/// # Implementing
///
/// ```
/// use rand::Rng;
/// use tsp_tournament::ga::GaProblem;
///
/// struct Dice;
///
/// impl GaProblem for Dice {
///     type Individual = u8;
///     type Fitness = u32;
///
///     fn create_individual<R: Rng>(&self, rng: &mut R) -> u8 {
///         rng.random_range(1..=6)
///     }
///
///     fn evaluate(&self, face: &u8) -> u32 {
///         u32::from(*face)
///     }
/// }
/// ```
pub trait GaProblem: Send + Sync {
    /// The individual (solution) type for this problem.
    ///
    /// Selection may place the same individual in the output several
    /// times, so `clone` should be cheap.
    type Individual: Clone + Send + Sync;

    /// The fitness type. Lower is better.
    type Fitness: Fitness;

    /// Creates a random individual.
    ///
    /// Called during population initialization, once per slot, with the
    /// run's single RNG stream.
    fn create_individual<R: Rng>(&self, rng: &mut R) -> Self::Individual;

    /// Evaluates an individual and returns its fitness.
    ///
    /// Must be pure: the runner may call this in parallel across the
    /// population.
    fn evaluate(&self, individual: &Self::Individual) -> Self::Fitness;
}
