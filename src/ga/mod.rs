//! Genetic Algorithm framework.
//!
//! A generic, domain-agnostic single-pass GA built on a trait-based
//! abstraction. Users define their problem by implementing [`GaProblem`],
//! which specifies how to create and evaluate individuals.
//!
//! Populations and their fitness values are kept as two index-aligned
//! vectors. All randomness flows through one explicitly passed RNG, so a
//! seeded run is fully reproducible.
//!
//! # Core Traits
//!
//! - [`Fitness`]: Comparable, copyable score (lower is better)
//! - [`GaProblem`]: Problem definition: initialization and evaluation
//!
//! # Key Types
//!
//! - [`GaConfig`]: Pass parameters (population size, tournament size, seed)
//! - [`GaRunner`]: Executes initialization → evaluation → selection
//! - [`GaResult`]: Initial and selected populations with their scores
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*
//! - Miller & Goldberg (1995), "Genetic Algorithms, Tournament Selection, and
//!   the Effects of Noise"

mod config;
mod runner;
mod selection;
mod types;

pub use config::GaConfig;
pub use runner::{create_rng, evaluate_population, GaResult, GaRunner, PopulationStats};
pub use selection::tournament_select;
pub use types::{Fitness, GaProblem};
