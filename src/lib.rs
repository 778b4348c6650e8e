//! Evolutionary core for the symmetric Traveling Salesman Problem.
//!
//! Generates a population of random tours, scores each by its closed
//! tour length, and applies one pass of tournament selection to bias the
//! population toward shorter tours.
//!
//! - **[`ga`]**: Generic single-pass GA: problem trait, configuration,
//!   population evaluation, and tournament selection.
//! - **[`tsp`]**: Distance matrix and loader, random tours, tour length, and
//!   the [`TspProblem`](tsp::TspProblem) binding for the GA runner.
//! - **[`config`]**: Typed YAML run configuration.
//! - **[`error`]**: Unified error type.
//!
//! # Example
//!
//! ```
//! use tsp_tournament::ga::{GaConfig, GaRunner};
//! use tsp_tournament::tsp::{DistanceMatrix, TspProblem};
//!
//! let matrix: DistanceMatrix = "4\n0\n3 0\n4 5 0\n5 4 3 0\n".parse().unwrap();
//! let problem = TspProblem::new(matrix);
//! let config = GaConfig::default()
//!     .with_population_size(20)
//!     .with_tournament_size(2)
//!     .with_seed(42);
//!
//! let result = GaRunner::run(&problem, &config).unwrap();
//! assert_eq!(result.selected.len(), 20);
//! ```

pub mod config;
pub mod error;
pub mod ga;
pub mod tsp;

pub use error::{EvoError, EvoResult};
