//! Symmetric Traveling Salesman Problem.
//!
//! - [`DistanceMatrix`]: symmetric integer distances, loaded from text
//! - [`Tour`], [`random_tour`], [`generate_population`]: random permutations
//! - [`tour_cost`]: closed tour length
//! - [`TspProblem`]: plugs the above into the [`ga`](crate::ga) runner

mod fitness;
mod matrix;
mod problem;
mod tour;

pub use fitness::tour_cost;
pub use matrix::DistanceMatrix;
pub use problem::TspProblem;
pub use tour::{generate_population, random_tour, shuffle, Tour};
