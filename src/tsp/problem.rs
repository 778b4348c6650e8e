//! [`GaProblem`] implementation for the symmetric TSP.

use super::fitness::tour_cost;
use super::matrix::DistanceMatrix;
use super::tour::{random_tour, Tour};
use crate::ga::GaProblem;
use rand::Rng;

/// Symmetric TSP over a fixed distance matrix.
///
/// Individuals are random [`Tour`]s; fitness is the closed tour length.
#[derive(Debug, Clone)]
pub struct TspProblem {
    matrix: DistanceMatrix,
}

impl TspProblem {
    /// Creates a problem over `matrix`.
    pub fn new(matrix: DistanceMatrix) -> Self {
        Self { matrix }
    }

    /// The distance matrix.
    pub fn matrix(&self) -> &DistanceMatrix {
        &self.matrix
    }
}

impl GaProblem for TspProblem {
    type Individual = Tour;
    type Fitness = u64;

    fn create_individual<R: Rng>(&self, rng: &mut R) -> Tour {
        random_tour(self.matrix.len(), rng)
    }

    fn evaluate(&self, tour: &Tour) -> u64 {
        tour_cost(&self.matrix, tour)
    }
}
