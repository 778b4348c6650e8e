//! Tour length.

use super::matrix::DistanceMatrix;

/// Total length of the closed cycle visiting `tour` in order and returning
/// to its first city.
///
/// Tours with fewer than two cities have length 0.
///
/// # Panics
/// Panics if `tour` references a city outside the matrix.
///
/// # Examples
///
/// ```
/// use tsp_tournament::tsp::{tour_cost, DistanceMatrix};
///
/// let m = DistanceMatrix::from_rows(vec![vec![0, 2, 9], vec![2, 0, 6], vec![9, 6, 0]]).unwrap();
/// assert_eq!(tour_cost(&m, &[0, 1, 2]), 17);
/// assert_eq!(tour_cost(&m, &[0, 2, 1]), 17);
/// ```
pub fn tour_cost(matrix: &DistanceMatrix, tour: &[usize]) -> u64 {
    let n = tour.len();
    if n < 2 {
        return 0;
    }
    let open: u64 = tour.windows(2).map(|w| matrix.dist(w[1], w[0])).sum();
    open + matrix.dist(tour[0], tour[n - 1])
}
