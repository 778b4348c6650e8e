//! Tournament selection.
//!
//! Builds a new population by running one tournament per output slot. Each
//! tournament draws an initial contender and then `tournament_size` further
//! contenders uniformly at random (with replacement); the lowest score wins.
//!
//! # References
//!
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"
//! - Goldberg & Deb (1991), "A Comparative Analysis of Selection Schemes
//!   Used in Genetic Algorithms"

use super::types::Fitness;
use crate::error::{EvoError, EvoResult};
use rand::Rng;

/// Runs `population_size` tournaments over `population` and returns the
/// winners together with their scores.
///
/// `scores[i]` must be the fitness of `population[i]` (lower is better).
/// The input slices are left untouched; winners are cloned into the output,
/// so the same individual may appear zero, one, or many times.
///
/// Ties keep the contender found first.
///
/// # Errors
///
/// Returns [`EvoError::InvalidArgument`] if `scores` and `population` differ
/// in length, or if `population_size` does not equal that length.
///
/// # Examples
///
/// ```
/// use rand::{rngs::StdRng, SeedableRng};
/// use tsp_tournament::ga::tournament_select;
///
/// let population = vec!["a", "b", "c", "d"];
/// let scores = vec![40u64, 10, 30, 20];
/// let mut rng = StdRng::seed_from_u64(7);
///
/// let (winners, winner_scores) =
///     tournament_select(&population, &scores, 4, 3, &mut rng).unwrap();
/// assert_eq!(winners.len(), 4);
/// assert_eq!(winner_scores.len(), 4);
/// ```
pub fn tournament_select<I, F, R>(
    population: &[I],
    scores: &[F],
    population_size: usize,
    tournament_size: usize,
    rng: &mut R,
) -> EvoResult<(Vec<I>, Vec<F>)>
where
    I: Clone,
    F: Fitness,
    R: Rng,
{
    if population.len() != scores.len() {
        return Err(EvoError::invalid_argument(format!(
            "population has {} individuals but {} scores",
            population.len(),
            scores.len()
        )));
    }
    if population_size != population.len() {
        return Err(EvoError::invalid_argument(format!(
            "population_size is {population_size} but population has {} individuals",
            population.len()
        )));
    }

    let mut selected = Vec::with_capacity(population_size);
    let mut selected_scores = Vec::with_capacity(population_size);
    for _ in 0..population_size {
        let winner = tournament(scores, tournament_size, || {
            rng.random_range(0..population_size)
        });
        selected.push(population[winner].clone());
        selected_scores.push(scores[winner]);
    }

    log::debug!(
        "tournament selection: {} slots, {} extra draws per tournament",
        population_size,
        tournament_size
    );

    Ok((selected, selected_scores))
}

/// Runs a single tournament and returns the winning index.
///
/// `draw` yields contender indices; it is called `1 + extra_draws` times.
/// `scores` must be non-empty and every drawn index in range.
fn tournament<F, D>(scores: &[F], extra_draws: usize, mut draw: D) -> usize
where
    F: Fitness,
    D: FnMut() -> usize,
{
    let mut best_idx = draw();
    for _ in 0..extra_draws {
        let idx = draw();
        if scores[idx] < scores[best_idx] {
            best_idx = idx;
        }
    }
    best_idx
}
