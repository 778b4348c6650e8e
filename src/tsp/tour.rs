//! Tours and random tour generation.

use rand::Rng;
use std::ops::Deref;
use std::sync::Arc;

/// A closed tour: a permutation of the city indices `0..n`.
///
/// Tours are immutable once created. Cloning shares the underlying
/// storage, so selection can place the same tour in a population many
/// times without copying it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Tour(Arc<[usize]>);

impl Tour {
    /// Wraps a city sequence.
    ///
    /// The caller is responsible for `cities` being a permutation of
    /// `0..cities.len()`; see [`is_permutation`](Self::is_permutation).
    pub fn new(cities: Vec<usize>) -> Self {
        Self(cities.into())
    }

    /// City indices in visiting order.
    pub fn cities(&self) -> &[usize] {
        &self.0
    }

    /// Whether this tour visits each of `0..len` exactly once.
    pub fn is_permutation(&self) -> bool {
        let mut seen = vec![false; self.0.len()];
        for &c in self.0.iter() {
            match seen.get_mut(c) {
                Some(s) if !*s => *s = true,
                _ => return false,
            }
        }
        true
    }

    /// Whether two tours share the same storage.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Deref for Tour {
    type Target = [usize];

    fn deref(&self) -> &[usize] {
        &self.0
    }
}

/// Shuffles `items` in place, uniformly over all orderings.
///
/// Fisher–Yates: for each position `i`, swap it with a position drawn
/// uniformly from `i..len`.
///
/// # Complexity
/// O(n) time, O(1) extra space
pub fn shuffle<T, R: Rng>(items: &mut [T], rng: &mut R) {
    let n = items.len();
    for i in 0..n {
        let r = rng.random_range(i..n);
        items.swap(i, r);
    }
}

/// Returns a uniformly random permutation of `0..n`.
///
/// # Examples
///
/// ```
/// use rand::{rngs::StdRng, SeedableRng};
/// use tsp_tournament::tsp::random_tour;
///
/// let mut rng = StdRng::seed_from_u64(42);
/// let tour = random_tour(5, &mut rng);
/// assert_eq!(tour.len(), 5);
/// assert!(tour.is_permutation());
/// ```
pub fn random_tour<R: Rng>(n: usize, rng: &mut R) -> Tour {
    let mut cities: Vec<usize> = (0..n).collect();
    shuffle(&mut cities, rng);
    Tour::new(cities)
}

/// Creates `count` random tours over `n` cities, in generation order.
///
/// Draws from `rng` sequentially, one shuffle per tour.
pub fn generate_population<R: Rng>(count: usize, n: usize, rng: &mut R) -> Vec<Tour> {
    (0..count).map(|_| random_tour(n, rng)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashMap;

    #[test]
    fn test_small_tours() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(random_tour(0, &mut rng).is_empty());
        assert_eq!(random_tour(1, &mut rng).cities(), &[0]);
    }

    #[test]
    fn test_random_tour_is_permutation() {
        let mut rng = StdRng::seed_from_u64(42);
        for n in 0..50 {
            let tour = random_tour(n, &mut rng);
            assert_eq!(tour.len(), n);
            assert!(tour.is_permutation(), "not a permutation: {tour:?}");
        }
    }

    #[test]
    fn test_is_permutation_detects_defects() {
        assert!(Tour::new(vec![2, 0, 1]).is_permutation());
        assert!(!Tour::new(vec![0, 0, 1]).is_permutation());
        assert!(!Tour::new(vec![0, 3, 1]).is_permutation());
    }

    #[test]
    fn test_uniformity_chi_square() {
        // 24 permutations of 4 cities; 23 degrees of freedom.
        let mut rng = StdRng::seed_from_u64(2024);
        let trials = 48_000;
        let mut counts: HashMap<Vec<usize>, u32> = HashMap::new();
        for _ in 0..trials {
            *counts.entry(random_tour(4, &mut rng).to_vec()).or_default() += 1;
        }
        assert_eq!(counts.len(), 24);

        let expected = trials as f64 / 24.0;
        let chi2: f64 = counts
            .values()
            .map(|&c| {
                let d = c as f64 - expected;
                d * d / expected
            })
            .sum();
        // Critical value for df = 23 at p = 0.001 is 49.73.
        assert!(chi2 < 49.73, "chi-square {chi2:.2} too large: {counts:?}");
    }

    #[test]
    fn test_generate_population() {
        let mut rng = StdRng::seed_from_u64(7);
        let population = generate_population(25, 8, &mut rng);
        assert_eq!(population.len(), 25);
        for tour in &population {
            assert_eq!(tour.len(), 8);
            assert!(tour.is_permutation());
        }
    }

    #[test]
    fn test_generate_population_is_reproducible() {
        let a = generate_population(10, 6, &mut StdRng::seed_from_u64(99));
        let b = generate_population(10, 6, &mut StdRng::seed_from_u64(99));
        assert_eq!(a, b);
    }

    #[test]
    fn test_population_matches_sequential_tours() {
        let population = generate_population(3, 5, &mut StdRng::seed_from_u64(11));
        let mut rng = StdRng::seed_from_u64(11);
        let sequential: Vec<Tour> = (0..3).map(|_| random_tour(5, &mut rng)).collect();
        assert_eq!(population, sequential);
    }

    #[test]
    fn test_clone_shares_storage() {
        let tour = Tour::new(vec![1, 0, 2]);
        let copy = tour.clone();
        assert!(tour.ptr_eq(&copy));
        assert!(!tour.ptr_eq(&Tour::new(vec![1, 0, 2])));
    }
}
