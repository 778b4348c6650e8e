//! Property tests for tours, tour length, and tournament selection.

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tsp_tournament::ga::tournament_select;
use tsp_tournament::tsp::{random_tour, tour_cost, DistanceMatrix};

/// Random symmetric matrix given as a lower triangle.
fn matrix_strategy(max_n: usize) -> impl Strategy<Value = DistanceMatrix> {
    (1..=max_n).prop_flat_map(|n| {
        proptest::collection::vec(0u64..1000, n * (n + 1) / 2).prop_map(move |flat| {
            let mut rows: Vec<Vec<u64>> = Vec::with_capacity(n);
            let mut it = flat.into_iter();
            for i in 0..n {
                rows.push(it.by_ref().take(i + 1).collect());
            }
            DistanceMatrix::from_rows(rows).expect("lower triangle is valid")
        })
    })
}

proptest! {
    #[test]
    fn random_tour_is_permutation(n in 0usize..64, seed in any::<u64>()) {
        let tour = random_tour(n, &mut StdRng::seed_from_u64(seed));
        prop_assert_eq!(tour.len(), n);
        let mut sorted = tour.to_vec();
        sorted.sort_unstable();
        prop_assert_eq!(sorted, (0..n).collect::<Vec<_>>());
    }

    #[test]
    fn cost_invariant_under_reversal(m in matrix_strategy(12), seed in any::<u64>()) {
        let tour = random_tour(m.len(), &mut StdRng::seed_from_u64(seed));
        let mut reversed = tour.to_vec();
        reversed.reverse();
        prop_assert_eq!(tour_cost(&m, &tour), tour_cost(&m, &reversed));
    }

    #[test]
    fn cost_invariant_under_rotation(
        m in matrix_strategy(12),
        seed in any::<u64>(),
        k in 0usize..32,
    ) {
        let tour = random_tour(m.len(), &mut StdRng::seed_from_u64(seed));
        let mut rotated = tour.to_vec();
        rotated.rotate_left(k % tour.len());
        prop_assert_eq!(tour_cost(&m, &tour), tour_cost(&m, &rotated));
    }

    #[test]
    fn cost_matches_edge_sum(m in matrix_strategy(12), seed in any::<u64>()) {
        let tour = random_tour(m.len(), &mut StdRng::seed_from_u64(seed));
        let n = tour.len();
        let expected: u64 = if n < 2 {
            0
        } else {
            (0..n).map(|i| m.dist(tour[i], tour[(i + 1) % n])).sum()
        };
        prop_assert_eq!(tour_cost(&m, &tour), expected);
    }

    #[test]
    fn selection_preserves_size_and_alignment(
        scores in proptest::collection::vec(0u64..500, 1..60),
        tournament_size in 0usize..20,
        seed in any::<u64>(),
    ) {
        let population: Vec<usize> = (0..scores.len()).collect();
        let mut rng = StdRng::seed_from_u64(seed);
        let (selected, selected_scores) = tournament_select(
            &population, &scores, scores.len(), tournament_size, &mut rng,
        ).unwrap();

        prop_assert_eq!(selected.len(), scores.len());
        prop_assert_eq!(selected_scores.len(), scores.len());
        for (&idx, &score) in selected.iter().zip(&selected_scores) {
            prop_assert_eq!(scores[idx], score);
        }
    }

    #[test]
    fn selection_never_beats_input_best(
        scores in proptest::collection::vec(0u64..500, 1..60),
        tournament_size in 0usize..20,
        seed in any::<u64>(),
    ) {
        let population: Vec<usize> = (0..scores.len()).collect();
        let mut rng = StdRng::seed_from_u64(seed);
        let (_, selected_scores) = tournament_select(
            &population, &scores, scores.len(), tournament_size, &mut rng,
        ).unwrap();

        let input_best = scores.iter().min().unwrap();
        let input_worst = scores.iter().max().unwrap();
        prop_assert!(selected_scores.iter().all(|s| s >= input_best && s <= input_worst));
    }
}
