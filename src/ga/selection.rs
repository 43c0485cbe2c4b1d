//! Parent selection.
//!
//! Both operators return an index; the caller clones the winner, so a
//! selected parent is always an independent value.
//!
//! # References
//!
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"
//! - Deb et al. (2002), crowded-comparison operator of NSGA-II

use std::cmp::Ordering;

use rand::seq::index::sample;
use rand::Rng;

use super::Individual;
use crate::evaluator::Cost;

/// Tournament selection without replacement.
///
/// Draws `min(k, n)` distinct individuals uniformly and returns the index
/// of the lowest-cost one. Ties go to the first drawn.
///
/// Higher `k` = stronger selection pressure.
///
/// # Panics
/// Panics if `population` is empty.
pub fn tournament<R: Rng>(population: &[Individual<Cost>], k: usize, rng: &mut R) -> usize {
    assert!(
        !population.is_empty(),
        "cannot select from empty population"
    );

    let n = population.len();
    let k = k.clamp(1, n);

    let mut contenders = sample(rng, n, k).into_iter();
    let mut best_idx = contenders.next().expect("k >= 1");
    for idx in contenders {
        if population[idx].score() < population[best_idx].score() {
            best_idx = idx;
        }
    }
    best_idx
}

/// Crowded binary tournament.
///
/// Draws two distinct indices; the lower rank wins, and on equal rank the
/// larger crowding distance wins. A full tie goes to the second pick.
///
/// # Panics
/// Panics if the slices are empty or have different lengths.
pub fn crowded_tournament<R: Rng>(ranks: &[usize], distances: &[f64], rng: &mut R) -> usize {
    assert_eq!(ranks.len(), distances.len(), "ranks and distances must align");
    assert!(!ranks.is_empty(), "cannot select from empty population");

    if ranks.len() == 1 {
        return 0;
    }

    let pair = sample(rng, ranks.len(), 2);
    let (a, b) = (pair.index(0), pair.index(1));
    match crowded_cmp(ranks[a], distances[a], ranks[b], distances[b]) {
        Ordering::Less => a,
        _ => b,
    }
}

/// Crowded-comparison order: `Less` means the first solution is preferred.
pub fn crowded_cmp(rank_a: usize, dist_a: f64, rank_b: usize, dist_b: f64) -> Ordering {
    rank_a.cmp(&rank_b).then_with(|| {
        // Larger distance is better, so compare in reverse
        dist_b.partial_cmp(&dist_a).unwrap_or(Ordering::Equal)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::reference_catalog;
    use crate::evaluator::{Evaluator, ScoringConfig};
    use crate::ga::Genome;
    use crate::models::Catalog;
    use crate::random::create_rng;

    fn population(catalog: &Catalog, labels: &[[&str; 6]]) -> Vec<Individual<Cost>> {
        let ev = Evaluator::new(catalog, ScoringConfig::default()).unwrap();
        labels
            .iter()
            .map(|l| Individual::new(Genome::from_labels(catalog, l).unwrap(), &ev))
            .collect()
    }

    fn sample_population(catalog: &Catalog) -> Vec<Individual<Cost>> {
        population(
            catalog,
            &[
                ["H1", "H1", "H2", "H3", "H5", "H2"], // 1000
                ["H2", "H4", "H2", "H4", "H5", "H2"], // 3 + 1000 (H2 x3)
                ["H1", "H3", "H2", "H3", "H5", "H2"], // 0
                ["H1", "H1", "H2", "H2", "H5", "H5"], // 3000 + 0
            ],
        )
    }

    // ---- Tournament ----

    #[test]
    fn test_tournament_full_size_always_best() {
        let catalog = reference_catalog().unwrap();
        let pop = sample_population(&catalog);
        let mut rng = create_rng(42);

        // Without replacement, k = n sees everyone
        for _ in 0..200 {
            assert_eq!(tournament(&pop, 4, &mut rng), 2);
        }
    }

    #[test]
    fn test_tournament_oversized_k_is_clamped() {
        let catalog = reference_catalog().unwrap();
        let pop = sample_population(&catalog);
        let mut rng = create_rng(42);
        assert_eq!(tournament(&pop, 100, &mut rng), 2);
    }

    #[test]
    fn test_tournament_size_1_is_random() {
        let catalog = reference_catalog().unwrap();
        let pop = sample_population(&catalog);
        let mut rng = create_rng(42);

        let mut counts = [0u32; 4];
        let n = 10000;
        for _ in 0..n {
            counts[tournament(&pop, 1, &mut rng)] += 1;
        }
        for &c in &counts {
            assert!(c > 1500, "expected uniform, got counts: {counts:?}");
        }
    }

    #[test]
    fn test_tournament_favors_best() {
        let catalog = reference_catalog().unwrap();
        let pop = sample_population(&catalog);
        let mut rng = create_rng(42);

        let mut counts = [0u32; 4];
        let n = 10000;
        for _ in 0..n {
            counts[tournament(&pop, 3, &mut rng)] += 1;
        }
        // Best is in 3 of 4 possible triples
        assert!(counts[2] > 6500, "best picked {}/{n}", counts[2]);
        // Worst can never win a 3-of-4 tournament
        assert_eq!(counts[3], 0);
    }

    #[test]
    #[should_panic(expected = "cannot select from empty population")]
    fn test_empty_population_panics() {
        let pop: Vec<Individual<Cost>> = vec![];
        let mut rng = create_rng(42);
        tournament(&pop, 3, &mut rng);
    }

    // ---- Crowded tournament ----

    #[test]
    fn test_crowded_cmp() {
        assert_eq!(crowded_cmp(0, 0.5, 1, 9.0), Ordering::Less);
        assert_eq!(crowded_cmp(2, 9.0, 1, 0.0), Ordering::Greater);
        assert_eq!(crowded_cmp(1, 2.0, 1, 1.0), Ordering::Less);
        assert_eq!(crowded_cmp(1, f64::INFINITY, 1, 3.0), Ordering::Less);
        assert_eq!(crowded_cmp(1, 1.0, 1, 1.0), Ordering::Equal);
    }

    #[test]
    fn test_crowded_tournament_prefers_rank_then_distance() {
        let mut rng = create_rng(42);
        let ranks = [0, 1];
        let dists = [0.0, f64::INFINITY];
        for _ in 0..100 {
            assert_eq!(crowded_tournament(&ranks, &dists, &mut rng), 0);
        }

        let ranks = [3, 3];
        let dists = [0.2, 0.7];
        for _ in 0..100 {
            assert_eq!(crowded_tournament(&ranks, &dists, &mut rng), 1);
        }
    }

    #[test]
    fn test_crowded_tournament_worst_never_wins() {
        let mut rng = create_rng(3);
        let ranks = [0, 0, 1, 2];
        let dists = [f64::INFINITY, 1.0, f64::INFINITY, f64::INFINITY];
        for _ in 0..1000 {
            assert_ne!(crowded_tournament(&ranks, &dists, &mut rng), 3);
        }
    }

    #[test]
    fn test_crowded_tournament_single() {
        let mut rng = create_rng(42);
        assert_eq!(crowded_tournament(&[0], &[1.0], &mut rng), 0);
    }
}
