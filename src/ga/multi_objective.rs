//! Pareto utilities for NSGA-II.
//!
//! # Algorithms
//!
//! - [`dominance_cmp`]: three-way Pareto comparison
//! - [`non_dominated_sort`]: Fast non-dominated sorting (Deb et al., 2002)
//! - [`crowding_distance`]: Crowding distance assignment for diversity preservation
//!
//! Domination bookkeeping lives in index arenas (`Vec<Vec<usize>>` lists and
//! `Vec<usize>` counters) local to one sort; individuals never hold
//! references to each other.
//!
//! # References
//!
//! - Deb et al. (2002), "A Fast and Elitist Multiobjective Genetic Algorithm: NSGA-II"
//! - IEEE Transactions on Evolutionary Computation, 6(2), 182-197

use std::cmp::Ordering;

use crate::evaluator::Objectives;

/// Result of non-dominated sorting.
///
/// Each element of `ranks` corresponds to the Pareto rank of the solution
/// at the same index. Rank 0 is the Pareto front (non-dominated solutions).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NondominatedSortResult {
    /// Pareto rank for each solution (0 = front).
    pub ranks: Vec<usize>,

    /// Indices grouped by front: `fronts[0]` contains rank-0 indices, etc.
    pub fronts: Vec<Vec<usize>>,
}

/// Dominance comparison result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dominance {
    /// Left dominates right.
    Left,
    /// Right dominates left.
    Right,
    /// Neither dominates the other.
    Neither,
}

/// Compare two solutions for Pareto dominance (minimization).
///
/// Equal objective vectors do not dominate each other.
pub fn dominance_cmp(a: &Objectives, b: &Objectives) -> Dominance {
    let mut a_better_in_some = false;
    let mut b_better_in_some = false;

    for m in 0..Objectives::COUNT {
        match a.get(m).cmp(&b.get(m)) {
            Ordering::Less => a_better_in_some = true,
            Ordering::Greater => b_better_in_some = true,
            Ordering::Equal => {}
        }
    }

    match (a_better_in_some, b_better_in_some) {
        (true, false) => Dominance::Left,
        (false, true) => Dominance::Right,
        _ => Dominance::Neither,
    }
}

/// Fast non-dominated sorting.
///
/// Assigns a Pareto rank to each solution. Both objectives are minimized.
///
/// # Algorithm (Deb et al., 2002)
///
/// 1. For each pair, record who dominates whom: `dominates[i]` lists the
///    indices `i` dominates, `domination_count[j]` counts those dominating `j`
/// 2. Solutions with a zero count form front 0
/// 3. For each member of the current front, decrement the count of every
///    solution it dominates; those reaching zero form the next front
///
/// Every index lands in exactly one front, and there are at most `n` fronts.
///
/// # Complexity
///
/// O(m * n²) where m = number of objectives, n = number of solutions
///
/// # Example
///
/// ```
/// use u_timetable::evaluator::Objectives;
/// use u_timetable::ga::multi_objective::non_dominated_sort;
///
/// let objectives = [
///     Objectives::new(0, 5),
///     Objectives::new(1, 3),
///     Objectives::new(2, 1),
///     Objectives::new(2, 4), // dominated by (1, 3)
/// ];
///
/// let result = non_dominated_sort(&objectives);
/// assert_eq!(result.ranks, vec![0, 0, 0, 1]);
/// ```
pub fn non_dominated_sort(objectives: &[Objectives]) -> NondominatedSortResult {
    let n = objectives.len();
    if n == 0 {
        return NondominatedSortResult {
            ranks: Vec::new(),
            fronts: Vec::new(),
        };
    }

    let mut domination_count = vec![0usize; n];
    let mut dominates: Vec<Vec<usize>> = vec![Vec::new(); n];
    let mut ranks = vec![0usize; n];

    for i in 0..n {
        for j in (i + 1)..n {
            match dominance_cmp(&objectives[i], &objectives[j]) {
                Dominance::Left => {
                    dominates[i].push(j);
                    domination_count[j] += 1;
                }
                Dominance::Right => {
                    dominates[j].push(i);
                    domination_count[i] += 1;
                }
                Dominance::Neither => {}
            }
        }
    }

    let front_0: Vec<usize> = (0..n).filter(|&i| domination_count[i] == 0).collect();

    let mut fronts = vec![front_0];
    loop {
        let current = fronts.last().expect("fronts is initialized with front_0; never empty");
        let mut next_front = Vec::new();

        for &i in current {
            for &j in &dominates[i] {
                domination_count[j] -= 1;
                if domination_count[j] == 0 {
                    ranks[j] = fronts.len();
                    next_front.push(j);
                }
            }
        }

        if next_front.is_empty() {
            break;
        }
        fronts.push(next_front);
    }

    NondominatedSortResult { ranks, fronts }
}

/// Crowding distance assignment for diversity preservation.
///
/// Computes, within one front, how isolated each solution is in objective
/// space. Higher distance means more isolated, which wins rank ties.
///
/// # Algorithm (Deb et al., 2002)
///
/// For each objective:
/// 1. Sort solutions by objective value
/// 2. Assign infinity to the two boundary solutions
/// 3. For interior solutions, add `(next - prev) / (max - min)`;
///    skip the objective when `max == min`
///
/// Fronts of one or two solutions are all boundary.
///
/// # Complexity
///
/// O(m * n * log n) where m = number of objectives, n = number of solutions
///
/// # Example
///
/// ```
/// use u_timetable::evaluator::Objectives;
/// use u_timetable::ga::multi_objective::crowding_distance;
///
/// let front = [
///     Objectives::new(0, 5),
///     Objectives::new(1, 3),
///     Objectives::new(2, 1),
/// ];
///
/// let distances = crowding_distance(&front);
/// assert!(distances[0].is_infinite());
/// assert!(distances[2].is_infinite());
/// assert!((distances[1] - 2.0).abs() < 1e-12);
/// ```
pub fn crowding_distance(objectives: &[Objectives]) -> Vec<f64> {
    let n = objectives.len();
    if n <= 2 {
        return vec![f64::INFINITY; n];
    }

    let mut distances = vec![0.0f64; n];
    let mut indices: Vec<usize> = (0..n).collect();

    for m in 0..Objectives::COUNT {
        // Stable sort keeps ties in input order
        indices.sort_by_key(|&i| objectives[i].get(m));

        distances[indices[0]] = f64::INFINITY;
        distances[indices[n - 1]] = f64::INFINITY;

        let min_val = objectives[indices[0]].get(m);
        let max_val = objectives[indices[n - 1]].get(m);
        if max_val == min_val {
            continue;
        }
        let range = f64::from(max_val - min_val);

        for k in 1..(n - 1) {
            let prev = objectives[indices[k - 1]].get(m);
            let next = objectives[indices[k + 1]].get(m);
            distances[indices[k]] += f64::from(next - prev) / range;
        }
    }

    distances
}

// ============================================================================
// Tests
// ============================================================================
