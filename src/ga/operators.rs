//! Genetic operators for slot-assignment genomes.
//!
//! Crossover works on any gene type; mutation draws replacement values from
//! the catalog so it can never introduce a slot the subject's teacher does
//! not list.
//!
//! # Crossover Operators
//!
//! - [`single_point_crossover`]: swap the suffixes after one cut point
//!
//! # Mutation Operators
//!
//! - [`reassign_mutation`]: redraw one gene from its subject's valid slots
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Burke & Petrovic (2002), "Recent research directions in automated
//!   timetabling"

use rand::prelude::IndexedRandom;
use rand::Rng;

use crate::models::{Catalog, SlotId};

// ============================================================================
// Crossover operators
// ============================================================================

/// Single-point crossover.
///
/// Picks a cut point in `[1, n-1]` and swaps the tails:
/// `child1 = p1[..cut] ++ p2[cut..]`, `child2 = p2[..cut] ++ p1[cut..]`.
/// Both children take every gene from the same position of one parent, so
/// any positional validity the parents had carries over.
///
/// Parents shorter than two genes have no interior cut point and are
/// returned as copies.
///
/// # Panics
/// Panics if parents have different lengths.
pub fn single_point_crossover<T: Clone, R: Rng>(
    parent1: &[T],
    parent2: &[T],
    rng: &mut R,
) -> (Vec<T>, Vec<T>) {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");

    if n < 2 {
        return (parent1.to_vec(), parent2.to_vec());
    }

    let cut = random_cut_point(n, rng);
    (splice(parent1, parent2, cut), splice(parent2, parent1, cut))
}

fn splice<T: Clone>(head: &[T], tail: &[T], cut: usize) -> Vec<T> {
    let mut child = Vec::with_capacity(head.len());
    child.extend_from_slice(&head[..cut]);
    child.extend_from_slice(&tail[cut..]);
    child
}

// ============================================================================
// Mutation operators
// ============================================================================

/// Reassign mutation: one random subject gets a fresh slot drawn uniformly
/// from its teacher's valid slots (possibly the slot it already had).
///
/// Returns the index of the redrawn gene.
///
/// # Panics
/// Panics if `genes` is empty.
pub fn reassign_mutation<R: Rng>(genes: &mut [SlotId], catalog: &Catalog, rng: &mut R) -> usize {
    assert!(!genes.is_empty(), "cannot mutate an empty genome");
    let idx = rng.random_range(0..genes.len());
    genes[idx] = random_valid_slot(catalog, idx, rng);
    idx
}

/// Uniformly random slot among those valid for `subject`.
pub fn random_valid_slot<R: Rng>(catalog: &Catalog, subject: usize, rng: &mut R) -> SlotId {
    *catalog
        .valid_slots(subject)
        .choose(rng)
        .expect("Catalog::new rejects teachers without valid slots")
}

// ============================================================================
// Helpers
// ============================================================================

/// Pick a cut point in `[1, n-1]`. Requires `n >= 2`.
fn random_cut_point<R: Rng>(n: usize, rng: &mut R) -> usize {
    rng.random_range(1..n)
}

// ============================================================================
// Tests
// ============================================================================
