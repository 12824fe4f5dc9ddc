//! Order statistics preprocessing.
//!
//! Produces the sort permutation of a sample and the inverse permutation (ranks).
//! Ties are broken by original index so the permutation is well defined and the
//! downstream sweep is deterministic.

use rayon::prelude::*;

// below this size the parallel sort overhead is not worth it
const PAR_SORT_THRESHOLD: usize = 8192;

/// returns the permutation `perm` such that `v[perm[0]] <= v[perm[1]] <= ...`,
/// equal values ordered by original index.
/// The comparator is a strict total order on (value, index) for finite values,
/// so `sort_unstable` gives a deterministic result.
pub fn sort_permutation(v: &[f64]) -> Vec<usize> {
    let mut perm: Vec<usize> = (0..v.len()).collect();
    if v.len() >= PAR_SORT_THRESHOLD {
        perm.par_sort_unstable_by(|&i, &j| (v[i], i).partial_cmp(&(v[j], j)).unwrap());
    } else {
        perm.sort_unstable_by(|&i, &j| (v[i], i).partial_cmp(&(v[j], j)).unwrap());
    }
    perm
} // end of sort_permutation

/// inverse permutation : `ranks[perm[k]] = k`, the rank of each original index
pub fn ranks_from_permutation(perm: &[usize]) -> Vec<usize> {
    let mut ranks = vec![0; perm.len()];
    for (k, &idx) in perm.iter().enumerate() {
        ranks[idx] = k;
    }
    ranks
} // end of ranks_from_permutation

//==========================================================================================================

// end of mod tests
