//! Fast univariate distance covariance engine.
//!
//! Computes the three double centered sums the defining formula needs without ever
//! forming an n*n pairwise distance matrix, in O(n*log(n)) total time.

use cpu_time::ProcessTime;
use rayon::join;
use std::time::SystemTime;

use crate::fenwick::FenwickSet;
use crate::order::{ranks_from_permutation, sort_permutation};

/// The three scalars produced by one engine pass.
/// All are nonnegative up to floating point rounding and clamped to 0 if a tiny
/// negative value comes out of cancellation.
#[derive(Debug, Clone, Copy)]
pub struct DcovTriple {
    pub dcov_sq: f64,
    pub dvar_x_sq: f64,
    pub dvar_y_sq: f64,
} // end of struct DcovTriple

#[cfg_attr(doc, katexit::katexit)]
/// Computes $dCov^{2}(X,Y)$, $dVar^{2}(X)$ and $dVar^{2}(Y)$ for two samples of equal
/// length n, assumed already validated (finite values, $n \geq 2$).
///
/// With $a_{ij} = |x_{i}-x_{j}|$ and $b_{ij} = |y_{i}-y_{j}|$ the V statistic is
/// $$ dCov^{2}(X,Y) = \frac{S_{1}}{n^{2}} - \frac{2 S_{2}}{n^{3}} + \frac{S_{3}}{n^{4}} $$
/// where $S_{1} = \sum_{ij} a_{ij} b_{ij}$,
/// $S_{2} = \sum_{i} (\sum_{j} a_{ij})(\sum_{j} b_{ij})$ and
/// $S_{3} = (\sum_{ij} a_{ij})(\sum_{ij} b_{ij})$.
///
/// $S_{2}$ and $S_{3}$ come from per point row sums obtained by prefix sums over each
/// sample's sort order. $S_{1}$ couples the two variables and is computed by a sweep in
/// x sorted order with Fenwick accumulators indexed by y rank (see [crate::fenwick]).
/// $dVar^{2}$ is the same formula applied to a sample against itself, for which
/// $S_{1}$ collapses to the closed form $2n\sum v^{2} - 2(\sum v)^{2}$.
pub fn dist_cov_triple(x: &[f64], y: &[f64]) -> DcovTriple {
    debug_assert_eq!(x.len(), y.len());
    let n = x.len();
    //
    let sys_now = SystemTime::now();
    let cpu_start = ProcessTime::now();
    // sort orders, row sums and variances of the two samples are independent
    let ((perm_x, rowsum_x, dvar_x_sq), (perm_y, rowsum_y, dvar_y_sq)) = join(
        || {
            let perm = sort_permutation(x);
            let rowsum = row_sums(x, &perm);
            let dvar = dist_var_from_rowsums(x, &rowsum);
            (perm, rowsum, dvar)
        },
        || {
            let perm = sort_permutation(y);
            let rowsum = row_sums(y, &perm);
            let dvar = dist_var_from_rowsums(y, &rowsum);
            (perm, rowsum, dvar)
        },
    );
    //
    let s2: f64 = rowsum_x
        .iter()
        .zip(rowsum_y.iter())
        .map(|(a, b)| a * b)
        .sum();
    let s3 = rowsum_x.iter().sum::<f64>() * rowsum_y.iter().sum::<f64>();
    //
    let rank_y = ranks_from_permutation(&perm_y);
    let s1 = cross_product_sum(x, y, &perm_x, &rank_y);
    //
    let dcov_sq = combine_sums(n, s1, s2, s3);
    log::debug!(
        " dist_cov_triple n : {}, sys time(ms) : {:?}, cpu time(ms) : {:?}",
        n,
        sys_now.elapsed().unwrap().as_millis(),
        cpu_start.elapsed().as_millis()
    );
    //
    DcovTriple {
        dcov_sq,
        dvar_x_sq,
        dvar_y_sq,
    }
} // end of dist_cov_triple

#[cfg_attr(doc, katexit::katexit)]
/// $dVar^{2}$ of one validated sample, the univariate formula with the closed form
/// $S_{1} = 2n\sum v^{2} - 2(\sum v)^{2}$.
pub(crate) fn dist_var_sq_fast(v: &[f64]) -> f64 {
    let perm = sort_permutation(v);
    let rowsum = row_sums(v, &perm);
    dist_var_from_rowsums(v, &rowsum)
} // end of dist_var_sq_fast

#[cfg_attr(doc, katexit::katexit)]
/// Row sums of the implicit distance matrix : $out[i] = \sum_{j} |v_{i}-v_{j}|$,
/// in O(n) given the sort permutation.
/// At sorted position k, with $P_{k}$ the sum of the k smallest values and T the total,
/// the row sum is $(2k-n)  v_{i} + T - 2 P_{k}$.
fn row_sums(v: &[f64], perm: &[usize]) -> Vec<f64> {
    let n = v.len();
    let total: f64 = v.iter().sum();
    let mut out = vec![0.; n];
    let mut prefix = 0.;
    for (k, &idx) in perm.iter().enumerate() {
        let val = v[idx];
        out[idx] = (2 * k as i64 - n as i64) as f64 * val + total - 2. * prefix;
        prefix += val;
    }
    out
} // end of row_sums

fn dist_var_from_rowsums(v: &[f64], rowsum: &[f64]) -> f64 {
    let n = v.len();
    let (sum, sum_of_sq) = v.iter().fold((0., 0.), |(sum, sum_of_sq), &t| {
        (sum + t, sum_of_sq + t * t)
    });
    let s1 = 2. * n as f64 * sum_of_sq - 2. * sum * sum;
    let s2 = rowsum.iter().map(|r| r * r).sum::<f64>();
    let s3 = rowsum.iter().sum::<f64>().powi(2);
    combine_sums(n, s1, s2, s3)
} // end of dist_var_from_rowsums

#[cfg_attr(doc, katexit::katexit)]
/// The coupled term $S_{1} = \sum_{ij} |x_{i}-x_{j}| |y_{i}-y_{j}|$.
///
/// Sweeping i in x sorted order makes $|x_{i}-x_{j}| = x_{i}-x_{j}$ for every already
/// processed j. Splitting those j by y rank at the current point turns
/// $(x_{i}-x_{j}) |y_{i}-y_{j}|$ into terms of the running count and the running sums of
/// $x_{j}$, $y_{j}$ and $x_{j} y_{j}$, each queried in O(log(n)) from the Fenwick set.
/// The diagonal contributes nothing, so $S_{1}$ is twice the swept total.
fn cross_product_sum(x: &[f64], y: &[f64], perm_x: &[usize], rank_y: &[usize]) -> f64 {
    let mut fenwicks = FenwickSet::new(x.len());
    let mut s1 = 0.;
    for &idx in perm_x.iter() {
        let (xi, yi) = (x[idx], y[idx]);
        let r = rank_y[idx];
        // ranks are unique and the current point is not registered yet, so the prefix
        // at r is exactly the set of processed points with y <= yi
        let below = fenwicks.prefix(r);
        let tot = fenwicks.totals();
        let (ca, sxa, sya, sxya) = (
            tot.cnt - below.cnt,
            tot.sx - below.sx,
            tot.sy - below.sy,
            tot.sxy - below.sxy,
        );
        s1 += below.cnt * xi * yi - xi * below.sy - yi * below.sx + below.sxy;
        s1 += -ca * xi * yi + xi * sya + yi * sxa - sxya;
        fenwicks.add(r, xi, yi);
    }
    2. * s1
} // end of cross_product_sum

#[cfg_attr(doc, katexit::katexit)]
/// assembles $S_{1}/n^{2} - 2 S_{2}/n^{3} + S_{3}/n^{4}$, clamped at 0
pub(crate) fn combine_sums(n: usize, s1: f64, s2: f64, s3: f64) -> f64 {
    let nf = n as f64;
    let res = s1 / (nf * nf) - 2. * s2 / (nf * nf * nf) + s3 / (nf * nf * nf * nf);
    res.max(0.)
} // end of combine_sums

//==========================================================================================================

// end of mod tests
