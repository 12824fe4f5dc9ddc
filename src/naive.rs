//! Naive O(n*n) distance covariance by direct double centering.
//!
//! Infeasible above a few tens of thousands of points, kept as the cross validation
//! oracle for the fast engine and as the baseline of the speed benchmarks.
//! The n*n matrices are never materialized, rows are scanned on the fly.

use rayon::prelude::*;

use crate::dcov::combine_sums;

#[cfg_attr(doc, katexit::katexit)]
/// $dCov^{2}(X,Y)$ by direct evaluation of
/// $S_{1} = \sum_{ij} a_{ij} b_{ij}$, $S_{2} = \sum_{i} a_{i.} b_{i.}$ and
/// $S_{3} = a_{..} b_{..}$ with one O(n) row scan per point, parallel over points.
/// Samples are assumed validated.
pub fn dist_cov_sq_naive(x: &[f64], y: &[f64]) -> f64 {
    debug_assert_eq!(x.len(), y.len());
    let n = x.len();
    //
    let (s1, s2, row_a, row_b) = x
        .par_iter()
        .zip(y.par_iter())
        .map(|(&xi, &yi)| {
            let (cross, row_a, row_b) = x.iter().zip(y.iter()).fold(
                (0., 0., 0.),
                |(cross, row_a, row_b), (&xj, &yj)| {
                    let (a, b) = ((xi - xj).abs(), (yi - yj).abs());
                    (cross + a * b, row_a + a, row_b + b)
                },
            );
            (cross, row_a * row_b, row_a, row_b)
        })
        .reduce(
            || (0., 0., 0., 0.),
            |acc, t| (acc.0 + t.0, acc.1 + t.1, acc.2 + t.2, acc.3 + t.3),
        );
    //
    combine_sums(n, s1, s2, row_a * row_b)
} // end of dist_cov_sq_naive

//==========================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn log_init_test() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn two_point_case_by_hand() {
        //
        log_init_test();
        //
        // a_01 = 1, b_01 = 2 : S1 = 4, row sums (1,1) and (2,2), S2 = 4, S3 = 8
        // dcov2 = 4/4 - 2*4/8 + 8/16 = 0.5
        let dcov = dist_cov_sq_naive(&[0.0, 1.0], &[0.0, 2.0]);
        assert!((dcov - 0.5).abs() < 1e-12);
    }

    #[test]
    fn symmetric_in_arguments() {
        //
        log_init_test();
        //
        let x = [1.0, -2.0, 0.5, 3.0, 3.0];
        let y = [0.0, 4.0, -1.0, 2.5, 1.0];
        let d_xy = dist_cov_sq_naive(&x, &y);
        let d_yx = dist_cov_sq_naive(&y, &x);
        assert!((d_xy - d_yx).abs() < 1e-12);
    }

    #[test]
    fn constant_sample_gives_zero() {
        //
        log_init_test();
        //
        let x = [2.0; 10];
        let y = [0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0];
        assert_eq!(dist_cov_sq_naive(&x, &y), 0.);
        assert_eq!(dist_cov_sq_naive(&x, &x), 0.);
    }
} // end of mod tests
