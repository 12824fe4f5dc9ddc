//! Public entry points : distance correlation, covariance and variance.
//!
//! Validation happens here, before any algorithmic work; the engines below assume
//! valid data. Zero variance samples give a distance correlation of 0 by definition.

use crate::dcov::{dist_cov_triple, dist_var_sq_fast, DcovTriple};
use crate::naive::dist_cov_sq_naive;
use crate::validation::{check_sample, check_samples, DcorError};

#[cfg_attr(doc, katexit::katexit)]
/// Distance correlation of two equal length samples, in $[0,1]$, computed in
/// O(n*log(n)) time and O(n) memory.
///
/// $$ dCor(X,Y) = \sqrt{\frac{dCov^{2}(X,Y)}{\sqrt{dVar^{2}(X) \cdot dVar^{2}(Y)}}} $$
/// and 0 when either variance vanishes.
///
/// # Example
/// ```
/// let x = vec![1.0, 0.0, -1.0];
/// let y: Vec<f64> = x.iter().map(|t| t * t).collect();
/// let dcor = fastdcor::dist_corr(&x, &y).unwrap();
/// assert!(((2.0_f64 / 40.0_f64.sqrt()).sqrt() - dcor).abs() < 1.0e-10);
/// ```
pub fn dist_corr(x: &[f64], y: &[f64]) -> Result<f64, DcorError> {
    check_samples(x, y)?;
    let triple = dist_cov_triple(x, y);
    Ok(assemble(&triple))
} // end of dist_corr

#[cfg_attr(doc, katexit::katexit)]
/// Squared distance covariance $dCov^{2}(X,Y)$ (the V statistic), nonnegative.
pub fn dist_cov_sq(x: &[f64], y: &[f64]) -> Result<f64, DcorError> {
    check_samples(x, y)?;
    Ok(dist_cov_triple(x, y).dcov_sq)
} // end of dist_cov_sq

#[cfg_attr(doc, katexit::katexit)]
/// Squared distance variance $dVar^{2}(V) = dCov^{2}(V,V)$, nonnegative,
/// 0 iff all points are equal.
pub fn dist_var_sq(v: &[f64]) -> Result<f64, DcorError> {
    check_sample(v)?;
    Ok(dist_var_sq_fast(v))
} // end of dist_var_sq

/// Distance correlation through the O(n*n) reference engine.
/// Same contract as [dist_corr], used for cross validation and benchmarks;
/// do not call it on large samples.
pub fn dist_corr_naive(x: &[f64], y: &[f64]) -> Result<f64, DcorError> {
    check_samples(x, y)?;
    let triple = DcovTriple {
        dcov_sq: dist_cov_sq_naive(x, y),
        dvar_x_sq: dist_cov_sq_naive(x, x),
        dvar_y_sq: dist_cov_sq_naive(y, y),
    };
    Ok(assemble(&triple))
} // end of dist_corr_naive

/// combines the engine triple into the final statistic, clamped into [0,1]
fn assemble(triple: &DcovTriple) -> f64 {
    if triple.dvar_x_sq <= 0. || triple.dvar_y_sq <= 0. {
        log::debug!("degenerate sample, dvar_x_sq : {}, dvar_y_sq : {}", triple.dvar_x_sq, triple.dvar_y_sq);
        return 0.;
    }
    let dcor = (triple.dcov_sq / (triple.dvar_x_sq * triple.dvar_y_sq).sqrt()).sqrt();
    dcor.min(1.)
} // end of assemble

//==========================================================================================================

// end of mod tests
