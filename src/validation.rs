//! Input validation at the crate boundary.
//!
//! All checks run before any sort or working array allocation so that the engine
//! only ever observes valid data.

use thiserror::Error;

/// Errors returned by the public entry points. Degenerate (zero variance) samples are
/// not errors, they give a distance correlation of 0.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DcorError {
    /// the two samples must have the same length
    #[error("samples have mismatched lengths : {len_x} and {len_y}")]
    LengthMismatch { len_x: usize, len_y: usize },
    /// at least 2 points are needed to speak of pairwise distances
    #[error("samples too short : got {len} points, need at least 2")]
    TooShort { len: usize },
    /// NaN or infinite value
    #[error("non finite value in {which} sample at position {pos}")]
    NonFinite { which: &'static str, pos: usize },
} // end of enum DcorError

/// checks a pair of samples : equal lengths, at least 2 points, all values finite
pub fn check_samples(x: &[f64], y: &[f64]) -> Result<(), DcorError> {
    if x.len() != y.len() {
        return Err(DcorError::LengthMismatch {
            len_x: x.len(),
            len_y: y.len(),
        });
    }
    if x.len() < 2 {
        return Err(DcorError::TooShort { len: x.len() });
    }
    check_finite(x, "first")?;
    check_finite(y, "second")?;
    //
    Ok(())
} // end of check_samples

/// checks a single sample : at least 2 points, all values finite
pub fn check_sample(v: &[f64]) -> Result<(), DcorError> {
    if v.len() < 2 {
        return Err(DcorError::TooShort { len: v.len() });
    }
    check_finite(v, "first")
} // end of check_sample

fn check_finite(v: &[f64], which: &'static str) -> Result<(), DcorError> {
    for (pos, val) in v.iter().enumerate() {
        if !val.is_finite() {
            log::error!("non finite value {} in {} sample at position {}", val, which, pos);
            return Err(DcorError::NonFinite { which, pos });
        }
    }
    Ok(())
} // end of check_finite

//==========================================================================================================

// end of mod tests
