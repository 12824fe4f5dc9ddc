//! Fast univariate distance correlation.
//!
//! The crate computes the distance correlation of Székely, Rizzo and Bakirov between two
//! equal length f64 samples in O(n*log(n)) time, together with an O(n*n) double centering
//! reference used for cross validation and benchmarking.

use env_logger::Builder;

#[macro_use]
extern crate lazy_static;

lazy_static! {
    static ref LOG: u64 = {
        let res = init_log();
        res
    };
}

// install a logger facility
fn init_log() -> u64 {
    Builder::from_default_env().init();
    println!("\n ************** initializing logger *****************\n");
    return 1;
}

pub mod validation;

pub mod order;

pub mod fenwick;

pub mod dcov;

pub mod naive;

pub mod dcor;

#[doc(inline)]
pub use dcor::{dist_corr, dist_corr_naive, dist_cov_sq, dist_var_sq};

pub use dcov::DcovTriple;

pub use validation::DcorError;
