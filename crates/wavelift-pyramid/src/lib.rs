//! Separable multi-level 2-D wavelet transform driver.
//!
//! For each decomposition level the driver applies the 1-D kernel to every
//! row of the active LL quadrant, then to every column, optionally zeroes
//! the frame cells outside the produced subbands, and recurses on the
//! upper-left quadrant. The inverse walks the levels in reverse with the
//! inverse kernel parameters.
//!
//! Row and column passes are embarrassingly parallel and run on a worker
//! pool spawned at transform-call entry; within one level, rows are fully
//! finished before columns begin, and level `j + 1` starts strictly after
//! level `j` (row-then-column separability is load-bearing).

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]
#![warn(
    missing_docs,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::unwrap_used,
    clippy::expect_used
)]

pub mod config;
mod driver;
pub mod levels;
mod padding;

pub use config::{default_schedule, set_default_schedule, TransformConfig};
pub use driver::{
    forward_cdf53, forward_cdf97, forward_multi, inverse_cdf53, inverse_cdf97, inverse_multi,
};
