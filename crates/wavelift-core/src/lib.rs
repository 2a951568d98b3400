//! Core data types for the wavelift workspace.
//!
//! - [`Sample`]: IEEE-754 coefficient abstraction (f32/f64) the kernels are
//!   generic over.
//! - [`FrameMut`]/[`Frame`]: borrowed strided 2-D views (outer frame +
//!   nested image), plus the owned [`Image`] with natural strides.
//! - [`Layout`]: the *simple*/*sparse*/*packed* conventions relating the
//!   outer frame to the nested image.
//! - `subband`: locator for the `{LL, HL, LH, HH}` quadrants of a level-`j`
//!   decomposition.
//! - `geom`: the small integer helpers (ceiling halving, `ceil_log2`, …)
//!   that subband arithmetic is built from.
//!
//! This crate holds no transform logic; the 1-D kernels live in
//! `wavelift-kernels` and the 2-D driver in `wavelift-pyramid`.

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

pub mod geom;
pub mod image;
pub mod layout;
pub mod sample;
pub mod stride;
pub mod subband;

pub use image::{compare, Extent, Frame, FrameMut, Image, Mismatch};
pub use layout::Layout;
pub use sample::Sample;
pub use subband::{locate_subband, Band, SubbandRect};
