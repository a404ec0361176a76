//! Interval workability: sampling, continuity, root existence.
//!
//! ├ sampler.rs    : dense evaluation grid over [a, b]
//! ├ continuity.rs : finite-everywhere + no-near-zero verdict
//! ├ bracket.rs    : intermediate-value sign-change certification
//! └ errors.rs     : typed rejection reasons

pub mod bracket;
pub mod continuity;
pub mod errors;
pub mod sampler;

pub use bracket::{certify, WorkableInterval};
pub use continuity::ContinuityVerdict;
pub use errors::WorkabilityError;
pub use sampler::{SampleSet, ZERO_ATOL};
