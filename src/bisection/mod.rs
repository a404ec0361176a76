//! Digit-matching bisection engine.
//!
//! ├ config.rs : iteration cap + sample count, builder with `validate()`
//! ├ digits.rs : decimal-prefix convergence comparison
//! ├ engine.rs : the bisection loop
//! ├ report.rs : outcome of one engine run
//! └ errors.rs : engine error type

pub mod config;
pub mod digits;
pub mod engine;
pub mod errors;
pub mod report;

pub use config::{BisectionCfg, ConfigError};
pub use digits::digits_match;
pub use engine::bisect;
pub use errors::BisectionError;
pub use report::{BisectionReport, Termination};
