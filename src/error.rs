// src/error.rs
//! Errors from the checked conversions into constrained entity types.
//!
//! The algebra itself is total; these only report a value that breaks the
//! lane-0 invariant of the type it is converted into.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum PgaError {
    /// A direction must have homogeneous weight within `1e-7` of zero.
    #[error("cannot build a direction from a non-ideal point (weight {weight})")]
    NonIdealDirection { weight: f32 },

    /// Lines and bivectors carry no scalar or pseudoscalar part.
    #[error("lane 0 of slot p{slot} must be exactly 0, found {value}")]
    ScalarLaneNotZero { slot: usize, value: f32 },
}

pub type Result<T> = std::result::Result<T, PgaError>;
