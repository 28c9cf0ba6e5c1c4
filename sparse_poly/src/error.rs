//! This module defines the errors that
//! may occur when building or editing a polynomial.

use thiserror::Error;

/// Errors that may occur.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum PolynomialError {
    /// Error that occurs when a required term or polynomial argument is absent.
    #[error("A required polynomial argument is missing!")]
    NullArgument,
    /// Error that occurs when adding a term whose degree is already present.
    #[error("A term with degree {degree} already exists in the polynomial!")]
    DuplicateDegree {
        /// The degree that is already taken.
        degree: f64,
    },
    /// Error that occurs when adding a term with a zero coefficient.
    #[error("The term with degree {degree} has a zero coefficient!")]
    ZeroCoefficient {
        /// The degree of the rejected term.
        degree: f64,
    },
}
