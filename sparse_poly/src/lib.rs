#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![deny(missing_docs)]

//! Sparse single-variable polynomials over `f64`.
//!
//! A [`Polynomial`] is a collection of [`Term`]s, each a `(degree, coefficient)` pair,
//! with at most one term per degree and no zero coefficients after any arithmetic
//! operation. Degrees are real numbers, so negative and fractional exponents are allowed.

pub mod error;

mod polynomial;
mod term;

#[cfg(test)]
mod proptests;

pub use error::PolynomialError;
pub use polynomial::Polynomial;
pub use term::Term;
