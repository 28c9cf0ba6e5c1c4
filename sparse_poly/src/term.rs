use std::ops::{Mul, Neg};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single `coefficient * x^degree` member of a [`Polynomial`](crate::Polynomial).
///
/// Both fields are plain `f64` values and no validation is done at construction,
/// so negative or fractional degrees are accepted as they are.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Term {
    /// The exponent of the variable.
    pub degree: f64,
    /// The scalar multiplier of `x^degree`.
    pub coefficient: f64,
}

impl Term {
    /// Creates a new [`Term`].
    #[inline]
    pub const fn new(degree: f64, coefficient: f64) -> Self {
        Self {
            degree,
            coefficient,
        }
    }

    /// Returns `true` if the coefficient is exactly `0`.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.coefficient == 0.0
    }

    /// Evaluate `coefficient * x^degree`.
    #[inline]
    pub fn evaluate(&self, x: f64) -> f64 {
        self.coefficient * x.powf(self.degree)
    }
}

impl From<(f64, f64)> for Term {
    #[inline]
    fn from((degree, coefficient): (f64, f64)) -> Self {
        Self::new(degree, coefficient)
    }
}

impl From<Term> for (f64, f64) {
    #[inline]
    fn from(term: Term) -> Self {
        (term.degree, term.coefficient)
    }
}

impl Neg for Term {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        Self::new(self.degree, -self.coefficient)
    }
}

impl Mul for Term {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        Self::new(self.degree + rhs.degree, self.coefficient * rhs.coefficient)
    }
}
