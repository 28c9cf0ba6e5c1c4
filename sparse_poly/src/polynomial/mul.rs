use std::ops::{Mul, MulAssign};

use crate::{PolynomialError, Term};

use super::Polynomial;

impl Polynomial {
    /// Multiply `self` with the a scalar.
    #[inline]
    pub fn mul_scalar(&self, scalar: f64) -> Self {
        let mut polynomial = self.clone();
        polynomial.mul_scalar_assign(scalar);
        polynomial
    }

    /// Multiply `self` with the a scalar inplace.
    #[inline]
    pub fn mul_scalar_assign(&mut self, scalar: f64) {
        self.terms
            .iter_mut()
            .for_each(|term| term.coefficient *= scalar);
        self.purge_zeros();
    }

    /// Returns `self * rhs` as a new polynomial.
    #[inline]
    pub fn multiply(&self, rhs: &Self) -> Self {
        self * rhs
    }

    /// Returns `self * term` as a new polynomial.
    pub fn multiply_term(&self, term: Term) -> Self {
        if term.is_zero() {
            return Self::new();
        }
        let mut polynomial = Self::with_capacity(self.len());
        self.iter()
            .for_each(|&lhs| polynomial.accumulate(lhs * term));
        polynomial.purge_zeros();
        polynomial
    }

    /// Multiplies two polynomials that may be absent.
    ///
    /// # Errors
    ///
    /// Returns [`PolynomialError::NullArgument`] if either operand is `None`.
    pub fn checked_mul(lhs: Option<&Self>, rhs: Option<&Self>) -> Result<Self, PolynomialError> {
        match (lhs, rhs) {
            (Some(lhs), Some(rhs)) => Ok(lhs * rhs),
            _ => Err(PolynomialError::NullArgument),
        }
    }
}

impl Mul<&Polynomial> for &Polynomial {
    type Output = Polynomial;

    /// Products landing on the same degree are summed.
    fn mul(self, rhs: &Polynomial) -> Self::Output {
        let mut polynomial = Polynomial::with_capacity(self.len() * rhs.len());
        for &lhs in self {
            for &r in rhs {
                polynomial.accumulate(lhs * r);
            }
        }
        polynomial.purge_zeros();
        polynomial
    }
}

impl Mul<Polynomial> for &Polynomial {
    type Output = Polynomial;

    #[inline]
    fn mul(self, rhs: Polynomial) -> Self::Output {
        Mul::mul(self, &rhs)
    }
}

impl Mul<&Self> for Polynomial {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: &Self) -> Self::Output {
        Mul::mul(&self, rhs)
    }
}

impl Mul<Self> for Polynomial {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        Mul::mul(&self, &rhs)
    }
}

impl MulAssign<&Self> for Polynomial {
    #[inline]
    fn mul_assign(&mut self, rhs: &Self) {
        *self = Mul::mul(&*self, rhs);
    }
}

impl MulAssign<Self> for Polynomial {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = Mul::mul(&*self, &rhs);
    }
}

impl Mul<Term> for &Polynomial {
    type Output = Polynomial;

    #[inline]
    fn mul(self, rhs: Term) -> Self::Output {
        self.multiply_term(rhs)
    }
}

impl Mul<Term> for Polynomial {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Term) -> Self::Output {
        self.multiply_term(rhs)
    }
}

impl Mul<(f64, f64)> for &Polynomial {
    type Output = Polynomial;

    #[inline]
    fn mul(self, rhs: (f64, f64)) -> Self::Output {
        self.multiply_term(Term::from(rhs))
    }
}

impl Mul<(f64, f64)> for Polynomial {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: (f64, f64)) -> Self::Output {
        self.multiply_term(Term::from(rhs))
    }
}

impl MulAssign<Term> for Polynomial {
    #[inline]
    fn mul_assign(&mut self, rhs: Term) {
        *self = self.multiply_term(rhs);
    }
}

impl MulAssign<(f64, f64)> for Polynomial {
    #[inline]
    fn mul_assign(&mut self, rhs: (f64, f64)) {
        *self = self.multiply_term(Term::from(rhs));
    }
}
