use std::ops::{Add, AddAssign};

use crate::{PolynomialError, Term};

use super::Polynomial;

impl Polynomial {
    /// Adds `term` to `self` inplace, merging it with an existing term of the same degree.
    #[inline]
    pub fn add_term(&mut self, term: Term) {
        self.accumulate(term);
        self.purge_zeros();
    }

    /// Returns `self + rhs` without modifying either operand.
    #[inline]
    pub fn add_polynomial(&self, rhs: &Self) -> Self {
        self + rhs
    }

    /// Returns `self + term` without modifying `self`.
    #[inline]
    pub fn add_term_to(&self, term: Term) -> Self {
        self + term
    }

    /// Adds two polynomials that may be absent.
    ///
    /// # Errors
    ///
    /// Returns [`PolynomialError::NullArgument`] if either operand is `None`.
    pub fn checked_add(lhs: Option<&Self>, rhs: Option<&Self>) -> Result<Self, PolynomialError> {
        match (lhs, rhs) {
            (Some(lhs), Some(rhs)) => Ok(lhs + rhs),
            _ => Err(PolynomialError::NullArgument),
        }
    }
}

impl AddAssign<&Self> for Polynomial {
    #[inline]
    fn add_assign(&mut self, rhs: &Self) {
        rhs.iter().for_each(|&term| self.accumulate(term));
        self.purge_zeros();
    }
}

impl AddAssign<Self> for Polynomial {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        AddAssign::add_assign(self, &rhs);
    }
}

impl AddAssign<Term> for Polynomial {
    #[inline]
    fn add_assign(&mut self, rhs: Term) {
        self.add_term(rhs);
    }
}

impl AddAssign<(f64, f64)> for Polynomial {
    #[inline]
    fn add_assign(&mut self, rhs: (f64, f64)) {
        self.add_term(Term::from(rhs));
    }
}

impl Add<Self> for Polynomial {
    type Output = Self;

    #[inline]
    fn add(mut self, rhs: Self) -> Self::Output {
        AddAssign::add_assign(&mut self, &rhs);
        self
    }
}

impl Add<&Self> for Polynomial {
    type Output = Self;

    #[inline]
    fn add(mut self, rhs: &Self) -> Self::Output {
        AddAssign::add_assign(&mut self, rhs);
        self
    }
}

impl Add<Polynomial> for &Polynomial {
    type Output = Polynomial;

    #[inline]
    fn add(self, mut rhs: Polynomial) -> Self::Output {
        AddAssign::add_assign(&mut rhs, self);
        rhs
    }
}

impl Add<&Polynomial> for &Polynomial {
    type Output = Polynomial;

    #[inline]
    fn add(self, rhs: &Polynomial) -> Self::Output {
        let mut polynomial = Polynomial::with_capacity(self.len() + rhs.len());
        polynomial.terms.extend_from_slice(&self.terms);
        AddAssign::add_assign(&mut polynomial, rhs);
        polynomial
    }
}

impl Add<Term> for Polynomial {
    type Output = Self;

    #[inline]
    fn add(mut self, rhs: Term) -> Self::Output {
        self.add_term(rhs);
        self
    }
}

impl Add<Term> for &Polynomial {
    type Output = Polynomial;

    #[inline]
    fn add(self, rhs: Term) -> Self::Output {
        self.clone() + rhs
    }
}

impl Add<(f64, f64)> for Polynomial {
    type Output = Self;

    #[inline]
    fn add(self, rhs: (f64, f64)) -> Self::Output {
        self + Term::from(rhs)
    }
}

impl Add<(f64, f64)> for &Polynomial {
    type Output = Polynomial;

    #[inline]
    fn add(self, rhs: (f64, f64)) -> Self::Output {
        self.clone() + Term::from(rhs)
    }
}
