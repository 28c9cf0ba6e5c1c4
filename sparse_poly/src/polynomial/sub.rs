use std::ops::{Sub, SubAssign};

use crate::{PolynomialError, Term};

use super::Polynomial;

impl Polynomial {
    /// Subtracts `term` from `self` inplace.
    #[inline]
    pub fn sub_term(&mut self, term: Term) {
        self.add_term(-term);
    }

    /// Returns `self - rhs` without modifying either operand.
    #[inline]
    pub fn subtraction(&self, rhs: &Self) -> Self {
        self - rhs
    }

    /// Returns `self - term` without modifying `self`.
    #[inline]
    pub fn subtraction_term(&self, term: Term) -> Self {
        self - term
    }

    /// Subtracts two polynomials that may be absent.
    ///
    /// # Errors
    ///
    /// Returns [`PolynomialError::NullArgument`] if either operand is `None`.
    pub fn checked_sub(lhs: Option<&Self>, rhs: Option<&Self>) -> Result<Self, PolynomialError> {
        match (lhs, rhs) {
            (Some(lhs), Some(rhs)) => Ok(lhs - rhs),
            _ => Err(PolynomialError::NullArgument),
        }
    }
}

impl SubAssign<&Self> for Polynomial {
    #[inline]
    fn sub_assign(&mut self, rhs: &Self) {
        rhs.iter().for_each(|&term| self.accumulate(-term));
        self.purge_zeros();
    }
}

impl SubAssign<Self> for Polynomial {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        SubAssign::sub_assign(self, &rhs);
    }
}

impl SubAssign<Term> for Polynomial {
    #[inline]
    fn sub_assign(&mut self, rhs: Term) {
        self.sub_term(rhs);
    }
}

impl SubAssign<(f64, f64)> for Polynomial {
    #[inline]
    fn sub_assign(&mut self, rhs: (f64, f64)) {
        self.sub_term(Term::from(rhs));
    }
}

impl Sub<Self> for Polynomial {
    type Output = Self;

    #[inline]
    fn sub(mut self, rhs: Self) -> Self::Output {
        SubAssign::sub_assign(&mut self, &rhs);
        self
    }
}

impl Sub<&Self> for Polynomial {
    type Output = Self;

    #[inline]
    fn sub(mut self, rhs: &Self) -> Self::Output {
        SubAssign::sub_assign(&mut self, rhs);
        self
    }
}

impl Sub<Polynomial> for &Polynomial {
    type Output = Polynomial;

    #[inline]
    fn sub(self, mut rhs: Polynomial) -> Self::Output {
        rhs.neg_assign();
        rhs += self;
        rhs
    }
}

impl Sub<&Polynomial> for &Polynomial {
    type Output = Polynomial;

    #[inline]
    fn sub(self, rhs: &Polynomial) -> Self::Output {
        let mut polynomial = Polynomial::with_capacity(self.len() + rhs.len());
        polynomial.terms.extend_from_slice(&self.terms);
        SubAssign::sub_assign(&mut polynomial, rhs);
        polynomial
    }
}

impl Sub<Term> for Polynomial {
    type Output = Self;

    #[inline]
    fn sub(mut self, rhs: Term) -> Self::Output {
        self.sub_term(rhs);
        self
    }
}

impl Sub<Term> for &Polynomial {
    type Output = Polynomial;

    #[inline]
    fn sub(self, rhs: Term) -> Self::Output {
        self.clone() - rhs
    }
}

impl Sub<(f64, f64)> for Polynomial {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: (f64, f64)) -> Self::Output {
        self - Term::from(rhs)
    }
}

impl Sub<(f64, f64)> for &Polynomial {
    type Output = Polynomial;

    #[inline]
    fn sub(self, rhs: (f64, f64)) -> Self::Output {
        self.clone() - Term::from(rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sub_leaves_rhs_untouched() {
        let a = Polynomial::from_pairs([(2.0, 4.0), (0.0, 1.0)]);
        let b = Polynomial::from_pairs([(2.0, 1.0), (1.0, 3.0)]);
        let expected = Polynomial::from_pairs([(2.0, 3.0), (1.0, -3.0), (0.0, 1.0)]);

        assert_eq!(&a - &b, expected);
        assert_eq!(&a - b.clone(), expected);
        assert_eq!(a.clone() - &b, expected);
        assert_eq!(a.clone() - b.clone(), expected);
        assert_eq!(a.subtraction(&b), expected);
        assert_eq!(b, Polynomial::from_pairs([(2.0, 1.0), (1.0, 3.0)]));
    }

    #[test]
    fn test_sub_self_is_empty() {
        let a = Polynomial::from_pairs([(2.0, 4.0), (-0.5, 1.0)]);
        assert!((&a - &a).is_empty());

        let mut b = a.clone();
        b -= &a;
        assert!(b.is_empty());
    }

    #[test]
    fn test_sub_term() {
        let a = Polynomial::from_pairs([(1.0, 2.0)]);
        assert!((&a - (1.0, 2.0)).is_empty());
        assert_eq!(
            a.subtraction_term(Term::new(3.0, 1.0)),
            Polynomial::from_pairs([(1.0, 2.0), (3.0, -1.0)])
        );
        assert_eq!(&a - (3.0, 0.0), a);

        let mut b = a;
        b -= (1.0, 0.5);
        assert_eq!(b[1.0], 1.5);
    }

    #[test]
    fn test_checked_sub() {
        let a = Polynomial::from((1.0, 1.0));
        assert_eq!(
            Polynomial::checked_sub(None, Some(&a)),
            Err(PolynomialError::NullArgument)
        );
        assert_eq!(Polynomial::checked_sub(Some(&a), Some(&a)), Ok(Polynomial::new()));
    }
}
