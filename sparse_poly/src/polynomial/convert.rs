use num_traits::{One, Zero};

use crate::Term;

use super::Polynomial;

impl From<Term> for Polynomial {
    /// A zero-coefficient term gives the empty polynomial.
    #[inline]
    fn from(term: Term) -> Self {
        Self::from_terms(std::iter::once(term))
    }
}

impl From<(f64, f64)> for Polynomial {
    #[inline]
    fn from(pair: (f64, f64)) -> Self {
        Self::from(Term::from(pair))
    }
}

impl From<Vec<Term>> for Polynomial {
    #[inline]
    fn from(terms: Vec<Term>) -> Self {
        Self::from_terms(terms)
    }
}

impl From<Polynomial> for Vec<Term> {
    #[inline]
    fn from(polynomial: Polynomial) -> Self {
        polynomial.terms
    }
}

impl FromIterator<Term> for Polynomial {
    #[inline]
    fn from_iter<I: IntoIterator<Item = Term>>(iter: I) -> Self {
        Self::from_terms(iter)
    }
}

impl FromIterator<(f64, f64)> for Polynomial {
    #[inline]
    fn from_iter<I: IntoIterator<Item = (f64, f64)>>(iter: I) -> Self {
        Self::from_pairs(iter)
    }
}

impl AsRef<[Term]> for Polynomial {
    #[inline]
    fn as_ref(&self) -> &[Term] {
        self.terms.as_ref()
    }
}

impl Zero for Polynomial {
    #[inline]
    fn zero() -> Self {
        Self::new()
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.is_empty()
    }

    #[inline]
    fn set_zero(&mut self) {
        self.terms.clear();
    }
}

impl One for Polynomial {
    #[inline]
    fn one() -> Self {
        Self::from(Term::new(0.0, 1.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collect() {
        let p: Polynomial = [(0.0, 1.0), (2.0, 2.0), (0.0, 1.0)].into_iter().collect();
        assert_eq!(p, Polynomial::from_pairs([(0.0, 2.0), (2.0, 2.0)]));

        let terms: Vec<Term> = p.clone().into();
        assert_eq!(Polynomial::from(terms), p);
    }

    #[test]
    fn test_zero_one() {
        let p = Polynomial::from_pairs([(3.0, 2.0), (1.0, -1.0)]);
        assert_eq!(&p * &Polynomial::one(), p);
        assert_eq!(p.clone() + Polynomial::zero(), p);
        assert!(Polynomial::zero().is_zero());

        let mut q = p;
        q.set_zero();
        assert!(q.is_zero());
    }
}
