use std::ops::Index;
use std::slice::Iter;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::{PolynomialError, Term};

mod add;
mod convert;
mod fmt;
mod mul;
mod neg;
mod random;
mod sub;

/// Represents a sparse polynomial in one variable with `f64` degrees and coefficients.
///
/// The terms are stored in a vector `terms` in insertion order. The order carries no meaning:
/// equality compares the terms as a set, and [`Polynomial::sorted_terms`] gives them by
/// ascending degree. Lookups by degree are linear scans with exact `f64` equality.
///
/// Every constructor and arithmetic operation keeps two invariants:
/// * there is at most one term per degree,
/// * no stored term has a zero coefficient.
///
/// Binary operators never touch a borrowed operand. An owned left operand is consumed and
/// reused as the result, while `+=`, `-=` and `*=` make in-place updates explicit.
///
/// # Examples
/// ```
/// use sparse_poly::Polynomial;
///
/// let a = Polynomial::from_pairs([(1.0, 2.0), (0.0, 5.0)]);
/// let b = Polynomial::from((1.0, 3.0));
/// let c = &a * &b;
/// assert_eq!(c, Polynomial::from_pairs([(2.0, 6.0), (1.0, 15.0)]));
/// ```
#[derive(Clone, Default, Debug)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(from = "Vec<Term>", into = "Vec<Term>")
)]
pub struct Polynomial {
    terms: Vec<Term>,
}

impl Polynomial {
    /// Creates an empty [`Polynomial`].
    #[inline]
    pub fn new() -> Self {
        Self { terms: Vec::new() }
    }

    /// Constructs a new, empty [`Polynomial`] with at least the specified capacity.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            terms: Vec::with_capacity(capacity),
        }
    }

    /// Builds a polynomial from a sequence of terms.
    ///
    /// Terms sharing a degree are merged by summing their coefficients,
    /// and terms whose coefficient ends up zero are dropped.
    pub fn from_terms<I>(terms: I) -> Self
    where
        I: IntoIterator<Item = Term>,
    {
        let terms = terms.into_iter();
        let mut polynomial = Self::with_capacity(terms.size_hint().0);
        terms.for_each(|term| polynomial.accumulate(term));
        polynomial.purge_zeros();
        polynomial
    }

    /// Builds a polynomial from a sequence of `(degree, coefficient)` pairs.
    ///
    /// Same normalization as [`Polynomial::from_terms`].
    #[inline]
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        Self::from_terms(pairs.into_iter().map(Term::from))
    }

    /// Returns the number of terms.
    #[inline]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Returns `true` if the polynomial has no terms.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Returns the biggest degree among the terms, or `0` for the empty polynomial.
    ///
    /// A polynomial whose terms all have negative degrees reports the largest of them.
    /// Use [`Polynomial::leading_term`] to tell the empty polynomial apart.
    #[inline]
    pub fn degree(&self) -> f64 {
        self.leading_term().map_or(0.0, |term| term.degree)
    }

    /// Returns the term with the biggest degree, or `None` if there are no terms.
    #[inline]
    pub fn leading_term(&self) -> Option<Term> {
        self.terms
            .iter()
            .max_by(|a, b| a.degree.total_cmp(&b.degree))
            .copied()
    }

    /// Adds a new term.
    ///
    /// # Errors
    ///
    /// Returns [`PolynomialError::ZeroCoefficient`] if the coefficient is `0`,
    /// and [`PolynomialError::DuplicateDegree`] if a term of that degree already exists.
    pub fn add_member(&mut self, term: Term) -> Result<(), PolynomialError> {
        if term.is_zero() {
            debug!(degree = term.degree, "rejected term with zero coefficient");
            return Err(PolynomialError::ZeroCoefficient {
                degree: term.degree,
            });
        }
        if self.contains_member(term.degree) {
            debug!(degree = term.degree, "rejected term with existing degree");
            return Err(PolynomialError::DuplicateDegree {
                degree: term.degree,
            });
        }
        self.terms.push(term);
        Ok(())
    }

    /// Adds a new term given as a `(degree, coefficient)` pair.
    ///
    /// Fails exactly like [`Polynomial::add_member`].
    #[inline]
    pub fn add_member_pair(&mut self, pair: (f64, f64)) -> Result<(), PolynomialError> {
        self.add_member(Term::from(pair))
    }

    /// Adds a term that may be absent.
    ///
    /// # Errors
    ///
    /// Returns [`PolynomialError::NullArgument`] for `None`,
    /// otherwise fails exactly like [`Polynomial::add_member`].
    pub fn try_add_member(&mut self, term: Option<Term>) -> Result<(), PolynomialError> {
        match term {
            Some(term) => self.add_member(term),
            None => {
                debug!("rejected missing term");
                Err(PolynomialError::NullArgument)
            }
        }
    }

    /// Removes the term of the specified degree.
    ///
    /// Returns `true` if a term has been removed.
    pub fn remove_member(&mut self, degree: f64) -> bool {
        match self.position(degree) {
            Some(index) => {
                self.terms.remove(index);
                true
            }
            None => false,
        }
    }

    /// Returns `true` if there is a term of the specified degree.
    #[inline]
    pub fn contains_member(&self, degree: f64) -> bool {
        self.position(degree).is_some()
    }

    /// Finds the term of the specified degree.
    #[inline]
    pub fn find(&self, degree: f64) -> Option<&Term> {
        self.terms.iter().find(|term| term.degree == degree)
    }

    /// Gets the coefficient of the specified degree, `0` if there is no such term.
    #[inline]
    pub fn coefficient(&self, degree: f64) -> f64 {
        self.find(degree).map_or(0.0, |term| term.coefficient)
    }

    /// Sets the coefficient of the specified degree.
    ///
    /// Setting `0` removes an existing term and is a no-op for a missing one.
    /// Any other value updates the existing term or adds a new one.
    pub fn set_coefficient(&mut self, degree: f64, value: f64) {
        match self.position(degree) {
            Some(index) if value == 0.0 => {
                self.terms.remove(index);
            }
            Some(index) => self.terms[index].coefficient = value,
            None if value != 0.0 => self.terms.push(Term::new(degree, value)),
            None => {}
        }
    }

    /// Returns a copy of all terms in storage order.
    #[inline]
    pub fn to_vec(&self) -> Vec<Term> {
        self.terms.clone()
    }

    /// Returns a copy of all terms ordered by ascending degree.
    pub fn sorted_terms(&self) -> Vec<Term> {
        let mut terms = self.to_vec();
        terms.sort_by(|a, b| a.degree.total_cmp(&b.degree));
        terms
    }

    /// Extracts a slice containing all terms in storage order.
    #[inline]
    pub fn as_slice(&self) -> &[Term] {
        self.terms.as_slice()
    }

    /// Returns an iterator over the terms in storage order.
    #[inline]
    pub fn iter(&self) -> Iter<'_, Term> {
        self.terms.iter()
    }

    /// Evaluate p(x).
    #[inline]
    pub fn evaluate(&self, x: f64) -> f64 {
        self.terms.iter().map(|term| term.evaluate(x)).sum()
    }

    #[inline]
    fn position(&self, degree: f64) -> Option<usize> {
        self.terms.iter().position(|term| term.degree == degree)
    }

    /// Merges `term` into `self`: sums into an existing term of the same degree,
    /// or appends it if it is nonzero. A sum may leave a zero coefficient behind,
    /// which [`Polynomial::purge_zeros`] removes.
    fn accumulate(&mut self, term: Term) {
        match self.position(term.degree) {
            Some(index) => self.terms[index].coefficient += term.coefficient,
            None if !term.is_zero() => self.terms.push(term),
            None => {}
        }
    }

    /// Drops every term with a zero coefficient.
    fn purge_zeros(&mut self) {
        let before = self.terms.len();
        self.terms.retain(|term| !term.is_zero());
        let purged = before - self.terms.len();
        if purged > 0 {
            trace!(
                purged,
                remaining = self.terms.len(),
                "dropped zero-coefficient terms"
            );
        }
    }
}

impl PartialEq for Polynomial {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .all(|term| other.find(term.degree) == Some(term))
    }
}

static ZERO: f64 = 0.0;

impl Index<f64> for Polynomial {
    type Output = f64;

    /// Returns the coefficient of the degree `index`, `0` if there is no such term.
    #[inline]
    fn index(&self, index: f64) -> &Self::Output {
        self.find(index).map_or(&ZERO, |term| &term.coefficient)
    }
}

impl IntoIterator for Polynomial {
    type Item = Term;

    type IntoIter = std::vec::IntoIter<Term>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.terms.into_iter()
    }
}

impl<'a> IntoIterator for &'a Polynomial {
    type Item = &'a Term;

    type IntoIter = Iter<'a, Term>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.terms.iter()
    }
}
