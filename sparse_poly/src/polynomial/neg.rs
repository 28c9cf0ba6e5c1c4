use std::ops::Neg;

use super::Polynomial;

impl Polynomial {
    /// Performs the unary `-` operation.
    #[inline]
    pub fn neg_assign(&mut self) {
        self.terms
            .iter_mut()
            .for_each(|term| term.coefficient = -term.coefficient);
    }
}

impl Neg for Polynomial {
    type Output = Self;

    #[inline]
    fn neg(mut self) -> Self::Output {
        self.neg_assign();
        self
    }
}

impl Neg for &Polynomial {
    type Output = Polynomial;

    #[inline]
    fn neg(self) -> Self::Output {
        Polynomial {
            terms: self.iter().map(|&term| -term).collect(),
        }
    }
}
