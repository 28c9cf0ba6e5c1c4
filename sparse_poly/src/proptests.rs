//! Property-based tests for polynomial arithmetic.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::{Polynomial, Term};

    // Integral values keep every sum and product exact.
    fn small_term() -> impl Strategy<Value = Term> {
        (0i32..8, -20i32..=20)
            .prop_map(|(degree, coefficient)| Term::new(degree.into(), coefficient.into()))
    }

    fn small_poly() -> impl Strategy<Value = Polynomial> {
        proptest::collection::vec(small_term(), 0..6).prop_map(Polynomial::from_terms)
    }

    fn assert_normalized(p: &Polynomial) -> Result<(), TestCaseError> {
        for (i, term) in p.iter().enumerate() {
            prop_assert!(!term.is_zero());
            prop_assert!(p.iter().skip(i + 1).all(|other| other.degree != term.degree));
        }
        Ok(())
    }

    proptest! {
        #[test]
        fn poly_add_commutative(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(&a + &b, &b + &a);
        }

        #[test]
        fn poly_add_associative(a in small_poly(), b in small_poly(), c in small_poly()) {
            prop_assert_eq!(&(&a + &b) + &c, &a + &(&b + &c));
        }

        #[test]
        fn poly_mul_commutative(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(&a * &b, &b * &a);
        }

        #[test]
        fn poly_distributive(a in small_poly(), b in small_poly(), c in small_poly()) {
            // (a + b) * c = a * c + b * c
            let left = &(&a + &b) * &c;
            let right = &(&a * &c) + &(&b * &c);
            prop_assert_eq!(left, right);
        }

        #[test]
        fn poly_additive_inverse(a in small_poly()) {
            prop_assert!((&a - &a).is_empty());
            prop_assert!((&a + &(-&a)).is_empty());
        }

        #[test]
        fn poly_sub_is_add_neg(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(&a - &b, &a + &(-&b));
        }

        #[test]
        fn poly_results_normalized(a in small_poly(), b in small_poly(), t in small_term()) {
            assert_normalized(&a)?;
            assert_normalized(&(&a + &b))?;
            assert_normalized(&(&a - &b))?;
            assert_normalized(&(&a * &b))?;
            assert_normalized(&(&a + t))?;
            assert_normalized(&(&a - t))?;
            assert_normalized(&(&a * t))?;
        }

        #[test]
        fn poly_operands_untouched(a in small_poly(), b in small_poly()) {
            let (a0, b0) = (a.clone(), b.clone());
            let _ = &a + &b;
            let _ = &a - &b;
            let _ = &a * &b;
            prop_assert_eq!(a, a0);
            prop_assert_eq!(b, b0);
        }

        #[test]
        fn poly_mul_term_matches_mul(a in small_poly(), t in small_term()) {
            prop_assert_eq!(&a * t, &a * &Polynomial::from(t));
        }

        #[test]
        fn poly_set_coefficient(a in small_poly(), degree in 0i32..8, value in -3i32..=3) {
            let degree = f64::from(degree);
            let value = f64::from(value);
            let mut p = a.clone();
            p.set_coefficient(degree, value);
            prop_assert_eq!(p[degree], value);
            prop_assert_eq!(p.contains_member(degree), value != 0.0);
            assert_normalized(&p)?;
        }
    }
}
