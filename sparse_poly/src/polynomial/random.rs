use rand::seq::index;
use rand::Rng;

use crate::Term;

use super::Polynomial;

/// Largest absolute value of a sampled coefficient.
const COEFFICIENT_BOUND: i32 = 100;

impl Polynomial {
    /// Generate a random [`Polynomial`] with `term_count` distinct degrees taken from `0..=max_degree`.
    ///
    /// Degrees and coefficients are integral, and coefficients are nonzero with absolute
    /// value at most `100`, so sums and products of the results are exact.
    /// `term_count` is capped at `max_degree + 1`.
    pub fn random<R>(term_count: usize, max_degree: u32, rng: &mut R) -> Self
    where
        R: Rng + ?Sized,
    {
        let degree_count = max_degree as usize + 1;
        let amount = term_count.min(degree_count);

        let terms: Vec<Term> = index::sample(rng, degree_count, amount)
            .into_iter()
            .map(|degree| {
                let magnitude = rng.gen_range(1..=COEFFICIENT_BOUND);
                let coefficient = if rng.gen::<bool>() {
                    magnitude
                } else {
                    -magnitude
                };
                Term::new(degree as f64, f64::from(coefficient))
            })
            .collect();

        Self { terms }
    }
}
