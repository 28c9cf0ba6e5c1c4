use std::fmt;

use super::Polynomial;

impl fmt::Display for Polynomial {
    /// Writes the terms from the highest degree down, e.g. `3x^2 - x + 5`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("0");
        }

        for (i, term) in self.sorted_terms().iter().rev().enumerate() {
            let magnitude = term.coefficient.abs();
            match (i, term.coefficient < 0.0) {
                (0, true) => f.write_str("-")?,
                (0, false) => {}
                (_, true) => f.write_str(" - ")?,
                (_, false) => f.write_str(" + ")?,
            }

            if term.degree == 0.0 {
                write!(f, "{magnitude}")?;
                continue;
            }
            if magnitude != 1.0 {
                write!(f, "{magnitude}")?;
            }
            if term.degree == 1.0 {
                f.write_str("x")?;
            } else {
                write!(f, "x^{}", term.degree)?;
            }
        }
        Ok(())
    }
}
