//! Polynomials over the prime field, stored dense with the constant
//! term at index 0.
//!
//! This is the machinery a threshold scheme needs and nothing more:
//! Horner evaluation at a field point, and Lagrange interpolation of
//! the value at x = 0 from a set of (x, y) samples.

use num_traits::{One, Zero};

use crate::error::{MathError, Result};
use crate::field_element::FieldElement;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Polynomial {
    coeffs: Vec<FieldElement>,
}

impl Polynomial {
    pub fn new(coeffs: Vec<FieldElement>) -> Self {
        Self { coeffs }
    }

    pub fn coefficients(&self) -> &[FieldElement] {
        &self.coeffs
    }

    /// The value of the polynomial at x = 0.
    pub fn constant_term(&self) -> FieldElement {
        self.coeffs.first().copied().unwrap_or_else(FieldElement::zero)
    }

    pub fn len(&self) -> usize {
        self.coeffs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coeffs.is_empty()
    }

    /// Evaluate at `x` using Horner's method, reducing after every step.
    ///
    /// The empty polynomial evaluates to zero everywhere.
    pub fn evaluate(&self, x: FieldElement) -> FieldElement {
        self.coeffs
            .iter()
            .rev()
            .fold(FieldElement::zero(), |acc, &coeff| acc * x + coeff)
    }

    /// Lagrange interpolation of f(0) from samples of a polynomial f.
    ///
    /// For each sample i the basis weight is
    /// `prod_{j != i} (0 - x_j) / (x_i - x_j)`; the result is the
    /// weighted sum of the y values. With `points.len()` samples this
    /// determines f(0) exactly iff deg(f) < points.len().
    ///
    /// Two samples sharing an x-coordinate make a denominator zero;
    /// that is reported as [`MathError::DuplicateNode`] instead of a
    /// garbage value.
    pub fn interpolate_at_zero(
        points: &[(FieldElement, FieldElement)],
    ) -> Result<FieldElement> {
        let mut acc = FieldElement::zero();

        for (i, &(x_i, y_i)) in points.iter().enumerate() {
            let mut numerator = FieldElement::one();
            let mut denominator = FieldElement::one();

            for (j, &(x_j, _)) in points.iter().enumerate() {
                if i == j {
                    continue;
                }
                numerator *= -x_j;
                denominator *= x_i - x_j;
            }

            if denominator.is_zero() {
                return Err(MathError::DuplicateNode(x_i.value()));
            }

            acc += y_i * numerator * denominator.inverse()?;
        }

        Ok(acc)
    }
}

impl From<Vec<FieldElement>> for Polynomial {
    fn from(coeffs: Vec<FieldElement>) -> Self {
        Self::new(coeffs)
    }
}
