use itertools::Itertools;
use num::Zero;

use super::{Poly, QuadraticMonomial};
use crate::RealScalar;

impl<T: RealScalar> Poly<T> {
    /// Divide by `x - s` using Horner's scheme, returning the quotient and the
    /// value of the polynomial at `s`, which is also the remainder.
    ///
    /// ```
    /// use rpoly::poly;
    ///
    /// let (q, r) = poly![1.0, -6.0, 11.0, -6.0].div_linear(1.0);
    /// assert_eq!(q, poly![1.0, -5.0, 6.0]);
    /// assert_eq!(r, 0.0);
    /// ```
    #[must_use]
    pub fn div_linear(&self, s: T) -> (Self, T) {
        debug_assert!(self.is_normalized());
        let mut acc = T::zero();
        let mut partial = self
            .0
            .iter()
            .map(|&c| {
                acc = acc * s + c;
                acc
            })
            .collect_vec();
        let value = partial.pop().unwrap_or_else(T::zero);
        if partial.is_empty() {
            return (Self::zero(), value);
        }
        (Self(partial).normalize(), value)
    }

    /// Synthetic division by the monic quadratic `x^2 + ux + v`.
    ///
    /// Returns the quotient and the scalars `(a, b)` of the remainder, which
    /// is written as `b*(x + u) + a`.
    ///
    /// ```
    /// use rpoly::{poly, QuadraticMonomial};
    ///
    /// // x^3 = x*(x^2 + 1) - x
    /// let (q, a, b) = poly![1.0, 0.0, 0.0, 0.0].div_quadratic(&QuadraticMonomial::new(0.0, 1.0));
    /// assert_eq!(q, poly![1.0, 0.0]);
    /// assert_eq!((a, b), (0.0, -1.0));
    /// ```
    #[must_use]
    pub fn div_quadratic(&self, divisor: &QuadraticMonomial<T>) -> (Self, T, T) {
        debug_assert!(self.is_normalized());
        let QuadraticMonomial { u, v } = *divisor;
        let mut b = T::zero();
        let mut a = T::zero();
        let mut partial = Vec::with_capacity(self.len_raw());
        for &c in &self.0 {
            let next = c - u * a - v * b;
            b = a;
            a = next;
            partial.push(next);
        }
        // the last two recurrence values form the remainder
        partial.truncate(self.len_raw().saturating_sub(2));
        if partial.is_empty() {
            return (Self::zero(), a, b);
        }
        (Self(partial).normalize(), a, b)
    }
}

#[cfg(test)]
mod test {
    use num::Zero;

    use crate::{Poly64, QuadraticMonomial};

    #[test]
    fn div_linear_remainder() {
        // x^2 + 1 = (x - 2)(x + 2) + 5
        let (q, r) = poly![1.0, 0.0, 1.0].div_linear(2.0);
        assert_eq!(q, poly![1.0, 2.0]);
        assert_eq!(r, 5.0);
    }

    #[test]
    fn div_linear_constant() {
        let (q, r) = poly![3.0].div_linear(2.0);
        assert_eq!(q, Poly64::zero());
        assert_eq!(r, 3.0);
    }

    #[test]
    fn div_quadratic_exact_factor() {
        // (x - 1)(x - 2)(x - 3) / (x^2 - 3x + 2)
        let p = poly![1.0, -6.0, 11.0, -6.0];
        let (q, a, b) = p.div_quadratic(&QuadraticMonomial::new(-3.0, 2.0));
        assert_eq!(q, poly![1.0, -3.0]);
        assert_eq!((a, b), (0.0, 0.0));
    }

    #[test]
    fn div_quadratic_reconstructs() {
        let p = poly![2.0_f64, -1.0, 4.0, 3.0, -5.0];
        let divisor = QuadraticMonomial::new(0.5, 2.0);
        let (q, a, b) = p.div_quadratic(&divisor);
        let remainder = poly![b, b * divisor.u + a];
        let back = q * divisor.to_poly() + remainder;
        for (x, y) in back.iter().zip(p.iter()) {
            assert!((x - y).abs() < 1e-12);
        }
    }

    #[test]
    fn div_quadratic_low_degree() {
        let (q, a, b) = poly![7.0].div_quadratic(&QuadraticMonomial::new(1.0, 1.0));
        assert_eq!(q, Poly64::zero());
        assert_eq!((a, b), (7.0, 0.0));

        // x + 2 = 1*(x + 1) + 1
        let (q, a, b) = poly![1.0, 2.0].div_quadratic(&QuadraticMonomial::new(1.0, 5.0));
        assert_eq!(q, Poly64::zero());
        assert_eq!((a, b), (1.0, 1.0));
    }
}
