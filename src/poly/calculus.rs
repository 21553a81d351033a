use itertools::Itertools;

use crate::{util::casting::usize_to_scalar, Poly, RealScalar};

impl<T: RealScalar> Poly<T> {
    /// Derivative
    ///
    /// ```
    /// use rpoly::poly;
    ///
    /// assert_eq!(poly![1.0, 2.0, 3.0].diff(), poly![2.0, 2.0]);
    /// ```
    #[must_use]
    pub fn diff(&self) -> Self {
        debug_assert!(self.is_normalized());

        // derivative of constant is zero
        let n = self.degree();
        if n == 0 {
            return Self(vec![T::zero()]);
        }

        let coeffs = self.0[..n]
            .iter()
            .enumerate()
            .map(|(i, &c)| c * usize_to_scalar(n - i))
            .collect_vec();
        Self(coeffs).normalize()
    }
}

#[cfg(test)]
mod test {
    use num::Zero;

    use crate::Poly64;

    #[test]
    fn diff() {
        let p = poly![1.0, -6.0, 11.0, -6.0];
        assert_eq!(p.diff(), poly![3.0, -12.0, 11.0]);
    }

    #[test]
    fn diff_constant() {
        let one = poly![1.0];
        assert_eq!(one.diff().degree(), 0);
        assert_eq!(one.diff(), Poly64::zero());
    }
}
