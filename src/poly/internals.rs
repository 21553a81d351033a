use num::Zero;

use super::Poly;
use crate::RealScalar;

impl<T: RealScalar> Poly<T> {
    /// The length of the polynomial without checking pre-conditions
    pub(crate) fn len_raw(&self) -> usize {
        self.0.len()
    }

    pub(crate) fn is_normalized(&self) -> bool {
        match self.0.as_slice() {
            [] => false,
            [_] => true,
            [first, ..] => !first.is_zero(),
        }
    }

    pub(crate) fn normalize(self) -> Self {
        if self.is_normalized() {
            return self;
        }
        let Some(first) = self.0.iter().position(|c| !c.is_zero()) else {
            return Self::zero();
        };
        let ret = Self(self.0[first..].to_vec());

        // post-condition: polynomial is now normalized
        debug_assert!(ret.is_normalized());
        ret
    }

    /// Check that the polynomial does not contain `NaN` or infinite values.
    pub(crate) fn is_well_formed(&self) -> bool {
        self.0.iter().all(|x| x.is_finite())
    }

    /// Multiply by `x^n`.
    ///
    /// ```
    /// use rpoly::poly;
    ///
    /// assert_eq!(poly![1.0, 2.0].shift_up(2), poly![1.0, 2.0, 0.0, 0.0]);
    /// ```
    #[must_use]
    pub fn shift_up(&self, n: usize) -> Self {
        debug_assert!(self.is_normalized());
        if self.is_zero() {
            return Self::zero();
        }
        let mut coeffs = self.0.clone();
        coeffs.resize(self.len_raw() + n, T::zero());
        Self(coeffs)
    }

    /// Divide by `x^n`, discarding the `n` lowest degree terms.
    ///
    /// ```
    /// use rpoly::poly;
    ///
    /// assert_eq!(poly![1.0, 2.0, 3.0].shift_down(1), poly![1.0, 2.0]);
    /// assert_eq!(poly![1.0, 2.0, 3.0].shift_down(3), poly![0.0]);
    /// ```
    #[must_use]
    pub fn shift_down(&self, n: usize) -> Self {
        debug_assert!(self.is_normalized());
        if n >= self.len_raw() {
            return Self::zero();
        }
        Self::new(&self.0[..self.len_raw() - n])
    }
}
