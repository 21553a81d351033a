use num::Complex;

use super::{roots::quadratic_roots, Poly};
use crate::RealScalar;

/// The monic quadratic `x^2 + ux + v`.
///
/// Used as the shift of the quadratic iterations, where a pair of complex
/// conjugate roots (or two real roots) is refined at once.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct QuadraticMonomial<T> {
    pub u: T,
    pub v: T,
}

impl<T: RealScalar> QuadraticMonomial<T> {
    pub const fn new(u: T, v: T) -> Self {
        Self { u, v }
    }

    /// The quadratic with a double root at `s`, i.e. `(x - s)^2`.
    ///
    /// ```
    /// use rpoly::QuadraticMonomial;
    ///
    /// assert_eq!(QuadraticMonomial::double_root(3.0), QuadraticMonomial::new(-6.0, 9.0));
    /// ```
    #[must_use]
    pub fn double_root(s: T) -> Self {
        Self::new(-(s + s), s * s)
    }

    /// The two roots, the one with the smaller modulus first.
    #[must_use]
    pub fn roots(&self) -> (Complex<T>, Complex<T>) {
        quadratic_roots(T::one(), self.u, self.v)
    }

    #[must_use]
    pub fn to_poly(&self) -> Poly<T> {
        Poly::new(&[T::one(), self.u, self.v])
    }
}
