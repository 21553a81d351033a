use std::fmt::Display;

use itertools::Itertools;
use num::One;

use crate::RealScalar;

mod calculus;
mod conversions;
mod division;
mod impl_num;
mod internals;
mod quadratic;
pub mod roots;

pub use quadratic::QuadraticMonomial;

/// Polynomial with real coefficients, stored from the highest degree term
/// down to the constant term.
///
/// Polynomials are always normalized: the leading coefficient is non-zero,
/// unless the polynomial is the constant zero, which is stored as `[0]`.
#[derive(Clone, Debug, PartialEq)]
pub struct Poly<T: RealScalar>(pub(crate) Vec<T>);

impl<T: RealScalar> Poly<T> {
    /// Create a polynomial from its coefficients, highest degree first.
    /// Leading zeros are removed.
    ///
    /// ```
    /// use rpoly::Poly;
    ///
    /// let p = Poly::new(&[0.0, 1.0, 2.0]);
    /// assert_eq!(p.degree(), 1);
    /// ```
    #[must_use]
    pub fn new(coeffs: &[T]) -> Self {
        Self(coeffs.to_owned()).normalize()
    }

    /// Create a polynomial from a single term (coefficient + degree)
    ///
    /// ```
    /// use rpoly::{poly, Poly};
    ///
    /// assert_eq!(Poly::term(2.0, 3), poly![2.0, 0.0, 0.0, 0.0]);
    /// ```
    #[must_use]
    pub fn term(coeff: T, degree: usize) -> Self {
        Self::new(&[coeff]).shift_up(degree)
    }

    /// Monic polynomial with the given real roots.
    ///
    /// ```
    /// use rpoly::{poly, Poly};
    ///
    /// assert_eq!(Poly::from_real_roots(&[1.0, 2.0]), poly![1.0, -3.0, 2.0]);
    /// ```
    #[must_use]
    pub fn from_real_roots(roots: &[T]) -> Self {
        roots
            .iter()
            .map(|&r| Self::new(&[T::one(), -r]))
            .fold(Self::one(), |acc, factor| acc * factor)
    }

    /// The degree of the polynomial. The zero polynomial has degree zero.
    #[must_use]
    pub fn degree(&self) -> usize {
        debug_assert!(self.is_normalized());
        self.len_raw() - 1
    }

    /// Coefficient of the highest degree term.
    #[must_use]
    pub fn leading(&self) -> T {
        self.0[0]
    }

    /// Coefficient of the degree zero term.
    #[must_use]
    pub fn constant(&self) -> T {
        self.0[self.len_raw() - 1]
    }

    /// Coefficient of the term `x^power`, zero for powers above the degree.
    ///
    /// ```
    /// use rpoly::poly;
    ///
    /// let p = poly![3.0, 2.0, 1.0];
    /// assert_eq!(p.coeff(0), 1.0);
    /// assert_eq!(p.coeff(2), 3.0);
    /// assert_eq!(p.coeff(5), 0.0);
    /// ```
    #[must_use]
    pub fn coeff(&self, power: usize) -> T {
        let n = self.len_raw();
        if power >= n {
            return T::zero();
        }
        self.0[n - 1 - power]
    }

    /// Evaluate the polynomial at a real point, using Horner's method.
    ///
    /// ```
    /// use rpoly::poly;
    ///
    /// let p = poly![1.0, 2.0, 3.0];
    /// assert_eq!(p.eval(2.0), 11.0);
    /// ```
    #[must_use]
    pub fn eval(&self, x: T) -> T {
        debug_assert!(self.is_normalized());
        self.0.iter().fold(T::zero(), |acc, &c| acc * x + c)
    }
}

impl<T: RealScalar> Display for Poly<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let n = self.len_raw() - 1;
        let s = self
            .0
            .iter()
            .enumerate()
            .map(|(i, c)| match n - i {
                0 => format!("{c}"),
                d => format!("{c}*x^{d}"),
            })
            .join(" + ");
        f.write_str(&s)
    }
}
