#![allow(clippy::op_ref)]

// Implementation of traits related to numeric operations and operators

use itertools::{EitherOrBoth, Itertools};
use num::{One, Zero};
use std::ops::{Add, Mul, Neg, Sub};

use crate::{Poly, RealScalar};

impl<T: RealScalar> Zero for Poly<T> {
    fn zero() -> Self {
        Self(vec![T::zero()])
    }

    fn is_zero(&self) -> bool {
        debug_assert!(self.is_normalized());
        self.len_raw() == 1 && self.0[0].is_zero()
    }
}

impl<T: RealScalar> One for Poly<T> {
    fn one() -> Self {
        Self(vec![T::one()])
    }
}

/// Combine the coefficients of two polynomials with aligned degrees.
fn zip_aligned<T: RealScalar>(lhs: &Poly<T>, rhs: &Poly<T>, f: impl Fn(T, T) -> T) -> Poly<T> {
    // align the constant terms by walking from the end
    let mut coeffs = lhs
        .0
        .iter()
        .rev()
        .zip_longest(rhs.0.iter().rev())
        .map(|pair| match pair {
            EitherOrBoth::Both(&l, &r) => f(l, r),
            EitherOrBoth::Left(&l) => f(l, T::zero()),
            EitherOrBoth::Right(&r) => f(T::zero(), r),
        })
        .collect_vec();
    coeffs.reverse();
    Poly(coeffs).normalize()
}

impl<T: RealScalar> Add<&Poly<T>> for &Poly<T> {
    type Output = Poly<T>;

    fn add(self, rhs: &Poly<T>) -> Self::Output {
        zip_aligned(self, rhs, |l, r| l + r)
    }
}

impl<T: RealScalar> Add<Poly<T>> for &Poly<T> {
    type Output = Poly<T>;

    fn add(self, rhs: Poly<T>) -> Self::Output {
        self + &rhs
    }
}

impl<T: RealScalar> Add<&Self> for Poly<T> {
    type Output = Self;

    fn add(self, rhs: &Self) -> Self::Output {
        &self + rhs
    }
}

impl<T: RealScalar> Add for Poly<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        &self + &rhs
    }
}

impl<T: RealScalar> Sub<&Poly<T>> for &Poly<T> {
    type Output = Poly<T>;

    fn sub(self, rhs: &Poly<T>) -> Self::Output {
        zip_aligned(self, rhs, |l, r| l - r)
    }
}

impl<T: RealScalar> Sub<Poly<T>> for &Poly<T> {
    type Output = Poly<T>;

    fn sub(self, rhs: Poly<T>) -> Self::Output {
        self - &rhs
    }
}

impl<T: RealScalar> Sub<&Self> for Poly<T> {
    type Output = Self;

    fn sub(self, rhs: &Self) -> Self::Output {
        &self - rhs
    }
}

impl<T: RealScalar> Sub for Poly<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        &self - &rhs
    }
}

impl<T: RealScalar> Neg for Poly<T> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(self.0.into_iter().map(|c| -c).collect_vec())
    }
}

impl<T: RealScalar> Mul<&Poly<T>> for &Poly<T> {
    type Output = Poly<T>;

    fn mul(self, rhs: &Poly<T>) -> Self::Output {
        debug_assert!(self.is_normalized());
        debug_assert!(rhs.is_normalized());

        if self.is_zero() || rhs.is_zero() {
            return Poly::zero();
        }

        let mut coeffs = vec![T::zero(); self.len_raw() + rhs.len_raw() - 1];
        for (i, &a) in self.0.iter().enumerate() {
            for (j, &b) in rhs.0.iter().enumerate() {
                coeffs[i + j] = coeffs[i + j] + a * b;
            }
        }
        Poly(coeffs).normalize()
    }
}

impl<T: RealScalar> Mul for Poly<T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        &self * &rhs
    }
}

impl<T: RealScalar> Mul<&Self> for Poly<T> {
    type Output = Self;

    fn mul(self, rhs: &Self) -> Self::Output {
        &self * rhs
    }
}

/// Scale every coefficient
impl<T: RealScalar> Mul<T> for &Poly<T> {
    type Output = Poly<T>;

    fn mul(self, rhs: T) -> Self::Output {
        Poly(self.0.iter().map(|&c| c * rhs).collect_vec()).normalize()
    }
}

impl<T: RealScalar> Mul<T> for Poly<T> {
    type Output = Self;

    fn mul(self, rhs: T) -> Self::Output {
        &self * rhs
    }
}
