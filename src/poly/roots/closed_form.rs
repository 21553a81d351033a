use num::{Complex, Zero};

use crate::RealScalar;

/// Root of `ax + b`.
///
/// ```
/// use rpoly::roots::linear_root;
///
/// assert_eq!(linear_root(2.0, -6.0), 3.0);
/// ```
#[must_use]
pub fn linear_root<T: RealScalar>(a: T, b: T) -> T {
    -b / a
}

/// Roots of `ax^2 + bx + c`, the one with the smaller modulus first.
///
/// Avoids both the cancellation of the textbook formula and the overflow of
/// `b^2` for large coefficients. Complex roots are returned as a conjugate
/// pair, positive imaginary part first. If `a` is zero, the single root of
/// the remaining linear polynomial is returned first and the second root is
/// zero.
///
/// ```
/// use rpoly::roots::quadratic_roots;
///
/// // x^2 + 1
/// let (sz, lz) = quadratic_roots(1.0, 0.0, 1.0);
/// assert_eq!((sz.im, lz.im), (1.0, -1.0));
/// ```
#[must_use]
pub fn quadratic_roots<T: RealScalar>(a: T, b: T, c: T) -> (Complex<T>, Complex<T>) {
    if a.is_zero() {
        let sr = if b.is_zero() { T::zero() } else { -(c / b) };
        return (Complex::from(sr), Complex::zero());
    }
    if c.is_zero() {
        return (Complex::zero(), Complex::from(-(b / a)));
    }

    // discriminant computed as a multiple of either b^2 or c
    let half_b = b / (T::one() + T::one());
    let (e, d) = if half_b.abs() < c.abs() {
        let signed_a = if c >= T::zero() { a } else { -a };
        let e = half_b * (half_b / c.abs()) - signed_a;
        (e, e.abs().sqrt() * c.abs().sqrt())
    } else {
        let e = T::one() - (a / half_b) * (c / half_b);
        (e, e.abs().sqrt() * half_b.abs())
    };

    if e >= T::zero() {
        // real roots, the sign of d matches -b to avoid cancellation
        let d = if half_b >= T::zero() { -d } else { d };
        let lr = (-half_b + d) / a;
        let sr = if lr.is_zero() { T::zero() } else { (c / lr) / a };
        (Complex::from(sr), Complex::from(lr))
    } else {
        let re = -(half_b / a);
        let im = (d / a).abs();
        (Complex::new(re, im), Complex::new(re, -im))
    }
}
