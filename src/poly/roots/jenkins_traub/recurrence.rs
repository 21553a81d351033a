//! Scalars shared by the K polynomial recurrence and the estimate of the
//! next quadratic factor.

use crate::{util::casting::f64_to_scalar, Poly, QuadraticMonomial, RealScalar};

/// Which remainder coefficient of K the scalars were divided by.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum Normalization {
    DividedByC,
    DividedByD,

    /// The shift is (numerically) a factor of K.
    Unscaled,
}

/// Per-iteration scalars for a fixed `P`, `K` and quadratic shift.
///
/// `a`, `b` are the remainder of `P` and `c`, `d` the remainder of `K` after
/// division by the shift, both written as `b*(x + u) + a`.
#[derive(Clone, Debug)]
pub(super) struct ScalarSet<T: RealScalar> {
    pub(super) normalization: Normalization,
    a: T,
    b: T,
    c: T,
    d: T,
    f: T,
    g: T,
    h: T,
    a1: T,
    a3: T,
    a7: T,
    shift: QuadraticMonomial<T>,
    k_quotient: Poly<T>,
}

impl<T: RealScalar> ScalarSet<T> {
    /// `a` and `b` are the remainder of dividing `P` by `shift`.
    #[allow(clippy::many_single_char_names)]
    pub(super) fn compute(a: T, b: T, k: &Poly<T>, shift: &QuadraticMonomial<T>) -> Self {
        let (k_quotient, c, d) = k.div_quadratic(shift);
        let QuadraticMonomial { u, v } = *shift;
        let hundred_eps = f64_to_scalar::<T>(100.0) * T::epsilon();

        let zero = T::zero();
        let unscaled = Self {
            normalization: Normalization::Unscaled,
            a,
            b,
            c,
            d,
            f: zero,
            g: zero,
            h: zero,
            a1: zero,
            a3: zero,
            a7: zero,
            shift: *shift,
            k_quotient,
        };

        if c.abs() <= hundred_eps * k.constant().abs() && d.abs() <= hundred_eps * k.coeff(1).abs()
        {
            return unscaled;
        }

        let h = v * b;
        if d.abs() >= c.abs() {
            let e = a / d;
            let f = c / d;
            let g = u * b;
            Self {
                normalization: Normalization::DividedByD,
                f,
                g,
                h,
                a1: b * f - a,
                a3: (a + g) * e + h * (b / d),
                a7: (f + u) * a + h,
                ..unscaled
            }
        } else {
            let e = a / c;
            let f = d / c;
            let g = u * e;
            Self {
                normalization: Normalization::DividedByC,
                f,
                g,
                h,
                a1: b - a * (d / c),
                a3: a * e + (h / c + g) * b,
                a7: a + g * d + h * f,
                ..unscaled
            }
        }
    }

    /// The next K polynomial, given the quotient of `P` by the shift.
    pub(super) fn next_k(&self, p_quotient: &Poly<T>) -> Poly<T> {
        if self.normalization == Normalization::Unscaled {
            // use unscaled form of the recurrence
            return self.k_quotient.clone();
        }

        let ten_eps = f64_to_scalar::<T>(10.0) * T::epsilon();
        let t = if self.normalization == Normalization::DividedByC {
            self.b
        } else {
            self.a
        };
        if self.a1.abs() > ten_eps * t.abs() {
            // use scaled form of the recurrence
            let a7 = self.a7 / self.a1;
            let a3 = self.a3 / self.a1;
            &self.k_quotient * a3 - p_quotient * a7 + p_quotient.shift_up(1) + Poly::new(&[self.b])
        } else {
            // a1 is nearly zero, K is almost a multiple of the quotient of P
            &self.k_quotient * self.a3 - p_quotient * self.a7
        }
    }

    /// Estimate of the next quadratic factor, for the given `P` and the `K`
    /// these scalars were computed from.
    ///
    /// Returns `None` when no estimate is possible.
    pub(super) fn estimate_uv(&self, p: &Poly<T>, k: &Poly<T>) -> Option<QuadraticMonomial<T>> {
        let QuadraticMonomial { u, v } = self.shift;
        let Self {
            a,
            b,
            c,
            d,
            f,
            g,
            h,
            a1,
            a3,
            a7,
            ..
        } = *self;

        let (a4, a5) = match self.normalization {
            Normalization::Unscaled => return None,
            Normalization::DividedByD => ((a + g) * f + h, (f + u) * c + v * d),
            Normalization::DividedByC => (a + u * b + h * f, c + (u + v * f) * d),
        };

        // evaluate new quadratic coefficients
        let b1 = -k.constant() / p.constant();
        let b2 = -(k.coeff(1) + b1 * p.coeff(1)) / p.constant();
        let c1 = v * b2 * a1;
        let c2 = b1 * a7;
        let c3 = b1 * b1 * a3;
        let c4 = c1 - c2 - c3;
        let den = a5 + b1 * a4 - c4;
        if den.is_zero() {
            return None;
        }
        Some(QuadraticMonomial::new(
            u - (u * (c3 + c2) + v * (b1 * a1 + b2 * a7)) / den,
            v * (T::one() + c4 / den),
        ))
    }
}

#[cfg(test)]
mod test {
    use crate::{Poly, QuadraticMonomial};

    use super::{super::no_shift::no_shift_k, Normalization, ScalarSet};

    #[test]
    fn unscaled_when_shift_divides_k() {
        let k = poly![1.0, -3.0, 2.0];
        let shift = QuadraticMonomial::new(-3.0, 2.0);
        let p = poly![1.0, -6.0, 11.0, -6.0];
        let (qp, a, b) = p.div_quadratic(&shift);
        let scalars = ScalarSet::compute(a, b, &k, &shift);
        assert_eq!(scalars.normalization, Normalization::Unscaled);
        assert_eq!(scalars.next_k(&qp), poly![1.0]);
        assert_eq!(scalars.estimate_uv(&p, &k), None);
    }

    #[test]
    fn normalization_choice() {
        let shift = QuadraticMonomial::new(0.0, 0.0);
        let p = poly![1.0, 2.0, 3.0, 4.0];
        let (_, a, b) = p.div_quadratic(&shift);

        // remainder of K is x*0 + 1, so d = 0 < c = 1
        let k = poly![1.0, 0.0, 1.0];
        let scalars = ScalarSet::compute(a, b, &k, &shift);
        assert_eq!(scalars.normalization, Normalization::DividedByC);

        // remainder of K is 2x + 1
        let k = poly![1.0, 2.0, 1.0];
        let scalars = ScalarSet::compute(a, b, &k, &shift);
        assert_eq!(scalars.normalization, Normalization::DividedByD);
    }

    #[test]
    fn next_k_keeps_degree() {
        // the scaled recurrence keeps the leading coefficient of P
        let p = Poly::from_real_roots(&[1.0, 2.0, -3.0, 5.0]) * 2.0;
        let shift = QuadraticMonomial::new(0.5, 1.5);
        let (qp, a, b) = p.div_quadratic(&shift);
        let k = poly![2.0, 1.0, -1.0, 0.5];
        let scalars = ScalarSet::compute(a, b, &k, &shift);
        let next = scalars.next_k(&qp);
        assert_eq!(next.degree(), 3);
        assert_eq!(next.leading(), 2.0);
    }

    #[test]
    fn estimate_converges_to_factor() {
        // (x^2 + 1)(x - 3), with a fixed shift close to x^2 + 1
        let p = poly![1.0_f64, -3.0, 1.0, -3.0];
        let shift = QuadraticMonomial::new(0.1, 1.2);
        let (qp, a, b) = p.div_quadratic(&shift);
        let mut k = no_shift_k(&p, 5);
        let mut scalars = ScalarSet::compute(a, b, &k, &shift);
        for _ in 0..4 {
            k = scalars.next_k(&qp);
            scalars = ScalarSet::compute(a, b, &k, &shift);
        }
        let estimate = scalars.estimate_uv(&p, &k).unwrap();
        assert!(estimate.u.abs() < 1e-9, "{estimate:?}");
        assert!((estimate.v - 1.0).abs() < 1e-9, "{estimate:?}");
    }
}
