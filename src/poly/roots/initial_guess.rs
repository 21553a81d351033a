use itertools::Itertools;

use crate::{
    util::{
        casting::{f64_to_scalar, usize_to_scalar},
        doc_macros::panic_t_from_f64,
    },
    Poly, RealScalar,
};

/// Newton steps are only a safeguard, the iteration typically stops after
/// a handful of steps.
const MAX_NEWTON_STEPS: usize = 100;

/// Lower bound on the moduli of the roots of a polynomial.
///
/// This is the unique positive root of the Cauchy polynomial, which is
/// obtained by taking the absolute value of all coefficients and negating
/// the constant term. It is computed with a few Newton steps, to a relative
/// accuracy of about half a percent.
///
/// The polynomial must have degree 1 or more and a non-zero constant term.
///
/// ```
/// use rpoly::{poly, roots::cauchy_lower_bound};
///
/// // roots are 1, 2 and 3
/// let bound = cauchy_lower_bound(&poly![1.0_f64, -6.0, 11.0, -6.0]);
/// assert!(bound > 0.0 && bound <= 1.0);
/// ```
///
/// # Panics
#[doc = panic_t_from_f64!()]
#[must_use]
pub fn cauchy_lower_bound<T: RealScalar>(poly: &Poly<T>) -> T {
    debug_assert!(poly.is_normalized());
    debug_assert!(poly.degree() >= 1);

    let n = poly.degree();
    let mut coeffs = poly.iter().map(|c| c.abs()).collect_vec();
    coeffs[n] = -coeffs[n];
    let cauchy = Poly::from_vec(coeffs);

    let tenth = f64_to_scalar::<T>(0.1);
    let tolerance = f64_to_scalar::<T>(0.005);

    // upper estimate of the positive root
    let constant = -cauchy.constant();
    let mut x = ((constant.ln() - cauchy.leading().ln()) / usize_to_scalar(n)).exp();
    let linear = cauchy.coeff(1);
    if !linear.is_zero() {
        x = x.min(constant / linear);
    }

    // shrink the estimate until the sign of the Cauchy polynomial changes
    loop {
        let xm = x * tenth;
        if cauchy.eval(xm) <= T::zero() {
            break;
        }
        x = xm;
    }

    // Newton, the derivative is the quotient of the Horner division
    let mut dx = x;
    for _ in 0..MAX_NEWTON_STEPS {
        if (dx / x).abs() <= tolerance {
            break;
        }
        let (quotient, value) = cauchy.div_linear(x);
        dx = value / quotient.eval(x);
        x = x - dx;
    }
    log::trace!("cauchy lower bound {{bound: {x}}}");
    x
}
