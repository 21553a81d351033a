use crate::{
    util::casting::{f64_to_scalar, usize_to_scalar},
    Poly, RealScalar,
};

/// First stage: compute the K polynomial without a shift.
///
/// Starts from the scaled derivative and accentuates the smallest roots.
/// The leading coefficient of the result is the leading coefficient of `p`.
pub(super) fn no_shift_k<T: RealScalar>(p: &Poly<T>, iterations: usize) -> Poly<T> {
    debug_assert!(p.degree() >= 1);

    let n = p.degree();
    let mut coeffs = (p.diff() * usize_to_scalar::<T>(n).recip()).to_vec();
    // exact, rather than the rounded n * p0 / n
    coeffs[0] = p.leading();
    let mut k = Poly::from_vec(coeffs);

    let aa = p.constant();
    let bb = p.coeff(1);
    let ten_eps = f64_to_scalar::<T>(10.0) * T::epsilon();
    let mut zerok = k.constant().is_zero();
    for _ in 0..iterations {
        if zerok {
            // use unscaled form of the recurrence
            k = k.shift_down(1);
            zerok = k.constant().is_zero();
        } else {
            // use scaled form of the recurrence if the constant term of K is
            // not too small
            let t = -aa / k.constant();
            k = (p + &k * t).shift_down(1);
            zerok = k.constant().abs() <= bb.abs() * ten_eps;
        }
    }
    log::trace!("{{no_shift_k: {k}}}");
    k
}

#[cfg(test)]
mod test {
    use crate::Poly;

    use super::no_shift_k;

    #[test]
    fn scaled_derivative() {
        let p = poly![2.0, -12.0, 22.0, -12.0];
        let k = no_shift_k(&p, 0);
        assert_eq!(k, poly![2.0, -8.0, 22.0 / 3.0]);
    }

    #[test]
    fn keeps_degree_and_leading() {
        let p = Poly::from_real_roots(&[0.5, 2.0, -3.0, 4.0]) * 3.0;
        let k = no_shift_k(&p, 5);
        assert_eq!(k.degree(), 3);
        assert_eq!(k.leading(), 3.0);
    }

    #[test]
    fn approaches_smallest_root() {
        // K tends to P / (x - r) for the smallest root r
        let p = Poly::from_real_roots(&[0.1_f64, 2.0, -3.0]);
        let k = no_shift_k(&p, 5);
        let ratio = -p.constant() / k.constant();
        assert!((ratio - 0.1).abs() < 1e-3, "{ratio}");
    }

    #[test]
    fn zero_constant_in_k() {
        // x^3 + 1 starts from K = x^2, whose zero constant term is dropped
        let p = poly![1.0, 0.0, 0.0, 1.0];
        let k = no_shift_k(&p, 1);
        assert_eq!(k, poly![1.0, 0.0]);
    }
}
