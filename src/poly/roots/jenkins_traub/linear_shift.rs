use num::Complex;

use crate::{util::casting::f64_to_scalar, Poly, RealScalar};

use super::{Deflation, ShiftOutcome};

/// Variable-shift iteration for a real root, starting at `shift`.
///
/// Stops when the value of `p` is within the rounding error of its
/// evaluation, which is bounded with the moduli of the Horner partial sums.
/// A stalling iteration is reported as [`ShiftOutcome::NearRealAxis`],
/// together with the K polynomial reached so far.
pub(super) fn linear_shift<T: RealScalar>(
    p: &Poly<T>,
    k: &Poly<T>,
    shift: T,
    max_iter: usize,
) -> ShiftOutcome<T> {
    let eps = T::epsilon();
    let ten_eps = f64_to_scalar::<T>(10.0) * eps;
    let twenty_eps = f64_to_scalar::<T>(20.0) * eps;
    let half = f64_to_scalar::<T>(0.5);
    let stall = f64_to_scalar::<T>(0.001);

    let mut k = k.clone();
    let mut s = shift;
    let mut t = T::zero();
    let mut omp = T::zero();
    let mut iteration = 0;
    loop {
        let (qp, pv) = p.div_linear(s);
        let mp = pv.abs();

        // bound on the rounding error of the evaluation
        let ms = s.abs();
        let mut ee = half * qp.leading().abs();
        for c in qp.iter().skip(1).chain([pv].iter()) {
            ee = ee * ms + c.abs();
        }

        if mp <= twenty_eps * (ee + ee - mp) {
            log::trace!("linear shift converged {{root: {s}, iterations: {iteration}}}");
            return ShiftOutcome::Converged(Deflation {
                roots: vec![Complex::from(s)],
                quotient: qp,
            });
        }

        iteration += 1;
        if iteration > max_iter {
            log::trace!("linear shift did not converge {{shift: {s}}}");
            return ShiftOutcome::NotConverged;
        }

        // a cluster of zeros near the real axis has been encountered
        if iteration >= 2 && t.abs() <= stall * (s - t).abs() && mp > omp {
            log::trace!("linear shift stalled {{shift: {s}}}");
            return ShiftOutcome::NearRealAxis { shift: s, k };
        }
        omp = mp;

        let (qk, kv) = k.div_linear(s);
        k = if kv.abs() <= k.constant().abs() * ten_eps {
            qk
        } else {
            qp + qk * (-pv / kv)
        };
        let kv = k.eval(s);
        t = if kv.abs() > k.constant().abs() * ten_eps {
            -pv / kv
        } else {
            T::zero()
        };
        s = s + t;
    }
}

#[cfg(test)]
mod test {
    use crate::{Poly, Poly64, QuadraticMonomial};

    use super::{super::no_shift::no_shift_k, linear_shift, ShiftOutcome};

    #[test]
    fn exact_root() {
        let p = Poly::from_real_roots(&[1.0, 2.0, 3.0]);
        let k = no_shift_k(&p, 5);
        let ShiftOutcome::Converged(deflation) = linear_shift(&p, &k, 3.0, 10) else {
            panic!("should converge immediately");
        };
        assert_eq!(deflation.roots, vec![complex!(3.0)]);
        assert_eq!(deflation.quotient, poly![1.0, -3.0, 2.0]);
    }

    #[test]
    fn converges_from_nearby_shift() {
        let p = Poly::from_real_roots(&[1.0_f64, 2.0, 3.0]);
        let k = no_shift_k(&p, 5);
        let ShiftOutcome::Converged(deflation) = linear_shift(&p, &k, 0.9, 10) else {
            panic!("should converge");
        };
        assert!((deflation.roots[0].re - 1.0).abs() < 1e-12);
        assert_eq!(deflation.quotient.degree(), 2);
    }

    #[test]
    fn budget() {
        let p = Poly::from_real_roots(&[1.0, 2.0, 3.0]);
        let k = no_shift_k(&p, 5);
        assert_eq!(linear_shift(&p, &k, 0.9, 0), ShiftOutcome::NotConverged);
    }

    #[test]
    fn stalls_near_complex_pair() {
        // roots -1 +- 0.001i and 5
        let p: Poly64 =
            QuadraticMonomial::new(2.0, 1.000_001).to_poly() * Poly::from_real_roots(&[5.0]);
        let k = no_shift_k(&p, 5);
        let ShiftOutcome::NearRealAxis { shift, k } = linear_shift(&p, &k, -0.9, 10) else {
            panic!("should stall next to the pair");
        };
        assert!((shift + 1.0).abs() < 1e-2, "{shift}");
        assert_eq!(k.degree(), 2);
    }
}
