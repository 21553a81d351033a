use num::Complex;

use crate::{util::casting::f64_to_scalar, Poly, QuadraticMonomial, RealScalar};

use super::{
    linear_shift::linear_shift, recurrence::ScalarSet, Deflation, JenkinsTraub, ShiftOutcome,
};

/// Variable-shift iteration for a quadratic factor, starting at `shift`.
///
/// Converges to a pair of complex conjugate roots, or two real roots of
/// (almost) equal modulus. A real pair is only accepted when `p` is small
/// at both roots. When the roots of the shift are real with distinct moduli,
/// or only the smaller one is a root of `p`, the smaller one is refined with
/// a real iteration instead.
#[allow(clippy::similar_names)]
pub(super) fn quadratic_shift<T: RealScalar>(
    p: &Poly<T>,
    k: &Poly<T>,
    shift: QuadraticMonomial<T>,
    config: &JenkinsTraub<T>,
) -> ShiftOutcome<T> {
    let eps = T::epsilon();
    let twenty = f64_to_scalar::<T>(20.0);
    let hundredth = f64_to_scalar::<T>(0.01);

    let mut k = k.clone();
    let mut shift = shift;
    let mut jolt = JoltGuard::default();
    let mut relstp = T::zero();
    let mut omp = T::zero();
    let mut iteration = 0;
    loop {
        let (sz, lz) = shift.roots();

        // real roots of different moduli, continue with the smaller one
        if (sz.re.abs() - lz.re.abs()).abs() > hundredth * lz.re.abs() {
            log::trace!("quadratic shift has distinct real roots {{sz: {sz}, lz: {lz}}}");
            return match linear_shift(p, &k, sz.re, config.fallback_linear_iterations) {
                converged @ ShiftOutcome::Converged(_) => converged,
                _ => ShiftOutcome::NotConverged,
            };
        }

        let (mut qp, mut a, mut b) = p.div_quadratic(&shift);

        let (mp, ee) = residual(&qp, a, b, &shift, sz);
        if mp <= twenty * ee {
            let both = !sz.im.is_zero() || {
                let (lmp, lee) = residual(&qp, a, b, &shift, lz);
                lmp <= twenty * lee
            };
            if both {
                log::trace!(
                    "quadratic shift converged {{sz: {sz}, lz: {lz}, iterations: {iteration}}}"
                );
                return ShiftOutcome::Converged(Deflation {
                    roots: vec![sz, lz],
                    quotient: qp,
                });
            }
            // only the smaller real root is resolved, deflate it alone
            log::trace!("quadratic shift resolved one real root {{sz: {sz}, lz: {lz}}}");
            if let converged @ ShiftOutcome::Converged(_) =
                linear_shift(p, &k, sz.re, config.fallback_linear_iterations)
            {
                return converged;
            }
        }

        iteration += 1;
        if iteration > config.quadratic_shift_iterations {
            log::trace!("quadratic shift did not converge {{shift: {shift:?}}}");
            return ShiftOutcome::NotConverged;
        }

        // a cluster of zeros stalls the iteration, jolt it once
        if jolt.fire(iteration, relstp, mp, omp) {
            relstp = relstp.max(eps).sqrt();
            shift = QuadraticMonomial::new(
                shift.u - shift.u * relstp,
                shift.v + shift.v * relstp,
            );
            log::trace!("jolting quadratic shift {{shift: {shift:?}}}");
            (qp, a, b) = p.div_quadratic(&shift);
            for _ in 0..config.jolt_iterations {
                k = ScalarSet::compute(a, b, &k, &shift).next_k(&qp);
            }
            iteration = 0;
        }
        omp = mp;

        // calculate next K polynomial and new shift
        k = ScalarSet::compute(a, b, &k, &shift).next_k(&qp);
        let Some(next) = ScalarSet::compute(a, b, &k, &shift).estimate_uv(p, &k) else {
            return ShiftOutcome::NotConverged;
        };
        // if vi is zero, the iteration is not converging
        if next.v.is_zero() {
            return ShiftOutcome::NotConverged;
        }
        relstp = ((next.v - shift.v) / next.v).abs();
        shift = next;
    }
}

/// Value of `p` at the root `z` of `shift`, computed from the remainder
/// `b(x + u) + a` of the division by the shift, and a bound on the rounding
/// error of that value.
fn residual<T: RealScalar>(
    qp: &Poly<T>,
    a: T,
    b: T,
    shift: &QuadraticMonomial<T>,
    z: Complex<T>,
) -> (T, T) {
    let eps = T::epsilon();
    let two = f64_to_scalar::<T>(2.0);
    let seven = f64_to_scalar::<T>(7.0);
    let nine = f64_to_scalar::<T>(9.0);

    let t = if z.im.is_zero() {
        (z.re + shift.u) * b
    } else {
        -z.re * b
    };
    let mp = (a + t).abs() + (z.im * b).abs();
    let zm = shift.v.abs().sqrt();
    let mut ee = two * qp.leading().abs();
    for c in qp.iter().skip(1).chain([b].iter()) {
        ee = ee * zm + c.abs();
    }
    ee = ee * zm + (a + t).abs();
    ee = nine * eps * ee - seven * eps * ((a + t).abs() + b.abs() * zm) + two * eps * t.abs();
    (mp, ee)
}

/// Stall detection for the quadratic iteration. Fires at most once.
#[derive(Clone, Copy, Debug, Default)]
struct JoltGuard {
    jolted: bool,
}

impl JoltGuard {
    /// `relstp` is the last relative change of `v`, `mp` and `omp` the
    /// current and previous residuals.
    fn fire<T: RealScalar>(&mut self, iteration: usize, relstp: T, mp: T, omp: T) -> bool {
        if self.jolted || iteration < 2 || relstp > f64_to_scalar::<T>(0.01) || mp < omp {
            return false;
        }
        self.jolted = true;
        true
    }
}
