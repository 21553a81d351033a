use num::Complex;

use crate::{
    roots::cauchy_lower_bound, util::casting::f64_to_scalar, Error, Poly, QuadraticMonomial,
    RealScalar,
};

use super::{
    linear_shift::linear_shift,
    quadratic_shift::quadratic_shift,
    recurrence::{Normalization, ScalarSet},
    Deflation, JenkinsTraub, ShiftOutcome,
};

const INITIAL_PHASE_DEGREES: f64 = -45.0;
const PHASE_ROTATION_DEGREES: f64 = 94.0;
/// The budget of attempt `i` is `i` times this.
const ITERATIONS_PER_ATTEMPT: usize = 20;
const INITIAL_BETA: f64 = 0.25;
const BETA_TIGHTENING: f64 = 0.25;

/// Second stage, repeated with shifts of the same modulus and rotated
/// phases until one of them leads to a root.
///
/// `k` is the result of the first stage, every attempt starts from it.
pub(super) fn shift_attempts<T: RealScalar>(
    p: &Poly<T>,
    k: &Poly<T>,
    config: &JenkinsTraub<T>,
) -> Result<Deflation<T>, Error> {
    let bound = cauchy_lower_bound(p);
    let mut phase = INITIAL_PHASE_DEGREES;
    for attempt in 1..=config.max_shift_attempts {
        phase += PHASE_ROTATION_DEGREES;
        let s1 = Complex::from_polar(bound, f64_to_scalar::<T>(phase).to_radians());
        let shift = QuadraticMonomial::new(
            -(s1.re + s1.re),
            config.shift_constant_term.apply(s1),
        );
        log::trace!("{{attempt: {attempt}, shift: {shift:?}}}");

        let budget = ITERATIONS_PER_ATTEMPT * attempt;
        if let ShiftOutcome::Converged(deflation) =
            fixed_shift(p, k, shift, s1.re, budget, config)
        {
            return Ok(deflation);
        }
        log::debug!("shift did not converge {{attempt: {attempt}, degree: {}}}", p.degree());
    }
    Err(Error::ExhaustedShiftAttempts {
        degree: p.degree(),
        attempts: config.max_shift_attempts,
    })
}

/// Tests applied to the sequences of root estimates of the fixed-shift
/// iteration, deciding when to switch to a variable shift.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(super) struct ConvergenceTracker<T> {
    oss: T,
    ovv: T,
    ots: T,
    otv: T,
    betas: T,
    betav: T,
}

/// The estimates that passed a convergence test in one iteration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(super) struct Passes<T> {
    spass: bool,
    vpass: bool,
    tss: T,
    tvv: T,
}

impl<T: RealScalar> ConvergenceTracker<T> {
    pub(super) fn new(shift_re: T, v: T) -> Self {
        let beta = f64_to_scalar(INITIAL_BETA);
        Self {
            oss: shift_re,
            ovv: v,
            ots: T::one(),
            otv: T::one(),
            betas: beta,
            betav: beta,
        }
    }

    /// Record the estimates `ss` of a real root and `vv` of the constant term
    /// of a quadratic factor, returning which of them appear to converge.
    ///
    /// Two consecutive relative changes must both decrease and their product
    /// must be below the current threshold.
    pub(super) fn observe(
        &mut self,
        iteration: usize,
        normalization: Normalization,
        ss: T,
        vv: T,
    ) -> Option<Passes<T>> {
        let mut tv = T::one();
        let mut ts = T::one();
        let mut passes = None;
        if iteration != 0 && normalization != Normalization::Unscaled {
            if !vv.is_zero() {
                tv = ((vv - self.ovv) / vv).abs();
            }
            if !ss.is_zero() {
                ts = ((ss - self.oss) / ss).abs();
            }
            let tvv = if tv < self.otv { tv * self.otv } else { T::one() };
            let tss = if ts < self.ots { ts * self.ots } else { T::one() };
            let vpass = tvv < self.betav;
            let spass = tss < self.betas;
            if vpass || spass {
                passes = Some(Passes {
                    spass,
                    vpass,
                    tss,
                    tvv,
                });
            }
        }
        self.ovv = vv;
        self.oss = ss;
        self.otv = tv;
        self.ots = ts;
        passes
    }

    fn tighten_linear(&mut self) {
        self.betas = self.betas * f64_to_scalar(BETA_TIGHTENING);
    }

    fn tighten_quadratic(&mut self) {
        self.betav = self.betav * f64_to_scalar(BETA_TIGHTENING);
    }
}

/// Fixed-shift iteration with the quadratic `shift`, whose roots have real
/// part `shift_re`. Switches to a variable-shift iteration as soon as the
/// estimates of a real root or a quadratic factor settle.
pub(super) fn fixed_shift<T: RealScalar>(
    p: &Poly<T>,
    k: &Poly<T>,
    shift: QuadraticMonomial<T>,
    shift_re: T,
    budget: usize,
    config: &JenkinsTraub<T>,
) -> ShiftOutcome<T> {
    let (qp, a, b) = p.div_quadratic(&shift);
    let mut k = k.clone();
    let mut scalars = ScalarSet::compute(a, b, &k, &shift);
    let mut tracker = ConvergenceTracker::new(shift_re, shift.v);

    for iteration in 0..budget {
        // calculate next K polynomial and estimate v
        k = scalars.next_k(&qp);
        scalars = ScalarSet::compute(a, b, &k, &shift);
        let estimate = scalars
            .estimate_uv(p, &k)
            .unwrap_or_else(|| QuadraticMonomial::new(T::zero(), T::zero()));

        // estimate s
        let ss = if k.constant().is_zero() {
            T::zero()
        } else {
            -p.constant() / k.constant()
        };

        let Some(passes) = tracker.observe(iteration, scalars.normalization, ss, estimate.v)
        else {
            continue;
        };
        log::trace!("fixed shift settled {{iteration: {iteration}, passes: {passes:?}}}");
        if let Some(deflation) =
            try_variable_shifts(p, &k, ss, estimate, passes, &mut tracker, config)
        {
            return ShiftOutcome::Converged(deflation);
        }
        // K is unchanged, the variable shifts worked on copies
        scalars = ScalarSet::compute(a, b, &k, &shift);
    }
    ShiftOutcome::NotConverged
}

enum Trial<T: RealScalar> {
    Linear { shift: T, k: Poly<T> },
    Quadratic { shift: QuadraticMonomial<T>, k: Poly<T> },
    Settle,
}

/// Try the variable-shift iterations whose estimates passed, the most
/// promising first. Every iteration starts from `k`, except a quadratic
/// iteration started from a stalled real one, which continues with the K
/// polynomial the real iteration left behind.
fn try_variable_shifts<T: RealScalar>(
    p: &Poly<T>,
    k: &Poly<T>,
    ss: T,
    estimate: QuadraticMonomial<T>,
    passes: Passes<T>,
    tracker: &mut ConvergenceTracker<T>,
    config: &JenkinsTraub<T>,
) -> Option<Deflation<T>> {
    let mut vtry = false;
    let mut stry = false;
    let mut trial = if passes.spass && (!passes.vpass || passes.tss < passes.tvv) {
        Trial::Linear {
            shift: ss,
            k: k.clone(),
        }
    } else {
        Trial::Quadratic {
            shift: estimate,
            k: k.clone(),
        }
    };

    loop {
        trial = match trial {
            Trial::Quadratic { shift, k: k_trial } => {
                vtry = true;
                if let ShiftOutcome::Converged(deflation) =
                    quadratic_shift(p, &k_trial, shift, config)
                {
                    return Some(deflation);
                }
                // quadratic iteration has failed, flag that it has been
                // tried and decrease the convergence criterion
                tracker.tighten_quadratic();
                if stry || !passes.spass {
                    Trial::Settle
                } else {
                    Trial::Linear {
                        shift: ss,
                        k: k.clone(),
                    }
                }
            }
            Trial::Linear { shift, k: k_trial } => {
                let outcome = linear_shift(p, &k_trial, shift, config.linear_shift_iterations);
                stry = true;
                match outcome {
                    ShiftOutcome::Converged(deflation) => return Some(deflation),
                    ShiftOutcome::NearRealAxis { shift, k } => {
                        tracker.tighten_linear();
                        Trial::Quadratic {
                            shift: QuadraticMonomial::double_root(shift),
                            k,
                        }
                    }
                    ShiftOutcome::NotConverged => {
                        tracker.tighten_linear();
                        Trial::Settle
                    }
                }
            }
            Trial::Settle => {
                // try quadratic iteration if it has not been tried and the
                // v sequence is converging
                if passes.vpass && !vtry {
                    Trial::Quadratic {
                        shift: estimate,
                        k: k.clone(),
                    }
                } else {
                    return None;
                }
            }
        };
    }
}

#[cfg(test)]
mod test {
    use crate::{roots::JenkinsTraub, Error, Poly, Poly64, QuadraticMonomial};

    use super::{
        super::{no_shift::no_shift_k, recurrence::Normalization, ShiftOutcome},
        fixed_shift, shift_attempts, try_variable_shifts, ConvergenceTracker, Passes,
    };

    #[test]
    fn tracker_skips_first_iteration() {
        let mut tracker = ConvergenceTracker::new(1.0, 1.0);
        assert_eq!(
            tracker.observe(0, Normalization::DividedByC, 1.0, 1.0),
            None
        );
    }

    #[test]
    fn tracker_detects_settling_root() {
        let mut tracker = ConvergenceTracker::new(1.0, 1.0);
        assert_eq!(
            tracker.observe(0, Normalization::DividedByC, 1.1, 1.1),
            None
        );
        let passes = tracker
            .observe(1, Normalization::DividedByC, 1.01, 2.0)
            .unwrap();
        assert!(passes.spass);
        assert!(!passes.vpass);
    }

    #[test]
    fn tracker_ignores_unscaled() {
        let mut tracker = ConvergenceTracker::new(1.0, 1.0);
        let _ = tracker.observe(0, Normalization::DividedByD, 1.1, 1.1);
        assert_eq!(
            tracker.observe(1, Normalization::Unscaled, 1.1, 1.1),
            None
        );
    }

    #[test]
    fn tracker_requires_decreasing_changes() {
        let mut tracker = ConvergenceTracker::new(1.0, 1.0);
        let _ = tracker.observe(0, Normalization::DividedByD, 2.0, 2.0);
        // changes by 50%, product with the previous change of 1 is too big
        assert_eq!(
            tracker.observe(1, Normalization::DividedByD, 4.0, 4.0),
            None
        );
    }

    #[test]
    fn finds_complex_pair() {
        // (x^2 + 1)(x - 3)
        let p = poly![1.0_f64, -3.0, 1.0, -3.0];
        let k = no_shift_k(&p, 5);
        let shift = QuadraticMonomial::new(0.1, 1.2);
        let config = JenkinsTraub::default();
        let ShiftOutcome::Converged(deflation) = fixed_shift(&p, &k, shift, -0.05, 20, &config)
        else {
            panic!("should converge");
        };
        assert!((deflation.roots[0] - complex!(0.0, 1.0)).norm() < 1e-12);
        assert!((deflation.roots[1] - complex!(0.0, -1.0)).norm() < 1e-12);
    }

    #[test]
    fn attempts_find_smallest_root() {
        let p = Poly::from_real_roots(&[0.5_f64, 4.0, -6.0, 9.0]);
        let k = no_shift_k(&p, 5);
        let deflation = shift_attempts(&p, &k, &JenkinsTraub::default()).unwrap();
        assert_eq!(deflation.roots.len(), 1);
        assert!((deflation.roots[0].re - 0.5).abs() < 1e-12);
        assert_eq!(deflation.quotient.degree(), 3);
    }

    #[test]
    fn attempts_exhausted() {
        let p = Poly::from_real_roots(&[0.5, 4.0, -6.0, 9.0]);
        let k = no_shift_k(&p, 5);
        let config = JenkinsTraub::default().with_max_shift_attempts(0);
        assert_eq!(
            shift_attempts(&p, &k, &config),
            Err(Error::ExhaustedShiftAttempts {
                degree: 4,
                attempts: 0
            })
        );
    }

    #[test]
    fn stalled_real_iteration_continues_with_quadratic() {
        // roots -1 +- 0.001i and 5, the real iteration stalls between the pair
        let p: Poly64 =
            QuadraticMonomial::new(2.0, 1.000_001).to_poly() * Poly::from_real_roots(&[5.0]);
        let k = no_shift_k(&p, 5);
        let passes = Passes {
            spass: true,
            vpass: false,
            tss: 0.0,
            tvv: 1.0,
        };
        let mut tracker = ConvergenceTracker::new(-0.9, 1.0);
        let deflation = try_variable_shifts(
            &p,
            &k,
            -0.9,
            QuadraticMonomial::new(0.0, 0.0),
            passes,
            &mut tracker,
            &JenkinsTraub::default(),
        )
        .unwrap();
        // only the quadratic iteration deflates two roots
        assert_eq!(deflation.roots.len(), 2);
        assert!(
            (deflation.roots[0] - complex!(-1.0, 0.001)).norm() < 1e-9
                || (deflation.roots[0] - complex!(-1.0, -0.001)).norm() < 1e-9,
            "{:?}",
            deflation.roots
        );
        assert_eq!(deflation.roots[1], deflation.roots[0].conj());
        assert!((deflation.quotient.constant() + 5.0).abs() < 1e-9);
    }
}
