//! Jenkins-Traub root finder for real polynomials.
//!
//! Each deflation step finds one real root or one quadratic factor in three
//! stages: a few iterations without a shift that accentuate the smallest
//! roots in the K polynomial, a fixed-shift stage that waits for either a
//! real or a quadratic iteration to show signs of convergence, and
//! variable-shift iterations that refine the root until the rounding error
//! bound of the evaluation is reached.
//!
//! References:
//! - Jenkins, M.A. and Traub, J.F., "A Three-Stage Algorithm for Real
//!   Polynomials Using Quadratic Iteration", SIAM J. Numer. Anal. 7 (1970)
//! - Jenkins, M.A., "Algorithm 493: Zeros of a Real Polynomial",
//!   ACM TOMS 1 (1975)

use num::Complex;

use crate::{
    util::{
        casting::{f64_to_scalar, scalar_to_i32},
        doc_macros::{errors_root_finder, panic_t_from_f64},
    },
    Error, Poly, RealScalar,
};

use super::{linear_root, quadratic_roots, Result};

mod fixed_shift;
mod linear_shift;
mod no_shift;
mod quadratic_shift;
mod recurrence;

/// Iterations of the first stage, without a shift.
pub const NO_SHIFT_ITERATIONS: usize = 5;
/// Number of fixed shifts tried before giving up on a polynomial.
pub const MAX_SHIFT_ATTEMPTS: usize = 20;
/// Iteration budget of the real variable-shift stage.
pub const LINEAR_SHIFT_ITERATIONS: usize = 10;
/// Iteration budget of the real pass that takes over when a quadratic shift
/// has two real roots of distinct moduli.
pub const FALLBACK_LINEAR_ITERATIONS: usize = 20;
/// Iteration budget of the quadratic variable-shift stage.
pub const QUADRATIC_SHIFT_ITERATIONS: usize = 20;
/// Fixed-shift steps taken when a stalling quadratic iteration is jolted.
pub const JOLT_ITERATIONS: usize = 5;

/// How the constant term `v` of the quadratic `x^2 + ux + v` is derived
/// from the complex shift `s` of each fixed-shift attempt.
///
/// The quadratic with roots `s` and `conj(s)` has `v = |s|^2`, while
/// Algorithm 493 (ACM TOMS) uses `v = |s|`, which is the default. The two
/// only differ in the starting point of the fixed-shift stage.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ShiftConstantTerm {
    #[default]
    Modulus,
    SquaredModulus,
}

impl ShiftConstantTerm {
    fn apply<T: RealScalar>(self, shift: Complex<T>) -> T {
        match self {
            Self::Modulus => shift.norm(),
            Self::SquaredModulus => shift.norm_sqr(),
        }
    }
}

/// Configuration of the Jenkins-Traub root finder.
///
/// The defaults are the iteration counts of Algorithm 493.
///
/// ```
/// use rpoly::{poly, JenkinsTraub};
///
/// let p = poly![1.0, 0.0, 0.0, -1.0];
/// let roots = JenkinsTraub::new()
///     .with_max_shift_attempts(40)
///     .solve(&p)
///     .unwrap();
/// assert_eq!(roots.len(), 3);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct JenkinsTraub<T> {
    origin_epsilon: T,
    no_shift_iterations: usize,
    max_shift_attempts: usize,
    linear_shift_iterations: usize,
    fallback_linear_iterations: usize,
    quadratic_shift_iterations: usize,
    jolt_iterations: usize,
    shift_constant_term: ShiftConstantTerm,
}

impl<T: RealScalar> Default for JenkinsTraub<T> {
    fn default() -> Self {
        Self {
            origin_epsilon: T::zero(),
            no_shift_iterations: NO_SHIFT_ITERATIONS,
            max_shift_attempts: MAX_SHIFT_ATTEMPTS,
            linear_shift_iterations: LINEAR_SHIFT_ITERATIONS,
            fallback_linear_iterations: FALLBACK_LINEAR_ITERATIONS,
            quadratic_shift_iterations: QUADRATIC_SHIFT_ITERATIONS,
            jolt_iterations: JOLT_ITERATIONS,
            shift_constant_term: ShiftConstantTerm::default(),
        }
    }
}

impl<T: RealScalar> JenkinsTraub<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Constant terms with a magnitude up to `epsilon` are treated as roots
    /// at the origin. The default is zero, i.e. only exact zeros.
    #[must_use]
    pub fn with_origin_epsilon(mut self, epsilon: T) -> Self {
        self.origin_epsilon = epsilon;
        self
    }

    #[must_use]
    pub fn with_no_shift_iterations(mut self, iterations: usize) -> Self {
        self.no_shift_iterations = iterations;
        self
    }

    #[must_use]
    pub fn with_max_shift_attempts(mut self, attempts: usize) -> Self {
        self.max_shift_attempts = attempts;
        self
    }

    #[must_use]
    pub fn with_linear_shift_iterations(mut self, iterations: usize) -> Self {
        self.linear_shift_iterations = iterations;
        self
    }

    #[must_use]
    pub fn with_fallback_linear_iterations(mut self, iterations: usize) -> Self {
        self.fallback_linear_iterations = iterations;
        self
    }

    #[must_use]
    pub fn with_quadratic_shift_iterations(mut self, iterations: usize) -> Self {
        self.quadratic_shift_iterations = iterations;
        self
    }

    #[must_use]
    pub fn with_jolt_iterations(mut self, iterations: usize) -> Self {
        self.jolt_iterations = iterations;
        self
    }

    #[must_use]
    pub fn with_shift_constant_term(mut self, term: ShiftConstantTerm) -> Self {
        self.shift_constant_term = term;
        self
    }

    /// Find all the roots of `poly`.
    ///
    /// Roots at the origin come first, followed by the roots in the order
    /// they were deflated, and finally the roots of the last linear or
    /// quadratic factor. The zero polynomial and constants have no roots.
    ///
    /// # Errors
    #[doc = errors_root_finder!()]
    ///
    /// # Panics
    #[doc = panic_t_from_f64!()]
    pub fn solve(&self, poly: &Poly<T>) -> Result<T> {
        debug_assert!(poly.is_normalized());

        if !poly.is_well_formed() {
            return Err(Error::NonFiniteCoefficient);
        }

        let (mut roots, mut this) = poly.zero_roots(self.origin_epsilon);
        log::trace!("{{zero_roots: {}}}", roots.len());

        while this.degree() > 2 {
            let scaled = rescale(&this);
            let k = no_shift::no_shift_k(&scaled, self.no_shift_iterations);
            let deflation = fixed_shift::shift_attempts(&scaled, &k, self)?;
            log::debug!(
                "deflated {} root(s) {{degree: {}, roots: {:?}}}",
                deflation.roots.len(),
                scaled.degree(),
                deflation.roots
            );
            roots.extend(deflation.roots);
            this = deflation.quotient;
        }

        match this.degree() {
            0 => {}
            1 => roots.push(Complex::from(linear_root(this.0[0], this.0[1]))),
            2 => {
                let (sz, lz) = quadratic_roots(this.0[0], this.0[1], this.0[2]);
                roots.extend([sz, lz]);
            }
            degree => return Err(Error::InvalidResidualDegree(degree)),
        }
        Ok(roots)
    }
}

/// Roots found by a variable-shift stage, with the remaining polynomial.
#[derive(Clone, Debug, PartialEq)]
struct Deflation<T: RealScalar> {
    roots: Vec<Complex<T>>,
    quotient: Poly<T>,
}

#[derive(Clone, Debug, PartialEq)]
enum ShiftOutcome<T: RealScalar> {
    Converged(Deflation<T>),
    NotConverged,

    /// A real iteration stalled, which usually means it is approaching a
    /// pair of nearly real complex roots or a double root. Carries the last
    /// shift and the K polynomial reached so far, to continue with a
    /// quadratic iteration.
    NearRealAxis { shift: T, k: Poly<T> },
}

/// Multiply the coefficients by a power of two so that the smallest one is
/// well above the underflow threshold, without the largest one overflowing.
///
/// Roots are unchanged, and the scaling is exact.
fn rescale<T: RealScalar>(poly: &Poly<T>) -> Poly<T> {
    let (min, max) = poly
        .iter()
        .map(|c| c.abs())
        .filter(|c| !c.is_zero())
        .fold((T::max_value(), T::zero()), |(min, max), c| {
            (min.min(c), max.max(c))
        });
    let lo = T::TINY / T::epsilon();
    let mut sc = lo / min;

    let do_scale = if sc > T::one() {
        T::max_value() / sc >= max
    } else if max < f64_to_scalar(10.0) {
        false
    } else {
        if sc.is_zero() {
            sc = T::TINY;
        }
        true
    };
    if !do_scale {
        return poly.clone();
    }

    let exponent = scalar_to_i32(sc.log2().round());
    let factor = (T::one() + T::one()).powi(exponent);
    if factor == T::one() {
        return poly.clone();
    }
    log::trace!("{{scale_factor: {factor}}}");
    poly * factor
}
