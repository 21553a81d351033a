//! Testing utilities, do not depend on any of these in production!

use fastrand::Rng;
use itertools::Itertools;
use num::{complex::Complex64, One, Zero};

use crate::{Poly64, QuadraticMonomial};

struct RandStreamF64 {
    state: Rng,
}

impl RandStreamF64 {
    fn new(seed: u64) -> Self {
        Self {
            state: Rng::with_seed(seed),
        }
    }
}

impl Iterator for RandStreamF64 {
    type Item = f64;

    fn next(&mut self) -> Option<Self::Item> {
        let x = self.state.f64();
        if x < f64::MIN_POSITIVE {
            Some(f64::MIN_POSITIVE)
        } else {
            Some(x)
        }
    }
}

/// Infinite stream of real numbers uniformly distributed in `[min, max)`
pub struct RandStreamR64 {
    real_stream: RandStreamF64,
    min: f64,
    max: f64,
}

impl RandStreamR64 {
    #[must_use]
    pub fn new(seed: u64, min: f64, max: f64) -> Self {
        assert!(min <= max, "minimum should be smaller or equal to maximum");
        Self {
            real_stream: RandStreamF64::new(seed),
            min,
            max,
        }
    }
}

impl Iterator for RandStreamR64 {
    type Item = f64;

    fn next(&mut self) -> Option<Self::Item> {
        Some((self.real_stream.next()?).mul_add(self.max - self.min, self.min))
    }
}

/// Infinite stream of complex numbers with polar coordinates uniformly
/// distributed in the given ranges. Angles are given in turns, i.e. in `[0, 1]`.
pub struct RandStreamC64Polar {
    real_stream: RandStreamF64,
    min_radius: f64,
    max_radius: f64,
    min_angle: f64,
    max_angle: f64,
}

impl RandStreamC64Polar {
    #[must_use]
    pub fn new(
        seed: u64,
        min_radius: f64,
        max_radius: f64,
        min_angle: f64,
        max_angle: f64,
    ) -> Self {
        assert!(
            0.0 <= min_angle && max_angle <= 1.0,
            "angles should be specified in the range [0,1]"
        );
        assert!(
            min_angle <= max_angle,
            "min_angle should be smaller or equal to max_angle"
        );
        assert!(0.0 <= min_radius, "radius should be non-negative");
        assert!(
            min_radius <= max_radius,
            "min_radius should be smaller or equal to max_radius"
        );
        Self {
            real_stream: RandStreamF64::new(seed),
            min_radius,
            max_radius,
            min_angle,
            max_angle,
        }
    }
}

impl Iterator for RandStreamC64Polar {
    type Item = Complex64;

    fn next(&mut self) -> Option<Self::Item> {
        let r =
            (self.real_stream.next()?).mul_add(self.max_radius - self.min_radius, self.min_radius);
        let a = (self.real_stream.next()?).mul_add(self.max_angle - self.min_angle, self.min_angle);
        Some(Complex64::from_polar(r, a * std::f64::consts::TAU))
    }
}

/// Generate one test case with real roots that are known and can be compared
pub fn test_case_roots(
    roots_stream: impl Iterator<Item = f64>,
    mut scale_stream: impl Iterator<Item = f64>,
    degree: usize,
) -> (Poly64, Vec<Complex64>) {
    let roots = roots_stream.take(degree).collect_vec();
    let poly = Poly64::from_real_roots(&roots)
        * scale_stream.next().expect("rng stream should be infinite");
    (poly, roots.into_iter().map(Complex64::from).collect_vec())
}

/// Generate one test case where the roots come in complex conjugate pairs.
/// Odd degrees get one extra real root, taken from the real part of the
/// next complex number in the stream.
pub fn test_case_conj_roots(
    mut roots_stream: impl Iterator<Item = Complex64>,
    mut scale_stream: impl Iterator<Item = f64>,
    degree: usize,
) -> (Poly64, Vec<Complex64>) {
    let mut roots = vec![];
    let mut poly = Poly64::one();
    for _ in 0..degree / 2 {
        let z = roots_stream.next().expect("rng stream should be infinite");
        poly = poly * QuadraticMonomial::new(-2.0 * z.re, z.norm_sqr()).to_poly();
        roots.extend([z, z.conj()]);
    }
    if degree % 2 == 1 {
        let x = roots_stream.next().expect("rng stream should be infinite").re;
        poly = poly * Poly64::from_real_roots(&[x]);
        roots.push(Complex64::from(x));
    }
    let poly = poly * scale_stream.next().expect("rng stream should be infinite");
    (poly, roots)
}

/// Check that all roots have been found
#[must_use]
pub fn check_roots(roots1: Vec<Complex64>, mut roots2: Vec<Complex64>, tol: f64) -> bool {
    if roots1.len() != roots2.len() {
        return false;
    }

    for r1 in roots1 {
        let mut best_idx = 0;
        let mut best_d = f64::MAX;
        for (i, r2) in roots2.iter().enumerate() {
            let d = (r1 - r2).norm();
            if d < best_d {
                best_idx = i;
                best_d = d;
            }
        }
        if best_d > tol {
            return false;
        }
        roots2.remove(best_idx);
    }
    true
}

/// Expand the monic polynomial with the given roots, highest degree first.
#[must_use]
pub fn reconstruct(roots: &[Complex64]) -> Vec<Complex64> {
    let mut coeffs = vec![Complex64::one()];
    for r in roots {
        let mut next = vec![Complex64::zero(); coeffs.len() + 1];
        for (i, c) in coeffs.iter().enumerate() {
            next[i] += c;
            next[i + 1] -= r * c;
        }
        coeffs = next;
    }
    coeffs
}

/// Check that the roots multiply back to the polynomial, up to a tolerance
/// relative to the largest coefficient of the monic polynomial.
#[must_use]
pub fn check_reconstruction(poly: &Poly64, roots: &[Complex64], tol: f64) -> bool {
    if roots.len() != poly.degree() {
        return false;
    }
    let leading = poly.leading();
    let scale = poly
        .iter()
        .fold(0.0f64, |acc, c| acc.max((c / leading).abs()));
    reconstruct(roots)
        .iter()
        .zip(poly.iter())
        .all(|(r, c)| (*r - c / leading).norm() <= tol * scale)
}
