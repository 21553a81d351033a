//! Find all the roots of a polynomial with real coefficients.
//!
//! The root finder is the Jenkins-Traub three stage algorithm in its variant
//! for real polynomials, where complex conjugate pairs are found together as
//! quadratic factors so that no complex arithmetic is needed while iterating.
//!
//! ```
//! use rpoly::{poly, Poly64};
//!
//! // (x - 1)(x - 2)(x - 3)
//! let p: Poly64 = poly![1.0, -6.0, 11.0, -6.0];
//! let roots = p.roots().unwrap();
//! assert_eq!(roots.len(), 3);
//! ```
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Build a polynomial from its coefficients, from the highest degree down
/// to the constant term.
///
/// ```
/// use rpoly::{poly, Poly};
///
/// // x^2 - 6x - 3
/// let p = poly![1.0, -6.0, -3.0];
/// assert_eq!(p.degree(), 2);
/// assert_eq!(p, Poly::new(&[1.0, -6.0, -3.0]));
/// ```
#[macro_export]
macro_rules! poly {
    () => {
        <$crate::Poly<f64> as $crate::num::Zero>::zero()
    };
    ($($c:expr),+ $(,)?) => {
        $crate::Poly::new(&[$($c),+])
    };
}

/// Shorthand for `num::Complex::new`, with an optional imaginary part.
#[macro_export]
macro_rules! complex {
    ($re:expr) => {
        $crate::num::Complex::from($re)
    };
    ($re:expr, $im:expr) => {
        $crate::num::Complex::new($re, $im)
    };
}

pub use num;

mod error;
pub use error::Error;

mod scalar;
pub use scalar::RealScalar;

mod util;
#[doc(hidden)]
pub use util::__testing;

mod poly;
pub use poly::{
    roots::{self, JenkinsTraub, ShiftConstantTerm},
    Poly, QuadraticMonomial,
};

pub type Poly32 = Poly<f32>;
pub type Poly64 = Poly<f64>;
