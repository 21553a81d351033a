use num::{Complex, Zero};

use crate::{
    util::doc_macros::{errors_root_finder, panic_t_from_f64},
    Poly, RealScalar,
};

mod closed_form;
pub use closed_form::{linear_root, quadratic_roots};
mod initial_guess;
pub use initial_guess::cauchy_lower_bound;
mod jenkins_traub;
pub use jenkins_traub::{JenkinsTraub, ShiftConstantTerm};

pub use crate::Error;

pub type Result<T> = std::result::Result<Vec<Complex<T>>, Error>;

impl<T: RealScalar> Poly<T> {
    /// A convenient way of finding roots, with the default [`JenkinsTraub`]
    /// configuration.
    ///
    /// Roots at the origin come first, then the roots in the order they
    /// were deflated. Complex roots come in conjugate pairs.
    ///
    /// ```
    /// use rpoly::poly;
    ///
    /// // x^2 - 6x - 3
    /// let roots = poly![1.0f64, -6.0, -3.0].roots().unwrap();
    /// assert!((roots[0].re + 0.464_101_615).abs() < 1e-8);
    /// assert!((roots[1].re - 6.464_101_615).abs() < 1e-8);
    /// ```
    ///
    /// # Errors
    #[doc = errors_root_finder!()]
    ///
    /// # Panics
    #[doc = panic_t_from_f64!()]
    pub fn roots(&self) -> Result<T> {
        JenkinsTraub::default().solve(self)
    }
}

// private
impl<T: RealScalar> Poly<T> {
    /// Split off the roots at the origin, returning them together with the
    /// deflated polynomial.
    fn zero_roots(&self, epsilon: T) -> (Vec<Complex<T>>, Self) {
        debug_assert!(self.is_normalized());

        let mut this = self.clone();
        let mut roots = vec![];
        while this.degree() >= 1 && this.constant().abs() <= epsilon {
            roots.push(Complex::zero());
            // deflating zero roots can be accomplished simply by shifting
            this = this.shift_down(1);
        }
        (roots, this)
    }
}

#[cfg(test)]
mod test {
    use num::{Complex, Zero};

    use crate::Poly64;

    #[test]
    fn zero_roots() {
        // x^3 - x^2
        let (roots, rest) = poly![1.0, -1.0, 0.0, 0.0].zero_roots(0.0);
        assert_eq!(roots, vec![Complex::zero(); 2]);
        assert_eq!(rest, poly![1.0, -1.0]);
    }

    #[test]
    fn zero_roots_none() {
        let (roots, rest) = poly![1.0, 2.0].zero_roots(0.0);
        assert!(roots.is_empty());
        assert_eq!(rest, poly![1.0, 2.0]);
    }

    #[test]
    fn zero_roots_tolerance() {
        let (roots, rest) = poly![1.0, 3.0, 1e-20].zero_roots(1e-15);
        assert_eq!(roots.len(), 1);
        assert_eq!(rest, poly![1.0, 3.0]);
    }

    #[test]
    fn zero_roots_monomial() {
        // x^3 has three roots at the origin and leaves a constant
        let (roots, rest) = Poly64::term(2.0, 3).zero_roots(0.0);
        assert_eq!(roots.len(), 3);
        assert_eq!(rest, poly![2.0]);
    }
}
