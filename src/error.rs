use thiserror::Error;

/// The error type of the root finder.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// None of the fixed shifts converged to a root. This is rare, and usually
    /// means the polynomial has roots that are too ill-conditioned for the
    /// working precision.
    #[error("no shift converged for a polynomial of degree {degree} after {attempts} attempts")]
    ExhaustedShiftAttempts { degree: usize, attempts: usize },

    /// Deflation left a polynomial that cannot be solved in closed form.
    #[error("residual polynomial of degree {0} cannot be solved in closed form")]
    InvalidResidualDegree(usize),

    /// The polynomial has a NaN or infinite coefficient.
    #[error("polynomial coefficients must be finite")]
    NonFiniteCoefficient,
}

#[cfg(test)]
mod test {
    use super::Error;

    #[test]
    fn display() {
        let e = Error::ExhaustedShiftAttempts {
            degree: 5,
            attempts: 20,
        };
        assert_eq!(
            e.to_string(),
            "no shift converged for a polynomial of degree 5 after 20 attempts"
        );
        assert_eq!(
            Error::InvalidResidualDegree(3).to_string(),
            "residual polynomial of degree 3 cannot be solved in closed form"
        );
    }
}
