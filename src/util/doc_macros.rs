//! Macros for reducing doc comment boilerplate.

/// Documents `from_f64` panics.
macro_rules! panic_t_from_f64 {
    () => {
        r"If `T` is `f32` or `f64`, this function does not panic. However, if `T` does not implement [`num::FromPrimitive::from_f64`] correctly, this function might panic when converting the numeric constants of the algorithm.

"
    };
}
pub(crate) use panic_t_from_f64;

/// Default explanation of the errors returned by the root finder.
macro_rules! errors_root_finder {
    () => {
        r"- [`Error::NonFiniteCoefficient`](crate::Error::NonFiniteCoefficient): a coefficient is NaN or infinite.
- [`Error::ExhaustedShiftAttempts`](crate::Error::ExhaustedShiftAttempts): no shift converged within the configured number of attempts.
- [`Error::InvalidResidualDegree`](crate::Error::InvalidResidualDegree): deflation left an unexpected residual polynomial.
"
    };
}
pub(crate) use errors_root_finder;
