use crate::RealScalar;

/// Convert a numeric constant to the scalar type.
///
/// # Panics
/// If `T` cannot represent `x`, which never happens for `f32` and `f64` with
/// the constants used in this crate.
pub(crate) fn f64_to_scalar<T: RealScalar>(x: f64) -> T {
    T::from_f64(x).expect("overflow")
}

/// Convert a count, like a degree, to the scalar type.
pub(crate) fn usize_to_scalar<T: RealScalar>(x: usize) -> T {
    T::from_usize(x).expect("overflow")
}

/// Cast a rounded exponent, clamping values that do not fit.
pub(crate) fn scalar_to_i32<T: RealScalar>(x: T) -> i32 {
    x.to_i32()
        .unwrap_or(if x.is_sign_negative() { i32::MIN } else { i32::MAX })
}

#[cfg(test)]
mod test {
    use super::{f64_to_scalar, scalar_to_i32, usize_to_scalar};

    #[test]
    fn casts() {
        assert_eq!(f64_to_scalar::<f32>(0.25), 0.25f32);
        assert_eq!(usize_to_scalar::<f64>(7), 7.0);
        assert_eq!(scalar_to_i32(-970.0f64), -970);
        assert_eq!(scalar_to_i32(f64::INFINITY), i32::MAX);
    }
}
