use std::fmt::{Debug, Display};

use num::{Float, FromPrimitive};

/// Real floating point numbers that can be used as polynomial coefficients.
pub trait RealScalar: Float + FromPrimitive + Debug + Display + Send + Sync + 'static {
    /// Smallest positive normal number, used as the underflow threshold when
    /// rescaling coefficients.
    const TINY: Self;
}

impl RealScalar for f32 {
    const TINY: Self = Self::MIN_POSITIVE;
}

impl RealScalar for f64 {
    const TINY: Self = Self::MIN_POSITIVE;
}
