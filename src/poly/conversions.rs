use crate::{Poly, RealScalar};

impl<T: RealScalar> Poly<T> {
    /// Coefficients, highest degree first
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        self.0.as_slice()
    }

    /// Iterate over coefficients, highest degree first
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.0.as_slice().iter()
    }

    #[must_use]
    pub fn to_vec(&self) -> Vec<T> {
        self.0.clone()
    }

    #[allow(clippy::needless_pass_by_value)]
    #[must_use]
    pub fn from_vec(value: Vec<T>) -> Self {
        Self(value).normalize()
    }
}

impl<T: RealScalar> From<Vec<T>> for Poly<T> {
    fn from(value: Vec<T>) -> Self {
        Self::from_vec(value)
    }
}

impl<T: RealScalar> From<&[T]> for Poly<T> {
    fn from(value: &[T]) -> Self {
        Self::new(value)
    }
}

impl<T: RealScalar> From<Poly<T>> for Vec<T> {
    fn from(value: Poly<T>) -> Self {
        value.0
    }
}

#[cfg(test)]
mod test {
    use crate::Poly64;

    #[test]
    fn from_vec_normalizes() {
        let p = Poly64::from(vec![0.0, 0.0, 1.0, 2.0]);
        assert_eq!(p.as_slice(), &[1.0, 2.0]);
        assert_eq!(Vec::from(p), vec![1.0, 2.0]);
    }

    #[test]
    fn all_zeros() {
        let p = Poly64::from(vec![0.0, 0.0]);
        assert_eq!(p.as_slice(), &[0.0]);
        let p = Poly64::from(vec![]);
        assert_eq!(p.as_slice(), &[0.0]);
    }
}
