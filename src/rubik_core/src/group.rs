/// A group: an associative composition with an identity and inverses.
///
/// The laws are not checked at runtime; the tests of every implementor verify them.
pub trait Group: Sized + Clone {
    /// The element that leaves everything in place
    fn identity() -> Self;

    /// `self ∘ other`: `other` happens first, then `self`
    #[must_use]
    fn compose(&self, other: &Self) -> Self;

    #[must_use]
    fn inverse(&self) -> Self;

    /// Compose `self` with itself `exponent` times; negative exponents use the inverse
    #[must_use]
    fn pow(&self, exponent: i64) -> Self {
        let base = if exponent < 0 {
            self.inverse()
        } else {
            self.clone()
        };

        let mut result = Self::identity();
        for _ in 0..exponent.unsigned_abs() {
            result = base.compose(&result);
        }
        result
    }
}
