//! Seam for encoding caller-owned location types.
//!
//! Applications usually hold their own waypoint or fix structs. Implementing
//! [`Locatable`] lets them be encoded without first copying into a list of
//! tuples.

/// Anything with a geographic position.
pub trait Locatable {
    /// Location coordinates (lat, lng) in decimal degrees.
    fn location(&self) -> (f64, f64);
}

impl Locatable for (f64, f64) {
    fn location(&self) -> (f64, f64) {
        *self
    }
}

impl<T: Locatable + ?Sized> Locatable for &T {
    fn location(&self) -> (f64, f64) {
        (**self).location()
    }
}
