use crate::units::prefix::{normalize, Prefix};

/// A user-entered magnitude together with the prefix it was entered in
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quantity {
    /// Magnitude as typed, always finite
    pub magnitude: f64,
    pub prefix: Prefix,
}

impl Quantity {
    pub fn new(magnitude: f64, prefix: Prefix) -> Self {
        Self { magnitude, prefix }
    }

    /// Value in the base SI unit (farads, henries, ohms, seconds, hertz, ...)
    pub fn to_si(self) -> f64 {
        normalize(self.magnitude, self.prefix)
    }
}
