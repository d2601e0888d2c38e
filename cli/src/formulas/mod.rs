//! Closed-form electronics equations.
//!
//! Every function takes and returns base SI units (ohms, farads, henries,
//! volts, amps, hertz, seconds). Functions that divide by an input-derived
//! quantity return a [`ValidationError`] of kind `Degenerate` instead of
//! producing an infinity or NaN.

pub mod devices;
pub mod networks;
pub mod ohm;
pub mod reactive;
pub mod signal;
pub mod smd;

use crate::error::ValidationError;
use std::f64::consts::PI;

/// ω = 2πf
#[inline]
#[must_use]
pub fn angular_frequency(hz: f64) -> f64 {
    2.0 * PI * hz
}

/// Divide, rejecting a zero divisor or a non-finite quotient.
///
/// `fields` names the inputs blamed when the division fails.
pub fn checked_div(numerator: f64, denominator: f64, fields: &[&str]) -> Result<f64, ValidationError> {
    if denominator == 0.0 {
        return Err(ValidationError::degenerate(fields));
    }
    finite(numerator / denominator, fields)
}

/// Pass a finite value through, turn anything else into a degenerate error.
pub fn finite(value: f64, fields: &[&str]) -> Result<f64, ValidationError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ValidationError::degenerate(fields))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_checked_div() {
        assert_eq!(checked_div(10.0, 4.0, &[]).unwrap(), 2.5);

        let err = checked_div(1.0, 0.0, &["i"]).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Degenerate);
        assert_eq!(err.fields, vec!["i"]);

        assert!(checked_div(f64::MAX, 1e-300, &[]).is_err());
    }

    #[test]
    fn test_angular_frequency() {
        assert!((angular_frequency(1.0) - 2.0 * PI).abs() < 1e-12);
    }
}
