use crate::error::ValidationError;
use crate::formulas::{angular_frequency, checked_div};
use std::f64::consts::PI;

/// τ = R·C
pub fn rc_time_constant(resistance: f64, capacitance: f64) -> f64 {
    resistance * capacitance
}

/// Time for an RC network to reach ~99.3% of its final value (5τ)
pub fn rc_settling_time(resistance: f64, capacitance: f64) -> f64 {
    5.0 * rc_time_constant(resistance, capacitance)
}

/// f = 1 / (2π·√(L·C))
pub fn lc_resonance(inductance: f64, capacitance: f64) -> Result<f64, ValidationError> {
    checked_div(1.0, 2.0 * PI * (inductance * capacitance).sqrt(), &["l", "c"])
}

/// Xc = 1 / (2π·f·C)
pub fn capacitive_reactance(frequency: f64, capacitance: f64) -> Result<f64, ValidationError> {
    checked_div(1.0, angular_frequency(frequency) * capacitance, &["f", "c"])
}

/// Xl = 2π·f·L
pub fn inductive_reactance(frequency: f64, inductance: f64) -> f64 {
    angular_frequency(frequency) * inductance
}

/// Q = C·V
pub fn capacitor_charge(capacitance: f64, voltage: f64) -> f64 {
    capacitance * voltage
}

/// E = ½·C·V²
pub fn capacitor_energy(capacitance: f64, voltage: f64) -> f64 {
    0.5 * capacitance * voltage * voltage
}
