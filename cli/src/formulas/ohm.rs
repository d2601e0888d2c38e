use crate::error::ValidationError;
use crate::formulas::checked_div;

/// Which of V, I, R Ohm's law is solved for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OhmSolve {
    Voltage,
    Current,
    Resistance,
}

impl OhmSolve {
    pub fn from_mode(mode: &str) -> Option<Self> {
        match mode {
            "v" => Some(OhmSolve::Voltage),
            "i" => Some(OhmSolve::Current),
            "r" => Some(OhmSolve::Resistance),
            _ => None,
        }
    }
}

/// Complete V/I/R/P operating point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OhmPoint {
    pub voltage: f64,
    pub current: f64,
    pub resistance: f64,
    pub power: f64,
}

/// V = I·R
pub fn voltage(current: f64, resistance: f64) -> f64 {
    current * resistance
}

/// I = V/R
pub fn current(voltage: f64, resistance: f64) -> Result<f64, ValidationError> {
    checked_div(voltage, resistance, &["r"])
}

/// R = V/I
pub fn resistance(voltage: f64, current: f64) -> Result<f64, ValidationError> {
    checked_div(voltage, current, &["i"])
}

/// P = V·I
pub fn power(voltage: f64, current: f64) -> f64 {
    voltage * current
}

/// P = I²·R
pub fn power_from_current(current: f64, resistance: f64) -> f64 {
    current * current * resistance
}

/// P = V²/R
pub fn power_from_voltage(voltage: f64, resistance: f64) -> Result<f64, ValidationError> {
    checked_div(voltage * voltage, resistance, &["r"])
}

/// Solve the unknown from the two known quantities.
///
/// `a` and `b` are, in order: (I, R) for voltage, (V, R) for current,
/// (V, I) for resistance.
pub fn solve(target: OhmSolve, a: f64, b: f64) -> Result<OhmPoint, ValidationError> {
    let point = match target {
        OhmSolve::Voltage => OhmPoint {
            voltage: voltage(a, b),
            current: a,
            resistance: b,
            power: power_from_current(a, b),
        },
        OhmSolve::Current => OhmPoint {
            voltage: a,
            current: current(a, b)?,
            resistance: b,
            power: power_from_voltage(a, b)?,
        },
        OhmSolve::Resistance => OhmPoint {
            voltage: a,
            current: b,
            resistance: resistance(a, b)?,
            power: power(a, b),
        },
    };
    Ok(point)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_solve_resistance() {
        let p = solve(OhmSolve::Resistance, 5.0, 0.02).unwrap();
        assert!((p.resistance - 250.0).abs() < 1e-9);
        assert!((p.power - 0.1).abs() < 1e-12);
    }

    #[test]
    fn test_solve_voltage_and_current() {
        let p = solve(OhmSolve::Voltage, 0.5, 100.0).unwrap();
        assert_eq!(p.voltage, 50.0);
        assert_eq!(p.power, 25.0);

        let p = solve(OhmSolve::Current, 12.0, 4.0).unwrap();
        assert_eq!(p.current, 3.0);
        assert_eq!(p.power, 36.0);
    }

    #[test]
    fn test_power_forms_agree() {
        let (v, r) = (9.0, 330.0);
        let i = current(v, r).unwrap();
        let p1 = power(v, i);
        let p2 = power_from_current(i, r);
        let p3 = power_from_voltage(v, r).unwrap();
        assert!((p1 - p2).abs() < 1e-12);
        assert!((p1 - p3).abs() < 1e-12);
    }

    #[test]
    fn test_zero_current_is_degenerate() {
        let err = solve(OhmSolve::Resistance, 5.0, 0.0).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Degenerate);
        assert_eq!(err.fields, vec!["i"]);
    }
}
