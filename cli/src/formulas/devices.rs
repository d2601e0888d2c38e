use crate::error::ValidationError;
use crate::formulas::checked_div;

/// E12 preferred values for one decade
pub const E12: [f64; 12] = [1.0, 1.2, 1.5, 1.8, 2.2, 2.7, 3.3, 3.9, 4.7, 5.6, 6.8, 8.2];

/// Smallest E12 value at or above `ohms`.
pub fn next_e12(ohms: f64) -> f64 {
    if !ohms.is_finite() || ohms <= 0.0 {
        return ohms;
    }
    let decade = 10f64.powf(ohms.log10().floor());
    let normalized = ohms / decade;
    // Tolerance keeps 4.7 from rounding up to 5.6 when it arrives as 4.699999
    match E12.iter().find(|&&e| e >= normalized - 1e-9) {
        Some(e) => e * decade,
        None => 10.0 * decade,
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LedResistor {
    pub resistance: f64,
    /// Power dissipated in the resistor
    pub power: f64,
    /// Smallest E12 resistor keeping the current at or below If
    pub standard: f64,
}

/// R = (Vs − Vf)/If for a single LED.
///
/// The caller has already ensured Vf < Vs and If > 0.
pub fn led_resistor(supply: f64, forward: f64, current: f64) -> Result<LedResistor, ValidationError> {
    let drop = supply - forward;
    let resistance = checked_div(drop, current, &["if"])?;
    Ok(LedResistor {
        resistance,
        power: drop * current,
        standard: next_e12(resistance),
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiodeState {
    Conducting,
    Off,
}

impl DiodeState {
    pub fn label(self) -> &'static str {
        match self {
            DiodeState::Conducting => "Diode is forward biased (conducting)",
            DiodeState::Off => "Diode is reverse biased (off)",
        }
    }
}

/// Operating point of an ideal diode in series with a resistor
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiodePoint {
    pub state: DiodeState,
    pub current: f64,
    pub diode_voltage: f64,
    pub resistor_voltage: f64,
}

/// Two-state ideal diode: a short when Vs > 0, an open otherwise.
pub fn ideal_diode(supply: f64, resistance: f64) -> Result<DiodePoint, ValidationError> {
    if supply > 0.0 {
        Ok(DiodePoint {
            state: DiodeState::Conducting,
            current: checked_div(supply, resistance, &["r"])?,
            diode_voltage: 0.0,
            resistor_voltage: supply,
        })
    } else {
        Ok(DiodePoint {
            state: DiodeState::Off,
            current: 0.0,
            diode_voltage: supply,
            resistor_voltage: 0.0,
        })
    }
}

/// Run time in hours for a battery of `capacity_mah` under a constant
/// load of `current` amps.
pub fn battery_life_hours(capacity_mah: f64, current: f64) -> Result<f64, ValidationError> {
    checked_div(capacity_mah, current * 1000.0, &["current"])
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpAmpConfig {
    Inverting,
    NonInverting,
}

impl OpAmpConfig {
    pub fn from_mode(mode: &str) -> Option<Self> {
        match mode {
            "inverting" => Some(OpAmpConfig::Inverting),
            "non_inverting" => Some(OpAmpConfig::NonInverting),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            OpAmpConfig::Inverting => "Inverting amplifier",
            OpAmpConfig::NonInverting => "Non-inverting amplifier",
        }
    }
}

/// Closed-loop voltage gain: −Rf/Rin inverting, 1 + Rf/Rin non-inverting.
pub fn op_amp_gain(config: OpAmpConfig, rin: f64, rf: f64) -> Result<f64, ValidationError> {
    let ratio = checked_div(rf, rin, &["rin"])?;
    Ok(match config {
        OpAmpConfig::Inverting => -ratio,
        OpAmpConfig::NonInverting => 1.0 + ratio,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_e12() {
        assert!((next_e12(150.0) - 150.0).abs() < 1e-9);
        assert!((next_e12(151.0) - 180.0).abs() < 1e-9);
        assert!((next_e12(4699.999_999) - 4700.0).abs() < 1e-6);
        assert!((next_e12(8.3) - 10.0).abs() < 1e-9);
        assert!((next_e12(0.33) - 0.33).abs() < 1e-12);
    }

    #[test]
    fn test_led_resistor() {
        // 5 V supply, 2 V red LED, 20 mA
        let led = led_resistor(5.0, 2.0, 0.02).unwrap();
        assert!((led.resistance - 150.0).abs() < 1e-9);
        assert!((led.power - 0.06).abs() < 1e-12);
        assert!((led.standard - 150.0).abs() < 1e-9);
    }

    #[test]
    fn test_ideal_diode_states() {
        let on = ideal_diode(5.0, 1000.0).unwrap();
        assert_eq!(on.state, DiodeState::Conducting);
        assert!((on.current - 0.005).abs() < 1e-15);
        assert_eq!(on.diode_voltage, 0.0);
        assert_eq!(on.resistor_voltage, 5.0);

        let off = ideal_diode(-3.0, 1000.0).unwrap();
        assert_eq!(off.state, DiodeState::Off);
        assert_eq!(off.current, 0.0);
        assert_eq!(off.diode_voltage, -3.0);
        assert_eq!(off.resistor_voltage, 0.0);

        // Zero volts sits on the "off" side of the piecewise rule
        assert_eq!(ideal_diode(0.0, 1000.0).unwrap().state, DiodeState::Off);
    }

    #[test]
    fn test_battery_life() {
        let hours = battery_life_hours(2000.0, 0.1).unwrap();
        assert!((hours - 20.0).abs() < 1e-9);
        assert!(battery_life_hours(2000.0, 0.0).is_err());
    }

    #[test]
    fn test_op_amp_gain() {
        let g = op_amp_gain(OpAmpConfig::Inverting, 1000.0, 10_000.0).unwrap();
        assert_eq!(g, -10.0);
        let g = op_amp_gain(OpAmpConfig::NonInverting, 1000.0, 10_000.0).unwrap();
        assert_eq!(g, 11.0);
    }
}
