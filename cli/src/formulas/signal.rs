use crate::error::ValidationError;
use crate::formulas::{angular_frequency, checked_div, finite};
use std::f64::consts::PI;

/// Direction and quantity of a decibel conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecibelMode {
    /// 10·log10(P1/P2)
    PowerToDb,
    /// 20·log10(V1/V2)
    VoltageToDb,
    /// 10^(dB/10)
    DbToPower,
    /// 10^(dB/20)
    DbToVoltage,
}

impl DecibelMode {
    pub fn from_mode(mode: &str) -> Option<Self> {
        match mode {
            "power_db" => Some(DecibelMode::PowerToDb),
            "voltage_db" => Some(DecibelMode::VoltageToDb),
            "db_power" => Some(DecibelMode::DbToPower),
            "db_voltage" => Some(DecibelMode::DbToVoltage),
            _ => None,
        }
    }

    /// Ids of the numerator and denominator fields for the ratio modes
    fn ratio_fields(self) -> [&'static str; 2] {
        match self {
            DecibelMode::PowerToDb | DecibelMode::DbToPower => ["p1", "p2"],
            DecibelMode::VoltageToDb | DecibelMode::DbToVoltage => ["v1", "v2"],
        }
    }

    fn scale(self) -> f64 {
        match self {
            DecibelMode::PowerToDb | DecibelMode::DbToPower => 10.0,
            DecibelMode::VoltageToDb | DecibelMode::DbToVoltage => 20.0,
        }
    }
}

/// Convert a ratio of two positive quantities to decibels.
pub fn ratio_to_db(mode: DecibelMode, numerator: f64, denominator: f64) -> Result<f64, ValidationError> {
    let fields = mode.ratio_fields();
    let ratio = checked_div(numerator, denominator, &fields[1..])?;
    if ratio <= 0.0 {
        return Err(ValidationError::degenerate(&fields));
    }
    finite(mode.scale() * ratio.log10(), &fields)
}

/// Convert decibels back to a power or voltage ratio.
pub fn db_to_ratio(mode: DecibelMode, db: f64) -> Result<f64, ValidationError> {
    finite(10f64.powf(db / mode.scale()), &["db"])
}

/// Qualitative power-factor band
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerFactorRating {
    Poor,
    Fair,
    Good,
}

impl PowerFactorRating {
    /// Below 0.80 is poor, below 0.95 fair, anything else good.
    pub fn classify(pf: f64) -> Self {
        if pf < 0.80 {
            PowerFactorRating::Poor
        } else if pf < 0.95 {
            PowerFactorRating::Fair
        } else {
            PowerFactorRating::Good
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PowerFactorRating::Poor => "Poor",
            PowerFactorRating::Fair => "Fair",
            PowerFactorRating::Good => "Good",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PowerFactor {
    pub factor: f64,
    /// Q = √(S² − P²)
    pub reactive_power: f64,
    /// Phase angle between voltage and current
    pub angle_deg: f64,
    pub rating: PowerFactorRating,
}

/// PF = P/S for real power P (W) and apparent power S (VA).
///
/// The caller has already ensured 0 ≤ P ≤ S and S > 0.
pub fn power_factor(real: f64, apparent: f64) -> Result<PowerFactor, ValidationError> {
    let factor = checked_div(real, apparent, &["s"])?;
    // clamp guards acos against 1.0000000000000002
    let factor_clamped = factor.clamp(0.0, 1.0);
    Ok(PowerFactor {
        factor,
        reactive_power: (apparent * apparent - real * real).max(0.0).sqrt(),
        angle_deg: factor_clamped.acos().to_degrees(),
        rating: PowerFactorRating::classify(factor),
    })
}

/// Single-stage RC low-pass response plus the N-stage oscillator frequency
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhaseShift {
    /// fc = 1/(2πRC)
    pub cutoff: f64,
    /// φ = −atan(ωRC), degrees
    pub phase_deg: f64,
    /// |H| = 1/√(1+(ωRC)²)
    pub gain: f64,
    /// f_osc = 1/(2πRC·√(2N))
    pub oscillator: f64,
}

pub const MAX_PHASE_STAGES: f64 = 10.0;

pub fn rc_phase_shift(
    resistance: f64,
    capacitance: f64,
    frequency: f64,
    stages: f64,
) -> Result<PhaseShift, ValidationError> {
    if stages.fract() != 0.0 || !(1.0..=MAX_PHASE_STAGES).contains(&stages) {
        return Err(ValidationError::domain(
            format!(
                "Number of stages must be a whole number between 1 and {}.",
                MAX_PHASE_STAGES
            ),
            &["stages"],
        ));
    }

    let rc = resistance * capacitance;
    let wrc = angular_frequency(frequency) * rc;
    Ok(PhaseShift {
        cutoff: checked_div(1.0, 2.0 * PI * rc, &["r", "c"])?,
        phase_deg: -wrc.atan().to_degrees(),
        gain: 1.0 / (1.0 + wrc * wrc).sqrt(),
        oscillator: checked_div(1.0, 2.0 * PI * rc * (2.0 * stages).sqrt(), &["r", "c"])?,
    })
}
