use crate::error::ValidationError;
use crate::formulas::{checked_div, finite};

/// Sum of values: resistors or inductors in series, capacitors in parallel.
pub fn sum(values: &[f64]) -> f64 {
    values.iter().sum()
}

/// Reciprocal of the sum of reciprocals: resistors or inductors in
/// parallel, capacitors in series.
pub fn reciprocal_sum(values: &[f64]) -> Result<f64, ValidationError> {
    let mut total = 0.0;
    for &v in values {
        total += checked_div(1.0, v, &["values"])?;
    }
    checked_div(1.0, total, &["values"])
}

/// Which voltage-divider quantity is unknown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DividerSolve {
    Vout,
    R1,
    R2,
}

impl DividerSolve {
    pub fn from_mode(mode: &str) -> Option<Self> {
        match mode {
            "vout" => Some(DividerSolve::Vout),
            "r1" => Some(DividerSolve::R1),
            "r2" => Some(DividerSolve::R2),
            _ => None,
        }
    }
}

/// Vout = Vin·R2/(R1+R2)
pub fn divider_vout(vin: f64, r1: f64, r2: f64) -> Result<f64, ValidationError> {
    checked_div(vin * r2, r1 + r2, &["r1", "r2"])
}

/// R1 = R2·(Vin/Vout − 1)
pub fn divider_r1(vin: f64, vout: f64, r2: f64) -> Result<f64, ValidationError> {
    let ratio = checked_div(vin, vout, &["vout"])?;
    finite(r2 * (ratio - 1.0), &["vin", "vout"])
}

/// R2 = Vout·R1/(Vin − Vout)
pub fn divider_r2(vin: f64, vout: f64, r1: f64) -> Result<f64, ValidationError> {
    checked_div(vout * r1, vin - vout, &["vin", "vout"])
}

/// Which Wheatstone-bridge arm is unknown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BridgeSolve {
    R1,
    R2,
    R3,
    Rx,
}

impl BridgeSolve {
    pub fn from_mode(mode: &str) -> Option<Self> {
        match mode {
            "r1" => Some(BridgeSolve::R1),
            "r2" => Some(BridgeSolve::R2),
            "r3" => Some(BridgeSolve::R3),
            "rx" => Some(BridgeSolve::Rx),
            _ => None,
        }
    }
}

/// Balanced bridge arms: R1/R2 = Rx/R3, so R1·R3 = R2·Rx.
///
/// R1 and R2 form one divider, Rx (top) and R3 (bottom) the other.
/// `known` holds the three known arms in the order R1, R2, R3, Rx with the
/// unknown skipped.
pub fn bridge_solve(target: BridgeSolve, known: [f64; 3]) -> Result<f64, ValidationError> {
    let [a, b, c] = known;
    match target {
        // known = [R2, R3, Rx]
        BridgeSolve::R1 => checked_div(a * c, b, &["r3"]),
        // known = [R1, R3, Rx]
        BridgeSolve::R2 => checked_div(a * b, c, &["rx"]),
        // known = [R1, R2, Rx]
        BridgeSolve::R3 => checked_div(b * c, a, &["r1"]),
        // known = [R1, R2, R3]
        BridgeSolve::Rx => checked_div(a * c, b, &["r2"]),
    }
}
