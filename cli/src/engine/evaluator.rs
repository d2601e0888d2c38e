use crate::catalog::{CalculatorId, CalculatorSpec, ParsedFields, SolveMode};
use crate::error::ValidationError;
use crate::formulas::devices::{self, OpAmpConfig};
use crate::formulas::networks::{self, BridgeSolve, DividerSolve};
use crate::formulas::ohm::{self, OhmSolve};
use crate::formulas::signal::{self, DecibelMode};
use crate::formulas::{checked_div, reactive, smd};

/// One named result in base SI units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawOutput {
    pub name: &'static str,
    pub value: f64,
}

/// Unformatted evaluation result, in the order outputs should be shown
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawResult {
    pub outputs: Vec<RawOutput>,
    /// Qualitative note such as a power-factor rating
    pub annotation: Option<String>,
}

impl RawResult {
    fn with(mut self, name: &'static str, value: f64) -> Self {
        self.outputs.push(RawOutput { name, value });
        self
    }

    fn annotated(mut self, note: &str) -> Self {
        self.annotation = Some(note.to_string());
        self
    }

    pub fn value(&self, name: &str) -> Option<f64> {
        self.outputs.iter().find(|o| o.name == name).map(|o| o.value)
    }
}

fn mode_as<T>(mode: Option<&SolveMode>, parse: fn(&str) -> Option<T>) -> Result<T, ValidationError> {
    mode.and_then(|m| parse(m.id))
        .ok_or_else(|| ValidationError::missing("Solve for", "solve_for"))
}

/// Run the formula for `spec` and reject any non-finite output.
///
/// `parsed` must come from the validator for the same spec and mode.
pub fn evaluate(
    spec: &CalculatorSpec,
    mode: Option<&SolveMode>,
    parsed: &ParsedFields,
) -> Result<RawResult, ValidationError> {
    let result = evaluate_formula(spec, mode, parsed)?;
    if result.outputs.iter().any(|o| !o.value.is_finite()) {
        return Err(ValidationError::degenerate(&[]));
    }
    Ok(result)
}

fn evaluate_formula(
    spec: &CalculatorSpec,
    mode: Option<&SolveMode>,
    p: &ParsedFields,
) -> Result<RawResult, ValidationError> {
    let result = RawResult::default();

    match spec.id {
        CalculatorId::OhmsLaw => {
            let target = mode_as(mode, OhmSolve::from_mode)?;
            let (a, b) = match target {
                OhmSolve::Voltage => (p.get("i")?, p.get("r")?),
                OhmSolve::Current => (p.get("v")?, p.get("r")?),
                OhmSolve::Resistance => (p.get("v")?, p.get("i")?),
            };
            let point = ohm::solve(target, a, b)?;
            Ok(result
                .with("voltage", point.voltage)
                .with("current", point.current)
                .with("resistance", point.resistance)
                .with("power", point.power))
        }

        CalculatorId::RcTimeConstant => {
            let (r, c) = (p.get("r")?, p.get("c")?);
            Ok(result
                .with("tau", reactive::rc_time_constant(r, c))
                .with("settling", reactive::rc_settling_time(r, c)))
        }

        CalculatorId::LcResonance => {
            let f = reactive::lc_resonance(p.get("l")?, p.get("c")?)?;
            Ok(result.with("frequency", f))
        }

        CalculatorId::CapacitiveReactance => {
            let xc = reactive::capacitive_reactance(p.get("f")?, p.get("c")?)?;
            Ok(result.with("reactance", xc))
        }

        CalculatorId::InductiveReactance => {
            let xl = reactive::inductive_reactance(p.get("f")?, p.get("l")?);
            Ok(result.with("reactance", xl))
        }

        CalculatorId::CapacitorCharge => {
            let (c, v) = (p.get("c")?, p.get("v")?);
            Ok(result
                .with("charge", reactive::capacitor_charge(c, v))
                .with("energy", reactive::capacitor_energy(c, v)))
        }

        CalculatorId::SeriesResistors
        | CalculatorId::SeriesInductors
        | CalculatorId::ParallelCapacitors => Ok(result.with("total", networks::sum(&p.items))),

        CalculatorId::ParallelResistors
        | CalculatorId::ParallelInductors
        | CalculatorId::SeriesCapacitors => {
            Ok(result.with("total", networks::reciprocal_sum(&p.items)?))
        }

        CalculatorId::VoltageDivider => {
            let target = mode_as(mode, DividerSolve::from_mode)?;
            let vin = p.get("vin")?;
            let (vout, r1, r2) = match target {
                DividerSolve::Vout => {
                    let (r1, r2) = (p.get("r1")?, p.get("r2")?);
                    (networks::divider_vout(vin, r1, r2)?, r1, r2)
                }
                DividerSolve::R1 => {
                    let (vout, r2) = (p.get("vout")?, p.get("r2")?);
                    (vout, networks::divider_r1(vin, vout, r2)?, r2)
                }
                DividerSolve::R2 => {
                    let (vout, r1) = (p.get("vout")?, p.get("r1")?);
                    (vout, r1, networks::divider_r2(vin, vout, r1)?)
                }
            };
            let current = checked_div(vin, r1 + r2, &["r1", "r2"])?;
            Ok(result
                .with("vout", vout)
                .with("r1", r1)
                .with("r2", r2)
                .with("current", current))
        }

        CalculatorId::WheatstoneBridge => {
            let target = mode_as(mode, BridgeSolve::from_mode)?;
            let (name, known) = match target {
                BridgeSolve::R1 => ("r1", [p.get("r2")?, p.get("r3")?, p.get("rx")?]),
                BridgeSolve::R2 => ("r2", [p.get("r1")?, p.get("r3")?, p.get("rx")?]),
                BridgeSolve::R3 => ("r3", [p.get("r1")?, p.get("r2")?, p.get("rx")?]),
                BridgeSolve::Rx => ("rx", [p.get("r1")?, p.get("r2")?, p.get("r3")?]),
            };
            Ok(result.with(name, networks::bridge_solve(target, known)?))
        }

        CalculatorId::Decibel => {
            let dm = mode_as(mode, DecibelMode::from_mode)?;
            match dm {
                DecibelMode::PowerToDb => {
                    Ok(result.with("db", signal::ratio_to_db(dm, p.get("p1")?, p.get("p2")?)?))
                }
                DecibelMode::VoltageToDb => {
                    Ok(result.with("db", signal::ratio_to_db(dm, p.get("v1")?, p.get("v2")?)?))
                }
                DecibelMode::DbToPower | DecibelMode::DbToVoltage => {
                    Ok(result.with("ratio", signal::db_to_ratio(dm, p.get("db")?)?))
                }
            }
        }

        CalculatorId::PowerFactor => {
            let pf = signal::power_factor(p.get("p")?, p.get("s")?)?;
            Ok(result
                .with("factor", pf.factor)
                .with("reactive", pf.reactive_power)
                .with("angle", pf.angle_deg)
                .annotated(pf.rating.label()))
        }

        CalculatorId::BatteryLife => {
            let hours = devices::battery_life_hours(p.get("capacity")?, p.get("current")?)?;
            Ok(result.with("runtime", hours * 3600.0))
        }

        CalculatorId::RcPhaseShift => {
            let ps = signal::rc_phase_shift(p.get("r")?, p.get("c")?, p.get("f")?, p.get("stages")?)?;
            Ok(result
                .with("cutoff", ps.cutoff)
                .with("phase", ps.phase_deg)
                .with("gain", ps.gain)
                .with("oscillator", ps.oscillator))
        }

        CalculatorId::IdealDiode => {
            let point = devices::ideal_diode(p.get("vs")?, p.get("r")?)?;
            Ok(result
                .with("current", point.current)
                .with("diode_voltage", point.diode_voltage)
                .with("resistor_voltage", point.resistor_voltage)
                .annotated(point.state.label()))
        }

        CalculatorId::LedResistor => {
            let led = devices::led_resistor(p.get("vs")?, p.get("vf")?, p.get("if")?)?;
            Ok(result
                .with("resistance", led.resistance)
                .with("power", led.power)
                .with("standard", led.standard))
        }

        CalculatorId::OpAmpGain => {
            let config = mode_as(mode, OpAmpConfig::from_mode)?;
            let gain = devices::op_amp_gain(config, p.get("rin")?, p.get("rf")?)?;
            Ok(result
                .with("gain", gain)
                .with("gain_db", 20.0 * gain.abs().log10())
                .with("vout", gain * p.get("vin")?)
                .annotated(config.label()))
        }

        CalculatorId::SmdResistor => {
            let (ohms, format) = smd::decode(p.text("code")?)?;
            Ok(result.with("resistance", ohms).annotated(format.label()))
        }
    }
}
