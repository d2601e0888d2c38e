use crate::error::{Error, Result};
use crate::units::{Prefix, QuantityKind};
use lazy_static::lazy_static;
use serde::Serialize;
use std::collections::HashMap;

/// Every calculator the engine knows how to evaluate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CalculatorId {
    OhmsLaw,
    RcTimeConstant,
    LcResonance,
    CapacitiveReactance,
    InductiveReactance,
    CapacitorCharge,
    SeriesResistors,
    ParallelResistors,
    SeriesCapacitors,
    ParallelCapacitors,
    SeriesInductors,
    ParallelInductors,
    VoltageDivider,
    WheatstoneBridge,
    Decibel,
    PowerFactor,
    BatteryLife,
    RcPhaseShift,
    IdealDiode,
    LedResistor,
    OpAmpGain,
    SmdResistor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Basics,
    Networks,
    Reactive,
    Signal,
    Components,
}

impl Category {
    pub fn label(self) -> &'static str {
        match self {
            Category::Basics => "Basics",
            Category::Networks => "Resistor & component networks",
            Category::Reactive => "Capacitors & inductors",
            Category::Signal => "Signals & power",
            Category::Components => "Components",
        }
    }
}

/// Range a numeric field must fall in after normalization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Constraint {
    /// Strictly greater than zero
    Positive,
    /// Zero or greater
    NonNegative,
    Any,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct FieldSpec {
    pub id: &'static str,
    pub label: &'static str,
    pub kind: QuantityKind,
    pub constraint: Constraint,
    /// Whether the number grammar accepts a leading sign
    pub signed: bool,
    /// Prefix applied when the user gives no unit
    pub default_prefix: Prefix,
}

impl FieldSpec {
    const fn new(id: &'static str, label: &'static str, kind: QuantityKind, constraint: Constraint) -> Self {
        Self {
            id,
            label,
            kind,
            constraint,
            signed: false,
            default_prefix: Prefix::Base,
        }
    }

    const fn signed(self) -> Self {
        Self { signed: true, ..self }
    }

    const fn unit(self, default_prefix: Prefix) -> Self {
        Self { default_prefix, ..self }
    }
}

/// A growable bank of like values (series/parallel calculators)
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ListSpec {
    pub id: &'static str,
    pub item_label: &'static str,
    pub kind: QuantityKind,
    pub min_count: usize,
    pub default_prefix: Prefix,
}

impl ListSpec {
    const fn new(item_label: &'static str, kind: QuantityKind, default_prefix: Prefix) -> Self {
        Self {
            id: "values",
            item_label,
            kind,
            min_count: 2,
            default_prefix,
        }
    }
}

/// One "solve for" choice and the fields it needs
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SolveMode {
    pub id: &'static str,
    pub label: &'static str,
    pub inputs: &'static [&'static str],
}

const fn mode(id: &'static str, label: &'static str, inputs: &'static [&'static str]) -> SolveMode {
    SolveMode { id, label, inputs }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputDisplay {
    /// SI prefix plus fixed significant digits
    Prefixed,
    /// Seconds rendered as minutes, hours or days
    Duration,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct OutputSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: QuantityKind,
    /// Significant digits unless configuration overrides them
    pub digits: usize,
    pub display: OutputDisplay,
}

impl OutputSpec {
    const fn new(name: &'static str, label: &'static str, kind: QuantityKind, digits: usize) -> Self {
        Self {
            name,
            label,
            kind,
            digits,
            display: OutputDisplay::Prefixed,
        }
    }

    const fn duration(self) -> Self {
        Self {
            display: OutputDisplay::Duration,
            ..self
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CalculatorSpec {
    pub id: CalculatorId,
    pub slug: &'static str,
    pub name: &'static str,
    pub category: Category,
    pub summary: &'static str,
    pub fields: &'static [FieldSpec],
    pub list: Option<ListSpec>,
    /// Empty when every field is always required
    pub modes: &'static [SolveMode],
    pub outputs: &'static [OutputSpec],
}

impl CalculatorSpec {
    pub fn field(&self, id: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.id == id)
    }

    pub fn output(&self, name: &str) -> Option<&OutputSpec> {
        self.outputs.iter().find(|o| o.name == name)
    }

    /// Resolve the requested solve mode. Calculators with modes fall back to
    /// their first one; asking for a mode the calculator lacks is an error.
    pub fn solve_mode(&self, requested: Option<&str>) -> Result<Option<&SolveMode>> {
        match requested {
            None => Ok(self.modes.first()),
            Some(id) => self
                .modes
                .iter()
                .find(|m| m.id == id)
                .map(Some)
                .ok_or_else(|| Error::UnknownSolveMode {
                    calculator: self.slug.to_string(),
                    mode: id.to_string(),
                }),
        }
    }

    /// Fields the given mode reads, in declaration order.
    pub fn required_fields(&self, mode: Option<&SolveMode>) -> Vec<&FieldSpec> {
        match mode {
            Some(m) => self
                .fields
                .iter()
                .filter(|f| m.inputs.contains(&f.id))
                .collect(),
            None => self.fields.iter().collect(),
        }
    }
}

use Constraint::*;
use QuantityKind as K;

const RESISTANCE: FieldSpec = FieldSpec::new("r", "Resistance", K::Resistance, Positive);
const CAPACITANCE: FieldSpec = FieldSpec::new("c", "Capacitance", K::Capacitance, Positive).unit(Prefix::Micro);
const INDUCTANCE: FieldSpec = FieldSpec::new("l", "Inductance", K::Inductance, Positive).unit(Prefix::Milli);
const FREQUENCY: FieldSpec = FieldSpec::new("f", "Frequency", K::Frequency, Positive);

pub static CATALOG: &[CalculatorSpec] = &[
    CalculatorSpec {
        id: CalculatorId::OhmsLaw,
        slug: "ohms_law",
        name: "Ohm's Law",
        category: Category::Basics,
        summary: "Solve V = I·R for any one quantity; power is reported alongside.",
        fields: &[
            FieldSpec::new("v", "Voltage", K::Voltage, NonNegative),
            FieldSpec::new("i", "Current", K::Current, NonNegative),
            RESISTANCE,
        ],
        list: None,
        modes: &[
            mode("v", "Voltage", &["i", "r"]),
            mode("i", "Current", &["v", "r"]),
            mode("r", "Resistance", &["v", "i"]),
        ],
        outputs: &[
            OutputSpec::new("voltage", "Voltage", K::Voltage, 3),
            OutputSpec::new("current", "Current", K::Current, 3),
            OutputSpec::new("resistance", "Resistance", K::Resistance, 3),
            OutputSpec::new("power", "Power", K::Power, 3),
        ],
    },
    CalculatorSpec {
        id: CalculatorId::RcTimeConstant,
        slug: "rc_time_constant",
        name: "RC Time Constant",
        category: Category::Reactive,
        summary: "τ = R·C, plus the 5τ time to practically full charge.",
        fields: &[RESISTANCE, CAPACITANCE],
        list: None,
        modes: &[],
        outputs: &[
            OutputSpec::new("tau", "Time constant (τ)", K::Time, 3),
            OutputSpec::new("settling", "Full charge time (5τ)", K::Time, 3),
        ],
    },
    CalculatorSpec {
        id: CalculatorId::LcResonance,
        slug: "lc_resonance",
        name: "LC Resonant Frequency",
        category: Category::Reactive,
        summary: "f = 1/(2π√(LC)).",
        fields: &[INDUCTANCE, CAPACITANCE],
        list: None,
        modes: &[],
        outputs: &[OutputSpec::new("frequency", "Resonant frequency", K::Frequency, 4)],
    },
    CalculatorSpec {
        id: CalculatorId::CapacitiveReactance,
        slug: "capacitive_reactance",
        name: "Capacitive Reactance",
        category: Category::Reactive,
        summary: "Xc = 1/(2πfC).",
        fields: &[FREQUENCY, CAPACITANCE],
        list: None,
        modes: &[],
        outputs: &[OutputSpec::new("reactance", "Capacitive reactance (Xc)", K::Resistance, 4)],
    },
    CalculatorSpec {
        id: CalculatorId::InductiveReactance,
        slug: "inductive_reactance",
        name: "Inductive Reactance",
        category: Category::Reactive,
        summary: "Xl = 2πfL.",
        fields: &[FREQUENCY, INDUCTANCE],
        list: None,
        modes: &[],
        outputs: &[OutputSpec::new("reactance", "Inductive reactance (Xl)", K::Resistance, 4)],
    },
    CalculatorSpec {
        id: CalculatorId::CapacitorCharge,
        slug: "capacitor_charge",
        name: "Capacitor Charge & Energy",
        category: Category::Reactive,
        summary: "Q = C·V and E = ½·C·V².",
        fields: &[CAPACITANCE, FieldSpec::new("v", "Voltage", K::Voltage, NonNegative)],
        list: None,
        modes: &[],
        outputs: &[
            OutputSpec::new("charge", "Charge", K::Charge, 3),
            OutputSpec::new("energy", "Energy", K::Energy, 3),
        ],
    },
    CalculatorSpec {
        id: CalculatorId::SeriesResistors,
        slug: "series_resistors",
        name: "Resistors in Series",
        category: Category::Networks,
        summary: "R = R1 + R2 + …",
        fields: &[],
        list: Some(ListSpec::new("Resistance", K::Resistance, Prefix::Base)),
        modes: &[],
        outputs: &[OutputSpec::new("total", "Total resistance", K::Resistance, 4)],
    },
    CalculatorSpec {
        id: CalculatorId::ParallelResistors,
        slug: "parallel_resistors",
        name: "Resistors in Parallel",
        category: Category::Networks,
        summary: "1/R = 1/R1 + 1/R2 + …",
        fields: &[],
        list: Some(ListSpec::new("Resistance", K::Resistance, Prefix::Base)),
        modes: &[],
        outputs: &[OutputSpec::new("total", "Total resistance", K::Resistance, 4)],
    },
    CalculatorSpec {
        id: CalculatorId::SeriesCapacitors,
        slug: "series_capacitors",
        name: "Capacitors in Series",
        category: Category::Networks,
        summary: "1/C = 1/C1 + 1/C2 + …",
        fields: &[],
        list: Some(ListSpec::new("Capacitance", K::Capacitance, Prefix::Micro)),
        modes: &[],
        outputs: &[OutputSpec::new("total", "Total capacitance", K::Capacitance, 4)],
    },
    CalculatorSpec {
        id: CalculatorId::ParallelCapacitors,
        slug: "parallel_capacitors",
        name: "Capacitors in Parallel",
        category: Category::Networks,
        summary: "C = C1 + C2 + …",
        fields: &[],
        list: Some(ListSpec::new("Capacitance", K::Capacitance, Prefix::Micro)),
        modes: &[],
        outputs: &[OutputSpec::new("total", "Total capacitance", K::Capacitance, 4)],
    },
    CalculatorSpec {
        id: CalculatorId::SeriesInductors,
        slug: "series_inductors",
        name: "Inductors in Series",
        category: Category::Networks,
        summary: "L = L1 + L2 + … (no mutual coupling)",
        fields: &[],
        list: Some(ListSpec::new("Inductance", K::Inductance, Prefix::Milli)),
        modes: &[],
        outputs: &[OutputSpec::new("total", "Total inductance", K::Inductance, 4)],
    },
    CalculatorSpec {
        id: CalculatorId::ParallelInductors,
        slug: "parallel_inductors",
        name: "Inductors in Parallel",
        category: Category::Networks,
        summary: "1/L = 1/L1 + 1/L2 + … (no mutual coupling)",
        fields: &[],
        list: Some(ListSpec::new("Inductance", K::Inductance, Prefix::Milli)),
        modes: &[],
        outputs: &[OutputSpec::new("total", "Total inductance", K::Inductance, 4)],
    },
    CalculatorSpec {
        id: CalculatorId::VoltageDivider,
        slug: "voltage_divider",
        name: "Voltage Divider",
        category: Category::Networks,
        summary: "Vout = Vin·R2/(R1+R2), or solve for R1 or R2.",
        fields: &[
            FieldSpec::new("vin", "Input voltage", K::Voltage, Positive),
            FieldSpec::new("vout", "Output voltage", K::Voltage, NonNegative),
            FieldSpec::new("r1", "R1", K::Resistance, Positive),
            FieldSpec::new("r2", "R2", K::Resistance, Positive),
        ],
        list: None,
        modes: &[
            mode("vout", "Output voltage", &["vin", "r1", "r2"]),
            mode("r1", "R1", &["vin", "vout", "r2"]),
            mode("r2", "R2", &["vin", "vout", "r1"]),
        ],
        outputs: &[
            OutputSpec::new("vout", "Output voltage", K::Voltage, 4),
            OutputSpec::new("r1", "R1", K::Resistance, 4),
            OutputSpec::new("r2", "R2", K::Resistance, 4),
            OutputSpec::new("current", "Divider current", K::Current, 4),
        ],
    },
    CalculatorSpec {
        id: CalculatorId::WheatstoneBridge,
        slug: "wheatstone_bridge",
        name: "Wheatstone Bridge",
        category: Category::Networks,
        summary: "Balanced when R1·R3 = R2·Rx; solve any one arm.",
        fields: &[
            FieldSpec::new("r1", "R1", K::Resistance, Positive),
            FieldSpec::new("r2", "R2", K::Resistance, Positive),
            FieldSpec::new("r3", "R3", K::Resistance, Positive),
            FieldSpec::new("rx", "Rx", K::Resistance, Positive),
        ],
        list: None,
        modes: &[
            mode("rx", "Rx", &["r1", "r2", "r3"]),
            mode("r1", "R1", &["r2", "r3", "rx"]),
            mode("r2", "R2", &["r1", "r3", "rx"]),
            mode("r3", "R3", &["r1", "r2", "rx"]),
        ],
        outputs: &[
            OutputSpec::new("rx", "Rx", K::Resistance, 4),
            OutputSpec::new("r1", "R1", K::Resistance, 4),
            OutputSpec::new("r2", "R2", K::Resistance, 4),
            OutputSpec::new("r3", "R3", K::Resistance, 4),
        ],
    },
    CalculatorSpec {
        id: CalculatorId::Decibel,
        slug: "decibel",
        name: "Decibel Converter",
        category: Category::Signal,
        summary: "Power or voltage ratios to dB and back.",
        fields: &[
            FieldSpec::new("p1", "P1", K::Power, Positive),
            FieldSpec::new("p2", "P2 (reference)", K::Power, Positive),
            FieldSpec::new("v1", "V1", K::Voltage, Positive),
            FieldSpec::new("v2", "V2 (reference)", K::Voltage, Positive),
            FieldSpec::new("db", "Decibels", K::Decibel, Any).signed(),
        ],
        list: None,
        modes: &[
            mode("power_db", "Power ratio → dB", &["p1", "p2"]),
            mode("voltage_db", "Voltage ratio → dB", &["v1", "v2"]),
            mode("db_power", "dB → power ratio", &["db"]),
            mode("db_voltage", "dB → voltage ratio", &["db"]),
        ],
        outputs: &[
            OutputSpec::new("db", "Gain", K::Decibel, 3),
            OutputSpec::new("ratio", "Ratio", K::Ratio, 4),
        ],
    },
    CalculatorSpec {
        id: CalculatorId::PowerFactor,
        slug: "power_factor",
        name: "Power Factor",
        category: Category::Signal,
        summary: "PF = P/S with a Poor/Fair/Good rating.",
        fields: &[
            FieldSpec::new("p", "Real power", K::Power, NonNegative),
            FieldSpec::new("s", "Apparent power", K::ApparentPower, Positive),
        ],
        list: None,
        modes: &[],
        outputs: &[
            OutputSpec::new("factor", "Power factor", K::Ratio, 3),
            OutputSpec::new("reactive", "Reactive power", K::ReactivePower, 3),
            OutputSpec::new("angle", "Phase angle", K::Angle, 3),
        ],
    },
    CalculatorSpec {
        id: CalculatorId::BatteryLife,
        slug: "battery_life",
        name: "Battery Life",
        category: Category::Components,
        summary: "Run time = capacity / load current.",
        fields: &[
            FieldSpec::new("capacity", "Battery capacity", K::Capacity, Positive),
            FieldSpec::new("current", "Load current", K::Current, Positive).unit(Prefix::Milli),
        ],
        list: None,
        modes: &[],
        outputs: &[OutputSpec::new("runtime", "Estimated run time", K::Time, 3).duration()],
    },
    CalculatorSpec {
        id: CalculatorId::RcPhaseShift,
        slug: "rc_phase_shift",
        name: "RC Phase Shift",
        category: Category::Reactive,
        summary: "Single RC low-pass response and the N-stage phase-shift oscillator frequency.",
        fields: &[
            RESISTANCE,
            CAPACITANCE.unit(Prefix::Nano),
            FREQUENCY,
            FieldSpec::new("stages", "Number of stages", K::Ratio, Positive),
        ],
        list: None,
        modes: &[],
        outputs: &[
            OutputSpec::new("cutoff", "Cutoff frequency", K::Frequency, 4),
            OutputSpec::new("phase", "Phase shift", K::Angle, 4),
            OutputSpec::new("gain", "Gain", K::Ratio, 4),
            OutputSpec::new("oscillator", "Oscillator frequency", K::Frequency, 4),
        ],
    },
    CalculatorSpec {
        id: CalculatorId::IdealDiode,
        slug: "ideal_diode",
        name: "Ideal Diode Circuit",
        category: Category::Components,
        summary: "Source, series resistor and an ideal diode: on or off.",
        fields: &[
            FieldSpec::new("vs", "Source voltage", K::Voltage, Any).signed(),
            RESISTANCE,
        ],
        list: None,
        modes: &[],
        outputs: &[
            OutputSpec::new("current", "Diode current", K::Current, 3),
            OutputSpec::new("diode_voltage", "Diode voltage", K::Voltage, 3),
            OutputSpec::new("resistor_voltage", "Resistor voltage", K::Voltage, 3),
        ],
    },
    CalculatorSpec {
        id: CalculatorId::LedResistor,
        slug: "led_resistor",
        name: "LED Series Resistor",
        category: Category::Components,
        summary: "R = (Vs − Vf)/If, with resistor power and the next E12 value.",
        fields: &[
            FieldSpec::new("vs", "Supply voltage", K::Voltage, Positive),
            FieldSpec::new("vf", "LED forward voltage", K::Voltage, Positive),
            FieldSpec::new("if", "LED current", K::Current, Positive).unit(Prefix::Milli),
        ],
        list: None,
        modes: &[],
        outputs: &[
            OutputSpec::new("resistance", "Resistor", K::Resistance, 3),
            OutputSpec::new("power", "Resistor power", K::Power, 3),
            OutputSpec::new("standard", "Nearest E12 value", K::Resistance, 3),
        ],
    },
    CalculatorSpec {
        id: CalculatorId::OpAmpGain,
        slug: "op_amp_gain",
        name: "Op-Amp Gain",
        category: Category::Signal,
        summary: "Closed-loop gain of an inverting or non-inverting amplifier.",
        fields: &[
            FieldSpec::new("rin", "Input resistor (Rin)", K::Resistance, Positive),
            FieldSpec::new("rf", "Feedback resistor (Rf)", K::Resistance, Positive),
            FieldSpec::new("vin", "Input voltage", K::Voltage, Any).signed(),
        ],
        list: None,
        modes: &[
            mode("inverting", "Inverting", &["rin", "rf", "vin"]),
            mode("non_inverting", "Non-inverting", &["rin", "rf", "vin"]),
        ],
        outputs: &[
            OutputSpec::new("gain", "Voltage gain", K::Ratio, 4),
            OutputSpec::new("gain_db", "Gain", K::Decibel, 3),
            OutputSpec::new("vout", "Output voltage", K::Voltage, 4),
        ],
    },
    CalculatorSpec {
        id: CalculatorId::SmdResistor,
        slug: "smd_resistor",
        name: "SMD Resistor Code",
        category: Category::Components,
        summary: "Decode 3-digit, 4-digit, R-notation and EIA-96 markings.",
        fields: &[FieldSpec::new("code", "SMD code", K::Text, Any)],
        list: None,
        modes: &[],
        outputs: &[OutputSpec::new("resistance", "Resistance", K::Resistance, 3)],
    },
];

lazy_static! {
    static ref BY_SLUG: HashMap<&'static str, &'static CalculatorSpec> =
        CATALOG.iter().map(|spec| (spec.slug, spec)).collect();
}

/// All calculators in catalog order.
pub fn all() -> &'static [CalculatorSpec] {
    CATALOG
}

pub fn find(slug: &str) -> Option<&'static CalculatorSpec> {
    BY_SLUG.get(slug).copied()
}

/// Like [`find`], but an unknown slug is an error.
pub fn lookup(slug: &str) -> Result<&'static CalculatorSpec> {
    find(slug).ok_or_else(|| Error::UnknownCalculator(slug.to_string()))
}
