use serde::Serialize;

/// SI prefix applied to a base unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Prefix {
    Pico,
    Nano,
    Micro,
    Milli,
    Base,
    Kilo,
    Mega,
    Giga,
}

impl Prefix {
    pub fn factor(self) -> f64 {
        match self {
            Prefix::Pico => 1e-12,
            Prefix::Nano => 1e-9,
            Prefix::Micro => 1e-6,
            Prefix::Milli => 1e-3,
            Prefix::Base => 1.0,
            Prefix::Kilo => 1e3,
            Prefix::Mega => 1e6,
            Prefix::Giga => 1e9,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Prefix::Pico => "p",
            Prefix::Nano => "n",
            Prefix::Micro => "µ",
            Prefix::Milli => "m",
            Prefix::Base => "",
            Prefix::Kilo => "k",
            Prefix::Mega => "M",
            Prefix::Giga => "G",
        }
    }

    /// Parse a bare prefix symbol. Accepts `u` and the Greek mu for micro.
    pub fn from_symbol(s: &str) -> Option<Prefix> {
        match s {
            "p" => Some(Prefix::Pico),
            "n" => Some(Prefix::Nano),
            "µ" | "μ" | "u" => Some(Prefix::Micro),
            "m" => Some(Prefix::Milli),
            "" => Some(Prefix::Base),
            "k" => Some(Prefix::Kilo),
            "M" => Some(Prefix::Mega),
            "G" => Some(Prefix::Giga),
            _ => None,
        }
    }
}

/// Convert a prefixed magnitude into the base SI unit.
pub fn normalize(magnitude: f64, prefix: Prefix) -> f64 {
    magnitude * prefix.factor()
}

/// Physical (or display-only) kind of a calculator field or result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QuantityKind {
    Resistance,
    Capacitance,
    Inductance,
    Voltage,
    Current,
    Power,
    ApparentPower,
    ReactivePower,
    Frequency,
    Time,
    Charge,
    Energy,
    /// Battery capacity in milliamp-hours, no prefixes
    Capacity,
    Decibel,
    Ratio,
    Angle,
    /// Free text such as an SMD marking
    Text,
}

use Prefix::*;

impl QuantityKind {
    pub fn symbol(self) -> &'static str {
        match self {
            QuantityKind::Resistance => "Ω",
            QuantityKind::Capacitance => "F",
            QuantityKind::Inductance => "H",
            QuantityKind::Voltage => "V",
            QuantityKind::Current => "A",
            QuantityKind::Power => "W",
            QuantityKind::ApparentPower => "VA",
            QuantityKind::ReactivePower => "var",
            QuantityKind::Frequency => "Hz",
            QuantityKind::Time => "s",
            QuantityKind::Charge => "C",
            QuantityKind::Energy => "J",
            QuantityKind::Capacity => "mAh",
            QuantityKind::Decibel => "dB",
            QuantityKind::Ratio | QuantityKind::Text => "",
            QuantityKind::Angle => "°",
        }
    }

    /// Name used in configuration files and JSON, e.g. `"apparent_power"`.
    pub fn name(self) -> &'static str {
        match self {
            QuantityKind::Resistance => "resistance",
            QuantityKind::Capacitance => "capacitance",
            QuantityKind::Inductance => "inductance",
            QuantityKind::Voltage => "voltage",
            QuantityKind::Current => "current",
            QuantityKind::Power => "power",
            QuantityKind::ApparentPower => "apparent_power",
            QuantityKind::ReactivePower => "reactive_power",
            QuantityKind::Frequency => "frequency",
            QuantityKind::Time => "time",
            QuantityKind::Charge => "charge",
            QuantityKind::Energy => "energy",
            QuantityKind::Capacity => "capacity",
            QuantityKind::Decibel => "decibel",
            QuantityKind::Ratio => "ratio",
            QuantityKind::Angle => "angle",
            QuantityKind::Text => "text",
        }
    }

    pub const ALL: [QuantityKind; 17] = [
        QuantityKind::Resistance,
        QuantityKind::Capacitance,
        QuantityKind::Inductance,
        QuantityKind::Voltage,
        QuantityKind::Current,
        QuantityKind::Power,
        QuantityKind::ApparentPower,
        QuantityKind::ReactivePower,
        QuantityKind::Frequency,
        QuantityKind::Time,
        QuantityKind::Charge,
        QuantityKind::Energy,
        QuantityKind::Capacity,
        QuantityKind::Decibel,
        QuantityKind::Ratio,
        QuantityKind::Angle,
        QuantityKind::Text,
    ];

    pub fn from_name(name: &str) -> Option<QuantityKind> {
        Self::ALL.into_iter().find(|k| k.name() == name)
    }

    /// Alternate spellings of the base symbol accepted on input.
    fn symbol_aliases(self) -> &'static [&'static str] {
        match self {
            // U+2126 OHM SIGN next to the Greek omega
            QuantityKind::Resistance => &["Ω", "Ω", "ohm", "ohms"],
            QuantityKind::ReactivePower => &["var", "VAR", "VAr"],
            QuantityKind::Angle => &["°", "deg"],
            _ => &[],
        }
    }

    /// Prefixes a user may select when entering a value of this kind.
    pub fn input_prefixes(self) -> &'static [Prefix] {
        match self {
            QuantityKind::Capacitance => &[Pico, Nano, Micro, Milli, Base],
            QuantityKind::Inductance => &[Micro, Milli, Base],
            QuantityKind::Voltage => &[Milli, Base, Kilo],
            QuantityKind::Current => &[Micro, Milli, Base],
            QuantityKind::Power | QuantityKind::ApparentPower => &[Milli, Base, Kilo],
            QuantityKind::Frequency => &[Base, Kilo, Mega, Giga],
            QuantityKind::Text => &[],
            _ => &[Base],
        }
    }

    /// Prefixes the formatter chooses between, smallest first.
    pub fn output_prefixes(self) -> &'static [Prefix] {
        match self {
            QuantityKind::Resistance => &[Base, Kilo, Mega, Giga],
            QuantityKind::Capacitance | QuantityKind::Charge => {
                &[Pico, Nano, Micro, Milli, Base]
            }
            QuantityKind::Inductance | QuantityKind::Time => &[Nano, Micro, Milli, Base],
            QuantityKind::Voltage => &[Micro, Milli, Base, Kilo],
            QuantityKind::Current => &[Nano, Micro, Milli, Base],
            QuantityKind::Power => &[Micro, Milli, Base, Kilo, Mega],
            QuantityKind::ApparentPower | QuantityKind::ReactivePower => {
                &[Milli, Base, Kilo, Mega]
            }
            QuantityKind::Frequency => &[Base, Kilo, Mega, Giga],
            QuantityKind::Energy => &[Nano, Micro, Milli, Base, Kilo],
            _ => &[Base],
        }
    }

    /// Whether the display puts a space between number and unit.
    pub fn spaced(self) -> bool {
        !matches!(
            self,
            QuantityKind::Angle | QuantityKind::Ratio | QuantityKind::Text
        )
    }

    /// Resolve a unit string such as `"µF"`, `"uF"` or `"kHz"` against this
    /// kind. An empty string resolves to `default`. Returns `None` for
    /// anything outside the kind's input set.
    pub fn parse_unit(self, unit: &str, default: Prefix) -> Option<Prefix> {
        let unit = unit.trim();
        if unit.is_empty() {
            return Some(default);
        }

        let symbols = std::iter::once(self.symbol()).chain(self.symbol_aliases().iter().copied());
        let prefix = symbols
            .filter(|s| !s.is_empty())
            .find_map(|s| unit.strip_suffix(s).and_then(Prefix::from_symbol))?;

        self.input_prefixes().contains(&prefix).then_some(prefix)
    }

    /// Display labels of every accepted input unit, e.g. `["pF", "nF", ...]`.
    pub fn input_units(self) -> Vec<String> {
        self.input_prefixes()
            .iter()
            .map(|p| format!("{}{}", p.symbol(), self.symbol()))
            .collect()
    }
}
