use crate::error::ValidationError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Form contents exactly as typed, before any validation.
///
/// Values may carry an inline unit (`"10µF"`, `"4.7 mH"`); a unit in
/// `units` applies when the value has none.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawInput {
    #[serde(default)]
    pub values: BTreeMap<String, String>,
    #[serde(default)]
    pub units: BTreeMap<String, String>,
    /// Entries of a dynamic bank, blanks included
    #[serde(default)]
    pub items: Vec<String>,
    /// Unit selected for the whole bank
    #[serde(default)]
    pub item_unit: Option<String>,
    #[serde(default)]
    pub solve_for: Option<String>,
}

impl RawInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(mut self, field: &str, text: &str) -> Self {
        self.values.insert(field.to_string(), text.to_string());
        self
    }

    pub fn unit(mut self, field: &str, unit: &str) -> Self {
        self.units.insert(field.to_string(), unit.to_string());
        self
    }

    pub fn item(mut self, text: &str) -> Self {
        self.items.push(text.to_string());
        self
    }

    pub fn item_unit(mut self, unit: &str) -> Self {
        self.item_unit = Some(unit.to_string());
        self
    }

    pub fn solve_for(mut self, mode: &str) -> Self {
        self.solve_for = Some(mode.to_string());
        self
    }
}

/// Validated input in base SI units
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedFields {
    pub values: BTreeMap<String, f64>,
    pub items: Vec<f64>,
    pub texts: BTreeMap<String, String>,
}

impl ParsedFields {
    pub fn get(&self, field: &str) -> Result<f64, ValidationError> {
        self.values
            .get(field)
            .copied()
            .ok_or_else(|| ValidationError::missing(field, field))
    }

    pub fn text(&self, field: &str) -> Result<&str, ValidationError> {
        self.texts
            .get(field)
            .map(String::as_str)
            .ok_or_else(|| ValidationError::missing(field, field))
    }
}
