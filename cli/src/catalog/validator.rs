use crate::catalog::input::{ParsedFields, RawInput};
use crate::catalog::registry::{
    CalculatorId, CalculatorSpec, Constraint, FieldSpec, ListSpec, SolveMode,
};
use crate::error::ValidationError;
use crate::units::{is_number, parse_number, split_value_unit, Prefix, Quantity, QuantityKind};

/// Result of reading one value-with-unit from the form
#[derive(Debug, Clone, PartialEq)]
enum Reading {
    Value(Quantity),
    Malformed,
    UnsupportedUnit(String),
}

fn read_quantity(
    text: &str,
    fallback_unit: Option<&str>,
    kind: QuantityKind,
    default_prefix: Prefix,
    signed: bool,
) -> Reading {
    let text = text.trim();
    let (number, inline_unit) = if is_number(text, true) {
        (text, None)
    } else {
        match split_value_unit(text) {
            Some(parts) => parts,
            None => return Reading::Malformed,
        }
    };

    let magnitude = match parse_number(number, signed) {
        Some(v) => v,
        None => return Reading::Malformed,
    };

    // An inline unit beats the dropdown selection
    let unit = inline_unit.or(fallback_unit).unwrap_or("");
    match kind.parse_unit(unit, default_prefix) {
        Some(prefix) => Reading::Value(Quantity::new(magnitude, prefix)),
        None => Reading::UnsupportedUnit(unit.to_string()),
    }
}

/// Turns raw form text into SI values for one calculator, or the first
/// reason it cannot be evaluated.
pub struct InputValidator<'a> {
    spec: &'a CalculatorSpec,
}

impl<'a> InputValidator<'a> {
    pub fn new(spec: &'a CalculatorSpec) -> Self {
        Self { spec }
    }

    pub fn validate(
        &self,
        raw: &RawInput,
        mode: Option<&SolveMode>,
    ) -> Result<ParsedFields, ValidationError> {
        let required = self.spec.required_fields(mode);

        if let Some(field) = required.iter().find(|f| !raw.values.contains_key(f.id)) {
            return Err(ValidationError::missing(field.label, field.id));
        }

        let mut parsed = ParsedFields::default();
        let mut malformed: Vec<&FieldSpec> = Vec::new();
        let mut unit_error: Option<ValidationError> = None;

        for &field in &required {
            let text = raw.values.get(field.id).map(String::as_str).unwrap_or("");

            if field.kind == QuantityKind::Text {
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    return Err(ValidationError::missing(field.label, field.id));
                }
                parsed.texts.insert(field.id.to_string(), trimmed.to_string());
                continue;
            }

            let unit = raw.units.get(field.id).map(String::as_str);
            match read_quantity(text, unit, field.kind, field.default_prefix, field.signed) {
                Reading::Value(q) if q.to_si().is_finite() => {
                    parsed.values.insert(field.id.to_string(), q.to_si());
                }
                Reading::Value(_) | Reading::Malformed => malformed.push(field),
                Reading::UnsupportedUnit(unit) => {
                    unit_error.get_or_insert_with(|| {
                        ValidationError::unsupported_unit(&unit, field.label, field.id)
                    });
                }
            }
        }

        // All malformed fields go into a single message
        if !malformed.is_empty() {
            let labels: Vec<&str> = malformed.iter().map(|f| f.label).collect();
            let ids: Vec<&str> = malformed.iter().map(|f| f.id).collect();
            return Err(ValidationError::malformed(&labels, &ids));
        }
        if let Some(err) = unit_error {
            return Err(err);
        }

        for field in &required {
            if let Some(&value) = parsed.values.get(field.id) {
                check_constraint(field, value)?;
            }
        }

        if let Some(list) = &self.spec.list {
            parsed.items = read_list(raw, list)?;
        }

        self.check_relations(mode, &parsed)?;
        Ok(parsed)
    }

    /// Ordering constraints between fields
    fn check_relations(
        &self,
        mode: Option<&SolveMode>,
        parsed: &ParsedFields,
    ) -> Result<(), ValidationError> {
        match self.spec.id {
            CalculatorId::LedResistor => {
                if parsed.get("vf")? >= parsed.get("vs")? {
                    return Err(ValidationError::domain(
                        "Forward voltage must be less than the supply voltage.",
                        &["vf", "vs"],
                    ));
                }
            }
            CalculatorId::PowerFactor => {
                if parsed.get("p")? > parsed.get("s")? {
                    return Err(ValidationError::domain(
                        "Real power cannot exceed apparent power.",
                        &["p", "s"],
                    ));
                }
            }
            CalculatorId::VoltageDivider => {
                if matches!(mode.map(|m| m.id), Some("r1") | Some("r2")) {
                    let (vin, vout) = (parsed.get("vin")?, parsed.get("vout")?);
                    // Vout = 0 is left to the evaluator, which reports it as degenerate
                    if vout != 0.0 && vin <= vout {
                        return Err(ValidationError::domain(
                            "Input voltage must be greater than output voltage.",
                            &["vin", "vout"],
                        ));
                    }
                }
            }
            _ => {}
        }
        Ok(())
    }
}

fn check_constraint(field: &FieldSpec, value: f64) -> Result<(), ValidationError> {
    match field.constraint {
        Constraint::Positive if value <= 0.0 => Err(ValidationError::domain(
            format!("{} must be greater than zero.", field.label),
            &[field.id],
        )),
        Constraint::NonNegative if value < 0.0 => Err(ValidationError::domain(
            format!("{} cannot be negative.", field.label),
            &[field.id],
        )),
        _ => Ok(()),
    }
}

/// Keep the usable entries of a bank: blank, malformed and non-positive
/// entries are dropped before the minimum-count check.
fn read_list(raw: &RawInput, list: &ListSpec) -> Result<Vec<f64>, ValidationError> {
    let bank_unit = raw.item_unit.as_deref();
    if let Some(unit) = bank_unit {
        if list.kind.parse_unit(unit, list.default_prefix).is_none() {
            return Err(ValidationError::unsupported_unit(unit, list.item_label, list.id));
        }
    }

    let values: Vec<f64> = raw
        .items
        .iter()
        .filter_map(
            |item| match read_quantity(item, bank_unit, list.kind, list.default_prefix, false) {
                Reading::Value(q) => Some(q.to_si()),
                _ => None,
            },
        )
        .filter(|v| v.is_finite() && *v > 0.0)
        .collect();

    if values.len() < list.min_count {
        return Err(ValidationError::insufficient(list.id));
    }
    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_quantity_inline_and_fallback_units() {
        let kind = QuantityKind::Capacitance;
        assert_eq!(
            read_quantity("10µF", None, kind, Prefix::Base, false),
            Reading::Value(Quantity::new(10.0, Prefix::Micro))
        );
        assert_eq!(
            read_quantity("10", Some("nF"), kind, Prefix::Micro, false),
            Reading::Value(Quantity::new(10.0, Prefix::Nano))
        );
        assert_eq!(
            read_quantity("10 pF", Some("nF"), kind, Prefix::Micro, false),
            Reading::Value(Quantity::new(10.0, Prefix::Pico))
        );
        assert_eq!(
            read_quantity("10", None, kind, Prefix::Micro, false),
            Reading::Value(Quantity::new(10.0, Prefix::Micro))
        );
    }

    #[test]
    fn test_read_quantity_rejections() {
        let kind = QuantityKind::Voltage;
        assert_eq!(read_quantity("abc", None, kind, Prefix::Base, false), Reading::Malformed);
        assert_eq!(read_quantity("", None, kind, Prefix::Base, false), Reading::Malformed);
        assert_eq!(read_quantity("-5", None, kind, Prefix::Base, false), Reading::Malformed);
        assert_eq!(
            read_quantity("5 F", None, kind, Prefix::Base, false),
            Reading::UnsupportedUnit("F".to_string())
        );
        assert_eq!(
            read_quantity("-5", None, kind, Prefix::Base, true),
            Reading::Value(Quantity::new(-5.0, Prefix::Base))
        );
    }
}
