use crate::catalog::{CalculatorSpec, Constraint};
use crate::engine::result::CalculationResult;
use crate::error::Result;
use crate::units::QuantityKind;
use std::fmt::Write;

pub fn format_result_json(result: &CalculationResult) -> Result<String> {
    Ok(serde_json::to_string_pretty(result)?)
}

/// One `Label: value` line per output, then the annotation if any.
pub fn format_result_text(result: &CalculationResult) -> String {
    let width = result
        .outputs
        .iter()
        .map(|o| o.label.chars().count())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for output in &result.outputs {
        let pad = width - output.label.chars().count();
        let _ = writeln!(out, "{}:{} {}", output.label, " ".repeat(pad), output.display);
    }
    if let Some(note) = &result.annotation {
        let _ = writeln!(out, "{}", note);
    }
    out
}

pub fn format_calculator_list(specs: &[CalculatorSpec]) -> String {
    let width = specs.iter().map(|s| s.slug.len()).max().unwrap_or(0);
    let mut out = String::new();
    for spec in specs {
        let _ = writeln!(
            out,
            "  {:<width$}  {} ({})",
            spec.slug,
            spec.name,
            spec.category.label(),
            width = width
        );
    }
    out
}

fn units_hint(kind: QuantityKind) -> String {
    match kind {
        QuantityKind::Text => "text".to_string(),
        QuantityKind::Ratio => "number".to_string(),
        _ => kind.input_units().join(", "),
    }
}

pub fn format_calculator_description(spec: &CalculatorSpec) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} [{}]", spec.name, spec.slug);
    let _ = writeln!(out, "{}", spec.summary);

    if !spec.fields.is_empty() {
        let _ = writeln!(out, "\nFields:");
        for field in spec.fields {
            let rule = match field.constraint {
                Constraint::Positive => ", > 0",
                Constraint::NonNegative => ", ≥ 0",
                Constraint::Any => "",
            };
            let _ = writeln!(
                out,
                "  {:<9} {} ({}{})",
                field.id,
                field.label,
                units_hint(field.kind),
                rule
            );
        }
    }

    if let Some(list) = &spec.list {
        let _ = writeln!(
            out,
            "\nValues: at least {} × {} ({}), pass with --item",
            list.min_count,
            list.item_label,
            units_hint(list.kind)
        );
    }

    if !spec.modes.is_empty() {
        let _ = writeln!(out, "\nSolve for (--solve):");
        for (i, mode) in spec.modes.iter().enumerate() {
            let default = if i == 0 { " (default)" } else { "" };
            let _ = writeln!(
                out,
                "  {:<13} {}{}; needs {}",
                mode.id,
                mode.label,
                default,
                mode.inputs.join(", ")
            );
        }
    }

    let _ = writeln!(out, "\nOutputs:");
    for output in spec.outputs {
        let _ = writeln!(out, "  {:<16} {} ({} digits)", output.name, output.label, output.digits);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;
    use crate::engine::result::FormattedOutput;

    fn sample() -> CalculationResult {
        CalculationResult {
            calculator: "power_factor".to_string(),
            solve_for: None,
            outputs: vec![
                FormattedOutput {
                    name: "factor".to_string(),
                    label: "Power factor".to_string(),
                    value: 0.8,
                    unit: String::new(),
                    display: "0.800".to_string(),
                },
                FormattedOutput {
                    name: "angle".to_string(),
                    label: "Phase angle".to_string(),
                    value: 36.87,
                    unit: "°".to_string(),
                    display: "36.9°".to_string(),
                },
            ],
            annotation: Some("Fair".to_string()),
        }
    }

    #[test]
    fn test_text_aligns_labels() {
        let text = format_result_text(&sample());
        assert_eq!(text, "Power factor: 0.800\nPhase angle:  36.9°\nFair\n");
    }

    #[test]
    fn test_json_skips_empty_solve_mode() {
        let json = format_result_json(&sample()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["calculator"], "power_factor");
        assert_eq!(value["annotation"], "Fair");
        assert_eq!(value["outputs"][0]["display"], "0.800");
        assert!(value.get("solve_for").is_none());
    }

    #[test]
    fn test_description_lists_fields_and_modes() {
        let text = format_calculator_description(catalog::find("voltage_divider").unwrap());
        assert!(text.starts_with("Voltage Divider [voltage_divider]"));
        assert!(text.contains("mV, V, kV"));
        assert!(text.contains("vout          Output voltage (default); needs vin, r1, r2"));
    }

    #[test]
    fn test_list_has_every_calculator() {
        let text = format_calculator_list(catalog::all());
        assert_eq!(text.lines().count(), catalog::all().len());
        assert!(text.contains("ohms_law"));
    }
}
