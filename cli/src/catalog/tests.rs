use super::*;
use crate::error::{Error, ErrorKind, ValidationError};
use std::collections::HashSet;

fn validate(slug: &str, raw: &RawInput) -> Result<ParsedFields, ValidationError> {
    let spec = find(slug).unwrap();
    let mode = spec.solve_mode(raw.solve_for.as_deref()).unwrap();
    InputValidator::new(spec).validate(raw, mode)
}

#[test]
fn test_catalog_slugs_are_unique_and_findable() {
    let mut seen = HashSet::new();
    for spec in all() {
        assert!(seen.insert(spec.slug), "duplicate slug {}", spec.slug);
        assert_eq!(find(spec.slug).unwrap().id, spec.id);
    }
    assert_eq!(all().len(), 22);
    assert!(find("flux_capacitor").is_none());
    assert!(matches!(lookup("flux_capacitor"), Err(Error::UnknownCalculator(_))));
}

#[test]
fn test_modes_only_name_declared_fields() {
    for spec in all() {
        for mode in spec.modes {
            for input in mode.inputs {
                assert!(
                    spec.field(input).is_some(),
                    "{}: mode {} reads unknown field {}",
                    spec.slug,
                    mode.id,
                    input
                );
            }
        }
        assert!(!spec.fields.is_empty() || spec.list.is_some());
        assert!(!spec.outputs.is_empty());
    }
}

#[test]
fn test_solve_mode_defaults_and_rejects() {
    let divider = find("voltage_divider").unwrap();
    assert_eq!(divider.solve_mode(None).unwrap().unwrap().id, "vout");
    assert_eq!(divider.solve_mode(Some("r2")).unwrap().unwrap().id, "r2");
    assert!(matches!(
        divider.solve_mode(Some("r9")),
        Err(Error::UnknownSolveMode { .. })
    ));

    let rc = find("rc_time_constant").unwrap();
    assert!(rc.solve_mode(None).unwrap().is_none());
    assert!(rc.solve_mode(Some("r")).is_err());
}

#[test]
fn test_units_normalize_to_si() {
    let raw = RawInput::new()
        .value("r", "1000")
        .value("c", "10")
        .unit("c", "µF");
    let parsed = validate("rc_time_constant", &raw).unwrap();
    assert_eq!(parsed.values["r"], 1000.0);
    assert!((parsed.values["c"] - 10e-6).abs() < 1e-18);

    let raw = RawInput::new().value("l", "10mH").value("c", "100uF");
    let parsed = validate("lc_resonance", &raw).unwrap();
    assert!((parsed.values["l"] - 0.01).abs() < 1e-15);
    assert!((parsed.values["c"] - 1e-4).abs() < 1e-15);
}

#[test]
fn test_all_malformed_fields_reported_together() {
    let raw = RawInput::new().value("v", "abc").value("i", "");
    let err = validate("ohms_law", &raw.solve_for("r")).unwrap_err();
    assert_eq!(err.kind, ErrorKind::Malformed);
    assert_eq!(
        err.message,
        "Please enter valid numeric values for Voltage and Current."
    );
    assert_eq!(err.fields, vec!["v", "i"]);
}

#[test]
fn test_missing_field() {
    let raw = RawInput::new().value("v", "5").solve_for("r");
    let err = validate("ohms_law", &raw).unwrap_err();
    assert_eq!(err.kind, ErrorKind::MissingField);
    assert_eq!(err.message, "Current is required.");
}

#[test]
fn test_unsupported_unit() {
    let raw = RawInput::new().value("r", "4.7k").value("c", "10");
    let err = validate("rc_time_constant", &raw).unwrap_err();
    assert_eq!(err.kind, ErrorKind::UnsupportedUnit);
    assert_eq!(err.message, "Unsupported unit 'k' for Resistance.");
}

#[test]
fn test_unsigned_fields_reject_sign() {
    let raw = RawInput::new().value("r", "-100").value("c", "10");
    let err = validate("rc_time_constant", &raw).unwrap_err();
    assert_eq!(err.kind, ErrorKind::Malformed);
}

#[test]
fn test_positive_constraint() {
    let raw = RawInput::new().value("r", "0").value("c", "10");
    let err = validate("rc_time_constant", &raw).unwrap_err();
    assert_eq!(err.kind, ErrorKind::Domain);
    assert_eq!(err.message, "Resistance must be greater than zero.");
    assert_eq!(err.fields, vec!["r"]);
}

#[test]
fn test_led_forward_voltage_ordering() {
    let raw = RawInput::new()
        .value("vs", "3")
        .value("vf", "3")
        .value("if", "20");
    let err = validate("led_resistor", &raw).unwrap_err();
    assert_eq!(err.kind, ErrorKind::Domain);
    assert_eq!(
        err.message,
        "Forward voltage must be less than the supply voltage."
    );

    let raw = RawInput::new()
        .value("vs", "0")
        .value("vf", "2")
        .value("if", "20");
    let err = validate("led_resistor", &raw).unwrap_err();
    assert_eq!(err.message, "Supply voltage must be greater than zero.");
}

#[test]
fn test_power_factor_ordering() {
    let raw = RawInput::new().value("p", "1200").value("s", "1000");
    let err = validate("power_factor", &raw).unwrap_err();
    assert_eq!(err.message, "Real power cannot exceed apparent power.");

    let raw = RawInput::new().value("p", "0").value("s", "1000");
    assert!(validate("power_factor", &raw).is_ok());
}

#[test]
fn test_divider_vin_must_exceed_vout() {
    let raw = RawInput::new()
        .value("vin", "5")
        .value("vout", "6")
        .value("r2", "1000")
        .solve_for("r1");
    let err = validate("voltage_divider", &raw).unwrap_err();
    assert_eq!(err.message, "Input voltage must be greater than output voltage.");
    assert_eq!(err.fields, vec!["vin", "vout"]);

    // Vout is not read when solving for Vout itself
    let raw = RawInput::new()
        .value("vin", "5")
        .value("r1", "1000")
        .value("r2", "1000");
    assert!(validate("voltage_divider", &raw).is_ok());
}

#[test]
fn test_bank_filters_then_counts() {
    let raw = RawInput::new()
        .item("10")
        .item("")
        .item("abc")
        .item("-5")
        .item("0")
        .item("20");
    let parsed = validate("series_resistors", &raw).unwrap();
    assert_eq!(parsed.items, vec![10.0, 20.0]);

    let raw = RawInput::new().item("10").item("").item("abc");
    let err = validate("series_resistors", &raw).unwrap_err();
    assert_eq!(err.kind, ErrorKind::Insufficient);
    assert_eq!(err.message, "Please enter at least two valid values.");
}

#[test]
fn test_bank_units() {
    let raw = RawInput::new().item("10").item("470 nF").item_unit("µF");
    let parsed = validate("parallel_capacitors", &raw).unwrap();
    assert!((parsed.items[0] - 10e-6).abs() < 1e-18);
    assert!((parsed.items[1] - 470e-9).abs() < 1e-18);

    let raw = RawInput::new().item("10").item("20").item_unit("kF");
    let err = validate("parallel_capacitors", &raw).unwrap_err();
    assert_eq!(err.kind, ErrorKind::UnsupportedUnit);
}

#[test]
fn test_text_field() {
    let raw = RawInput::new().value("code", " 4r7 ");
    let parsed = validate("smd_resistor", &raw).unwrap();
    assert_eq!(parsed.texts["code"], "4r7");

    let raw = RawInput::new().value("code", "  ");
    let err = validate("smd_resistor", &raw).unwrap_err();
    assert_eq!(err.kind, ErrorKind::MissingField);
}

#[test]
fn test_signed_fields_accept_negative() {
    let raw = RawInput::new().value("vs", "-3").value("r", "1000");
    let parsed = validate("ideal_diode", &raw).unwrap();
    assert_eq!(parsed.values["vs"], -3.0);
}
