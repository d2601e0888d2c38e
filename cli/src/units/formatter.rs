use crate::units::prefix::{Prefix, QuantityKind};

/// Rendered in place of a number that should never have reached the formatter
pub const DEFAULT_PLACEHOLDER: &str = "---";

/// Format a number to `digits` significant digits, the way JavaScript's
/// `Number.prototype.toPrecision` does: fixed notation unless the decimal
/// exponent is below -6 or at least `digits`.
pub fn to_precision(value: f64, digits: usize) -> String {
    let digits = digits.clamp(1, 21);

    if value == 0.0 {
        return format!("{:.*}", digits - 1, 0.0);
    }

    // Rust's LowerExp rounds the mantissa for us: "1.59e2", "-4.70e-7"
    let sci = format!("{:.*e}", digits - 1, value);
    let (mantissa, exponent) = match sci.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => return sci,
    };

    if exponent < -6 || exponent >= digits as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{}{}", mantissa, sign, exponent.abs())
    } else {
        let decimals = (digits as i32 - 1 - exponent).max(0) as usize;
        format!("{:.*}", decimals, value)
    }
}

/// Pick the display prefix for an SI magnitude: the largest output prefix
/// not exceeding it, or the smallest one for tiny values.
pub fn choose_prefix(value: f64, kind: QuantityKind) -> Prefix {
    let prefixes = kind.output_prefixes();
    let magnitude = value.abs();

    if magnitude == 0.0 {
        return if prefixes.contains(&Prefix::Base) {
            Prefix::Base
        } else {
            prefixes[0]
        };
    }

    prefixes
        .iter()
        .rev()
        .find(|p| magnitude >= p.factor())
        .copied()
        .unwrap_or(prefixes[0])
}

/// Format an SI value with a metric prefix and fixed significant digits,
/// e.g. `0.01 s` → `"10.0 ms"`, `4700 Ω` → `"4.70 kΩ"`.
///
/// Non-finite values render as `placeholder`.
pub fn format_quantity(value: f64, kind: QuantityKind, digits: usize, placeholder: &str) -> String {
    if !value.is_finite() {
        return placeholder.to_string();
    }

    let prefixes = kind.output_prefixes();
    let mut prefix = choose_prefix(value, kind);
    let mut text = to_precision(value / prefix.factor(), digits);

    // 999.96 Ω at four digits rounds to "1000"; move up to "1.000 kΩ"
    let rounded = text.parse::<f64>().unwrap_or(0.0).abs();
    if rounded >= 1000.0 {
        if let Some(next) = prefixes.iter().find(|p| p.factor() > prefix.factor()) {
            if (next.factor() / prefix.factor() - 1000.0).abs() < 1e-6 {
                prefix = *next;
                text = to_precision(value / prefix.factor(), digits);
            }
        }
    }

    let unit = format!("{}{}", prefix.symbol(), kind.symbol());
    if unit.is_empty() {
        text
    } else if kind.spaced() {
        format!("{} {}", text, unit)
    } else {
        format!("{}{}", text, unit)
    }
}

/// Render a run time given in hours: minutes under an hour, hours under a
/// day, otherwise days plus hours.
pub fn format_duration(hours: f64, placeholder: &str) -> String {
    if !hours.is_finite() || hours < 0.0 {
        return placeholder.to_string();
    }

    // Branch on the rounded value so 59.96 minutes reads as an hour
    let minutes = (hours * 600.0).round() / 10.0;
    if minutes < 60.0 {
        return format!("{:.1} minutes", minutes);
    }

    let tenths = (hours * 10.0).round();
    if tenths < 240.0 {
        return format!("{:.1} hours", tenths / 10.0);
    }

    let days = (tenths / 240.0).floor();
    let rest = (tenths - days * 240.0) / 10.0;
    let unit = if days == 1.0 { "day" } else { "days" };
    format!("{} {}, {:.1} hours", days, unit, rest)
}
