use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Complete decimal number: optional sign, digits with at most one decimal point.
    /// No exponent; form fields never accept one.
    /// Examples: "5", "-0.5", "12.", ".25"
    static ref NUMBER_PATTERN: Regex = Regex::new(r"^[+-]?(\d+\.?\d*|\.\d+)$").unwrap();

    /// Anything a user could still be in the middle of typing towards a number
    static ref PARTIAL_PATTERN: Regex = Regex::new(r"^[+-]?\d*\.?\d*$").unwrap();

    /// Number followed by an optional unit, e.g. "10 µF", "2.2nF", "-5 V"
    static ref VALUE_UNIT_PATTERN: Regex =
        Regex::new(r"^([+-]?(?:\d+\.?\d*|\.\d+))\s*([^\d\s.+\-]\S*)?$").unwrap();
}

fn sign_allowed(s: &str, signed: bool) -> bool {
    signed || !s.starts_with(['+', '-'])
}

/// Check whether text is a complete decimal number under the field grammar
pub fn is_number(text: &str, signed: bool) -> bool {
    let trimmed = text.trim();
    NUMBER_PATTERN.is_match(trimmed) && sign_allowed(trimmed, signed)
}

/// Live keystroke filter: true when `text` is empty, a complete number, or a
/// prefix of one ("-", ".", "12.").
pub fn accepts_keystroke(text: &str, signed: bool) -> bool {
    PARTIAL_PATTERN.is_match(text) && sign_allowed(text, signed)
}

/// Parse text under the field grammar.
pub fn parse_number(text: &str, signed: bool) -> Option<f64> {
    if !is_number(text, signed) {
        return None;
    }
    text.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Split "10 µF" into ("10", Some("µF")) and "10" into ("10", None).
/// Returns None when the text does not start with a number.
pub fn split_value_unit(text: &str) -> Option<(&str, Option<&str>)> {
    let caps = VALUE_UNIT_PATTERN.captures(text.trim())?;
    let number = caps.get(1)?.as_str();
    let unit = caps.get(2).map(|m| m.as_str());
    Some((number, unit))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_grammar() {
        assert!(is_number("5", false));
        assert!(is_number("0.02", false));
        assert!(is_number("12.", false));
        assert!(is_number(".25", false));
        assert!(is_number(" 42 ", false));
        assert!(is_number("-3.3", true));
        assert!(is_number("+3.3", true));

        assert!(!is_number("-3.3", false));
        assert!(!is_number("", false));
        assert!(!is_number(".", false));
        assert!(!is_number("1.2.3", false));
        assert!(!is_number("1e3", false));
        assert!(!is_number("abc", false));
        assert!(!is_number("5V", false));
    }

    #[test]
    fn test_keystroke_filter() {
        assert!(accepts_keystroke("", false));
        assert!(accepts_keystroke(".", false));
        assert!(accepts_keystroke("12.", false));
        assert!(accepts_keystroke("-", true));
        assert!(accepts_keystroke("-0.", true));

        assert!(!accepts_keystroke("-", false));
        assert!(!accepts_keystroke("1..", false));
        assert!(!accepts_keystroke("1a", false));
        assert!(!accepts_keystroke("--1", true));
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number("5", false), Some(5.0));
        assert_eq!(parse_number("12.", false), Some(12.0));
        assert_eq!(parse_number(".5", false), Some(0.5));
        assert_eq!(parse_number("-0.7", true), Some(-0.7));
        assert_eq!(parse_number("-0.7", false), None);
        assert_eq!(parse_number("five", false), None);
    }

    #[test]
    fn test_split_value_unit() {
        assert_eq!(split_value_unit("10 µF"), Some(("10", Some("µF"))));
        assert_eq!(split_value_unit("2.2nF"), Some(("2.2", Some("nF"))));
        assert_eq!(split_value_unit("-5 V"), Some(("-5", Some("V"))));
        assert_eq!(split_value_unit("100"), Some(("100", None)));
        assert_eq!(split_value_unit("µF"), None);
        assert_eq!(split_value_unit(""), None);
    }
}
