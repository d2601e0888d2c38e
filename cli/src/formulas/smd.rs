use crate::error::{ErrorKind, ValidationError};

/// E96 significands indexed by EIA-96 code 01..=96
const E96: [u16; 96] = [
    100, 102, 105, 107, 110, 113, 115, 118, 121, 124, 127, 130, 133, 137, 140, 143, 147, 150,
    154, 158, 162, 165, 169, 174, 178, 182, 187, 191, 196, 200, 205, 210, 215, 221, 226, 232,
    237, 243, 249, 255, 261, 267, 274, 280, 287, 294, 301, 309, 316, 324, 332, 340, 348, 357,
    365, 374, 383, 392, 402, 412, 422, 432, 442, 453, 464, 475, 487, 499, 511, 523, 536, 549,
    562, 576, 590, 604, 619, 634, 649, 665, 681, 698, 715, 732, 750, 768, 787, 806, 825, 845,
    866, 887, 909, 931, 953, 976,
];

/// EIA-96 letter multipliers. `R` is left out: a trailing R always reads as
/// a decimal point ("10R" is 10 Ω), and `Y` covers the same ×0.01.
fn eia96_multiplier(letter: char) -> Option<f64> {
    match letter {
        'Z' => Some(0.001),
        'Y' => Some(0.01),
        'X' | 'S' => Some(0.1),
        'A' => Some(1.0),
        'B' | 'H' => Some(10.0),
        'C' => Some(100.0),
        'D' => Some(1e3),
        'E' => Some(1e4),
        'F' => Some(1e5),
        _ => None,
    }
}

/// Which marking scheme a code was read with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SmdFormat {
    Jumper,
    ThreeDigit,
    FourDigit,
    RNotation,
    Eia96,
}

impl SmdFormat {
    pub fn label(self) -> &'static str {
        match self {
            SmdFormat::Jumper => "Zero-ohm jumper",
            SmdFormat::ThreeDigit => "3-digit code (E24, ±5%)",
            SmdFormat::FourDigit => "4-digit code (E96, ±1%)",
            SmdFormat::RNotation => "R decimal notation",
            SmdFormat::Eia96 => "EIA-96 code (±1%)",
        }
    }
}

fn invalid_code(code: &str) -> ValidationError {
    ValidationError::new(
        ErrorKind::Malformed,
        format!(
            "'{}' is not a recognised SMD code. Try a form like 472, 4701, 4R7 or 01C.",
            code
        ),
        &["code"],
    )
}

fn digits_value(s: &str) -> Option<f64> {
    if s.is_empty() || !s.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    s.parse::<f64>().ok()
}

/// Decode an SMD resistor marking into ohms.
pub fn decode(code: &str) -> Result<(f64, SmdFormat), ValidationError> {
    let code = code.trim().to_ascii_uppercase();
    if !code.is_ascii() {
        return Err(invalid_code(&code));
    }
    let chars: Vec<char> = code.chars().collect();

    if !chars.is_empty() && chars.len() <= 4 && chars.iter().all(|&c| c == '0') {
        return Ok((0.0, SmdFormat::Jumper));
    }

    if code.contains('R') {
        let (before, after) = code.split_once('R').ok_or_else(|| invalid_code(&code))?;
        let valid_digits = |s: &str| s.chars().all(|c| c.is_ascii_digit());
        if (2..=4).contains(&chars.len())
            && valid_digits(before)
            && valid_digits(after)
            && !(before.is_empty() && after.is_empty())
        {
            let value = format!("{}.{}", before, after)
                .parse::<f64>()
                .map_err(|_| invalid_code(&code))?;
            return Ok((value, SmdFormat::RNotation));
        }
        return Err(invalid_code(&code));
    }

    match chars.len() {
        3 if chars[2].is_ascii_alphabetic() => {
            let index = digits_value(&code[..2]).ok_or_else(|| invalid_code(&code))? as usize;
            let multiplier = eia96_multiplier(chars[2]).ok_or_else(|| invalid_code(&code))?;
            let significand = index
                .checked_sub(1)
                .and_then(|i| E96.get(i))
                .ok_or_else(|| invalid_code(&code))?;
            Ok((f64::from(*significand) * multiplier, SmdFormat::Eia96))
        }
        3 | 4 => {
            let split = chars.len() - 1;
            let significand = digits_value(&code[..split]).ok_or_else(|| invalid_code(&code))?;
            let exponent = digits_value(&code[split..]).ok_or_else(|| invalid_code(&code))?;
            let format = if split == 2 {
                SmdFormat::ThreeDigit
            } else {
                SmdFormat::FourDigit
            };
            Ok((significand * 10f64.powf(exponent), format))
        }
        _ => Err(invalid_code(&code)),
    }
}
