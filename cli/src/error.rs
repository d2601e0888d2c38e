use thiserror::Error;

/// Category of a rejected calculation.
///
/// Callers treat every kind the same way (show the message, clear any
/// previous result); the kind only exists so tests and the wasm surface can
/// tell them apart without matching on message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Non-numeric or blank text in a required field
    Malformed,
    /// A value outside its allowed range, or an ordering violation
    Domain,
    /// A divisor or result that became zero or non-finite while evaluating
    Degenerate,
    /// Too few valid entries in a dynamic list
    Insufficient,
    /// A unit the field does not accept
    UnsupportedUnit,
    /// A required field that is absent from the input entirely
    MissingField,
}

/// A user-facing rejection carrying the message shown next to the form.
#[derive(Debug, Clone, PartialEq, Error, serde::Serialize)]
#[error("{message}")]
pub struct ValidationError {
    pub kind: ErrorKind,
    pub message: String,
    /// Ids of the offending fields, empty when no single field is to blame
    pub fields: Vec<String>,
}

pub const INVALID_NUMBER_MESSAGE: &str =
    "Calculation resulted in an invalid number. Please check your inputs.";

impl ValidationError {
    pub fn new(kind: ErrorKind, message: impl Into<String>, fields: &[&str]) -> Self {
        Self {
            kind,
            message: message.into(),
            fields: fields.iter().map(|f| f.to_string()).collect(),
        }
    }

    /// Non-numeric text in one or more fields, named by their labels.
    pub fn malformed(labels: &[&str], fields: &[&str]) -> Self {
        Self::new(
            ErrorKind::Malformed,
            format!(
                "Please enter valid numeric values for {}.",
                join_labels(labels)
            ),
            fields,
        )
    }

    pub fn domain(message: impl Into<String>, fields: &[&str]) -> Self {
        Self::new(ErrorKind::Domain, message, fields)
    }

    pub fn degenerate(fields: &[&str]) -> Self {
        Self::new(ErrorKind::Degenerate, INVALID_NUMBER_MESSAGE, fields)
    }

    pub fn insufficient(field: &str) -> Self {
        Self::new(
            ErrorKind::Insufficient,
            "Please enter at least two valid values.",
            &[field],
        )
    }

    pub fn unsupported_unit(unit: &str, label: &str, field: &str) -> Self {
        Self::new(
            ErrorKind::UnsupportedUnit,
            format!("Unsupported unit '{}' for {}.", unit, label),
            &[field],
        )
    }

    pub fn missing(label: &str, field: &str) -> Self {
        Self::new(
            ErrorKind::MissingField,
            format!("{} is required.", label),
            &[field],
        )
    }
}

/// "A", "A and B", "A, B and C"
fn join_labels(labels: &[&str]) -> String {
    match labels {
        [] => "all fields".to_string(),
        [one] => one.to_string(),
        [init @ .., last] => format!("{} and {}", init.join(", "), last),
    }
}

/// Crate-level error for everything outside a single form submission.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Unknown calculator: {0}")]
    UnknownCalculator(String),

    #[error("Calculator '{calculator}' has no solve mode '{mode}'")]
    UnknownSolveMode { calculator: String, mode: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// The validation error inside, if this is a rejected submission.
    pub fn as_validation(&self) -> Option<&ValidationError> {
        match self {
            Error::Validation(e) => Some(e),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
