// SI prefixes, input grammar and display formatting shared by every calculator

pub mod detector;
pub mod formatter;
pub mod prefix;
pub mod types;

pub use detector::{accepts_keystroke, is_number, parse_number, split_value_unit};
pub use formatter::{format_duration, format_quantity, to_precision, DEFAULT_PLACEHOLDER};
pub use prefix::{normalize, Prefix, QuantityKind};
pub use types::Quantity;
