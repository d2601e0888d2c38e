pub mod catalog;
pub mod config;
pub mod engine;
pub mod error;
pub mod formulas;
pub mod units;

#[cfg(not(target_arch = "wasm32"))]
pub mod logging;

#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use catalog::RawInput;
pub use config::Config;
pub use engine::{CalculationResult, Engine};
pub use error::{Error, ErrorKind, Result, ValidationError};
