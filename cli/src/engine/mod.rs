pub mod evaluator;
pub mod formatter;
pub mod pipeline;
pub mod result;


pub use evaluator::{evaluate, RawOutput, RawResult};
pub use formatter::*;
pub use pipeline::Engine;
pub use result::{CalculationResult, FormattedOutput};
