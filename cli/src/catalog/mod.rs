// Static calculator definitions and the input validator that reads forms against them

pub mod input;
pub mod registry;
pub mod validator;

#[cfg(test)]
mod tests;

pub use input::{ParsedFields, RawInput};
pub use registry::{
    all, find, lookup, CalculatorId, CalculatorSpec, Category, Constraint, FieldSpec, ListSpec,
    OutputDisplay, OutputSpec, SolveMode,
};
pub use validator::InputValidator;
