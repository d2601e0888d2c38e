pub mod resolver;
pub mod settings;

pub use resolver::*;
pub use settings::*;
