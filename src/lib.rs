pub mod cli;
pub mod input;

pub use voltaic_core::{VoltaicError, VoltaicResult};
