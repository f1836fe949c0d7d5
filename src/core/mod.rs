pub mod engine;
pub mod fizzbuzz;
pub mod rot13;
pub mod sink;

pub use crate::domain::model::{Label, OutputFormat};
pub use crate::domain::ports::Script;
pub use crate::utils::error::Result;
