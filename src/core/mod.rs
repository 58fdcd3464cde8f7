pub mod analysis;
pub mod generator;

pub use crate::domain::model::{BitString, Policy, BIT_LENGTH};
pub use crate::domain::ports::RandomSource;
pub use crate::utils::error::Result;
