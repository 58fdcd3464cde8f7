pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::config::toml_config::AnalysisConfig;
pub use crate::core::generator::{BitStringGenerator, LABEL};
pub use crate::domain::model::{BitString, Policy, BIT_LENGTH};
pub use crate::domain::ports::RandomSource;
pub use crate::utils::error::{Result, SequenceError};
