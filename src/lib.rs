pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::{cli::LocalStorage, toml_config::TomlConfig};
pub use core::job::ScrambleJob;
pub use core::pesel::validate;
pub use core::scramble::TextScrambler;
pub use domain::model::{Gender, PeselDetails, PeselError, ValidationResult};
pub use utils::error::{Result, ToolError};
