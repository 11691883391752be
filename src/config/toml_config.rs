use crate::core::scramble::DEFAULT_MIN_WORD_LENGTH;
use crate::core::ConfigProvider;
use crate::utils::error::{ToolError, Result};
use crate::utils::logger;
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing_subscriber::EnvFilter;

pub const OUTPUT_FORMATS: [&str; 2] = ["text", "json"];
pub const LOG_FORMATS: [&str; 2] = ["compact", "json"];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TomlConfig {
    pub logging: LoggingConfig,
    pub pesel: PeselConfig,
    pub scramble: ScrambleConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Used when `RUST_LOG` is unset: a bare level for this crate, or a full
    /// filter directive such as `"debug,tokio=warn"`.
    pub level: String,
    pub format: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PeselConfig {
    pub output_format: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrambleConfig {
    pub output_path: String,
    pub output_suffix: String,
    pub min_word_length: usize,
    pub seed: Option<u64>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "compact".to_string(),
        }
    }
}

impl Default for PeselConfig {
    fn default() -> Self {
        Self {
            output_format: "text".to_string(),
        }
    }
}

impl Default for ScrambleConfig {
    fn default() -> Self {
        Self {
            output_path: "./output".to_string(),
            output_suffix: "_scrambled".to_string(),
            min_word_length: DEFAULT_MIN_WORD_LENGTH,
            seed: None,
        }
    }
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ToolError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| ToolError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the variable's value; unknown variables are left as-is.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}")?;

        let result = re.replace_all(content, |caps: &regex::Captures<'_>| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }

    pub fn json_output(&self) -> bool {
        self.pesel.output_format == "json"
    }

    pub fn json_logs(&self) -> bool {
        self.logging.format == "json"
    }
}

impl ConfigProvider for TomlConfig {
    fn output_path(&self) -> &str {
        &self.scramble.output_path
    }

    fn output_suffix(&self) -> &str {
        &self.scramble.output_suffix
    }

    fn min_word_length(&self) -> usize {
        self.scramble.min_word_length
    }

    fn seed(&self) -> Option<u64> {
        self.scramble.seed
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_string("logging.level", &self.logging.level)?;
        EnvFilter::try_new(logger::filter_directives(false, &self.logging.level)).map_err(|e| {
            ToolError::InvalidConfigValueError {
                field: "logging.level".to_string(),
                value: self.logging.level.clone(),
                reason: format!("Invalid log filter: {}", e),
            }
        })?;
        validation::validate_one_of("logging.format", &self.logging.format, &LOG_FORMATS)?;
        validation::validate_one_of("pesel.output_format", &self.pesel.output_format, &OUTPUT_FORMATS)?;
        validation::validate_path("scramble.output_path", &self.scramble.output_path)?;
        validation::validate_non_empty_string("scramble.output_suffix", &self.scramble.output_suffix)?;
        validation::validate_positive_number("scramble.min_word_length", self.scramble.min_word_length, 2)?;

        tracing::debug!("Configuration validation passed");
        Ok(())
    }
}
