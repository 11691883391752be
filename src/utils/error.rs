use thiserror::Error;

#[derive(Error, Debug)]
pub enum ToolError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Input is not valid UTF-8 text: {0}")]
    DecodingError(#[from] std::string::FromUtf8Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Pattern error: {0}")]
    RegexError(#[from] regex::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Nothing to process: {message}")]
    EmptyInputError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Input,
    Io,
    Processing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl ToolError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ToolError::ConfigValidationError { .. } | ToolError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            ToolError::DecodingError(_) | ToolError::EmptyInputError { .. } => ErrorCategory::Input,
            ToolError::IoError(_) => ErrorCategory::Io,
            ToolError::SerializationError(_) | ToolError::RegexError(_) => ErrorCategory::Processing,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::Medium,
            ErrorCategory::Configuration | ErrorCategory::Io => ErrorSeverity::High,
            ErrorCategory::Processing => ErrorSeverity::Critical,
        }
    }

    /// Process exit code the CLI uses for this error.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ToolError::IoError(e) => format!("Could not read or write a file: {}", e),
            ToolError::DecodingError(_) => {
                "The input file is not a UTF-8 text file".to_string()
            }
            ToolError::ConfigValidationError { field, message } => {
                format!("Configuration problem in {}: {}", field, message)
            }
            ToolError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid setting {}: {}", field, reason)
            }
            ToolError::EmptyInputError { message } => message.clone(),
            other => format!("Internal error: {}", other),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ToolError::IoError(_) => "Check that the path exists and that you have permission to access it",
            ToolError::DecodingError(_) => "Save the file with UTF-8 encoding and try again",
            ToolError::EmptyInputError { .. } => {
                "Pass PESEL numbers as arguments or one per line on stdin"
            }
            ToolError::ConfigValidationError { .. } | ToolError::InvalidConfigValueError { .. } => {
                "Review the configuration file and command-line flags"
            }
            _ => "Re-run with --verbose and report the log output",
        }
    }
}

pub type Result<T> = std::result::Result<T, ToolError>;
