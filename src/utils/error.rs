use thiserror::Error;

#[derive(Error, Debug)]
pub enum SequenceError {
    #[error("Random source unavailable: {0}")]
    RandomSourceUnavailable(#[from] rand::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Validation error: {message}")]
    ValidationError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Entropy,
    Io,
    Configuration,
    Data,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    /// Process exit code reported by the binaries.
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl SequenceError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            SequenceError::RandomSourceUnavailable(_) => ErrorCategory::Entropy,
            SequenceError::IoError(_) => ErrorCategory::Io,
            SequenceError::ConfigError { .. } | SequenceError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            SequenceError::SerializationError(_) | SequenceError::ValidationError { .. } => {
                ErrorCategory::Data
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            SequenceError::RandomSourceUnavailable(_) => ErrorSeverity::Critical,
            SequenceError::IoError(_) => ErrorSeverity::Medium,
            _ => ErrorSeverity::High,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            SequenceError::RandomSourceUnavailable(_) => {
                "Check that the operating system entropy source is accessible"
            }
            SequenceError::IoError(_) => "Check that the file exists and is readable",
            SequenceError::SerializationError(_) => {
                "Make sure the input is a JSON object mapping names to bit strings"
            }
            SequenceError::ConfigError { .. } => {
                "Review the configuration file for missing or malformed entries"
            }
            SequenceError::InvalidConfigValueError { .. } => {
                "Correct the reported field and run again"
            }
            SequenceError::ValidationError { .. } => {
                "Bit strings must be non-empty and contain only '0' and '1'"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            SequenceError::RandomSourceUnavailable(_) => {
                "Could not obtain random data from the system".to_string()
            }
            SequenceError::IoError(e) => format!("File access failed: {}", e),
            SequenceError::SerializationError(e) => format!("Could not read sequences: {}", e),
            SequenceError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid setting '{}': {}", field, reason)
            }
            SequenceError::ConfigError { message } | SequenceError::ValidationError { message } => {
                message.clone()
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, SequenceError>;
