use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScriptError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration parse error: {message}")]
    ConfigParseError { message: String },

    #[error("Invalid value for '{field}' ({value:?}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Output,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    High,
    Critical,
}

impl ErrorSeverity {
    /// Process exit code for a failure of this severity.
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorSeverity::Low => 0,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl ScriptError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ScriptError::IoError(_) | ScriptError::SerializationError(_) => ErrorCategory::Output,
            ScriptError::ConfigParseError { .. } | ScriptError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // A closed stdout (e.g. `| head`) is not worth a loud failure.
            ScriptError::IoError(e) if e.kind() == std::io::ErrorKind::BrokenPipe => {
                ErrorSeverity::Low
            }
            ScriptError::IoError(_) | ScriptError::SerializationError(_) => ErrorSeverity::Critical,
            ScriptError::ConfigParseError { .. } | ScriptError::InvalidConfigValueError { .. } => {
                ErrorSeverity::High
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ScriptError::IoError(e) => format!("Could not write output: {}", e),
            ScriptError::SerializationError(e) => format!("Could not encode output line: {}", e),
            ScriptError::ConfigParseError { message } => {
                format!("The configuration file could not be read: {}", message)
            }
            ScriptError::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Configuration => {
                "Check the TOML file against the documented [rot13], [fizzbuzz] and [output] tables"
            }
            ErrorCategory::Output => "Make sure standard output is writable",
        }
    }
}

pub type Result<T> = std::result::Result<T, ScriptError>;
