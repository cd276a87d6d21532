use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StubError {
    #[error("Failed to read source document {path}: {source}")]
    SourceReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    OutputWriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Output,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    High,
    Critical,
}

impl StubError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            StubError::SourceReadError { .. } => ErrorCategory::Input,
            StubError::OutputWriteError { .. } => ErrorCategory::Output,
            StubError::ConfigError { .. }
            | StubError::ConfigValidationError { .. }
            | StubError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input | ErrorCategory::Configuration => ErrorSeverity::High,
            // 輸出失敗時可能已寫入部分檔案
            ErrorCategory::Output => ErrorSeverity::Critical,
        }
    }

    /// 依嚴重程度決定程序退出碼
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            StubError::SourceReadError { path, .. } => format!(
                "Check that {} exists, is readable and is valid UTF-8",
                path.display()
            ),
            StubError::OutputWriteError { path, .. } => format!(
                "Check write permissions for {}; files created before the failure were kept",
                path.display()
            ),
            StubError::ConfigError { .. } => {
                "Make sure the configuration file exists and is valid TOML".to_string()
            }
            StubError::ConfigValidationError { field, .. }
            | StubError::InvalidConfigValueError { field, .. } => {
                format!("Fix the value of '{}' in the CLI arguments or config file", field)
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Input => format!("Could not read the source document. {}", self),
            ErrorCategory::Output => format!("Could not create stub documents. {}", self),
            ErrorCategory::Configuration => format!("Invalid configuration. {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, StubError>;
