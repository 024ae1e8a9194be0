use thiserror::Error;

#[derive(Error, Debug)]
pub enum WidgetError {
    #[error("Element '#{element_id}' not found in document")]
    ElementNotFound { element_id: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Cannot parse date-time '{input}'")]
    TimeParseError { input: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Document,
    Io,
    Configuration,
    Input,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl WidgetError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            WidgetError::ElementNotFound { .. } => ErrorCategory::Document,
            WidgetError::IoError(_) => ErrorCategory::Io,
            WidgetError::JsonError(_)
            | WidgetError::TomlError(_)
            | WidgetError::ConfigError { .. }
            | WidgetError::InvalidConfigValueError { .. }
            | WidgetError::MissingConfigError { .. } => ErrorCategory::Configuration,
            WidgetError::TimeParseError { .. } => ErrorCategory::Input,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            // 下一個 tick 會再試一次
            ErrorCategory::Document => ErrorSeverity::Medium,
            ErrorCategory::Configuration | ErrorCategory::Input => ErrorSeverity::High,
            ErrorCategory::Io => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            WidgetError::ElementNotFound { element_id } => format!(
                "Make sure the page contains an element with id=\"{}\" or pass --element-id",
                element_id
            ),
            WidgetError::IoError(_) => {
                "Check that the output directory exists and is writable".to_string()
            }
            WidgetError::JsonError(_) => {
                "Check the widget definition file for JSON syntax errors".to_string()
            }
            WidgetError::TomlError(_) => {
                "Check the config file for TOML syntax errors".to_string()
            }
            WidgetError::ConfigError { .. } | WidgetError::InvalidConfigValueError { .. } => {
                "Fix the configuration value and try again".to_string()
            }
            WidgetError::MissingConfigError { field } => {
                format!("Add '{}' to the configuration", field)
            }
            WidgetError::TimeParseError { .. } => {
                "Use RFC 3339 (2024-03-07T14:05:09+01:00) or 'YYYY-MM-DD HH:MM:SS'".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            WidgetError::ElementNotFound { element_id } => {
                format!("The clock container '#{}' does not exist", element_id)
            }
            WidgetError::IoError(e) => format!("Could not write the clock output: {}", e),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, WidgetError>;
