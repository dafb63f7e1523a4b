use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalyticsError {
    #[error("Input must contain {} columns; missing: {}", REQUIRED_COLUMNS_LABEL, .missing.join(", "))]
    InvalidInput { missing: Vec<String> },

    #[error("Malformed input: {message}")]
    MalformedInput { message: String },

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

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

const REQUIRED_COLUMNS_LABEL: &str = "'address' and 'balance'";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Io,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    High,
    Critical,
}

impl AnalyticsError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            AnalyticsError::InvalidInput { .. }
            | AnalyticsError::MalformedInput { .. }
            | AnalyticsError::CsvError(_)
            | AnalyticsError::SerializationError(_) => ErrorCategory::Input,
            AnalyticsError::IoError(_) => ErrorCategory::Io,
            AnalyticsError::ConfigError { .. }
            | AnalyticsError::ConfigValidationError { .. }
            | AnalyticsError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Io => ErrorSeverity::Critical,
        }
    }

    /// Short message for the terminal, without the debug detail of `Display`
    /// for wrapped library errors.
    pub fn user_friendly_message(&self) -> String {
        match self {
            AnalyticsError::InvalidInput { missing } => format!(
                "Input must contain {} columns (missing: {})",
                REQUIRED_COLUMNS_LABEL,
                missing.join(", ")
            ),
            AnalyticsError::MalformedInput { message } => {
                format!("Input file could not be interpreted: {}", message)
            }
            AnalyticsError::CsvError(e) => format!("Failed to read CSV input: {}", e),
            AnalyticsError::SerializationError(e) => format!("Failed to read JSON input: {}", e),
            AnalyticsError::IoError(e) => format!("File system error: {}", e),
            AnalyticsError::ConfigError { message } => format!("Configuration problem: {}", message),
            AnalyticsError::ConfigValidationError { field, message } => {
                format!("Invalid configuration '{}': {}", field, message)
            }
            AnalyticsError::InvalidConfigValueError {
                field,
                value,
                reason,
            } => format!("Invalid value '{}' for {}: {}", value, field, reason),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            AnalyticsError::InvalidInput { .. } => {
                "Add a header row (CSV) or keys (JSON) named 'address' and 'balance'"
            }
            AnalyticsError::MalformedInput { .. } => {
                "JSON input must be an array of objects or an object of equal-length columns"
            }
            AnalyticsError::CsvError(_) => "Check the file is UTF-8 encoded CSV with a header row",
            AnalyticsError::SerializationError(_) => {
                "Check the file is valid JSON, or pass --format csv for CSV files"
            }
            AnalyticsError::IoError(_) => "Check the file exists and is readable",
            AnalyticsError::ConfigError { .. }
            | AnalyticsError::ConfigValidationError { .. }
            | AnalyticsError::InvalidConfigValueError { .. } => {
                "Check command line flags and the TOML config file"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, AnalyticsError>;
