use thiserror::Error;

#[derive(Error, Debug)]
pub enum MetricsError {
    #[error("Sheet request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Sheet export returned HTTP {status}")]
    HttpStatusError { status: u16 },

    #[error("CSV report error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML config error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required config field: {field}")]
    MissingConfigError { field: String },

    #[error("Report processing error: {message}")]
    ProcessingError { message: String },
}

pub type Result<T> = std::result::Result<T, MetricsError>;
