use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParamError {
    #[error("Failed to parse request: {0}")]
    ParseError(String),

    #[error("Invalid resource properties: {0}")]
    ValidationError(String),

    #[error("Failed to interact with AWS services: {0}")]
    AwsError(String),

    #[error("Failed to send HTTP request: {0}")]
    HttpError(String),

    #[error("Failed to read CSV input: {0}")]
    CsvError(String),

    #[error("I/O error: {0}")]
    IoError(String),

    #[error("External command failed: {0}")]
    CommandError(String),

    #[error("Usage error: {0}")]
    UsageError(String),
}

impl From<reqwest::Error> for ParamError {
    fn from(error: reqwest::Error) -> Self {
        ParamError::HttpError(error.to_string())
    }
}

impl From<serde_json::Error> for ParamError {
    fn from(error: serde_json::Error) -> Self {
        ParamError::ParseError(error.to_string())
    }
}

impl From<csv::Error> for ParamError {
    fn from(error: csv::Error) -> Self {
        ParamError::CsvError(error.to_string())
    }
}

impl From<std::io::Error> for ParamError {
    fn from(error: std::io::Error) -> Self {
        ParamError::IoError(error.to_string())
    }
}
