use thiserror::Error;

#[derive(Error, Debug)]
pub enum AdvisorError {
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid config field '{field}': {reason}")]
    InvalidConfig { field: String, reason: String },
}

pub type AdvisorResult<T> = Result<T, AdvisorError>;
