use planner::filter::error::FilterError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Failed to read the filter definition file: {0}")]
    ConfigFileRead(#[from] std::io::Error),

    #[error("Failed to parse the filter definition file: {0}")]
    ConfigParse(#[from] serde_json::Error),

    #[error("Invalid filter definition: {0}")]
    Filter(#[from] FilterError),

    #[error("Failed to serialize data to JSON: {0}")]
    JsonSerialize(serde_json::Error),

    #[error("Invalid value kind provided: {0}")]
    InvalidKind(String),
}
