use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("unknown qualification: {0}")]
    UnknownQualificationName(String),
    #[error("invalid letter grade: {0:?}")]
    InvalidGrade(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
