use ph_core::PhError;
use ph_field::FieldError;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SimError {
    #[error("invalid parameters: {0}")]
    Params(#[from] PhError),

    #[error("trail field error: {0}")]
    Field(#[from] FieldError),

    #[error("simulation configuration error: {0}")]
    Config(String),
}

pub type SimResult<T> = Result<T, SimError>;
