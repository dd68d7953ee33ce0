use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FieldError {
    #[error("field dimensions must be non-zero, got {width}x{height}")]
    ZeroDimension { width: usize, height: usize },

    #[error("field data has {got} cells but {width}x{height} needs {expected}")]
    SizeMismatch {
        width:    usize,
        height:   usize,
        expected: usize,
        got:      usize,
    },
}

pub type FieldResult<T> = Result<T, FieldError>;
