use thiserror::Error;

/// Errors raised while interpreting an input record.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CoreError {
    #[error("Record on line {line} has an empty `from` column")]
    MissingFrom { line: u64 },

    #[error("Record on line {line} (from {from}) has a `to` value but no relationship `type`")]
    MissingRelationType { line: u64, from: String },
}

pub type Result<T> = std::result::Result<T, CoreError>;
