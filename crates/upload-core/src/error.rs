use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("divisor must be positive: {0}")]
    InvalidDivisor(i64),
}
