use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum IntervalError {
    #[error("Interval must be a positive number of seconds, got {0}")]
    NotPositive(i64),
}

#[derive(Error, Debug)]
pub enum SinkError {
    #[error("Failed to send message: {0}")]
    SendFailed(String),
}
