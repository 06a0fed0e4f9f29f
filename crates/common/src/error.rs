use thiserror::Error;

#[derive(Debug, Error)]
pub enum JiraBtError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("validation error: {0}")]
    Validation(String),

    /// The host has no such resource, e.g. no import task for a subscription.
    #[error("not found: {0}")]
    NotFound(String),

    /// The host REST endpoint answered with an error or could not be reached.
    #[error("upstream error: {0}")]
    Upstream(String),
}

pub type JiraBtResult<T> = Result<T, JiraBtError>;
