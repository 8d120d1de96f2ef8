use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("number {0} cannot be represented")]
    InvalidNumber(String),
}

#[derive(Debug, Error, PartialEq)]
pub enum ToJsonError {
    #[error("number {0} is not finite")]
    NonFiniteNumber(f64),

    #[error("keys `{key}` collide in the encoded form")]
    DuplicateKey { key: String },
}
