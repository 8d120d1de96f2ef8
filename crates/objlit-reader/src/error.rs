use thiserror::Error;

#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("selection does not start with an object literal")]
    NotAnObject,

    #[error("unexpected end of input inside {context}")]
    UnexpectedEof { context: &'static str },

    #[error("unexpected `{found}` at byte {at}, expected {expected}")]
    Unexpected {
        at: usize,
        found: char,
        expected: &'static str,
    },

    #[error("unterminated string literal starting at byte {at}")]
    UnterminatedString { at: usize },

    #[error("invalid escape sequence at byte {at}")]
    InvalidEscape { at: usize },

    #[error("duplicate key `{key}` in one object scope")]
    DuplicateKey { key: String },

    #[error("comment at byte {at} is not followed by a property")]
    DanglingComment { at: usize },

    #[error("comment at byte {at} inside an array cannot be attached to a key")]
    CommentInArray { at: usize },

    #[error("trailing characters after the object literal at byte {at}")]
    TrailingCharacters { at: usize },

    #[error("encoded output is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
}
