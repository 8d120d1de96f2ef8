use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum SerializeError {
    #[error("root value must be an object literal")]
    RootNotObject,

    #[error("key `{key}` and its value do not form a renderable entry")]
    MismatchedEntry { key: String },

    #[error("comment cannot be rendered inside an inline object")]
    CommentInInlineObject,

    #[error("shorthand, spread, and comment markers cannot stand alone as values")]
    MarkerValue,
}
