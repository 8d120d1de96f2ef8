use thiserror::Error;

/// Failure of any stage of the conversion pipeline.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Encode(#[from] objlit_reader::EncodeError),

    #[error(transparent)]
    Parse(#[from] objlit_json::ParseError),

    #[error(transparent)]
    Serialize(#[from] objlit_fmt::SerializeError),
}
