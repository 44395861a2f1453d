use crate::block::BlockType;

/// Everything that can go wrong while decoding a node response or
/// encoding a request.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("parse failure: {0}")]
    Parse(#[from] ParseError),

    #[error("invalid address: {0}")]
    InvalidAddress(#[from] crate::address::Error),

    #[error("output needs {required} bytes but the buffer holds {capacity}")]
    InsufficientBuffer { required: usize, capacity: usize },

    #[error("failed to serialize request: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("transport failure: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Why a response, or one of its fields, could not be parsed.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("missing field `{0}`")]
    MissingField(&'static str),

    #[error("field `{0}` is not a string")]
    NotAString(&'static str),

    #[error("`{0}` holds no entries")]
    EmptyCollection(&'static str),

    #[error("invalid hex: {0}")]
    Hex(#[from] hex::FromHexError),

    #[error("work must be 16 hex characters, got `{0}`")]
    Work(String),

    #[error("invalid balance `{0}`")]
    Balance(String),

    #[error("unknown block type `{0}`")]
    UnknownBlockType(String),

    #[error("{block_type} block needs {expected} fields, decoded {decoded}")]
    FieldCount {
        block_type: BlockType,
        expected: usize,
        decoded: usize,
    },
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(ParseError::Json(err))
    }
}

impl From<hex::FromHexError> for Error {
    fn from(err: hex::FromHexError) -> Self {
        Self::Parse(ParseError::Hex(err))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
