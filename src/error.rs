use thiserror::Error;

/// Everything that can go wrong between loading the artifacts and reading
/// back a label.
#[derive(Debug, Error)]
pub enum Error {
    #[error("tokenizer error: {0}")]
    Tokenizer(tokenizers::Error),
    #[error("candle error: {0}")]
    Candle(#[from] candle_core::Error),
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// A ground-truth label is not part of the supplied label set.
    #[error("unknown label `{0}`")]
    UnknownLabel(String),
    /// The label map has no entry for a predicted class index.
    #[error("no label mapped to class index {0}")]
    MissingLabel(usize),
}

// `tokenizers::Error` is a boxed trait object, so it can't act as a
// `#[source]`; convert by hand and keep the variant display-only.
impl From<tokenizers::Error> for Error {
    fn from(err: tokenizers::Error) -> Self {
        Self::Tokenizer(err)
    }
}

pub type Result<T> = std::result::Result<T, Error>;
