use thiserror::Error;

/// Fatal conditions for a conversion run. The tool is one-shot, so
/// there is no recoverable path; every variant aborts the run.
#[derive(Debug, Error)]
pub enum Error {
    #[error("buffer is {actual} bytes, expected exactly {expected}")]
    InvalidInputSize { expected: usize, actual: usize },

    #[error("width and height must both be nonzero")]
    ZeroDimension,

    #[error("png encoding failed: {0}")]
    PngEncode(#[from] png::EncodingError),

    #[error("png decoding failed: {0}")]
    PngDecode(#[from] png::DecodingError),

    #[error("unsupported png: {0}")]
    UnsupportedPng(String),
}
