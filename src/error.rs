use thiserror::Error;

// Error
//------------------------------------------------------------------------------

/// Failures surfaced by this crate.
///
/// Encoding failures propagate straight from the encoder; there is no retry
/// at a higher error correction level. Callers that want an upgrade policy
/// implement it on top.
#[derive(Debug, Error)]
pub enum Error {
    /// The encoder could not represent the text at the requested error
    /// correction level, e.g. data too long for the largest symbol.
    #[error("QR encoding failed: {0:?}")]
    Encoding(qrcode::types::QrError),

    /// A logo image could not be re-encoded for embedding.
    #[error("logo encoding failed: {0}")]
    Logo(#[from] image::ImageError),
}

impl From<qrcode::types::QrError> for Error {
    fn from(err: qrcode::types::QrError) -> Self {
        Error::Encoding(err)
    }
}

pub type QrResult<T> = Result<T, Error>;
