//! Error taxonomy for the attribute inference pipeline

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FaceAttrError {
    /// Malformed input: wrong plane count or mismatched plane geometry.
    /// Caller error, surfaced immediately.
    #[error("invalid input shape: {0}")]
    InvalidInputShape(String),

    /// The inference backend rejected the model, tensor, shape or input
    /// name. Indicates a model/pipeline contract mismatch, never retried.
    #[error("inference failed: {0}")]
    Inference(String),

    /// Forward was called on a classifier that has been closed.
    #[error("classifier used after dispose")]
    UseAfterDispose,
}

impl FaceAttrError {
    /// Wrap a backend error without losing its message.
    pub(crate) fn backend<E: std::fmt::Display>(err: E) -> Self {
        FaceAttrError::Inference(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, FaceAttrError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let e = FaceAttrError::InvalidInputShape("expected 3 planes, got 2".to_string());
        assert_eq!(e.to_string(), "invalid input shape: expected 3 planes, got 2");

        let e = FaceAttrError::UseAfterDispose;
        assert_eq!(e.to_string(), "classifier used after dispose");
    }
}
