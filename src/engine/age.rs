//! Face age estimator
//!
//! EfficientNet-B2 regression model. The output vector is the raw age
//! estimate; no softmax is involved.

use super::planes::Plane;
use super::session::Session;
use super::FaceClassifier;
use crate::config::SessionOptions;
use crate::error::Result;

/// Default location of the bundled age model.
pub const DEFAULT_AGE_MODEL: &str = "models/age_efficientnet_b2.onnx";

/// Face age estimator over a pretrained regression model.
pub struct FaceAgeEstimator {
    session: Option<Session>,
}

impl FaceAgeEstimator {
    /// Load the bundled default model with default backend options.
    pub fn new() -> Result<Self> {
        Self::from_file(DEFAULT_AGE_MODEL, &SessionOptions::default())
    }

    /// Load a model from an explicit path with the given backend options.
    pub fn from_file(path: &str, options: &SessionOptions) -> Result<Self> {
        let session = Session::from_file(path, options)?;
        Ok(Self {
            session: Some(session),
        })
    }

    /// Release the model handle. Idempotent; any later `forward` fails with
    /// `UseAfterDispose`. Dropping the estimator releases the handle too,
    /// but only as a leak guard.
    pub fn close(&mut self) {
        self.session = None;
    }

    /// Whether the estimator has been closed.
    pub fn is_closed(&self) -> bool {
        self.session.is_none()
    }
}

impl FaceClassifier for FaceAgeEstimator {
    fn forward(&mut self, planes: &[Plane]) -> Result<Vec<f32>> {
        super::forward_planes(self.session.as_mut(), planes)
    }
}
