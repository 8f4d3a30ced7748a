//! Face gender classifier
//!
//! EfficientNet-B2 two-class model. `forward` returns the raw per-class
//! scores aligned with [`GENDER_LABELS`]; interpretation (argmax, softmax)
//! is the caller's, with [`Gender::from_scores`] as a convenience.

use super::planes::Plane;
use super::session::Session;
use super::FaceClassifier;
use crate::config::SessionOptions;
use crate::error::Result;
use crate::utils::math::{argmax, softmax};

/// Default location of the bundled gender model.
pub const DEFAULT_GENDER_MODEL: &str = "models/gender_efficientnet_b2.onnx";

/// Labels aligned 1:1 with the model's output vector.
pub const GENDER_LABELS: [&str; 2] = ["Male", "Female"];

/// Gender classification result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => GENDER_LABELS[0],
            Gender::Female => GENDER_LABELS[1],
        }
    }

    /// Interpret a raw score vector: argmax picks the class, softmax gives
    /// the confidence. Returns `None` if the vector is not two elements.
    pub fn from_scores(scores: &[f32]) -> Option<(Gender, f32)> {
        if scores.len() != GENDER_LABELS.len() {
            return None;
        }
        let probs = softmax(scores);
        let idx = argmax(&probs);
        let gender = if idx == 0 { Gender::Male } else { Gender::Female };
        Some((gender, probs[idx]))
    }
}

/// Face gender classifier over a pretrained two-class model.
pub struct FaceGenderClassifier {
    session: Option<Session>,
}

impl FaceGenderClassifier {
    /// Load the bundled default model with default backend options.
    pub fn new() -> Result<Self> {
        Self::from_file(DEFAULT_GENDER_MODEL, &SessionOptions::default())
    }

    /// Load a model from an explicit path with the given backend options.
    pub fn from_file(path: &str, options: &SessionOptions) -> Result<Self> {
        let session = Session::from_file(path, options)?;
        Ok(Self {
            session: Some(session),
        })
    }

    /// Release the model handle. Idempotent; any later `forward` fails with
    /// `UseAfterDispose`.
    pub fn close(&mut self) {
        self.session = None;
    }

    /// Whether the classifier has been closed.
    pub fn is_closed(&self) -> bool {
        self.session.is_none()
    }
}

impl FaceClassifier for FaceGenderClassifier {
    fn forward(&mut self, planes: &[Plane]) -> Result<Vec<f32>> {
        super::forward_planes(self.session.as_mut(), planes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gender_as_str_matches_labels() {
        assert_eq!(Gender::Male.as_str(), "Male");
        assert_eq!(Gender::Female.as_str(), "Female");
        assert_eq!(GENDER_LABELS, ["Male", "Female"]);
    }

    #[test]
    fn test_from_scores_picks_higher_score() {
        let (gender, conf) = Gender::from_scores(&[2.0, -1.0]).unwrap();
        assert_eq!(gender, Gender::Male);
        assert!(conf > 0.5 && conf <= 1.0);

        let (gender, conf) = Gender::from_scores(&[-1.0, 2.0]).unwrap();
        assert_eq!(gender, Gender::Female);
        assert!(conf > 0.5 && conf <= 1.0);
    }

    #[test]
    fn test_from_scores_rejects_wrong_length() {
        assert!(Gender::from_scores(&[1.0]).is_none());
        assert!(Gender::from_scores(&[1.0, 2.0, 3.0]).is_none());
    }
}
