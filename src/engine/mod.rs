//! Attribute inference engine
//!
//! Shared preprocessing-and-inference pipeline plus the two classifier
//! variants built on it. Data flows one way: BGR planes -> normalized NCHW
//! tensor -> model -> flat output vector.

pub mod age;
pub mod gender;
pub mod planes;
pub mod preprocess;
pub mod session;

pub use age::FaceAgeEstimator;
pub use gender::{FaceGenderClassifier, Gender, GENDER_LABELS};
pub use planes::{bgr_planes, Plane};
pub use session::Session;

use image::DynamicImage;

use crate::error::{FaceAttrError, Result};

/// A face attribute classifier: one loaded model, one forward pass per call.
///
/// Both variants share the same preprocessing and invocation path and differ
/// only in which model they load and what the output vector means.
pub trait FaceClassifier {
    /// Run the pipeline over a 3-plane BGR face region and return the raw
    /// model output vector. No softmax or thresholding is applied.
    fn forward(&mut self, planes: &[Plane]) -> Result<Vec<f32>>;

    /// Convenience: convert a decoded image to BGR planes first.
    fn forward_image(&mut self, image: &DynamicImage) -> Result<Vec<f32>> {
        self.forward(&bgr_planes(image))
    }
}

/// Common forward path shared by both classifier variants.
pub(crate) fn forward_planes(
    session: Option<&mut Session>,
    planes: &[Plane],
) -> Result<Vec<f32>> {
    let session = session.ok_or(FaceAttrError::UseAfterDispose)?;
    let tensor = preprocess::prepare(planes, preprocess::CLASSIFIER_INPUT_SIZE)?;
    session.run(&tensor)
}
