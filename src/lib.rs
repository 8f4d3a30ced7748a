//! Face attribute inference library
//!
//! Estimates age and classifies gender from a pre-cropped face region using
//! pretrained EfficientNet-B2 models run through OpenVINO. The face region
//! comes in as three BGR channel planes; the pipeline resizes each plane
//! with bilinear interpolation, normalizes with the ImageNet constants and
//! packs an NCHW tensor before a single synchronous forward pass.
//!
//! ```no_run
//! use faceattr::{bgr_planes, FaceClassifier, FaceGenderClassifier, Gender};
//!
//! let image = image::open("face.png").unwrap();
//! let mut classifier = FaceGenderClassifier::new().unwrap();
//! let scores = classifier.forward(&bgr_planes(&image)).unwrap();
//! let (gender, confidence) = Gender::from_scores(&scores).unwrap();
//! println!("{} ({:.2})", gender.as_str(), confidence);
//! classifier.close();
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod utils;

pub use config::SessionOptions;
pub use engine::{
    bgr_planes, FaceAgeEstimator, FaceClassifier, FaceGenderClassifier, Gender, Plane,
    GENDER_LABELS,
};
pub use error::{FaceAttrError, Result};
