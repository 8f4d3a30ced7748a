//! Classifier integration tests.
//!
//! These need an OpenVINO runtime and the EfficientNet-B2 ONNX models on
//! disk, so they are ignored by default. Point FACEATTR_MODEL_DIR at a
//! directory containing `age_efficientnet_b2.onnx` and
//! `gender_efficientnet_b2.onnx`, then run `cargo test -- --ignored`.

use faceattr::{
    FaceAttrError, FaceClassifier, FaceGenderClassifier, Plane, SessionOptions, GENDER_LABELS,
};

fn model_path(name: &str) -> String {
    let dir = std::env::var("FACEATTR_MODEL_DIR")
        .expect("FACEATTR_MODEL_DIR must point at the model directory");
    format!("{dir}/{name}")
}

fn gender_classifier() -> FaceGenderClassifier {
    FaceGenderClassifier::from_file(
        &model_path("gender_efficientnet_b2.onnx"),
        &SessionOptions::default(),
    )
    .expect("failed to load gender model")
}

fn mid_gray_planes() -> Vec<Plane> {
    (0..3).map(|_| Plane::filled(224, 224, 128.0)).collect()
}

#[test]
#[ignore]
fn forward_yields_one_score_per_label() {
    let mut classifier = gender_classifier();
    let scores = classifier.forward(&mid_gray_planes()).unwrap();
    assert_eq!(scores.len(), GENDER_LABELS.len());
}

#[test]
#[ignore]
fn forward_is_deterministic() {
    let mut classifier = gender_classifier();
    let planes = mid_gray_planes();
    let first = classifier.forward(&planes).unwrap();
    let second = classifier.forward(&planes).unwrap();
    assert_eq!(first, second);
}

#[test]
#[ignore]
fn forward_after_close_fails() {
    let mut classifier = gender_classifier();
    classifier.close();
    // Closing twice is a no-op
    classifier.close();
    assert!(classifier.is_closed());

    let err = classifier.forward(&mid_gray_planes()).unwrap_err();
    assert!(matches!(err, FaceAttrError::UseAfterDispose));
}

#[test]
#[ignore]
fn wrong_plane_count_fails_before_inference() {
    let mut classifier = gender_classifier();
    let planes: Vec<Plane> = (0..2).map(|_| Plane::filled(8, 8, 0.0)).collect();
    let err = classifier.forward(&planes).unwrap_err();
    assert!(matches!(err, FaceAttrError::InvalidInputShape(_)));
}
