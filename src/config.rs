//! Inference backend configuration

use serde::Deserialize;

/// Backend execution options for a classifier session.
///
/// Recognized values are backend-specific and passed through uninterpreted;
/// the pipeline itself reads none of them.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SessionOptions {
    /// OpenVINO device to compile the model for ("CPU", "GPU", ...).
    pub device: String,

    /// Name of the model output holding the result vector. When unset, the
    /// last declared output is used, which is the convention the packaged
    /// age/gender models follow.
    pub output_name: Option<String>,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            device: "CPU".to_string(),
            output_name: None,
        }
    }
}
