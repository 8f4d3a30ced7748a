//! OpenVINO model session
//!
//! Owns one loaded inference graph and runs synchronous forward passes over
//! it. One session per classifier instance; the session makes no promise of
//! thread-safe concurrent execution, so callers wanting parallel throughput
//! construct one classifier per worker.

use std::time::Instant;

use ndarray::Array4;
use openvino::{CompiledModel, Core, ElementType, Model, Shape, Tensor};
use tracing::{debug, info};

use crate::config::SessionOptions;
use crate::error::{FaceAttrError, Result};

/// A loaded, ready-to-execute inference graph.
///
/// Keeps the read [`Model`] alongside the compiled one so input and output
/// metadata can be queried per call.
pub struct Session {
    model: Model,
    compiled: CompiledModel,
    output_name: Option<String>,
    // Kept alive for the lifetime of the compiled model
    _core: Core,
}

impl Session {
    /// Read and compile a serialized model from `path`.
    ///
    /// OpenVINO reads ONNX graphs directly. Backend options are passed
    /// through uninterpreted.
    pub fn from_file(path: &str, options: &SessionOptions) -> Result<Self> {
        let mut core = Core::new().map_err(FaceAttrError::backend)?;

        info!("Loading model from {}", path);
        let start = Instant::now();

        let model = core
            .read_model_from_file(path, "")
            .map_err(FaceAttrError::backend)?;
        let compiled = core
            .compile_model(&model, options.device.as_str().into())
            .map_err(FaceAttrError::backend)?;

        info!("Model loaded in {:?} on {}", start.elapsed(), options.device);

        Ok(Self {
            model,
            compiled,
            output_name: options.output_name.clone(),
            _core: core,
        })
    }

    /// Run one forward pass over a packed NCHW tensor.
    ///
    /// The model's declared input name is discovered at call time and the
    /// tensor bound to it by name. The result is read from the configured
    /// output when one was named, otherwise from the last declared output.
    /// All per-call request and tensor resources are released before
    /// returning.
    pub fn run(&mut self, input: &Array4<f32>) -> Result<Vec<f32>> {
        let dims: Vec<i64> = input.shape().iter().map(|&d| d as i64).collect();
        let shape = Shape::new(&dims).map_err(FaceAttrError::backend)?;
        let mut tensor =
            Tensor::new(ElementType::F32, &shape).map_err(FaceAttrError::backend)?;

        let input_data = input
            .as_slice()
            .ok_or_else(|| FaceAttrError::Inference("input tensor not contiguous".to_string()))?;
        unsafe {
            let tensor_data = tensor
                .get_raw_data_mut()
                .map_err(FaceAttrError::backend)?
                .as_mut_ptr() as *mut f32;
            std::ptr::copy_nonoverlapping(input_data.as_ptr(), tensor_data, input_data.len());
        }

        let input_port = self
            .model
            .get_input_by_index(0)
            .map_err(FaceAttrError::backend)?;
        let input_name = input_port.get_name().map_err(FaceAttrError::backend)?;
        debug!("Binding input tensor to '{}', dims {:?}", input_name, dims);

        let mut request = self
            .compiled
            .create_infer_request()
            .map_err(FaceAttrError::backend)?;
        request
            .set_tensor(&input_name, &tensor)
            .map_err(FaceAttrError::backend)?;
        request.infer().map_err(FaceAttrError::backend)?;

        let output = match &self.output_name {
            Some(name) => request.get_tensor(name).map_err(FaceAttrError::backend)?,
            None => {
                let outputs_len = self
                    .model
                    .get_outputs_len()
                    .map_err(FaceAttrError::backend)?;
                if outputs_len == 0 {
                    return Err(FaceAttrError::Inference(
                        "model declares no outputs".to_string(),
                    ));
                }
                request
                    .get_output_tensor_by_index(outputs_len - 1)
                    .map_err(FaceAttrError::backend)?
            }
        };

        let result = read_tensor_f32(&output)?;
        debug!("Forward pass produced {} values", result.len());
        Ok(result)
    }
}

/// Copy a tensor's contents out as an f32 vector.
fn read_tensor_f32(tensor: &Tensor) -> Result<Vec<f32>> {
    let shape = tensor.get_shape().map_err(FaceAttrError::backend)?;
    let total: i64 = shape.get_dimensions().iter().product();

    let data: Vec<f32> = unsafe {
        let ptr = tensor
            .get_raw_data()
            .map_err(FaceAttrError::backend)?
            .as_ptr() as *const f32;
        std::slice::from_raw_parts(ptr, total as usize).to_vec()
    };

    Ok(data)
}
