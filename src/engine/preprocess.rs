//! Preprocessing for face attribute classifiers
//!
//! Turns a 3-plane BGR face region into the normalized NCHW tensor the
//! EfficientNet-B2 attribute models expect. The numeric path is
//! bit-sensitive: a wrong channel pairing or a missed constant produces
//! plausible but wrong predictions with no error raised.

use ndarray::Array4;

use super::planes::Plane;
use crate::error::{FaceAttrError, Result};

/// Input resolution of the attribute models, (width, height).
pub const CLASSIFIER_INPUT_SIZE: (u32, u32) = (224, 224);

/// Per-channel mean, ImageNet-derived. Index c pairs with plane c in BGR
/// plane order, matching how the packaged models were trained.
pub const IMAGENET_MEAN: [f32; 3] = [0.485, 0.456, 0.406];

/// Per-channel standard deviation, same pairing as [`IMAGENET_MEAN`].
pub const IMAGENET_STD: [f32; 3] = [0.229, 0.224, 0.225];

/// Resize a plane with bilinear interpolation.
///
/// Half-pixel center mapping with clamp-to-edge sampling. Every plane of an
/// image goes through this same rule so spatial alignment between channels
/// is preserved.
pub fn resize_bilinear(plane: &Plane, out_width: u32, out_height: u32) -> Plane {
    let (in_w, in_h) = (plane.width(), plane.height());
    if in_w == out_width && in_h == out_height {
        return plane.clone();
    }

    let scale_x = in_w as f32 / out_width as f32;
    let scale_y = in_h as f32 / out_height as f32;
    let mut data = Vec::with_capacity((out_width as usize) * (out_height as usize));

    for y in 0..out_height {
        let src_y = ((y as f32 + 0.5) * scale_y - 0.5).clamp(0.0, (in_h - 1) as f32);
        let y0 = src_y.floor() as u32;
        let y1 = (y0 + 1).min(in_h - 1);
        let fy = src_y - y0 as f32;

        for x in 0..out_width {
            let src_x = ((x as f32 + 0.5) * scale_x - 0.5).clamp(0.0, (in_w - 1) as f32);
            let x0 = src_x.floor() as u32;
            let x1 = (x0 + 1).min(in_w - 1);
            let fx = src_x - x0 as f32;

            let v00 = plane.get(x0, y0);
            let v10 = plane.get(x1, y0);
            let v01 = plane.get(x0, y1);
            let v11 = plane.get(x1, y1);

            let v = v00 * (1.0 - fx) * (1.0 - fy)
                + v10 * fx * (1.0 - fy)
                + v01 * (1.0 - fx) * fy
                + v11 * fx * fy;

            data.push(v);
        }
    }

    // Dimensions and length are consistent by construction
    Plane::new(out_width, out_height, data).expect("resized plane geometry")
}

/// Build the normalized NCHW input tensor from 3 BGR planes.
///
/// Each plane is resized to `(width, height)`, scaled to [0, 1], normalized
/// with the per-channel ImageNet constants and packed channel-major into a
/// `(1, 3, height, width)` tensor. Pure transform, no hidden state.
pub fn prepare(planes: &[Plane], size: (u32, u32)) -> Result<Array4<f32>> {
    if planes.len() != 3 {
        return Err(FaceAttrError::InvalidInputShape(format!(
            "expected 3 BGR channel planes, got {}",
            planes.len()
        )));
    }

    let (w0, h0) = (planes[0].width(), planes[0].height());
    if w0 == 0 || h0 == 0 {
        return Err(FaceAttrError::InvalidInputShape(
            "plane dimensions must be non-zero".to_string(),
        ));
    }
    for plane in &planes[1..] {
        if plane.width() != w0 || plane.height() != h0 {
            return Err(FaceAttrError::InvalidInputShape(format!(
                "plane geometry mismatch: {}x{} vs {}x{}",
                plane.width(),
                plane.height(),
                w0,
                h0
            )));
        }
    }

    let (width, height) = size;
    let mut tensor = Array4::<f32>::zeros((1, 3, height as usize, width as usize));

    for (c, plane) in planes.iter().enumerate() {
        let resized = resize_bilinear(plane, width, height);
        for y in 0..height {
            for x in 0..width {
                let scaled = resized.get(x, y) / 255.0;
                tensor[[0, c, y as usize, x as usize]] =
                    (scaled - IMAGENET_MEAN[c]) / IMAGENET_STD[c];
            }
        }
    }

    Ok(tensor)
}
