//! Channel-planar face image representation
//!
//! Attribute models consume a face region as three independent
//! single-channel planes in BGR order, not an interleaved pixel buffer.

use image::DynamicImage;

use crate::error::{FaceAttrError, Result};

/// A single-channel 2D grid of pixel samples, row-major, values in [0, 255].
#[derive(Debug, Clone)]
pub struct Plane {
    width: u32,
    height: u32,
    data: Vec<f32>,
}

impl Plane {
    /// Create a plane from a row-major sample buffer.
    pub fn new(width: u32, height: u32, data: Vec<f32>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(FaceAttrError::InvalidInputShape(
                "plane dimensions must be non-zero".to_string(),
            ));
        }
        let expected = (width as usize) * (height as usize);
        if data.len() != expected {
            return Err(FaceAttrError::InvalidInputShape(format!(
                "plane buffer length {} does not match {}x{}",
                data.len(),
                width,
                height
            )));
        }
        Ok(Self { width, height, data })
    }

    /// Create a plane filled with a constant sample value.
    pub fn filled(width: u32, height: u32, value: f32) -> Self {
        Self {
            width,
            height,
            data: vec![value; (width as usize) * (height as usize)],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Sample at (x, y). Panics if out of bounds.
    pub fn get(&self, x: u32, y: u32) -> f32 {
        self.data[(y as usize) * (self.width as usize) + x as usize]
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }
}

/// Split a decoded image into 3 channel planes in B, G, R order.
///
/// This is the bridge from the image-decoding collaborator into the planar
/// format the classifiers consume.
pub fn bgr_planes(image: &DynamicImage) -> Vec<Plane> {
    let rgb = image.to_rgb8();
    let (width, height) = rgb.dimensions();
    let len = (width as usize) * (height as usize);

    let mut blue = Vec::with_capacity(len);
    let mut green = Vec::with_capacity(len);
    let mut red = Vec::with_capacity(len);

    for pixel in rgb.pixels() {
        red.push(pixel[0] as f32);
        green.push(pixel[1] as f32);
        blue.push(pixel[2] as f32);
    }

    vec![
        Plane { width, height, data: blue },
        Plane { width, height, data: green },
        Plane { width, height, data: red },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    #[test]
    fn test_plane_new_validates_length() {
        assert!(Plane::new(4, 4, vec![0.0; 16]).is_ok());

        let err = Plane::new(4, 4, vec![0.0; 15]).unwrap_err();
        assert!(matches!(err, FaceAttrError::InvalidInputShape(_)));
    }

    #[test]
    fn test_plane_new_rejects_zero_dimensions() {
        let err = Plane::new(0, 4, vec![]).unwrap_err();
        assert!(matches!(err, FaceAttrError::InvalidInputShape(_)));
    }

    #[test]
    fn test_plane_get() {
        let plane = Plane::new(2, 2, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
        assert_eq!(plane.get(0, 0), 1.0);
        assert_eq!(plane.get(1, 0), 2.0);
        assert_eq!(plane.get(0, 1), 3.0);
        assert_eq!(plane.get(1, 1), 4.0);
    }

    #[test]
    fn test_bgr_planes_channel_order() {
        let mut img = RgbImage::new(2, 1);
        img.put_pixel(0, 0, Rgb([10, 20, 30]));
        img.put_pixel(1, 0, Rgb([40, 50, 60]));
        let planes = bgr_planes(&DynamicImage::ImageRgb8(img));

        assert_eq!(planes.len(), 3);
        // Plane 0 is blue, plane 1 green, plane 2 red
        assert_eq!(planes[0].get(0, 0), 30.0);
        assert_eq!(planes[1].get(0, 0), 20.0);
        assert_eq!(planes[2].get(0, 0), 10.0);
        assert_eq!(planes[0].get(1, 0), 60.0);
        assert_eq!(planes[2].get(1, 0), 40.0);
    }
}
