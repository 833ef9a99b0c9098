extern crate image as image_rs;
extern crate nalgebra as na;

use image_rs::{GrayImage, Luma};
use na::DMatrix;

use crate::Float;
use crate::error::{PyramidError, Result};
use self::image_encoding::ImageEncoding;
use self::resize::{resize, Interpolation};

pub mod image_encoding;
pub mod resize;

/// Single channel image. `buffer` is indexed as (row, col), i.e. (y, x).
#[derive(Debug,Clone,PartialEq)]
pub struct Image {
    pub buffer: DMatrix<Float>,
    pub original_encoding: ImageEncoding
}

impl Image {

    pub fn width(&self) -> usize {
        self.buffer.ncols()
    }

    pub fn height(&self) -> usize {
        self.buffer.nrows()
    }

    /// (width, height)
    pub fn resolution(&self) -> (usize, usize) {
        (self.width(), self.height())
    }

    pub fn size(&self) -> usize {
        self.buffer.ncols()*self.buffer.nrows()
    }

    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    pub fn zeros(width: usize, height: usize, image_encoding: ImageEncoding) -> Image {
        Image::from_element(width, height, 0.0, image_encoding)
    }

    pub fn from_element(width: usize, height: usize, value: Float, image_encoding: ImageEncoding) -> Image {
        let buffer = DMatrix::<Float>::from_element(height,width,value);
        Image{ buffer, original_encoding: image_encoding}
    }

    pub fn from_matrix(matrix: &DMatrix<Float>, original_encoding: ImageEncoding, normalize: bool) -> Image {
        let mut buffer = matrix.clone();

        if normalize {
            Image::normalize_by_max(&mut buffer);
        }

        Image{ buffer, original_encoding}
    }

    pub fn from_gray_image(image: &GrayImage, normalize: bool) -> Image {
        let (width, height) = image.dimensions();
        let mut buffer = DMatrix::<Float>::from_fn(height as usize, width as usize, |r, c| image.get_pixel(c as u32, r as u32)[0] as Float);

        if normalize {
            Image::normalize_by_max(&mut buffer);
        }

        Image{ buffer,original_encoding:  ImageEncoding::U8}
    }

    pub fn to_image(&self) -> GrayImage {
        let (rows, cols) = self.buffer.shape();
        let mut gray_image = GrayImage::new(cols as u32, rows as u32);
        if self.is_empty() {
            return gray_image;
        }

        let max = self.buffer.max();
        let min = self.buffer.min();
        for c in 0..cols {
            for r in 0..rows {
                let val = self.buffer[(r, c)];
                let pixel_value = self.original_encoding.normalize_to_gray(max,min,val);
                gray_image.put_pixel(c as u32, r as u32, Luma([pixel_value]));
            }
        }
        gray_image
    }

    /// Pixelwise `self - other`. Both images must share a resolution.
    pub fn difference(&self, other: &Image) -> Result<Image> {
        if self.resolution() != other.resolution() {
            return Err(PyramidError::ComputationError(format!(
                "cannot subtract a {:?} image from a {:?} image", other.resolution(), self.resolution())));
        }
        Ok(Image{ buffer: &self.buffer - &other.buffer, original_encoding: ImageEncoding::F64})
    }

    /// Doubles width and height with linear interpolation.
    pub fn upsample_double(image: &Image) -> Result<Image> {
        resize(image, 2.0, Interpolation::Linear)
    }

    /// Halves width and height (rounded down) with nearest neighbour sampling.
    pub fn downsample_half(image: &Image) -> Result<Image> {
        resize(image, 0.5, Interpolation::Nearest)
    }

    fn normalize_by_max(buffer: &mut DMatrix<Float>) {
        let max = buffer.amax();
        if max > 0.0 {
            for elem in buffer.iter_mut() {
                *elem = *elem/max;
            }
        }
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gray_image_round_trip_keeps_layout() {
        let gray = GrayImage::from_fn(3, 2, |x, y| Luma([(10*x + 100*y) as u8]));
        let image = Image::from_gray_image(&gray, false);

        assert_eq!(image.resolution(), (3, 2));
        assert_eq!(image.buffer[(1, 2)], 120.0);
        assert_eq!(image.buffer[(0, 1)], 10.0);

        let back = image.to_image();
        assert_eq!(back.dimensions(), (3, 2));
        assert_eq!(back.get_pixel(0, 0)[0], 0);
        assert_eq!(back.get_pixel(2, 1)[0], 255);
    }

    #[test]
    fn normalize_divides_by_max() {
        let gray = GrayImage::from_fn(2, 1, |x, _| Luma([if x == 0 {50} else {200}]));
        let image = Image::from_gray_image(&gray, true);
        assert_eq!(image.buffer[(0, 0)], 0.25);
        assert_eq!(image.buffer[(0, 1)], 1.0);
    }

    #[test]
    fn constant_image_maps_to_black() {
        let image = Image::from_element(4, 4, 17.0, ImageEncoding::F64);
        let gray = image.to_image();
        assert!(gray.pixels().all(|p| p[0] == 0));
    }

    #[test]
    fn difference_rejects_mismatched_resolution() {
        let a = Image::zeros(4, 4, ImageEncoding::F64);
        let b = Image::zeros(4, 3, ImageEncoding::F64);
        assert!(a.difference(&b).is_err());

        let c = Image::from_element(4, 4, 3.0, ImageEncoding::F64);
        let diff = c.difference(&a).unwrap();
        assert!(diff.buffer.iter().all(|&v| v == 3.0));
    }
}
