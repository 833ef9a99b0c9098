extern crate nalgebra as na;

use na::DMatrix;

use crate::Float;
use crate::error::{PyramidError, Result};
use super::Image;

#[derive(Debug,Copy,Clone,PartialEq)]
pub enum Interpolation {
    Nearest,
    Linear
}

/// Target length of one dimension after scaling. Rounds down.
pub fn scaled_length(length: usize, scale: Float) -> usize {
    (length as Float * scale).floor() as usize
}

/// Scales `image` by `scale` in both dimensions.
///
/// Nearest neighbour picks `floor(dst / scale)`, so halving keeps every even pixel.
/// Linear maps pixel centres (`src = (dst + 0.5) / scale - 0.5`) and clamps at
/// the border. Fails with `ComputationError` if the result would have no pixels.
pub fn resize(image: &Image, scale: Float, interpolation: Interpolation) -> Result<Image> {
    if !(scale.is_finite() && scale > 0.0) {
        return Err(PyramidError::InvalidArgument(format!("resize scale must be positive and finite, got {}", scale)));
    }
    if image.is_empty() {
        return Err(PyramidError::InvalidArgument("cannot resize an empty image".to_string()));
    }

    let (width, height) = image.resolution();
    let new_width = scaled_length(width, scale);
    let new_height = scaled_length(height, scale);

    if new_width == 0 || new_height == 0 {
        return Err(PyramidError::ComputationError(format!(
            "resizing ({},{}) by {} degenerates to ({},{})", width, height, scale, new_width, new_height)));
    }

    let buffer = match interpolation {
        Interpolation::Nearest => {
            let xs: Vec<usize> = (0..new_width).map(|x| nearest_source(x, scale, width)).collect();
            let ys: Vec<usize> = (0..new_height).map(|y| nearest_source(y, scale, height)).collect();
            DMatrix::<Float>::from_fn(new_height, new_width, |r, c| image.buffer[(ys[r], xs[c])])
        },
        Interpolation::Linear => {
            let xs: Vec<(usize,usize,Float)> = (0..new_width).map(|x| linear_source(x, scale, width)).collect();
            let ys: Vec<(usize,usize,Float)> = (0..new_height).map(|y| linear_source(y, scale, height)).collect();
            DMatrix::<Float>::from_fn(new_height, new_width, |r, c| {
                let (y0, y1, ty) = ys[r];
                let (x0, x1, tx) = xs[c];
                let top = lerp(image.buffer[(y0, x0)], image.buffer[(y0, x1)], tx);
                let bottom = lerp(image.buffer[(y1, x0)], image.buffer[(y1, x1)], tx);
                lerp(top, bottom, ty)
            })
        }
    };

    Ok(Image{ buffer, original_encoding: image.original_encoding})
}

fn nearest_source(dst: usize, scale: Float, length: usize) -> usize {
    let src = (dst as Float / scale).floor() as usize;
    src.min(length - 1)
}

fn linear_source(dst: usize, scale: Float, length: usize) -> (usize, usize, Float) {
    let src = (dst as Float + 0.5) / scale - 0.5;
    let last = (length - 1) as Float;
    let src = src.clamp(0.0, last);
    let lower = src.floor();
    let upper = (lower as usize + 1).min(length - 1);
    (lower as usize, upper, src - lower)
}

// Written as a + (b - a)t so that equal neighbours interpolate to exactly the same value.
fn lerp(a: Float, b: Float, t: Float) -> Float {
    a + (b - a) * t
}
