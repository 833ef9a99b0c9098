use log::{debug, trace, warn};

use crate::Float;
use crate::image::Image;
use crate::image::resize::scaled_length;
use crate::error::{PyramidError, Result};
use self::octave::Octave;
use self::runtime_params::PyramidRuntimeParams;

pub mod octave;
pub mod runtime_params;

/// Gaussian scale space of a single image, together with its difference of gaussians.
///
/// Octave `i` is stored at index `i`. The pyramid is built in one go by
/// [`Pyramid::build`] and cannot be modified afterwards.
#[derive(Debug,Clone)]
pub struct Pyramid {
    octaves: Vec<Octave>,
    runtime_params: PyramidRuntimeParams
}

impl Pyramid {

    /// Builds a pyramid with `octave_count` octaves of `octave_count + 3` levels each,
    /// blurring incrementally by `sigma * 2^(1/octave_count)`.
    pub fn build(image: &Image, octave_count: usize, sigma: Float) -> Result<Pyramid> {
        Pyramid::build_with_params(image, &PyramidRuntimeParams::new(octave_count, sigma))
    }

    pub fn build_with_params(image: &Image, runtime_params: &PyramidRuntimeParams) -> Result<Pyramid> {
        Pyramid::build_octaves(image, runtime_params).map_err(|e| {
            warn!("rejecting pyramid build of {:?}: {}", image.resolution(), e);
            e
        })
    }

    fn build_octaves(image: &Image, runtime_params: &PyramidRuntimeParams) -> Result<Pyramid> {
        Pyramid::validate_input(image, runtime_params)?;

        let octave_count = runtime_params.octave_count;
        let next_base_level = octave_count;
        let mut octaves: Vec<Octave> = Vec::with_capacity(octave_count);

        // The first octave works on the input at twice its resolution.
        let mut octave_image = Image::upsample_double(image)?;
        debug!("building pyramid from {:?} (upsampled to {:?}): {} octaves, {} levels, k = {}",
            image.resolution(), octave_image.resolution(), octave_count, runtime_params.levels_per_octave(), runtime_params.k());

        for i in 0..octave_count {

            if i > 0 {
                octave_image = Image::downsample_half(&octaves[i-1].images()[next_base_level])?;
                trace!("octave {} base downsampled to {:?}", i, octave_image.resolution());
            }

            let new_octave = Octave::build_octave(&octave_image, runtime_params)?;
            octaves.push(new_octave);
        }

        Ok(Pyramid{octaves, runtime_params: runtime_params.clone()})
    }

    /// Resolution (width, height) of every octave that `build` would produce for an input of `width` x `height`.
    pub fn octave_resolutions(width: usize, height: usize, octave_count: usize) -> Result<Vec<(usize,usize)>> {
        let mut resolutions = Vec::with_capacity(octave_count);
        let mut resolution = (scaled_length(width, 2.0), scaled_length(height, 2.0));
        for i in 0..octave_count {
            if i > 0 {
                resolution = (scaled_length(resolution.0, 0.5), scaled_length(resolution.1, 0.5));
            }
            if resolution.0 == 0 || resolution.1 == 0 {
                return Err(PyramidError::ComputationError(format!(
                    "octave {} of a {}x{} image would have resolution {}x{}", i, width, height, resolution.0, resolution.1)));
            }
            resolutions.push(resolution);
        }
        Ok(resolutions)
    }

    fn validate_input(image: &Image, runtime_params: &PyramidRuntimeParams) -> Result<()> {
        runtime_params.validate()?;
        if image.is_empty() {
            return Err(PyramidError::InvalidArgument(format!("input image is empty: {:?}", image.resolution())));
        }
        Pyramid::octave_resolutions(image.width(), image.height(), runtime_params.octave_count)?;
        Ok(())
    }

    pub fn octaves(&self) -> &[Octave] {
        &self.octaves
    }

    pub fn octave(&self, index: usize) -> Result<&Octave> {
        self.octaves.get(index).ok_or(PyramidError::OutOfRange { index, octave_count: self.octaves.len() })
    }

    /// Blur levels of octave `index`.
    pub fn blur_octave(&self, index: usize) -> Result<&[Image]> {
        Ok(self.octave(index)?.images())
    }

    /// Difference of gaussian levels of octave `index`. Entry `i` is level `i+1` minus level `i`.
    pub fn difference_octave(&self, index: usize) -> Result<&[Image]> {
        Ok(self.octave(index)?.difference_of_gaussians_images())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Octave> {
        self.octaves.iter()
    }

    pub fn octave_count(&self) -> usize {
        self.octaves.len()
    }

    pub fn levels_per_octave(&self) -> usize {
        self.runtime_params.levels_per_octave()
    }

    pub fn sigma(&self) -> Float {
        self.runtime_params.sigma
    }

    pub fn k(&self) -> Float {
        self.runtime_params.k()
    }

    pub fn params(&self) -> &PyramidRuntimeParams {
        &self.runtime_params
    }
}

impl<'a> IntoIterator for &'a Pyramid {
    type Item = &'a Octave;
    type IntoIter = std::slice::Iter<'a, Octave>;

    fn into_iter(self) -> Self::IntoIter {
        self.octaves.iter()
    }
}
