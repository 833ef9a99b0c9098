use log::trace;

use crate::image::Image;
use crate::filter::gaussian_blur;
use crate::pyramid::runtime_params::{PyramidRuntimeParams, BlurStrategy};
use crate::error::{PyramidError, Result};
use crate::Float;

/// One spatial scale of the pyramid. All images share the resolution of the octave base.
#[derive(Debug,Clone)]
pub struct Octave {
    images: Vec<Image>,
    difference_of_gaussians: Vec<Image>,
    sigmas: Vec<Float>,
    blur_strategy: BlurStrategy
}

impl Octave {

    pub fn build_octave(base_image: &Image, runtime_params: &PyramidRuntimeParams) -> Result<Octave> {
        let image_count = runtime_params.levels_per_octave();
        let sigmas = Octave::generate_sigmas(runtime_params);

        let mut images: Vec<Image> = Vec::with_capacity(image_count);
        for (i, &sigma) in sigmas.iter().enumerate() {
            let source = match runtime_params.blur_strategy {
                BlurStrategy::Incremental if i > 0 => &images[i-1],
                _ => base_image
            };
            let blurred = gaussian_blur(source, sigma, runtime_params.blur_radius_factor, runtime_params.border_mode)?;
            images.push(blurred);
        }

        let difference_of_gaussians = Octave::difference_of_gaussians(&images)?;
        trace!("octave {:?}: {} levels, sigmas {:?}", base_image.resolution(), images.len(), sigmas);

        Ok(Octave {images, difference_of_gaussians, sigmas, blur_strategy: runtime_params.blur_strategy})
    }

    /// Sigma of the kernel that produced each level.
    pub fn generate_sigmas(runtime_params: &PyramidRuntimeParams) -> Vec<Float> {
        let k = runtime_params.k();
        let sigma = runtime_params.sigma;
        let range = 0..runtime_params.levels_per_octave();
        match runtime_params.blur_strategy {
            BlurStrategy::Incremental => range.map(|_| sigma*k).collect(),
            BlurStrategy::Direct => range.map(|i| sigma*k.powi(i as i32)).collect()
        }
    }

    fn difference_of_gaussians(images: &[Image]) -> Result<Vec<Image>> {
        images.windows(2).map(|pair| pair[1].difference(&pair[0])).collect()
    }

    pub fn images(&self) -> &[Image] {
        &self.images
    }

    pub fn difference_of_gaussians_images(&self) -> &[Image] {
        &self.difference_of_gaussians
    }

    pub fn sigmas(&self) -> &[Float] {
        &self.sigmas
    }

    pub fn blur_strategy(&self) -> BlurStrategy {
        self.blur_strategy
    }

    /// (width, height) shared by every level of this octave
    pub fn resolution(&self) -> (usize, usize) {
        self.images[0].resolution()
    }

    /// Total blur of `level` relative to the octave base. Incremental blurs add up in variance.
    pub fn effective_sigma(&self, level: usize) -> Result<Float> {
        if level >= self.sigmas.len() {
            return Err(PyramidError::LevelOutOfRange { level, level_count: self.sigmas.len() });
        }
        match self.blur_strategy {
            BlurStrategy::Incremental => Ok(self.sigmas[..=level].iter().map(|s| s*s).sum::<Float>().sqrt()),
            BlurStrategy::Direct => Ok(self.sigmas[level])
        }
    }
}
