extern crate nalgebra as na;

use na::DMatrix;
use crate::Float;
use crate::error::{PyramidError, Result};
use super::kernel::Kernel;
use super::border::BorderMode;

/// Widest gaussian that is sampled. Folding keeps the kernel itself no wider than the image.
pub const MAX_KERNEL_RADIUS: usize = 1 << 20;


pub struct GaussKernel1D {
    kernel: DMatrix<Float>,
    step: usize,
    weight_sum: Float
}

impl GaussKernel1D {
    // Unnormalized; the convolution divides by the weight sum instead.
    fn sample(mean: Float, std: Float, x:Float) -> Float {
        (-0.5*((x-mean)/std).powi(2)).exp()
    }

    pub fn new(mean: Float, std: Float, step: usize , radius: usize ) -> GaussKernel1D {
        assert!(step > 0);
        assert_eq!(radius%step,0);

        let start = -(radius as isize);
        let end_exclusive = (radius as isize) + 1;
        let samples: Vec<Float> = (start..end_exclusive).step_by(step).map(|x| GaussKernel1D::sample(mean,std,x as Float)).collect();
        let cols = samples.len();
        let weight_sum = samples.iter().sum();
        GaussKernel1D {
            kernel: DMatrix::from_vec(1,cols,samples),
            step,
            weight_sum
        }
    }

    /// Kernel for rows of `len` pixels read with `border_mode`.
    ///
    /// Taps past the border that read the same sample as a tap closer to the center
    /// are merged into it, so the kernel spans at most `len` pixels on each side.
    pub fn folded(mean: Float, std: Float, radius: usize, border_mode: BorderMode, len: usize) -> GaussKernel1D {
        let folded_radius = radius.min(len);
        let mut samples = vec![0.0; 2*folded_radius+1];
        let radius_signed = radius as isize;
        for x in -radius_signed..radius_signed+1 {
            let folded = border_mode.fold_offset(x, len);
            samples[(folded + folded_radius as isize) as usize] += GaussKernel1D::sample(mean,std,x as Float);
        }

        let cols = samples.len();
        let weight_sum = samples.iter().sum();
        GaussKernel1D {
            kernel: DMatrix::from_vec(1,cols,samples),
            step: 1,
            weight_sum
        }
    }

    /// Kernel radius covering `radius_factor` standard deviations, at least one tap.
    pub fn radius_for(sigma: Float, radius_factor: Float) -> Result<usize> {
        let radius = (radius_factor*sigma).ceil();
        if !(radius <= MAX_KERNEL_RADIUS as Float) {
            return Err(PyramidError::ComputationError(format!(
                "gaussian with sigma {} needs a kernel radius of {}, the limit is {}", sigma, radius, MAX_KERNEL_RADIUS)));
        }
        Ok((radius as usize).max(1))
    }
}

impl Kernel for GaussKernel1D {
    fn kernel(&self) -> &DMatrix<Float> {
        &self.kernel
    }

    fn step(&self) -> usize {
        self.step
    }

    fn normalizing_constant(&self) -> Float{
        self.weight_sum
    }
}
