use crate::image::Image;
use crate::{Float, GradientDirection};
use crate::error::{PyramidError, Result};
use self::{kernel::Kernel, gauss_kernel::GaussKernel1D, border::BorderMode};

pub mod border;
pub mod gauss_kernel;
pub mod kernel;


/// Convolves `source` along one axis.
///
/// Each output pixel is the weighted mean of its neighbourhood, accumulated as
/// deviations from the center pixel. A constant neighbourhood therefore yields
/// the center value exactly, independent of rounding in the weights.
pub fn filter_1d_convolution(source: &Image, filter_direction: GradientDirection, filter_kernel: &dyn Kernel, border_mode: BorderMode) -> Image {
    let kernel = filter_kernel.kernel();
    let step = filter_kernel.step();
    let kernel_radius = filter_kernel.radius();
    let kernel_radius_signed = kernel_radius as isize;
    let normalizing_constant = filter_kernel.normalizing_constant();

    let buffer = &source.buffer;
    let width = buffer.ncols();
    let height = buffer.nrows();
    let mut target = Image::zeros(width, height, source.original_encoding);

    for x in 0..width {
        for y in 0..height {
            let center = buffer[(y,x)];
            let mut acc = 0.0;
            for kernel_idx in (-kernel_radius_signed..kernel_radius_signed+1).step_by(step) {
                let sample_value = match filter_direction {
                    GradientDirection::HORIZONTAL => {
                        let sample_idx = border_mode.map_index(x as isize + kernel_idx, width);
                        buffer[(y,sample_idx)]
                    },
                    GradientDirection::VERTICAL => {
                        let sample_idx = border_mode.map_index(y as isize + kernel_idx, height);
                        buffer[(sample_idx,x)]
                    }
                };

                let kernel_value = kernel[(0,(kernel_idx + kernel_radius_signed) as usize)];
                acc += (sample_value - center)*kernel_value;
            }

            target.buffer[(y,x)] = center + acc/normalizing_constant;
        }
    }

    target
}

pub fn gaussian_2_d_convolution(image: &Image, horizontal_kernel: &GaussKernel1D, vertical_kernel: &GaussKernel1D, border_mode: BorderMode) -> Image {
    let blur_hor = filter_1d_convolution(image, GradientDirection::HORIZONTAL, horizontal_kernel, border_mode);
    filter_1d_convolution(&blur_hor, GradientDirection::VERTICAL, vertical_kernel, border_mode)
}

/// Blurs `image` with an isotropic gaussian of standard deviation `sigma`.
///
/// The kernel is truncated at `ceil(radius_factor * sigma)` pixels and folded to the image size
/// along each axis. The result has the resolution of the input.
pub fn gaussian_blur(image: &Image, sigma: Float, radius_factor: Float, border_mode: BorderMode) -> Result<Image> {
    if !(sigma.is_finite() && sigma > 0.0) {
        return Err(PyramidError::InvalidArgument(format!("blur sigma must be positive and finite, got {}", sigma)));
    }
    if !(radius_factor.is_finite() && radius_factor > 0.0) {
        return Err(PyramidError::InvalidArgument(format!("blur radius factor must be positive and finite, got {}", radius_factor)));
    }
    if image.is_empty() {
        return Err(PyramidError::InvalidArgument("cannot blur an empty image".to_string()));
    }

    let radius = GaussKernel1D::radius_for(sigma, radius_factor)?;
    let horizontal_kernel = GaussKernel1D::folded(0.0, sigma, radius, border_mode, image.width());
    let vertical_kernel = GaussKernel1D::folded(0.0, sigma, radius, border_mode, image.height());
    Ok(gaussian_2_d_convolution(image, &horizontal_kernel, &vertical_kernel, border_mode))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::image_encoding::ImageEncoding;
    use approx::assert_relative_eq;
    use nalgebra::DMatrix;

    fn impulse(size: usize) -> Image {
        let mut image = Image::zeros(size, size, ImageEncoding::F64);
        image.buffer[(size/2,size/2)] = 1.0;
        image
    }

    #[test]
    fn blur_preserves_constant_images_exactly() {
        let image = Image::from_element(9, 5, 0.3, ImageEncoding::F64);
        for border_mode in [BorderMode::Replicate, BorderMode::Reflect101] {
            let blurred = gaussian_blur(&image, 1.6, 4.0, border_mode).unwrap();
            assert_eq!(blurred.resolution(), (9, 5));
            assert!(blurred.buffer.iter().all(|&v| v == 0.3));
        }
    }

    #[test]
    fn blur_of_impulse_is_symmetric_and_keeps_mass() {
        let image = impulse(21);
        let blurred = gaussian_blur(&image, 1.5, 4.0, BorderMode::Replicate).unwrap();

        assert_relative_eq!(blurred.buffer.sum(), 1.0, epsilon = 1e-12);
        let center = blurred.buffer[(10,10)];
        assert!(blurred.buffer.iter().all(|&v| v <= center));
        for d in 1..5 {
            assert_relative_eq!(blurred.buffer[(10,10-d)], blurred.buffer[(10,10+d)], epsilon = 1e-15);
            assert_relative_eq!(blurred.buffer[(10-d,10)], blurred.buffer[(10,10+d)], epsilon = 1e-15);
        }
    }

    #[test]
    fn horizontal_pass_only_mixes_within_rows() {
        let buffer = DMatrix::<Float>::from_fn(4, 6, |r, _| r as Float);
        let image = Image::from_matrix(&buffer, ImageEncoding::F64, false);
        let kernel = GaussKernel1D::new(0.0, 1.0, 1, 3);
        let filtered = filter_1d_convolution(&image, GradientDirection::HORIZONTAL, &kernel, BorderMode::Replicate);
        assert_eq!(filtered, image);
    }

    #[test]
    fn wide_blur_matches_unfolded_kernel() {
        let buffer = DMatrix::<Float>::from_fn(6, 4, |r, c| (3*r + 7*c) as Float);
        let image = Image::from_matrix(&buffer, ImageEncoding::F64, false);
        let radius = GaussKernel1D::radius_for(9.0, 4.0).unwrap();
        let plain = GaussKernel1D::new(0.0, 9.0, 1, radius);

        for border_mode in [BorderMode::Replicate, BorderMode::Reflect101] {
            let expected = gaussian_2_d_convolution(&image, &plain, &plain, border_mode);
            let blurred = gaussian_blur(&image, 9.0, 4.0, border_mode).unwrap();
            for (a, b) in blurred.buffer.iter().zip(expected.buffer.iter()) {
                assert_relative_eq!(*a, *b, epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn huge_sigma_is_a_computation_error() {
        let image = Image::from_element(8, 8, 1.0, ImageEncoding::F64);
        for sigma in [1e12, 1e19] {
            assert!(matches!(gaussian_blur(&image, sigma, 4.0, BorderMode::Replicate), Err(PyramidError::ComputationError(_))));
        }
        let blurred = gaussian_blur(&image, 1e4, 4.0, BorderMode::Reflect101).unwrap();
        assert!(blurred.buffer.iter().all(|&v| v == 1.0));
    }

    #[test]
    fn blur_rejects_bad_sigma() {
        let image = impulse(5);
        assert!(matches!(gaussian_blur(&image, 0.0, 4.0, BorderMode::Replicate), Err(PyramidError::InvalidArgument(_))));
        assert!(matches!(gaussian_blur(&image, -1.0, 4.0, BorderMode::Replicate), Err(PyramidError::InvalidArgument(_))));
        assert!(matches!(gaussian_blur(&image, Float::INFINITY, 4.0, BorderMode::Replicate), Err(PyramidError::InvalidArgument(_))));
        assert!(matches!(gaussian_blur(&image, 1.0, 0.0, BorderMode::Replicate), Err(PyramidError::InvalidArgument(_))));
    }
}
