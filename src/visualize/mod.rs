extern crate image as image_rs;

use std::fs;
use std::path::{Path, PathBuf};

use image_rs::GrayImage;
use log::debug;

use crate::image::Image;
use crate::pyramid::Pyramid;
use crate::error::{PyramidError, Result};

/// Stacks `images` top to bottom into one gray image.
///
/// Every image is mapped to the full gray range on its own, so faint difference
/// of gaussian levels stay visible next to the blur levels.
pub fn octave_strip(images: &[Image]) -> Result<GrayImage> {
    let first = images.first().ok_or(PyramidError::InvalidArgument("cannot stack an empty list of images".to_string()))?;
    let width = first.width();
    if let Some(image) = images.iter().find(|image| image.width() != width) {
        return Err(PyramidError::InvalidArgument(format!("cannot stack images of width {} and {}", width, image.width())));
    }

    let height = images.iter().try_fold(0usize, |acc, image| acc.checked_add(image.height()))
        .ok_or(PyramidError::InvalidArgument("strip height overflows".to_string()))?;
    let mut target_image = GrayImage::new(gray_dimension(width)?, gray_dimension(height)?);

    let mut y_offset = 0u32;
    for image in images {
        let gray = image.to_image();
        for (x, y, pixel) in gray.enumerate_pixels() {
            target_image.put_pixel(x, y + y_offset, *pixel);
        }
        y_offset += gray.height();
    }

    Ok(target_image)
}

fn gray_dimension(length: usize) -> Result<u32> {
    u32::try_from(length).map_err(|_| PyramidError::InvalidArgument(format!("{} pixels do not fit into a gray image", length)))
}

/// Writes one blur strip and one difference of gaussian strip per octave into `output_folder`.
pub fn save_pyramid(pyramid: &Pyramid, output_folder: &Path) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(output_folder)?;

    let mut paths = Vec::with_capacity(2*pyramid.octave_count());
    for (i, octave) in pyramid.iter().enumerate() {
        let blur_path = output_folder.join(format!("octave_{}_blur.png", i));
        octave_strip(octave.images())?.save(&blur_path)?;
        let dog_path = output_folder.join(format!("octave_{}_dog.png", i));
        octave_strip(octave.difference_of_gaussians_images())?.save(&dog_path)?;

        debug!("saved octave {} to {:?} and {:?}", i, blur_path, dog_path);
        paths.push(blur_path);
        paths.push(dog_path);
    }

    Ok(paths)
}
