extern crate image as image_rs;
extern crate scale_space;

use std::env;
use std::path::Path;

use color_eyre::eyre::Result;
use image_rs::{GrayImage, Luma};

use scale_space::{Image, Pyramid, PyramidRuntimeParams};
use scale_space::visualize::save_pyramid;

fn main() -> Result<()> {
    color_eyre::install()?;
    pretty_env_logger::init();

    let image_out_folder = "output/";

    let gray_image = match env::args().nth(1) {
        Some(image_path) => image_rs::open(&Path::new(&image_path))?.to_luma8(),
        None => GrayImage::from_fn(160, 120, |x, y| Luma([((x + 2*y) % 256) as u8]))
    };

    let runtime_params = match env::args().nth(2) {
        Some(yaml_path) => PyramidRuntimeParams::from_yaml(&std::fs::read_to_string(yaml_path)?)?,
        None => PyramidRuntimeParams::default()
    };

    let image = Image::from_gray_image(&gray_image, false);
    let pyramid = Pyramid::build_with_params(&image, &runtime_params)?;

    for (i, octave) in pyramid.iter().enumerate() {
        let (width, height) = octave.resolution();
        println!("Pyramid level: {}", i);
        println!("image size: width.height ({}, {})", width, height);
    }

    let paths = save_pyramid(&pyramid, Path::new(image_out_folder))?;
    println!("wrote {} images to {}", paths.len(), image_out_folder);

    Ok(())
}
