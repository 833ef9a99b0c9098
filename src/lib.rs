//! Gaussian scale-space pyramids.
//!
//! A [`Pyramid`] holds octaves of progressively blurred images together with the
//! difference-of-gaussian stack of every octave. Each octave has half the
//! resolution of the one before it. The first octave is built from the input
//! image upsampled by a factor of two.

pub mod error;
pub mod image;
pub mod filter;
pub mod pyramid;
pub mod visualize;

macro_rules! define_float {
    ($f:tt) => {
        pub use std::$f as float;
        pub type Float = $f;
    }
}

define_float!(f64);

pub use error::{PyramidError, Result};
pub use self::image::Image;
pub use pyramid::{Pyramid, octave::Octave, runtime_params::{PyramidRuntimeParams, BlurStrategy}};
pub use filter::border::BorderMode;

#[repr(u8)]
#[derive(Debug,Copy,Clone,PartialEq)]
pub enum GradientDirection {
    HORIZONTAL,
    VERTICAL
}
