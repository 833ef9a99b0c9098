extern crate nalgebra as na;

use na::DMatrix;
use crate::Float;

pub trait Kernel {
    // Filter, stored as a single row
    fn kernel(&self) -> &DMatrix<Float>;
    // Size at which the filter is traversed
    fn step(&self) -> usize;
    // Number of taps on each side of the center element
    fn radius(&self) -> usize {
        self.kernel().ncols().saturating_sub(1)/2
    }
    // Sum of the weights. Convolution output is the weighted mean, so this must be positive
    fn normalizing_constant(&self) -> Float;
}
