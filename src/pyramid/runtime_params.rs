use serde::{Serialize, Deserialize};

use crate::Float;
use crate::error::{PyramidError, Result};
use crate::filter::border::BorderMode;

/// How the levels of an octave are blurred.
#[derive(Debug,Copy,Clone,PartialEq,Eq,Default,Serialize,Deserialize)]
pub enum BlurStrategy {
    /// Level 0 is the octave base blurred by `sigma*k`, every further level blurs the previous level by `sigma*k` again.
    #[default]
    Incremental,
    /// Level `i` is the octave base blurred once by `sigma*k^i`.
    Direct
}

#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
#[serde(default)]
pub struct PyramidRuntimeParams {
    /// Number of octaves. Also the `s` of `k = 2^(1/s)`; every octave holds `octave_count + 3` levels.
    pub octave_count: usize,
    pub sigma: Float,
    pub blur_strategy: BlurStrategy,
    /// Gaussian kernels are truncated at `ceil(blur_radius_factor*sigma)`
    pub blur_radius_factor: Float,
    pub border_mode: BorderMode
}

impl Default for PyramidRuntimeParams {
    fn default() -> Self {
        PyramidRuntimeParams {
            octave_count: 4,
            sigma: 1.6,
            blur_strategy: BlurStrategy::Incremental,
            blur_radius_factor: 4.0,
            border_mode: BorderMode::Replicate
        }
    }
}

impl PyramidRuntimeParams {

    pub fn new(octave_count: usize, sigma: Float) -> PyramidRuntimeParams {
        PyramidRuntimeParams { octave_count, sigma, ..Default::default() }
    }

    pub fn from_yaml(yaml: &str) -> Result<PyramidRuntimeParams> {
        let params: PyramidRuntimeParams = serde_yaml::from_str(yaml)?;
        params.validate()?;
        Ok(params)
    }

    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn levels_per_octave(&self) -> usize {
        self.octave_count + 3
    }

    pub fn k(&self) -> Float {
        (1.0/self.octave_count as Float).exp2()
    }

    pub fn validate(&self) -> Result<()> {
        if self.octave_count == 0 {
            return Err(PyramidError::InvalidArgument("octave_count must be at least 1".to_string()));
        }
        if !(self.sigma.is_finite() && self.sigma > 0.0) {
            return Err(PyramidError::InvalidArgument(format!("sigma must be positive and finite, got {}", self.sigma)));
        }
        if !(self.blur_radius_factor.is_finite() && self.blur_radius_factor > 0.0) {
            return Err(PyramidError::InvalidArgument(format!("blur_radius_factor must be positive and finite, got {}", self.blur_radius_factor)));
        }
        Ok(())
    }
}
