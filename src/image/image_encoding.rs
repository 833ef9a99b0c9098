use crate::Float;

#[repr(u8)]
#[derive(Debug,Copy,Clone,PartialEq)]
pub enum ImageEncoding {
    U8,
    F64
}

impl ImageEncoding {
    // https://en.wikipedia.org/wiki/Normalization_(image_processing)
    pub fn normalize_to_gray(&self, max: Float, min : Float, value: Float) -> u8 {
        let range = max - min;
        if !(range > 0.0) {
            return 0;
        }
        let gray = 255 as Float; // 255 - 0
        ((value - min) * (gray / range)).round().clamp(0.0, gray) as u8
    }
}
